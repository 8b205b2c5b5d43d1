use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(4).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::styled("Painting", section_style));
    lines.push(Line::raw("  Mouse drag          Paint with the current pen"));
    lines.push(Line::raw("  Arrows / hjkl       Move grid cursor"));
    lines.push(Line::raw("  Space / Enter       Paint at cursor"));
    lines.push(Line::raw("  0-3                 Select pen (0 = transparent)"));
    lines.push(Line::raw("  x                   Clear grid"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Palette", section_style));
    lines.push(Line::raw("  Left / Right        Choose channel"));
    lines.push(Line::raw("  Up / Down, wheel    Adjust by 1"));
    lines.push(Line::raw("  PageUp / PageDown   Adjust by 16"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Text", section_style));
    lines.push(Line::raw("  Tab / Shift-Tab     Cycle focus"));
    lines.push(Line::raw("  Esc or leaving      Apply edited text if valid"));
    lines.push(Line::raw("  y / Y               Copy grid / palette text"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Other", section_style));
    lines.push(Line::raw("  q / Ctrl-c / Ctrl-q Quit"));
    lines.push(Line::raw("  ? / F1              Toggle help"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Config", section_style));
    lines.push(Line::raw(format!("  Global: {global_cfg}")));
    lines.push(Line::raw(format!("  Local override: {local_cfg}")));

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
