use ratatui::buffer::Buffer;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::app::{Focus, Model};
use crate::canvas::{Channel, Ink, Slot};
use crate::sync::Target;

use super::layout::{self, EditorLayout};
use super::{overlays, status, style};

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let layout = EditorLayout::new(area);
    if !layout.fits() {
        render_too_small(frame, area);
        return;
    }

    render_grid(model, frame, &layout);
    render_pens(model, frame, &layout);
    render_palette(model, frame, &layout);
    render_text_area(model, frame, layout.palette_text, Target::Palette);
    render_text_area(model, frame, layout.grid_text, Target::Grid);

    status::render_toast_bar(model, frame, layout.toast);
    status::render_status_bar(model, frame, layout.status);

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let notice = format!(
        "Terminal too small: need {}x{}, have {}x{}",
        layout::MIN_WIDTH,
        layout::MIN_HEIGHT,
        area.width,
        area.height
    );
    frame.render_widget(
        Paragraph::new(notice)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center),
        area,
    );
}

fn render_grid(model: &Model, frame: &mut Frame, layout: &EditorLayout) {
    let focused = model.focus == Focus::Grid;
    let block = Block::default()
        .title("Sprite")
        .borders(Borders::ALL)
        .border_style(style::border_style(focused));
    frame.render_widget(block, layout.grid);

    let canvas = &model.canvas;
    let buf = frame.buffer_mut();
    for (r, row) in canvas.grid().rows().iter().enumerate() {
        for (c, &ink) in row.iter().enumerate() {
            let rect = layout.cell_rect(r, c);
            match canvas.palette().ink_color(ink) {
                Some(rgb) => fill_rect(buf, rect, " ", Style::default().bg(style::to_color(rgb))),
                None => fill_rect(buf, rect, style::CHECKER_SYMBOL, style::checker_style()),
            }
        }
    }

    if focused {
        let (row, col) = model.grid_cursor;
        let rect = layout.cell_rect(row, col);
        if rect.width >= 3 && rect.height >= 1 {
            let marker_fg = canvas
                .grid()
                .get(row, col)
                .and_then(|ink| canvas.palette().ink_color(ink))
                .map_or(Color::Yellow, |rgb| {
                    style::swatch_style(rgb).fg.unwrap_or(Color::White)
                });
            buf.set_string(
                rect.x + 1,
                rect.y,
                "[]",
                Style::default().fg(marker_fg).add_modifier(Modifier::BOLD),
            );
        }
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, symbol: &str, cell_style: Style) {
    for y in rect.top()..rect.bottom() {
        for x in rect.left()..rect.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(symbol).set_style(cell_style);
            }
        }
    }
}

fn render_pens(model: &Model, frame: &mut Frame, layout: &EditorLayout) {
    let palette = model.canvas.palette();
    for (rect, ink) in layout.pens.iter().zip(Ink::ALL) {
        let selected = model.canvas.pen() == ink;
        let (fill, label) = palette.ink_color(ink).map_or_else(
            || {
                (
                    Style::default().bg(style::CLEAR_PEN_BG).fg(Color::Black),
                    "0 clr".to_string(),
                )
            },
            |rgb| (style::swatch_style(rgb), ink.value().to_string()),
        );
        let marker = if selected { "\u{25b6}" } else { " " };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if selected {
                BorderType::Thick
            } else {
                BorderType::Plain
            })
            .border_style(if selected {
                style::selected_pen_border()
            } else {
                Style::default()
            });
        let inner = block.inner(*rect);
        frame.render_widget(block, *rect);
        frame.render_widget(
            Paragraph::new(format!("{marker}{label}"))
                .style(fill)
                .alignment(Alignment::Center),
            inner,
        );
    }
}

fn render_palette(model: &Model, frame: &mut Frame, layout: &EditorLayout) {
    let focused_slot = match model.focus {
        Focus::Color(slot) => Some(slot),
        _ => None,
    };
    let block = Block::default()
        .title("Palette")
        .borders(Borders::ALL)
        .border_style(style::border_style(focused_slot.is_some()));
    frame.render_widget(block, layout.palette);

    for (rect, slot) in layout.colors.iter().zip(Slot::ALL) {
        let rgb = model.canvas.palette().color(slot);
        let active = focused_slot == Some(slot);
        let mut spans = vec![
            Span::raw(if active { ">" } else { " " }),
            Span::raw(format!("{} ", slot.index() + 1)),
            Span::styled("    ", style::swatch_style(rgb)),
            Span::raw(format!(" {rgb} ")),
        ];
        for channel in Channel::ALL {
            let text = format!("{}{:03}", channel.label(), rgb.channel(channel));
            let span_style = if active && channel == model.channel {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            spans.push(Span::styled(text, span_style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), *rect);
    }
}

fn render_text_area(model: &Model, frame: &mut Frame, area: Rect, target: Target) {
    let field = model.field(target);
    let focused = model.focus.text_target() == Some(target);
    let title = match target {
        Target::Palette => "Palette JSON",
        Target::Grid => "Grid JSON",
    };
    let title = if field.is_edited() {
        format!("{title} [edited]")
    } else {
        title.to_string()
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(style::border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let buffer = field.buffer();
    let cursor = buffer.cursor();
    let (line_offset, col_offset) = layout::text_scroll(cursor, inner);
    let end = (line_offset + usize::from(inner.height)).min(buffer.line_count());

    let mut content: Vec<Line> = Vec::new();
    for line_idx in line_offset..end {
        let chars: Vec<char> = buffer
            .line_at(line_idx)
            .unwrap_or_default()
            .chars()
            .skip(col_offset)
            .collect();
        if focused && line_idx == cursor.line {
            let rel = cursor.col.saturating_sub(col_offset).min(chars.len());
            let before: String = chars[..rel].iter().collect();
            let at = chars.get(rel).map_or_else(|| " ".to_string(), char::to_string);
            let after: String = chars.get(rel + 1..).unwrap_or_default().iter().collect();
            content.push(Line::from(vec![
                Span::raw(before),
                Span::styled(at, style::text_cursor_style()),
                Span::raw(after),
            ]));
        } else {
            content.push(Line::raw(chars.into_iter().collect::<String>()));
        }
    }

    frame.render_widget(Paragraph::new(content), inner);
}
