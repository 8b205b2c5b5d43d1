use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let canvas = &model.canvas;
    let pen = canvas.pen();
    let pen_info = canvas.palette().ink_color(pen).map_or_else(
        || format!("pen:{} clear", pen.value()),
        |color| format!("pen:{} {color}", pen.value()),
    );
    let drawing = if canvas.is_drawing() { " [drawing]" } else { "" };
    let pending = if model.has_pending_edits() {
        " [unapplied edits]"
    } else {
        ""
    };

    let status = format!(
        " pixgrid  {}  focus:{}{}{}  Tab:focus  F1:help",
        pen_info,
        model.focus.label(),
        drawing,
        pending
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
