use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::canvas::{Canvas, Channel, GRID_SIZE, Ink, Palette, Rgb, Slot};
use crate::editor::Direction;
use crate::sync::{self, Target};

use super::{App, Focus, Message, Model, ToastLevel, update};

fn create_test_model() -> Model {
    Model::new(Canvas::new(Palette::default(), Ink::One), (80, 24))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Replace a text field's content as if the user had typed it.
fn type_into(model: Model, target: Target, text: &str) -> Model {
    let mut model = update(model, Message::Focus(Focus::for_target(target)));
    let field = model.field_mut(target);
    field.edit().replace(text);
    field.edit().move_to_end();
    model
}

#[test]
fn test_new_model_text_matches_canvas() {
    let model = create_test_model();
    assert_eq!(
        model.palette_text.text(),
        sync::palette_to_text(model.canvas.palette())
    );
    assert_eq!(model.grid_text.text(), sync::grid_to_text(model.canvas.grid()));
    assert!(!model.has_pending_edits());
}

#[test]
fn test_paint_example_updates_grid_text() {
    let model = create_test_model();
    assert_eq!(model.canvas.palette().color(Slot::One), Rgb::new(255, 0, 0));

    let model = update(model, Message::BeginStroke(2, 3));
    let model = update(model, Message::EndStroke);

    assert_eq!(model.canvas.grid().get(2, 3), Some(Ink::One));
    let rows: Vec<Vec<u8>> = serde_json::from_str(&model.grid_text.text()).unwrap();
    assert_eq!(rows[2][3], 1);
    let total: u32 = rows.iter().flatten().map(|&v| u32::from(v)).sum();
    assert_eq!(total, 1);
}

#[test]
fn test_drag_paints_visited_cells_only_while_drawing() {
    let mut model = create_test_model();
    model = update(model, Message::BeginStroke(0, 0));
    model = update(model, Message::ContinueStroke(0, 1));
    model = update(model, Message::SelectPen(Ink::Two));
    model = update(model, Message::ContinueStroke(1, 1));
    model = update(model, Message::EndStroke);
    model = update(model, Message::ContinueStroke(7, 7));

    let grid = model.canvas.grid();
    assert_eq!(grid.get(0, 0), Some(Ink::One));
    assert_eq!(grid.get(0, 1), Some(Ink::One));
    assert_eq!(grid.get(1, 1), Some(Ink::Two));
    assert_eq!(grid.get(7, 7), Some(Ink::Clear));
    assert!(!model.canvas.is_drawing());
}

#[test]
fn test_keyboard_painting_uses_cursor() {
    let mut model = create_test_model();
    model = update(model, Message::MoveGridCursor(Direction::Down));
    model = update(model, Message::MoveGridCursor(Direction::Right));
    model = update(model, Message::MoveGridCursor(Direction::Right));
    model = update(model, Message::SelectPen(Ink::Three));
    model = update(model, Message::PaintAtCursor);

    assert_eq!(model.grid_cursor, (1, 2));
    assert_eq!(model.canvas.grid().get(1, 2), Some(Ink::Three));
    assert!(!model.canvas.is_drawing());
}

#[test]
fn test_grid_cursor_stays_in_bounds() {
    let mut model = create_test_model();
    model = update(model, Message::MoveGridCursor(Direction::Up));
    model = update(model, Message::MoveGridCursor(Direction::Left));
    assert_eq!(model.grid_cursor, (0, 0));
    for _ in 0..20 {
        model = update(model, Message::MoveGridCursor(Direction::Down));
        model = update(model, Message::MoveGridCursor(Direction::Right));
    }
    assert_eq!(model.grid_cursor, (GRID_SIZE - 1, GRID_SIZE - 1));
}

#[test]
fn test_clear_grid_resets_text() {
    let mut model = create_test_model();
    model = update(model, Message::BeginStroke(4, 4));
    model = update(model, Message::EndStroke);
    model = update(model, Message::ClearGrid);
    assert!(model.canvas.grid().is_empty());
    assert_eq!(model.grid_text.text(), sync::grid_to_text(model.canvas.grid()));
}

#[test]
fn test_adjust_color_regenerates_palette_text() {
    let model = create_test_model();
    let model = update(model, Message::AdjustColor(Slot::Two, Channel::Red, 16));
    assert_eq!(model.canvas.palette().color(Slot::Two), Rgb::new(16, 255, 0));
    assert_eq!(
        model.palette_text.text(),
        r##"["#ff0000","#10ff00","#0000ff"]"##
    );
    assert_eq!(model.channel, Channel::Red);
}

#[test]
fn test_palette_edit_applies_on_blur() {
    let model = create_test_model();
    let model = type_into(model, Target::Palette, r##"["#111111","#222222","#333333"]"##);

    // Nothing applied while still editing.
    assert_eq!(model.canvas.palette(), &Palette::default());
    assert!(model.palette_text.is_edited());

    let model = update(model, Message::Focus(Focus::Grid));
    let palette = model.canvas.palette();
    assert_eq!(palette.color(Slot::One), Rgb::new(0x11, 0x11, 0x11));
    assert_eq!(palette.color(Slot::Two), Rgb::new(0x22, 0x22, 0x22));
    assert_eq!(palette.color(Slot::Three), Rgb::new(0x33, 0x33, 0x33));
    assert!(!model.palette_text.is_edited());
    assert_eq!(model.active_toast().map(|(_, level)| level), Some(ToastLevel::Info));
}

#[test]
fn test_palette_with_two_colors_is_rejected() {
    let model = create_test_model();
    let edited = r##"["#111111","#222222"]"##;
    let model = type_into(model, Target::Palette, edited);
    let model = update(model, Message::FocusNext);

    assert_eq!(model.canvas.palette(), &Palette::default());
    assert_eq!(model.palette_text.text(), edited, "invalid text stays visible");
    assert!(model.palette_text.is_edited());
    let (message, level) = model.active_toast().unwrap();
    assert_eq!(level, ToastLevel::Error);
    assert!(message.contains("exactly 3"), "unexpected toast: {message}");
}

#[test]
fn test_grid_non_array_is_rejected() {
    let mut model = create_test_model();
    model = update(model, Message::BeginStroke(1, 1));
    model = update(model, Message::EndStroke);
    let before = *model.canvas.grid();

    model = type_into(model, Target::Grid, "{\"not\": \"a grid\"}");
    model = update(model, Message::Focus(Focus::Grid));

    assert_eq!(model.canvas.grid(), &before);
    assert_eq!(model.grid_text.text(), "{\"not\": \"a grid\"}");
    assert_eq!(model.active_toast().map(|(_, l)| l), Some(ToastLevel::Error));
}

#[test]
fn test_grid_edit_replaces_grid_wholesale() {
    let mut model = create_test_model();
    model = update(model, Message::BeginStroke(0, 0));
    model = update(model, Message::EndStroke);

    let mut rows = vec!["[0,0,0,0,0,0,0,0]"; GRID_SIZE];
    rows[6] = "[0,2,0,0,0,0,0,3]";
    let text = format!("[{}]", rows.join(","));
    model = type_into(model, Target::Grid, &text);
    model = update(model, Message::Focus(Focus::Grid));

    let grid = model.canvas.grid();
    assert_eq!(grid.get(0, 0), Some(Ink::Clear));
    assert_eq!(grid.get(6, 1), Some(Ink::Two));
    assert_eq!(grid.get(6, 7), Some(Ink::Three));
    assert_eq!(model.grid_text.text(), sync::grid_to_text(grid), "text is re-canonicalized");
}

#[test]
fn test_grid_round_trip_through_text() {
    let mut model = create_test_model();
    for (row, col, pen) in [(0, 0, Ink::One), (3, 5, Ink::Two), (7, 7, Ink::Three)] {
        model = update(model, Message::SelectPen(pen));
        model = update(model, Message::BeginStroke(row, col));
        model = update(model, Message::EndStroke);
    }
    let before = *model.canvas.grid();
    let text = model.grid_text.text();

    model = update(model, Message::ClearGrid);
    model = type_into(model, Target::Grid, &text);
    model = update(model, Message::Focus(Focus::Grid));

    assert_eq!(model.canvas.grid(), &before);
}

#[test]
fn test_unedited_field_blur_is_silent() {
    let model = create_test_model();
    let model = update(model, Message::Focus(Focus::GridText));
    let model = update(model, Message::TextMove(Direction::Down));
    let model = update(model, Message::Focus(Focus::Grid));
    assert!(model.active_toast().is_none());
}

#[test]
fn test_painting_confirms_pending_text_edit() {
    let model = create_test_model();
    let model = type_into(model, Target::Palette, r##"["#010101","#020202","#030303"]"##);
    let model = update(model, Message::BeginStroke(0, 0));
    assert_eq!(model.focus, Focus::Grid);
    assert_eq!(model.canvas.palette().color(Slot::One), Rgb::new(1, 1, 1));
}

#[test]
fn test_text_input_only_reaches_focused_field() {
    let model = create_test_model();
    let before = model.grid_text.text();
    let model = update(model, Message::TextInput('x'));
    assert_eq!(model.grid_text.text(), before);
    assert!(!model.has_pending_edits());

    let model = update(model, Message::Focus(Focus::GridText));
    let model = update(model, Message::TextInput('x'));
    assert!(model.grid_text.is_edited());
    assert!(model.grid_text.text().starts_with('x'));
}

#[test]
fn test_text_click_focuses_and_moves_cursor() {
    let model = create_test_model();
    let model = update(model, Message::TextClick(Target::Grid, 2, 4));
    assert_eq!(model.focus, Focus::GridText);
    let cursor = model.grid_text.buffer().cursor();
    assert_eq!((cursor.line, cursor.col), (2, 4));
}

#[test]
fn test_focus_cycle() {
    let mut model = create_test_model();
    let expected = [
        Focus::Color(Slot::One),
        Focus::Color(Slot::Two),
        Focus::Color(Slot::Three),
        Focus::PaletteText,
        Focus::GridText,
        Focus::Grid,
    ];
    for focus in expected {
        model = update(model, Message::FocusNext);
        assert_eq!(model.focus, focus);
    }
    model = update(model, Message::FocusPrev);
    assert_eq!(model.focus, Focus::GridText);
}

#[test]
fn test_toggle_help_changes_visibility() {
    let model = create_test_model();
    assert!(!model.help_visible);
    let model = update(model, Message::ToggleHelp);
    assert!(model.help_visible);
    let model = update(model, Message::HideHelp);
    assert!(!model.help_visible);
}

#[test]
fn test_quit_sets_flag() {
    let model = update(create_test_model(), Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_resize_updates_layout() {
    let model = update(create_test_model(), Message::Resize(120, 40));
    assert_eq!(model.terminal_size, (120, 40));
    assert_eq!(model.layout().status.y, 39);
}

// --- Input mapping ---

#[test]
fn test_mouse_down_on_cell_begins_stroke() {
    let model = create_test_model();
    let rect = model.layout().cell_rect(2, 3);
    let msg = App::handle_event(
        &mouse(MouseEventKind::Down(MouseButton::Left), rect.x, rect.y),
        &model,
    );
    assert_eq!(msg, Some(Message::BeginStroke(2, 3)));
}

#[test]
fn test_mouse_drag_continues_only_into_new_cells() {
    let mut model = create_test_model();
    let layout = model.layout();

    let first = layout.cell_rect(0, 0);
    let drag_same = mouse(MouseEventKind::Drag(MouseButton::Left), first.x + 1, first.y);
    assert_eq!(App::handle_event(&drag_same, &model), None, "not drawing yet");

    model = update(model, Message::BeginStroke(0, 0));
    assert_eq!(App::handle_event(&drag_same, &model), None, "same cell");

    let next = layout.cell_rect(0, 1);
    let drag_next = mouse(MouseEventKind::Drag(MouseButton::Left), next.x, next.y);
    assert_eq!(
        App::handle_event(&drag_next, &model),
        Some(Message::ContinueStroke(0, 1))
    );
}

#[test]
fn test_mouse_up_anywhere_ends_stroke() {
    let model = update(create_test_model(), Message::BeginStroke(0, 0));
    let up = mouse(MouseEventKind::Up(MouseButton::Left), 79, 0);
    assert_eq!(App::handle_event(&up, &model), Some(Message::EndStroke));

    let idle = create_test_model();
    assert_eq!(App::handle_event(&up, &idle), None);
}

#[test]
fn test_simulated_drag_gesture_paints_path() {
    let mut model = create_test_model();
    let layout = model.layout();
    let mut events = vec![{
        let r = layout.cell_rect(3, 0);
        mouse(MouseEventKind::Down(MouseButton::Left), r.x, r.y)
    }];
    for col in 0..4 {
        let r = layout.cell_rect(3, col);
        events.push(mouse(MouseEventKind::Drag(MouseButton::Left), r.x, r.y));
        events.push(mouse(MouseEventKind::Drag(MouseButton::Left), r.x + 1, r.y + 1));
    }
    events.push(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0));

    for event in &events {
        if let Some(msg) = App::handle_event(event, &model) {
            App::dispatch(&mut model, msg);
        }
    }

    for col in 0..4 {
        assert_eq!(model.canvas.grid().get(3, col), Some(Ink::One));
    }
    assert_eq!(model.canvas.grid().count(Ink::One), 4);
    assert!(!model.canvas.is_drawing());
}

#[test]
fn test_mouse_selects_pen_and_color() {
    let model = create_test_model();
    let layout = model.layout();

    let pen = layout.pens[0];
    assert_eq!(
        App::handle_event(
            &mouse(MouseEventKind::Down(MouseButton::Left), pen.x + 2, pen.y + 1),
            &model
        ),
        Some(Message::SelectPen(Ink::Clear))
    );

    let color = layout.colors[2];
    assert_eq!(
        App::handle_event(
            &mouse(MouseEventKind::Down(MouseButton::Left), color.x + 3, color.y),
            &model
        ),
        Some(Message::Focus(Focus::Color(Slot::Three)))
    );
    assert_eq!(
        App::handle_event(&mouse(MouseEventKind::ScrollUp, color.x + 3, color.y), &model),
        Some(Message::AdjustColor(Slot::Three, Channel::Red, 1))
    );
}

#[test]
fn test_mouse_click_in_text_area() {
    let model = create_test_model();
    let area = model.layout().grid_text;
    let msg = App::handle_event(
        &mouse(MouseEventKind::Down(MouseButton::Left), area.x + 3, area.y + 2),
        &model,
    );
    assert_eq!(msg, Some(Message::TextClick(Target::Grid, 1, 2)));
}

#[test]
fn test_click_outside_confirms_text_field() {
    let model = update(create_test_model(), Message::Focus(Focus::GridText));
    let status = model.layout().status;
    let msg = App::handle_event(
        &mouse(MouseEventKind::Down(MouseButton::Left), status.x, status.y),
        &model,
    );
    assert_eq!(msg, Some(Message::Focus(Focus::Grid)));
}

#[test]
fn test_pen_click_confirms_palette_edit() {
    let model = create_test_model();
    let mut model = type_into(model, Target::Palette, r##"["#111111","#222222","#333333"]"##);
    let pen = model.layout().pens[2];
    let click = mouse(MouseEventKind::Down(MouseButton::Left), pen.x + 1, pen.y + 1);

    let msg = App::handle_event(&click, &model).unwrap();
    assert_eq!(msg, Message::SelectPen(Ink::Two));
    App::dispatch(&mut model, msg);

    assert_eq!(model.focus, Focus::Grid);
    assert!(!model.palette_text.is_edited());
    assert_eq!(model.canvas.palette().color(Slot::One), Rgb::new(0x11, 0x11, 0x11));
    assert_eq!(model.canvas.pen(), Ink::Two);
}

#[test]
fn test_wheel_on_slot_confirms_palette_edit_first() {
    let model = create_test_model();
    let mut model = type_into(model, Target::Palette, r##"["#111111","#222222","#333333"]"##);
    let slot = model.layout().colors[0];
    let scroll = mouse(MouseEventKind::ScrollUp, slot.x + 3, slot.y);

    let msg = App::handle_event(&scroll, &model).unwrap();
    App::dispatch(&mut model, msg);

    assert_eq!(model.focus, Focus::Color(Slot::One));
    assert_eq!(model.canvas.palette().color(Slot::One), Rgb::new(0x12, 0x11, 0x11));
    assert_eq!(model.canvas.palette().color(Slot::Three), Rgb::new(0x33, 0x33, 0x33));
    assert_eq!(
        model.palette_text.text(),
        r##"["#121111","#222222","#333333"]"##
    );
}

#[test]
fn test_pen_key_from_color_focus_keeps_focus() {
    let model = update(create_test_model(), Message::Focus(Focus::Color(Slot::Two)));
    let model = update(model, Message::SelectPen(Ink::Three));
    assert_eq!(model.focus, Focus::Color(Slot::Two));
    assert_eq!(model.canvas.pen(), Ink::Three);
}

#[test]
fn test_mouse_ignored_when_terminal_too_small() {
    let model = Model::new(Canvas::default(), (40, 12));
    let down = mouse(MouseEventKind::Down(MouseButton::Left), 3, 3);
    assert_eq!(App::handle_event(&down, &model), None);

    let mut drawing = Model::new(Canvas::default(), (80, 24));
    drawing = update(drawing, Message::BeginStroke(0, 0));
    drawing = update(drawing, Message::Resize(40, 12));
    let up = mouse(MouseEventKind::Up(MouseButton::Left), 3, 3);
    assert_eq!(App::handle_event(&up, &drawing), Some(Message::EndStroke));
}

#[test]
fn test_keys_depend_on_focus() {
    let model = create_test_model();
    assert_eq!(
        App::handle_event(&key(KeyCode::Char('2')), &model),
        Some(Message::SelectPen(Ink::Two))
    );
    assert_eq!(
        App::handle_event(&key(KeyCode::Char(' ')), &model),
        Some(Message::PaintAtCursor)
    );
    assert_eq!(App::handle_event(&key(KeyCode::Char('q')), &model), Some(Message::Quit));

    let model = update(model, Message::Focus(Focus::GridText));
    assert_eq!(
        App::handle_event(&key(KeyCode::Char('q')), &model),
        Some(Message::TextInput('q'))
    );
    assert_eq!(
        App::handle_event(&key(KeyCode::Esc), &model),
        Some(Message::Focus(Focus::Grid))
    );

    let model = update(model, Message::Focus(Focus::Color(Slot::One)));
    assert_eq!(
        App::handle_event(&key(KeyCode::PageDown), &model),
        Some(Message::AdjustColor(Slot::One, Channel::Red, -16))
    );
    assert_eq!(
        App::handle_event(&key(KeyCode::Right), &model),
        Some(Message::NextChannel)
    );
}

#[test]
fn test_ctrl_c_quits_from_text_field() {
    let model = update(create_test_model(), Message::Focus(Focus::PaletteText));
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(App::handle_event(&ctrl_c, &model), Some(Message::Quit));
}

#[test]
fn test_any_key_closes_help() {
    let model = update(create_test_model(), Message::ToggleHelp);
    assert_eq!(
        App::handle_event(&key(KeyCode::Char('x')), &model),
        Some(Message::HideHelp)
    );
}
