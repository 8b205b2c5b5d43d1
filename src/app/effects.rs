use std::io::{Write, stdout};

use crate::app::{App, Message, Model, ToastLevel};
use crate::sync::Target;
use base64::Engine;

impl App {
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        match msg {
            Message::CopyGridText => Self::copy_field(model, Target::Grid),
            Message::CopyPaletteText => Self::copy_field(model, Target::Palette),
            _ => {}
        }
    }

    fn copy_field(model: &mut Model, target: Target) {
        let field = model.field(target);
        let text = field.text();
        let edited = field.is_edited();
        match copy_to_clipboard(&text) {
            Ok(()) if edited => model.show_toast(
                ToastLevel::Warning,
                format!("Copied {} text with unapplied edits", target.label()),
            ),
            Ok(()) => model.show_toast(ToastLevel::Info, format!("Copied {} text", target.label())),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard copy failed");
                model.show_toast(ToastLevel::Error, format!("Copy failed: {err}"));
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    {
        if copy_to_pbcopy(text).is_ok() {
            return Ok(());
        }
    }
    copy_to_clipboard_osc52(text)
}

#[cfg(target_os = "macos")]
fn copy_to_pbcopy(text: &str) -> std::io::Result<()> {
    use std::process::{Command, Stdio};

    let mut child = Command::new("pbcopy").stdin(Stdio::piped()).spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }
    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other("pbcopy failed"))
    }
}

fn copy_to_clipboard_osc52(text: &str) -> std::io::Result<()> {
    let osc = osc52_sequence(text);
    let mut out = stdout();
    out.write_all(osc.as_bytes())?;
    out.flush()
}

fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x07")
}
