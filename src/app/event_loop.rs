use std::io::{Write, stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, update};
use crate::canvas::Canvas;
use crate::sync;

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure.
    pub fn run(&self) -> Result<()> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - pixgrid requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::new(
            Canvas::new(self.palette, self.pen),
            (size.width, size.height),
        );
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);
        tracing::debug!(width = size.width, height = size.height, "editor started");

        let result = execute!(stdout(), EnableMouseCapture)
            .context("Failed to enable mouse capture")
            .and_then(|()| Self::event_loop(&mut terminal, &mut model));

        // Restore terminal
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();

        if result.is_ok() && self.print_on_exit {
            print_final_state(&model)?;
        }
        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            if needs_render {
                terminal.draw(|frame| Self::view(model, frame))?;
                needs_render = false;
            }

            let poll_ms = if model.active_toast().is_some() { 100 } else { 250 };
            if event::poll(Duration::from_millis(poll_ms))? {
                // Drain everything queued so a fast drag is one render.
                loop {
                    let event = event::read()?;
                    if let Some(msg) = Self::handle_event(&event, model) {
                        Self::dispatch(model, msg);
                        needs_render = true;
                    }
                    if model.should_quit || !event::poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Apply one message: pure update, then side effects.
    pub(super) fn dispatch(model: &mut Model, msg: Message) {
        tracing::trace!(?msg, "message");
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(model, &side_msg);
    }
}

fn print_final_state(model: &Model) -> Result<()> {
    let mut out = stdout().lock();
    writeln!(out, "{}", sync::palette_to_text(model.canvas.palette()))?;
    writeln!(out, "{}", sync::grid_to_text(model.canvas.grid()))?;
    out.flush()?;
    Ok(())
}
