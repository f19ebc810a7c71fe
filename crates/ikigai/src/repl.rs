//! The event loop: translate terminal events into [`ik_events::Action`]s,
//! apply them to the session state, recompute the viewport, and compose one
//! frame per non-unknown action.

use anyhow::Result;
use ik_editor::InputBuffer;
use ik_events::{Action, translate};
use ik_render::direct::{FrameRequest, compose_frame};
use ik_scrollback::Scrollback;
use ik_terminal::{TerminalGuard, poll_event};
use ik_tools::{Paths, ToolRegistry, discover};
use std::path::PathBuf;
use std::time::Duration;

pub struct ReplConfig {
    pub width: usize,
    pub height: usize,
    pub colors_enabled: bool,
    pub system_tool_dir: PathBuf,
    pub user_tool_dir: PathBuf,
    pub project_tool_dir: PathBuf,
}

/// All session-owned state. Every layer/renderer call borrows from here;
/// nothing outlives this struct.
struct Session {
    scrollback: Scrollback,
    input: InputBuffer,
    registry: ToolRegistry,
    paths: Paths,
    width: usize,
    height: usize,
    first_physical_row: usize,
    colors_enabled: bool,
    running: bool,
}

impl Session {
    fn new(config: ReplConfig) -> Self {
        let mut registry = ToolRegistry::new();
        discover(&config.system_tool_dir, &config.user_tool_dir, &config.project_tool_dir, &mut registry);
        tracing::info!(target: "tools.discovery", count = registry.len(), "tool discovery complete");

        Session {
            scrollback: Scrollback::new(config.width.max(1)),
            input: InputBuffer::new(),
            registry,
            paths: Paths::new(std::env::current_dir().unwrap_or_default()),
            width: config.width.max(1),
            height: config.height.max(1),
            first_physical_row: 0,
            colors_enabled: config.colors_enabled,
            running: true,
        }
    }

    /// Keep the viewport's last row pinned to the bottom of the document
    /// unless the user has scrolled up — the REPL always starts pinned.
    fn recompute_viewport(&mut self) {
        self.scrollback.ensure_layout(self.width);
        let reserved = self.input.physical_row_count(self.width).max(1);
        let total = self.scrollback.total_physical_lines();
        let available = self.height.saturating_sub(reserved);
        self.first_physical_row = total.saturating_sub(available);
    }

    fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::InsertCodepoint(c) => self.input.insert_char(c),
            Action::Newline => self.input.insert_newline(),
            Action::Backspace => self.input.backspace(),
            Action::DeleteForward => self.input.delete_forward(),
            Action::Left => self.input.move_left(),
            Action::Right => self.input.move_right(),
            Action::Up => self.input.move_up(self.width),
            Action::Down => self.input.move_down(self.width),
            Action::Submit => self.submit(),
            Action::Quit => self.running = false,
            Action::Resize(cols, rows) => {
                self.width = (cols as usize).max(1);
                self.height = (rows as usize).max(1);
                self.scrollback.ensure_layout(self.width);
            }
            Action::Unknown => return false,
        }
        true
    }

    fn submit(&mut self) {
        if self.input.is_empty() {
            return;
        }
        let text = self.input.text().to_string();
        let line = ik_render::transcript::format_plain(
            ik_text::OutputCategory::UserInput,
            ik_scrollback::trim_trailing(&text),
            self.colors_enabled,
        );
        self.scrollback.append_line(&line);
        self.input.clear();
    }

    fn render(&mut self, guard: &mut TerminalGuard<'_>) -> Result<()> {
        self.recompute_viewport();
        let req = FrameRequest {
            scrollback: &self.scrollback,
            first_physical_row: self.first_physical_row,
            visible_rows: self.height,
            separator_visible: self.scrollback.count() > 0,
            input_text: self.input.text(),
            input_visible: true,
            cursor_byte_offset: self.input.cursor().byte_offset,
            width: self.width,
        };
        let frame = compose_frame(&req);
        guard.write_frame(frame.as_bytes())?;
        Ok(())
    }
}

/// Run the event loop until the user quits. The only suspension point is
/// waiting for the next terminal event; everything else completes
/// synchronously before the next poll.
pub fn run(mut guard: TerminalGuard<'_>, config: ReplConfig) -> Result<()> {
    let mut session = Session::new(config);
    session.render(&mut guard)?;

    while session.running {
        let Some(event) = poll_event(Duration::from_millis(100))? else {
            continue;
        };
        let action = translate(&event);
        if session.apply(action) {
            session.render(&mut guard)?;
        }
    }
    Ok(())
}
