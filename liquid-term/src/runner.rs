//! Script runner
//!
//! Plays the role of the menu a screen normally lives in: it applies
//! commands to the screen and, for each `print`, clears the display and
//! renders the screen unless it is hidden. Every render produces a frame.

use liquid_core::{DisplaySnapshot, DisplayTarget, Screen, ScreenSnapshot, TextDisplay};
use serde::Serialize;

use crate::definition::{CallLog, FunctionCall};
use crate::error::Result;
use crate::script::Command;

/// The display and screen state after a render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// Number of commands applied before this frame
    pub step: usize,
    /// Display contents
    pub display: DisplaySnapshot,
    /// Screen state
    pub screen: ScreenSnapshot,
    /// Functions called since the previous frame
    pub calls: Vec<FunctionCall>,
}

/// Applies script commands to a screen
pub struct Runner<'a> {
    screen: Screen<'a>,
    display: TextDisplay,
    calls: CallLog,
    /// Calls already reported in a frame
    reported: usize,
}

impl<'a> Runner<'a> {
    /// Create a runner over a screen and the log its functions write to
    pub fn new(screen: Screen<'a>, display: TextDisplay, calls: CallLog) -> Self {
        Self {
            screen,
            display,
            calls,
            reported: 0,
        }
    }

    /// Get the screen
    pub fn screen(&self) -> &Screen<'a> {
        &self.screen
    }

    /// Run a script, returning one frame per `print`
    ///
    /// A trailing `print` is implied so the final state is always reported.
    pub fn run(&mut self, commands: &[Command]) -> Vec<Frame> {
        let mut frames = Vec::new();
        for (step, &command) in commands.iter().enumerate() {
            if let Some(frame) = self.apply(command, step + 1) {
                frames.push(frame);
            }
        }
        if commands.last() != Some(&Command::Print) {
            frames.push(self.render(commands.len()));
        }
        frames
    }

    /// Apply one command
    fn apply(&mut self, command: Command, step: usize) -> Option<Frame> {
        log::debug!("Step {}: {:?}", step, command);
        match command {
            Command::Next => self.screen.switch_focus(true),
            Command::Prev => self.screen.switch_focus(false),
            Command::Call(id) => {
                if !self.screen.call_function(id) {
                    log::warn!("Step {}: function {} was not called", step, id);
                }
            }
            Command::Hide => self.screen.hide(true),
            Command::Show => self.screen.hide(false),
            Command::Print => return Some(self.render(step)),
        }
        None
    }

    /// Render the screen into a fresh frame
    fn render(&mut self, step: usize) -> Frame {
        self.display.clear();
        if !self.screen.is_hidden() {
            self.screen.print(&mut self.display);
        }

        let calls = self.calls.borrow();
        let new_calls = calls[self.reported..].to_vec();
        self.reported = calls.len();

        Frame {
            step,
            display: self.display.snapshot(),
            screen: self.screen.snapshot(),
            calls: new_calls,
        }
    }
}

/// Format frames as text, each display framed by rules
pub fn frames_to_text(frames: &[Frame]) -> String {
    let mut out = String::new();
    for frame in frames {
        let rule = format!("+{}+\n", "-".repeat(frame.display.columns));
        let focus = frame
            .screen
            .focus
            .map_or_else(|| "none".to_string(), |index| index.to_string());
        out.push_str(&format!("step {} | focus {}", frame.step, focus));
        if frame.screen.hidden {
            out.push_str(" | hidden");
        }
        out.push('\n');
        for call in &frame.calls {
            out.push_str(&format!("call line {} fn {}\n", call.line, call.function));
        }
        out.push_str(&rule);
        for line in &frame.display.lines {
            out.push_str(&format!(
                "|{:width$}|\n",
                line,
                width = frame.display.columns
            ));
        }
        out.push_str(&rule);
    }
    out
}

/// Format frames as a JSON array
pub fn frames_to_json(frames: &[Frame]) -> Result<String> {
    Ok(serde_json::to_string_pretty(frames)?)
}
