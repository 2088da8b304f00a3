//! Terminal rendering of the markdown produced by `backplan_core::display`.
//!
//! Rich output goes through termimad, with step states coloured so the
//! running step stands out in a long timeline. `--no-color` prints the
//! markdown untouched, which is also what the CLI tests read.

use std::io::{self, Write};

use anyhow::Result;
use backplan_core::StepState;
use termimad::{
    crossterm::style::{Color, Stylize},
    MadSkin,
};

/// Writes markdown to stdout, styled or plain.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::DarkYellow);
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        if !self.rich_enabled {
            write!(out, "{markdown}")?;
            return Ok(out.flush()?);
        }

        let active = StepState::Active.with_icon();
        let done = StepState::Done.with_icon();
        for line in markdown.lines() {
            // Keep the hashes: recipe and bake titles nest two levels deep
            if line.starts_with('#') {
                writeln!(out, "{}", line.with(Color::DarkYellow).bold())?;
            } else if let Some(step) = line.strip_suffix(active) {
                let state = active.with(Color::Green).bold();
                writeln!(out, "{}{state}", self.skin.inline(step))?;
            } else if let Some(step) = line.strip_suffix(done) {
                let state = done.with(Color::DarkGrey);
                writeln!(out, "{}{state}", self.skin.inline(step))?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        Ok(out.flush()?)
    }

    /// Replaces the previous frame of `bake watch`.
    ///
    /// Plain output appends frames with a separator instead, so it stays
    /// readable when piped to a file.
    pub fn render_frame(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            print!("\x1b[2J\x1b[H");
        } else {
            println!("---");
        }
        self.render(markdown)
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
