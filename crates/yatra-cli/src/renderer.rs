//! Terminal rendering for the markdown the display types produce.
//!
//! Rich mode prints headers in blue with their hashes, finished checklist
//! items in green and everything else through termimad. Plain mode prints
//! the markdown untouched.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// How one line is printed in rich mode.
#[derive(Debug, PartialEq, Eq)]
enum LineStyle {
    Header,
    Checked,
    Inline,
}

fn line_style(line: &str) -> LineStyle {
    if line.starts_with('#') {
        LineStyle::Header
    } else if line.contains("[x]") {
        LineStyle::Checked
    } else {
        LineStyle::Inline
    }
}

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.quote_mark.set_fg(Color::DarkCyan);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match line_style(line) {
                LineStyle::Header => println!("{BLUE}{line}{RESET}"),
                LineStyle::Checked => println!("{GREEN}{line}{RESET}"),
                LineStyle::Inline => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
