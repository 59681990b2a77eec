//! Output formatting for ranked lookup results

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print matched words under a header, one per line.
pub fn print_matches(words: &[String], color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    writeln!(stdout, "Words found:")?;
    stdout.reset()?;

    if words.is_empty() {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        writeln!(stdout, "(none)")?;
        stdout.reset()?;
        return Ok(());
    }

    for word in words {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(stdout, "{}", word)?;
        stdout.reset()?;
    }

    Ok(())
}
