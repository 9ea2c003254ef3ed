// SPDX-License-Identifier: PMPL-1.0-or-later

//! Card rendering module

pub mod formatter;
pub mod layout;

use crate::types::TermRecord;
use std::io::{self, Write};

pub use formatter::{Block, CardFormatter, CardLine, Palette, Style};

/// Column width every card is centered in.
pub const CARD_WIDTH: usize = 50;

/// Print a card to stdout
///
/// A reader that closes the pipe early (`| head`) is not an error.
pub fn render(term: &TermRecord, width: usize) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    ignore_closed_pipe(render_to(&mut out, term, width))
}

/// Write a card to any writer
pub fn render_to<W: Write>(out: &mut W, term: &TermRecord, width: usize) -> io::Result<()> {
    let formatter = CardFormatter::new(width);
    formatter.write(out, term)
}

/// Treat `BrokenPipe` as a finished write; pass every other result through.
pub fn ignore_closed_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed before the card was complete");
            Ok(())
        }
        other => other,
    }
}
