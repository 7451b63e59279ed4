use crate::srt::SubRip;

use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

/// Writes the rendered document into `output`.
///
/// The sink is any `io::Write`; opening files, choosing paths, and
/// encoding concerns belong to the caller.
pub fn serialise<W: Write>(document: &SubRip, output: W) -> Result<()> {
    let mut writer = BufWriter::new(output);
    for subtitle in &document.subtitles {
        write!(writer, "{}", subtitle).context("Failed to write subtitle cue")?;
    }
    writer.flush().context("Failed to write subtitle output")?;
    Ok(())
}
