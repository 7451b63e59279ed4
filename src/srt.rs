use crate::parser;
use crate::processor;
use crate::timecode::TimeDuration;

use std::fmt;

/// One cue: a sequence number, a time window, and the cue text.
///
/// `text` holds one or more lines, each terminated by a newline. Values are
/// immutable; every transformation returns a new cue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtitle {
    /// 1-based running number, assigned by the document parser. Any number
    /// present in the source text is discarded.
    pub sequential_number: usize,
    pub time: TimeDuration,
    pub text: String,
}

impl Subtitle {
    /// Returns this cue with its time window moved by `delta_ms`.
    pub fn shift(&self, delta_ms: i64) -> Subtitle {
        Subtitle {
            time: self.time.shift(delta_ms),
            ..self.clone()
        }
    }

    /// Bisects the cue text into two cues for separating a track that
    /// pairs two languages line for line.
    ///
    /// Both halves keep this cue's number and occupy the identical time
    /// window; this is not a time bisection.
    pub fn split(&self) -> (Subtitle, Subtitle) {
        let (left, right) = processor::divide_text(&self.text);

        (
            Subtitle {
                text: left,
                ..self.clone()
            },
            Subtitle {
                text: right,
                ..self.clone()
            },
        )
    }
}

impl fmt::Display for Subtitle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // `text` already ends with a newline, so the terminal newline here
        // produces the blank line separating this cue from the next.
        write!(f, "{}\n{}\n{}\n", self.sequential_number, self.time, self.text)
    }
}

/// A subtitle document: an ordered sequence of cues.
///
/// After [`SubRip::parse`], `subtitles[i].sequential_number == i + 1`.
/// Operations like [`SubRip::split`] copy numbers unchanged; use
/// [`SubRip::renumbered`] to restore the running order afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubRip {
    pub subtitles: Vec<Subtitle>,
}

impl SubRip {
    pub fn new(subtitles: Vec<Subtitle>) -> Self {
        SubRip { subtitles }
    }

    /// Parses an SRT document. Never fails: malformed, truncated, or
    /// irregular cues are merged into a neighbour or dropped, and the
    /// result may be empty.
    pub fn parse(content: &str) -> SubRip {
        parser::document(content)
    }

    /// Returns this document with every cue moved by `delta_ms`. Order and
    /// cue count are unchanged.
    pub fn shift(&self, delta_ms: i64) -> SubRip {
        SubRip {
            subtitles: self
                .subtitles
                .iter()
                .map(|subtitle| subtitle.shift(delta_ms))
                .collect(),
        }
    }

    /// Splits every cue and zips the halves into two parallel documents,
    /// each with the same cue count and order as this one.
    pub fn split(&self) -> (SubRip, SubRip) {
        let mut left = Vec::with_capacity(self.subtitles.len());
        let mut right = Vec::with_capacity(self.subtitles.len());

        for subtitle in &self.subtitles {
            let (first, second) = subtitle.split();
            left.push(first);
            right.push(second);
        }

        (SubRip { subtitles: left }, SubRip { subtitles: right })
    }

    /// Returns this document with 1-based sequence numbers reassigned in
    /// document order.
    pub fn renumbered(&self) -> SubRip {
        SubRip {
            subtitles: processor::renumber(self.subtitles.clone()),
        }
    }
}

impl fmt::Display for SubRip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for subtitle in &self.subtitles {
            write!(f, "{}", subtitle)?;
        }
        Ok(())
    }
}
