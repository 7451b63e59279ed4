//! SubRip (`.srt`) subtitle documents: parsing, rendering, shifting, and
//! paired-language splitting.
//!
//! An SRT document is a sequence of cues separated by blank lines. Each cue
//! is a 1-based number, a millisecond-precision time range, and one or more
//! lines of text:
//!
//! ```text
//! 1
//! 00:02:16,612 --> 00:02:19,376
//! Senator, we're making
//! our final approach into Coruscant.
//!
//! 2
//! 00:02:19,482 --> 00:02:21,609
//! Very good, Lieutenant.
//! ```
//!
//! Time units are fixed to two zero-padded digits and fractions to three,
//! with a comma as the fractional separator.
//!
//! Document parsing is best-effort and never fails: stray blank lines,
//! missing or duplicated cue numbers, and malformed fragments are absorbed
//! or dropped, and cues are renumbered in document order. Individual
//! timecode tokens, by contrast, are validated strictly: the structure must
//! match `HH:MM:SS,mmm` exactly, while non-numeric content inside a
//! well-shaped token clamps to zero instead of failing.
//!
//! ```rust
//! use subrip::SubRip;
//!
//! let document = SubRip::parse("1\n00:02:16,612 --> 00:02:19,376\nHello\n");
//! let shifted = document.shift(1500);
//! assert_eq!(
//!     shifted.to_string(),
//!     "1\n00:02:18,112 --> 00:02:20,876\nHello\n\n"
//! );
//! ```

mod error;
mod parser;
mod processor;
mod serialiser;
mod srt;
mod timecode;

pub use error::ParseError;
pub use serialiser::serialise;
pub use srt::{SubRip, Subtitle};
pub use timecode::{Hours, Millis, MinSec, TimeDuration, TimeField, Timecode};
