use thiserror::Error;

/// A structural parse failure.
///
/// Only `Timecode` and `TimeDuration` can fail to parse, and only on
/// structural grounds: wrong segment count, wrong field width, or a wrong
/// delimiter. Numeric garbage inside a well-shaped field does not fail;
/// it clamps to zero instead. Document parsing never produces this error.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed timecode: {0}")]
    Timecode(String),
    #[error("malformed time range: {0}")]
    TimeRange(String),
}
