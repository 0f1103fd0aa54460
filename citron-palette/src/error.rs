use thiserror::Error;

/// Errors produced by the palette accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A family accessor was handed a position outside `1..=len`.
    ///
    /// Family positions are 1-based; position 0 is always rejected. This is
    /// a caller programming error, not a recoverable condition: nothing is
    /// retried and no substitute color is returned.
    #[error(
        "position {position} is out of range for the {family} family \
         (valid positions 1..={len})"
    )]
    IndexOutOfRange {
        family: &'static str,
        position: usize,
        len: usize,
    },
}
