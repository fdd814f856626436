// Error taxonomy shared by every codec layer.
//
// Decoders stop at the first problem and hand it back unchanged; nothing is
// wrapped or recovered on the way up.

use thiserror::Error;

/// Errors reported by the polyline codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolylineError {
    /// A byte outside the printable range `[63, 127)` was consumed.
    #[error("invalid byte {0:#04x}")]
    InvalidByte(u8),

    /// Input ended while continuation bytes were still expected.
    #[error("unterminated sequence (truncated input)")]
    UnterminatedSequence,

    /// A flat buffer's length is not a multiple of the codec dimension.
    #[error("dimensional mismatch: length {len} is not a multiple of dimension {dim}")]
    DimensionalMismatch { len: usize, dim: usize },

    /// A terminated integer carries bits beyond 64.
    #[error("varint overflow")]
    Overflow,

    /// Rejected codec configuration.
    #[error("invalid codec: {0}")]
    InvalidCodec(&'static str),
}

pub type Result<T> = std::result::Result<T, PolylineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = PolylineError::InvalidByte(b' ');
        assert_eq!(e.to_string(), "invalid byte 0x20");

        let e = PolylineError::DimensionalMismatch { len: 5, dim: 2 };
        assert_eq!(
            e.to_string(),
            "dimensional mismatch: length 5 is not a multiple of dimension 2"
        );
        assert_eq!(
            PolylineError::UnterminatedSequence.to_string(),
            "unterminated sequence (truncated input)"
        );
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<PolylineError>();
    }
}
