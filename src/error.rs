use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color {0:?}, expected 6 hex digits with optional leading '#'")]
    InvalidHex(String),

    #[error("unknown color-blindness type {0:?}")]
    UnknownDeficiency(String),

    #[error("pixel buffer length {len} is shorter than {width}x{height} RGBA pixels")]
    BufferTooShort {
        len: usize,
        width: usize,
        height: usize,
    },
}
