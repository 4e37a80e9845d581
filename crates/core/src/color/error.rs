use thiserror::Error;

use super::Channel;

/// Errors that can occur while decoding a `#rrggbb` hex code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexFormatError {
    #[error("couldn't convert hex value {input} to RGB, expected hex value to start with a #")]
    MissingPrefix { input: String },

    #[error("couldn't convert hex value {input} to RGB, expected # followed by 6 chars (got {len})")]
    WrongLength { input: String, len: usize },

    #[error("error converting {channel} hex value {input}: {reason}")]
    ChannelParse {
        channel: Channel,
        input: String,
        reason: String,
    },
}

/// Category of a [`HexFormatError`], for callers that branch on the failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatErrorKind {
    MissingPrefix,
    WrongLength,
    ChannelParse(Channel),
}

impl HexFormatError {
    pub fn kind(&self) -> FormatErrorKind {
        match self {
            HexFormatError::MissingPrefix { .. } => FormatErrorKind::MissingPrefix,
            HexFormatError::WrongLength { .. } => FormatErrorKind::WrongLength,
            HexFormatError::ChannelParse { channel, .. } => FormatErrorKind::ChannelParse(*channel),
        }
    }

    /// The text that failed to decode.
    pub fn input(&self) -> &str {
        match self {
            HexFormatError::MissingPrefix { input }
            | HexFormatError::WrongLength { input, .. }
            | HexFormatError::ChannelParse { input, .. } => input,
        }
    }
}
