pub mod color;
pub mod error;

// Re-export for convenience
pub use color::{Channel, Color};
pub use error::{FormatErrorKind, HexFormatError};
