pub use blend::{blend, clamp_alpha};
pub use color::{Channel, Color, FormatErrorKind, HexFormatError};

mod blend;
mod color;
