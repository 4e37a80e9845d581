use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use super::HexFormatError;

const HEX_CODE_LEN: usize = 7;

/// One of the three components of a [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }

    /// Byte range of this channel's two digits inside a `#rrggbb` code.
    fn hex_range(&self) -> Range<usize> {
        match self {
            Channel::Red => 1..3,
            Channel::Green => 3..5,
            Channel::Blue => 5..7,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Decodes a `#rrggbb` hex code. Digits are case-insensitive.
    ///
    /// Checks run in order: the `#` prefix, the total length, then each
    /// channel's digits from red to blue. The first failing check wins.
    pub fn from_hex(hex: &str) -> Result<Self, HexFormatError> {
        if !hex.starts_with('#') {
            return Err(HexFormatError::MissingPrefix {
                input: hex.to_string(),
            });
        }
        if hex.len() != HEX_CODE_LEN {
            return Err(HexFormatError::WrongLength {
                input: hex.to_string(),
                len: hex.len(),
            });
        }

        let r = parse_channel(hex, Channel::Red)?;
        let g = parse_channel(hex, Channel::Green)?;
        let b = parse_channel(hex, Channel::Blue)?;

        Ok(Color { r, g, b })
    }

    /// Encodes as `#rrggbb` with lowercase, zero-padded digits.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }
}

fn parse_channel(hex: &str, channel: Channel) -> Result<u8, HexFormatError> {
    let invalid = |reason: String| HexFormatError::ChannelParse {
        channel,
        input: hex.to_string(),
        reason,
    };

    // `get` rather than indexing: a multi-byte char can straddle the channel boundary.
    let digits = hex
        .get(channel.hex_range())
        .ok_or_else(|| invalid("invalid digit found in string".to_string()))?;

    // from_str_radix tolerates a leading sign, which is not a hex digit.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid("invalid digit found in string".to_string()));
    }

    u8::from_str_radix(digits, 16).map_err(|e| invalid(e.to_string()))
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = HexFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormatErrorKind;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#ff0000").unwrap(), Color::new(255, 0, 0));
        assert_eq!(Color::from_hex("#1e293b").unwrap(), Color::new(30, 41, 59));
        assert_eq!(Color::from_hex("#AbCdEf").unwrap(), Color::new(0xab, 0xcd, 0xef));
    }

    #[test]
    fn test_missing_prefix() {
        let err = Color::from_hex("123456").unwrap_err();
        assert_eq!(err.kind(), FormatErrorKind::MissingPrefix);
        assert_eq!(err.input(), "123456");
    }

    #[test]
    fn test_prefix_checked_before_length() {
        let err = Color::from_hex("12").unwrap_err();
        assert_eq!(err.kind(), FormatErrorKind::MissingPrefix);
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            Color::from_hex("#12345").unwrap_err().kind(),
            FormatErrorKind::WrongLength
        );
        assert_eq!(
            Color::from_hex("#1234567").unwrap_err().kind(),
            FormatErrorKind::WrongLength
        );
        assert_eq!(
            Color::from_hex("##ff0000").unwrap_err().kind(),
            FormatErrorKind::WrongLength
        );
    }

    #[test]
    fn test_channel_parse_errors() {
        assert_eq!(
            Color::from_hex("#12345Z").unwrap_err().kind(),
            FormatErrorKind::ChannelParse(Channel::Blue)
        );
        assert_eq!(
            Color::from_hex("#1g3456").unwrap_err().kind(),
            FormatErrorKind::ChannelParse(Channel::Red)
        );
        assert_eq!(
            Color::from_hex("#12 456").unwrap_err().kind(),
            FormatErrorKind::ChannelParse(Channel::Green)
        );
    }

    #[test]
    fn test_first_bad_channel_is_reported() {
        let err = Color::from_hex("#zzzzzz").unwrap_err();
        assert_eq!(err.kind(), FormatErrorKind::ChannelParse(Channel::Red));
    }

    #[test]
    fn test_signs_are_rejected() {
        assert_eq!(
            Color::from_hex("#+1+2+3").unwrap_err().kind(),
            FormatErrorKind::ChannelParse(Channel::Red)
        );
        assert_eq!(
            Color::from_hex("#00-100").unwrap_err().kind(),
            FormatErrorKind::ChannelParse(Channel::Green)
        );
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        // "é" is two bytes, so the length check passes and the red digits split it.
        let err = Color::from_hex("#1é456").unwrap_err();
        assert_eq!(err.kind(), FormatErrorKind::ChannelParse(Channel::Red));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::new(255, 0, 0).to_hex(), "#ff0000");
        assert_eq!(Color::new(1, 2, 3).to_hex(), "#010203");
        assert_eq!(Color::new(0xab, 0xcd, 0xef).to_string(), "#abcdef");
    }

    #[test]
    fn test_round_trip_lowercases() {
        let color: Color = "#A0B1C2".parse().unwrap();
        assert_eq!(color.to_hex(), "#a0b1c2");
    }

    #[test]
    fn test_channel_accessor() {
        let color = Color::new(10, 20, 30);
        let values: Vec<u8> = Channel::ALL.iter().map(|c| color.channel(*c)).collect();
        assert_eq!(values, vec![10, 20, 30]);
    }
}
