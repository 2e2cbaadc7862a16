use crate::error::{HuffmanError, HuffmanResult};

/// A single binary digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

impl TryFrom<char> for Bit {
    type Error = HuffmanError;

    fn try_from(value: char) -> HuffmanResult<Self> {
        match value {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            other => Err(HuffmanError::InvalidBit(other)),
        }
    }
}

impl std::fmt::Display for Bit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Parses a string of `0`/`1` digits. Whitespace is skipped so that long
/// sequences can be grouped for readability.
pub fn parse_bits(digits: &str) -> HuffmanResult<Vec<Bit>> {
    digits
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(Bit::try_from)
        .collect()
}

pub fn format_bits(bits: &[Bit]) -> String {
    bits.iter().map(|bit| bit.as_char()).collect()
}
