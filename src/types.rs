use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Name of an activity as it appears in the input.
pub type ActivityName = String;

/// A single-byte separator used for fields or list items.
///
/// Parsed from either a literal one-character string (`";"`, `","`) or one of
/// the names `comma`, `semicolon`, `tab`, `pipe`, `space`. The `csv` crate
/// works on bytes, so only ASCII separators are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Delimiter(u8);

impl Delimiter {
    pub const COMMA: Delimiter = Delimiter(b',');
    pub const SEMICOLON: Delimiter = Delimiter(b';');
    pub const TAB: Delimiter = Delimiter(b'\t');

    pub fn as_byte(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(self.0)
    }

    /// Split `field` on this delimiter, trimming tokens and skipping empty ones.
    pub fn split_list(self, field: &str) -> Vec<String> {
        field
            .split(self.as_char())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Join items with this delimiter.
    pub fn join<S: AsRef<str>>(self, items: &[S]) -> String {
        let sep = self.as_char().to_string();
        items
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(&sep)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            b'\t' => f.write_str("tab"),
            b' ' => f.write_str("space"),
            b => write!(f, "{}", char::from(b)),
        }
    }
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "comma" => return Ok(Delimiter(b',')),
            "semicolon" => return Ok(Delimiter(b';')),
            "tab" | "\\t" => return Ok(Delimiter(b'\t')),
            "pipe" => return Ok(Delimiter(b'|')),
            "space" => return Ok(Delimiter(b' ')),
            _ => {}
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii() && !c.is_ascii_alphanumeric() && c != '"' => {
                Ok(Delimiter(c as u8))
            }
            _ => Err(format!(
                "invalid delimiter {s:?} (expected a single ASCII punctuation character, \
                 or one of: comma, semicolon, tab, pipe, space)"
            )),
        }
    }
}

impl TryFrom<String> for Delimiter {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Format a schedule time for display: integral values without a fractional
/// part, everything else with the shortest round-tripping representation.
pub fn format_time(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
