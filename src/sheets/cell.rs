//! A1-style cell addressing
//!
//! Rows are 1-indexed, columns are letters (`A`..`Z`, `AA`, `AB`, ...).

use std::fmt;
use std::str::FromStr;

/// A parsed A1 label such as `B3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    /// 1-indexed row.
    pub row: u32,
    /// 1-indexed column (`A` = 1).
    pub col: u32,
}

impl CellRef {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letters(self.col), self.row)
    }
}

/// Error returned when a label is not a valid A1 address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid cell label: {0:?}")]
pub struct InvalidLabel(pub String);

impl FromStr for CellRef {
    type Err = InvalidLabel;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidLabel(label.to_string());

        let split = label.find(|c: char| c.is_ascii_digit()).ok_or_else(invalid)?;
        let (letters, digits) = label.split_at(split);

        if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let col = column_index(letters).ok_or_else(invalid)?;
        let row: u32 = digits.parse().map_err(|_| invalid())?;
        if row == 0 {
            return Err(invalid());
        }

        Ok(Self { row, col })
    }
}

/// Converts a 1-indexed column number to letters: 1 -> `A`, 26 -> `Z`, 27 -> `AA`.
pub fn column_letters(mut col: u32) -> String {
    let mut letters = Vec::new();
    while col > 0 {
        let rem = (col - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        col = (col - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Converts column letters (case-insensitive) to a 1-indexed column number.
///
/// Returns `None` on overflow or for non-letter input.
pub fn column_index(letters: &str) -> Option<u32> {
    letters.chars().try_fold(0u32, |acc, c| {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = u32::from(c.to_ascii_uppercase() as u8 - b'A') + 1;
        acc.checked_mul(26)?.checked_add(digit)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_labels() {
        assert_eq!("A2".parse::<CellRef>(), Ok(CellRef::new(2, 1)));
        assert_eq!("B3".parse::<CellRef>(), Ok(CellRef::new(3, 2)));
        assert_eq!("aa10".parse::<CellRef>(), Ok(CellRef::new(10, 27)));
    }

    #[test]
    fn rejects_malformed_labels() {
        for label in ["", "A", "3", "A0", "3A", "A3B", "A-1", "Ж1", "A 1"] {
            assert!(label.parse::<CellRef>().is_err(), "{label:?} should be rejected");
        }
    }

    #[test]
    fn column_letters_round_trip_boundaries() {
        assert_eq!(column_letters(1), "A");
        assert_eq!(column_letters(26), "Z");
        assert_eq!(column_letters(27), "AA");
        assert_eq!(column_letters(52), "AZ");
        assert_eq!(column_letters(703), "AAA");
        assert_eq!(column_index("AZ"), Some(52));
    }

    #[test]
    fn display_uses_a1_notation() {
        assert_eq!(CellRef::new(7, 28).to_string(), "AB7");
    }
}
