//! A1-style cell positions

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::MAX_ROWS;

/// A cell position (e.g., "A1", "$B$2")
///
/// Rows and columns are 0-based internally and 1-based / lettered in
/// display. Absolute markers are accepted on input and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPosition {
    /// Row index (0-based)
    pub row: usize,
    /// Column index (0-based, A=0, B=1, ..., Z=25, AA=26)
    pub col: usize,
}

impl CellPosition {
    /// Create a new position
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parse a position from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use odsgen_core::CellPosition;
    ///
    /// let pos = CellPosition::parse("A5").unwrap();
    /// assert_eq!(pos.row, 4);
    /// assert_eq!(pos.col, 0);
    ///
    /// let pos = CellPosition::parse("$AB$12").unwrap();
    /// assert_eq!(pos.row, 11);
    /// assert_eq!(pos.col, 27);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;

        if bytes.get(pos) == Some(&b'$') {
            pos += 1;
        }

        let col_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }
        if pos == col_start {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }
        let col = Self::letters_to_column(&s[col_start..pos])?;

        if bytes.get(pos) == Some(&b'$') {
            pos += 1;
        }

        let row_str = &s[pos..];
        if row_str.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }
        if !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!(
                "invalid row number in '{}'",
                s
            )));
        }
        let row: usize = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }
        let row = row - 1;
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }

        Ok(Self { row, col })
    }

    /// Convert a column index to letters (0 = A, 25 = Z, 26 = AA)
    pub fn column_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col + 1;

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }

    /// Convert column letters to an index (A = 0, Z = 25, AA = 26)
    pub fn letters_to_column(letters: &str) -> Result<usize> {
        if letters.is_empty() {
            return Err(Error::InvalidAddress("empty column letters".into()));
        }
        if letters.len() > 3 {
            return Err(Error::InvalidAddress(format!(
                "too many column letters in '{}'",
                letters
            )));
        }

        let mut col: usize = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidAddress(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            col = col * 26 + (c.to_ascii_uppercase() as usize - 'A' as usize + 1);
        }

        Ok(col - 1)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", Self::column_to_letters(self.col), self.row + 1)
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

impl FromStr for CellPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
