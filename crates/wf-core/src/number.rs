//! Wheel numbers and their betting-category classification
//!
//! Every category (color, dozen, column, range, parity, sector) is a pure
//! function of the number. Nothing about a number is stored besides its value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{WfError, WfResult};
use crate::wheel::{self, Sector};

/// Number of pockets on a European wheel
pub const POCKET_COUNT: usize = 37;

/// A single pocket on a European roulette wheel (0-36)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WheelNumber(pub(crate) u8);

impl WheelNumber {
    /// The single green pocket
    pub const ZERO: Self = Self(0);

    /// Highest number on the wheel
    pub const MAX: Self = Self(36);

    /// Create a wheel number, rejecting values above 36
    pub fn new(value: u8) -> WfResult<Self> {
        if (value as usize) < POCKET_COUNT {
            Ok(Self(value))
        } else {
            Err(WfError::InvalidNumber(value))
        }
    }

    /// All 37 numbers in ascending numeric order
    pub fn all() -> impl Iterator<Item = WheelNumber> + Clone {
        (0..POCKET_COUNT as u8).map(Self)
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Index into per-number tables (same as the value)
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn color(self) -> Color {
        if self.is_zero() {
            Color::Green
        } else if wheel::RED_NUMBERS.contains(&self) {
            Color::Red
        } else {
            Color::Black
        }
    }

    pub fn is_red(self) -> bool {
        self.color() == Color::Red
    }

    pub fn is_black(self) -> bool {
        self.color() == Color::Black
    }

    /// Dozen bucket, `None` for zero
    pub fn dozen(self) -> Option<Dozen> {
        match self.0 {
            0 => None,
            1..=12 => Some(Dozen::First),
            13..=24 => Some(Dozen::Second),
            _ => Some(Dozen::Third),
        }
    }

    /// Table column, `None` for zero
    pub fn column(self) -> Option<Column> {
        match self.0 {
            0 => None,
            n if n % 3 == 1 => Some(Column::First),
            n if n % 3 == 2 => Some(Column::Second),
            _ => Some(Column::Third),
        }
    }

    /// Parity, `None` for zero (zero is neither odd nor even at the table)
    pub fn parity(self) -> Option<Parity> {
        match self.0 {
            0 => None,
            n if n % 2 == 1 => Some(Parity::Odd),
            _ => Some(Parity::Even),
        }
    }

    /// 1-18
    pub fn is_low(self) -> bool {
        (1..=18).contains(&self.0)
    }

    /// 19-36
    pub fn is_high(self) -> bool {
        (19..=36).contains(&self.0)
    }

    pub fn is_odd(self) -> bool {
        self.parity() == Some(Parity::Odd)
    }

    pub fn is_even(self) -> bool {
        self.parity() == Some(Parity::Even)
    }

    /// Whether this number belongs to a named wheel sector
    pub fn in_sector(self, sector: Sector) -> bool {
        sector.numbers().contains(&self)
    }

    /// Named sectors containing this number (sectors overlap)
    pub fn sectors(self) -> impl Iterator<Item = Sector> {
        Sector::ALL.into_iter().filter(move |s| self.in_sector(*s))
    }

    /// Physically adjacent pockets from the reference neighbor table
    pub fn neighbors(self) -> &'static [WheelNumber] {
        wheel::neighbors_of(self)
    }

    /// Numeric offset with wraparound over 0-36 (0 - 1 = 36, 36 + 1 = 0)
    pub fn offset(self, delta: i32) -> Self {
        let n = POCKET_COUNT as i32;
        Self((self.0 as i32 + delta).rem_euclid(n) as u8)
    }
}

impl TryFrom<u8> for WheelNumber {
    type Error = WfError;

    fn try_from(value: u8) -> WfResult<Self> {
        Self::new(value)
    }
}

impl From<WheelNumber> for u8 {
    fn from(n: WheelNumber) -> u8 {
        n.0
    }
}

impl fmt::Display for WheelNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Pocket color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
    Green,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Black, Color::Green];

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
            Color::Green => "green",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Dozen bet bucket (1-12, 13-24, 25-36)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dozen {
    First,
    Second,
    Third,
}

impl Dozen {
    pub const ALL: [Dozen; 3] = [Dozen::First, Dozen::Second, Dozen::Third];

    /// 0-based slot for per-dozen arrays
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Dozen::First => "1st 12",
            Dozen::Second => "2nd 12",
            Dozen::Third => "3rd 12",
        }
    }
}

impl fmt::Display for Dozen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Table column (1, 4, 7 ... / 2, 5, 8 ... / 3, 6, 9 ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    First,
    Second,
    Third,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::First, Column::Second, Column::Third];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::First => "Column 1",
            Column::Second => "Column 2",
            Column::Third => "Column 3",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Odd,
    Even,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u8) -> WheelNumber {
        WheelNumber::new(v).unwrap()
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(WheelNumber::new(36).is_ok());
        assert!(matches!(WheelNumber::new(37), Err(WfError::InvalidNumber(37))));
        assert!(WheelNumber::try_from(200u8).is_err());
    }

    #[test]
    fn test_all_yields_37_ascending() {
        let all: Vec<u8> = WheelNumber::all().map(WheelNumber::value).collect();
        assert_eq!(all.len(), POCKET_COUNT);
        assert_eq!(all.first(), Some(&0));
        assert_eq!(all.last(), Some(&36));
    }

    #[test]
    fn test_colors() {
        assert_eq!(n(0).color(), Color::Green);
        assert_eq!(n(32).color(), Color::Red);
        assert_eq!(n(15).color(), Color::Black);
        assert_eq!(n(10).color(), Color::Black);
        assert_eq!(n(19).color(), Color::Red);
        assert_eq!(WheelNumber::all().filter(|x| x.is_red()).count(), 18);
        assert_eq!(WheelNumber::all().filter(|x| x.is_black()).count(), 18);
    }

    #[test]
    fn test_dozens_and_columns() {
        assert_eq!(n(0).dozen(), None);
        assert_eq!(n(12).dozen(), Some(Dozen::First));
        assert_eq!(n(13).dozen(), Some(Dozen::Second));
        assert_eq!(n(36).dozen(), Some(Dozen::Third));

        assert_eq!(n(0).column(), None);
        assert_eq!(n(34).column(), Some(Column::First));
        assert_eq!(n(35).column(), Some(Column::Second));
        assert_eq!(n(36).column(), Some(Column::Third));

        for col in Column::ALL {
            assert_eq!(WheelNumber::all().filter(|x| x.column() == Some(col)).count(), 12);
        }
    }

    #[test]
    fn test_zero_is_neither_low_high_odd_even() {
        let zero = WheelNumber::ZERO;
        assert!(!zero.is_low() && !zero.is_high());
        assert!(!zero.is_odd() && !zero.is_even());
        assert!(n(18).is_low() && n(19).is_high());
        assert!(n(1).is_odd() && n(2).is_even());
    }

    #[test]
    fn test_offset_wraps() {
        assert_eq!(n(0).offset(-2), n(35));
        assert_eq!(n(0).offset(-1), n(36));
        assert_eq!(n(36).offset(1), n(0));
        assert_eq!(n(35).offset(2), n(0));
        assert_eq!(n(17).offset(0), n(17));
    }

    #[test]
    fn test_serde_as_plain_integer() {
        let json = serde_json::to_string(&n(17)).unwrap();
        assert_eq!(json, "17");
        let back: WheelNumber = serde_json::from_str("17").unwrap();
        assert_eq!(back, n(17));
        assert!(serde_json::from_str::<WheelNumber>("37").is_err());
    }
}
