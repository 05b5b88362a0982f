//! Lengths with units, as used in style attributes

use std::fmt;

/// Unit of a [`Length`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthUnit {
    /// Centimeters
    #[default]
    Cm,
    /// Millimeters
    Mm,
    /// Inches
    Inch,
    /// Points (1/72 inch)
    Pt,
    /// Picas (12 points)
    Pc,
}

impl LengthUnit {
    fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::Inch => "in",
            LengthUnit::Pt => "pt",
            LengthUnit::Pc => "pc",
        }
    }
}

/// A length such as `2.5cm` or `10pt`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    value: f64,
    unit: LengthUnit,
}

impl Length {
    /// Create a length
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Length in centimeters
    pub const fn cm(value: f64) -> Self {
        Self::new(value, LengthUnit::Cm)
    }

    /// Length in millimeters
    pub const fn mm(value: f64) -> Self {
        Self::new(value, LengthUnit::Mm)
    }

    /// Length in inches
    pub const fn inches(value: f64) -> Self {
        Self::new(value, LengthUnit::Inch)
    }

    /// Length in points
    pub const fn pt(value: f64) -> Self {
        Self::new(value, LengthUnit::Pt)
    }

    /// Numeric value in this length's unit
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Unit of this length
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl std::hash::Hash for Length {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
        self.unit.hash(state);
    }
}

impl Eq for Length {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Length::cm(2.5).to_string(), "2.5cm");
        assert_eq!(Length::cm(3.0).to_string(), "3cm");
        assert_eq!(Length::pt(10.0).to_string(), "10pt");
        assert_eq!(Length::mm(0.5).to_string(), "0.5mm");
        assert_eq!(Length::inches(1.0).to_string(), "1in");
    }

    #[test]
    fn test_eq_and_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Length::cm(1.0));
        set.insert(Length::cm(1.0));
        set.insert(Length::mm(10.0));
        assert_eq!(set.len(), 2);
    }
}
