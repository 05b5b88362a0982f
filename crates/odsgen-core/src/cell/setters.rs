//! Setters acting on a walker's current cell

use chrono::{Duration, NaiveDateTime};

use super::{Cell, CellValue, ObjectValue, Tooltip};
use crate::error::Result;
use crate::style::StyleName;

/// Typed setters for the cell under a cursor
///
/// Implementors only provide [`CellSetters::update_current`]; every setter
/// goes through it, so the cursor's row bookkeeping stays in one place.
pub trait CellSetters {
    /// Mutate the current cell
    fn update_current<R>(&mut self, f: impl FnOnce(&mut Cell) -> R) -> Result<R>;

    /// Set a prepared value
    fn set_value(&mut self, value: CellValue) -> Result<()> {
        self.update_current(|c| c.set_value(value))
    }

    /// Set a boolean value
    fn set_boolean(&mut self, value: bool) -> Result<()> {
        self.update_current(|c| c.set_boolean(value))
    }

    /// Set a currency amount
    fn set_currency(&mut self, amount: f64, currency: &str) -> Result<()> {
        self.update_current(|c| c.set_currency(amount, currency))
    }

    /// Set a date value
    fn set_date(&mut self, value: NaiveDateTime) -> Result<()> {
        self.update_current(|c| c.set_date(value))
    }

    /// Set a float value
    fn set_float(&mut self, value: f64) -> Result<()> {
        self.update_current(|c| c.set_float(value))
    }

    /// Set a percentage value
    fn set_percentage(&mut self, value: f64) -> Result<()> {
        self.update_current(|c| c.set_percentage(value))
    }

    /// Set a string value
    fn set_string(&mut self, value: &str) -> Result<()> {
        self.update_current(|c| c.set_string(value))
    }

    /// Set a time value
    fn set_time(&mut self, value: Duration) -> Result<()> {
        self.update_current(|c| c.set_time(value))
    }

    /// Clear the value
    fn set_void(&mut self) -> Result<()> {
        self.update_current(Cell::set_void)
    }

    /// Set a loosely typed value
    fn set_object(&mut self, value: ObjectValue) -> Result<()> {
        self.update_current(|c| c.set_object(value))
    }

    /// Set the formula
    fn set_formula(&mut self, formula: &str) -> Result<()> {
        self.update_current(|c| c.set_formula(formula))
    }

    /// Set the cell style
    fn set_style(&mut self, style: &StyleName) -> Result<()> {
        self.update_current(|c| c.set_style(style))?
    }

    /// Set the tooltip
    fn set_tooltip(&mut self, tooltip: Tooltip) -> Result<()> {
        self.update_current(|c| c.set_tooltip(tooltip))
    }

    /// Mark the current cell covered
    fn set_covered(&mut self) -> Result<()> {
        self.update_current(Cell::set_covered)
    }
}
