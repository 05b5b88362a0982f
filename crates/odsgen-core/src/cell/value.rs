//! Cell value types

use std::fmt::{self, Write};

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::xml::{attr, attr_display};

/// Format of `office:date-value`
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Typed value of a cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No value
    #[default]
    Void,

    /// `office:boolean-value`
    Boolean(bool),

    /// Amount in a currency (`office:value` plus `office:currency`)
    Currency {
        /// Amount
        amount: f64,
        /// ISO 4217 code (e.g., "EUR")
        currency: String,
    },

    /// `office:date-value`
    Date(NaiveDateTime),

    /// `office:value` with type float
    Float(f64),

    /// `office:value` with type percentage (0.5 is 50%)
    Percentage(f64),

    /// `office:string-value`
    String(String),

    /// `office:time-value`, a duration
    Time(Duration),
}

impl CellValue {
    /// Create a string value
    pub fn string<S: Into<String>>(s: S) -> Self {
        CellValue::String(s.into())
    }

    /// Create a currency value
    pub fn currency<S: Into<String>>(amount: f64, currency: S) -> Self {
        CellValue::Currency {
            amount,
            currency: currency.into(),
        }
    }

    /// Create a time value from milliseconds
    pub fn time_millis(millis: i64) -> Self {
        CellValue::Time(Duration::milliseconds(millis))
    }

    /// Create a value from a loosely typed object
    pub fn from_object<O: Into<ObjectValue>>(value: O) -> Self {
        match value.into() {
            ObjectValue::Null => CellValue::Void,
            ObjectValue::Text(s) | ObjectValue::Other(s) => CellValue::String(s),
            ObjectValue::Integer(n) => CellValue::Float(n as f64),
            ObjectValue::Float(n) => CellValue::Float(n),
            ObjectValue::Boolean(b) => CellValue::Boolean(b),
            ObjectValue::Date(d) => CellValue::Date(d.and_time(NaiveTime::default())),
            ObjectValue::DateTime(dt) => CellValue::Date(dt),
        }
    }

    /// Check if there is no value
    pub fn is_void(&self) -> bool {
        matches!(self, CellValue::Void)
    }

    /// Value of `office:value-type`, `None` for void
    pub fn value_type(&self) -> Option<&'static str> {
        match self {
            CellValue::Void => None,
            CellValue::Boolean(_) => Some("boolean"),
            CellValue::Currency { .. } => Some("currency"),
            CellValue::Date(_) => Some("date"),
            CellValue::Float(_) => Some("float"),
            CellValue::Percentage(_) => Some("percentage"),
            CellValue::String(_) => Some("string"),
            CellValue::Time(_) => Some("time"),
        }
    }

    /// Append the `office:value-type` and value attributes
    pub fn write_attributes(&self, out: &mut String) {
        let Some(value_type) = self.value_type() else {
            return;
        };
        attr_display(out, "office:value-type", value_type);
        match self {
            CellValue::Void => {}
            CellValue::Boolean(b) => attr_display(out, "office:boolean-value", b),
            CellValue::Currency { amount, currency } => {
                attr(out, "office:currency", currency);
                attr_display(out, "office:value", XsdDouble(*amount));
            }
            CellValue::Date(dt) => {
                attr_display(out, "office:date-value", dt.format(DATE_FORMAT))
            }
            CellValue::Float(n) | CellValue::Percentage(n) => {
                attr_display(out, "office:value", XsdDouble(*n))
            }
            CellValue::String(s) => attr(out, "office:string-value", s),
            CellValue::Time(d) => attr_display(out, "office:time-value", IsoDuration(*d)),
        }
    }
}

/// An `xsd:double` lexical value: `INF`, `-INF` and `NaN` for non-finite numbers
struct XsdDouble(f64);

impl fmt::Display for XsdDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        if n.is_nan() {
            f.write_str("NaN")
        } else if n == f64::INFINITY {
            f.write_str("INF")
        } else if n == f64::NEG_INFINITY {
            f.write_str("-INF")
        } else {
            write!(f, "{}", n)
        }
    }
}

/// ISO 8601 duration `PT{h}H{m}M{s}.{ms}S`
struct IsoDuration(Duration);

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut millis = self.0.num_milliseconds();
        if millis < 0 {
            f.write_char('-')?;
            millis = -millis;
        }
        let hours = millis / 3_600_000;
        let minutes = millis / 60_000 % 60;
        let seconds = millis / 1000 % 60;
        write!(
            f,
            "PT{}H{}M{}.{:03}S",
            hours,
            minutes,
            seconds,
            millis % 1000
        )
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Void => Ok(()),
            CellValue::Boolean(b) => write!(f, "{}", b),
            CellValue::Currency { amount, currency } => write!(f, "{} {}", amount, currency),
            CellValue::Date(dt) => write!(f, "{}", dt.format(DATE_FORMAT)),
            CellValue::Float(n) => write!(f, "{}", n),
            CellValue::Percentage(n) => write!(f, "{}%", n * 100.0),
            CellValue::String(s) => f.write_str(s),
            CellValue::Time(d) => write!(f, "{}", IsoDuration(*d)),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Float(n as f64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Float(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::Date(dt)
    }
}

impl From<Duration> for CellValue {
    fn from(d: Duration) -> Self {
        CellValue::Time(d)
    }
}

/// A loosely typed value, classified into a [`CellValue`] by `set_object`
///
/// Integers and floats become floats, dates become dates, text and anything
/// else becomes a string, and `Null` becomes void.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ObjectValue {
    #[default]
    Null,
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    /// Any other value, already rendered as text
    Other(String),
}

impl ObjectValue {
    /// Wrap an arbitrary displayable value
    pub fn other<D: fmt::Display>(value: D) -> Self {
        ObjectValue::Other(value.to_string())
    }
}

macro_rules! impl_object_from {
    ($variant:ident: $($t:ty => $conv:expr),* $(,)?) => {
        $(
            impl From<$t> for ObjectValue {
                fn from(v: $t) -> Self {
                    ObjectValue::$variant($conv(v))
                }
            }
        )*
    };
}

impl_object_from!(Integer: i8 => i64::from, i16 => i64::from, i32 => i64::from, i64 => |v| v,
    u8 => i64::from, u16 => i64::from, u32 => i64::from);
impl_object_from!(Float: f32 => f64::from, f64 => |v| v);
impl_object_from!(Text: String => |v| v, &str => str::to_string);
impl_object_from!(Boolean: bool => |v| v);
impl_object_from!(Date: NaiveDate => |v| v);
impl_object_from!(DateTime: NaiveDateTime => |v| v);

impl<T: Into<ObjectValue>> From<Option<T>> for ObjectValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(ObjectValue::Null, Into::into)
    }
}
