//! Data styles: how numeric, boolean and date values are displayed
//!
//! Data styles live in the `number:` namespace and are referenced from cell
//! styles through `style:data-style-name`.

use crate::xml::{attr, attr_display, text_element};

/// Language and country of a data style
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    pub language: String,
    pub country: Option<String>,
}

impl Locale {
    /// Create a locale (e.g. `Locale::new("fr", Some("FR"))`)
    pub fn new<S: Into<String>>(language: S, country: Option<S>) -> Self {
        Self {
            language: language.into(),
            country: country.map(Into::into),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en", Some("US"))
    }
}

/// Digits of a number, percentage or currency format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberStyle {
    pub decimal_places: u8,
    pub min_integer_digits: u8,
    pub grouping: bool,
}

impl Default for NumberStyle {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            min_integer_digits: 1,
            grouping: false,
        }
    }
}

impl NumberStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of decimal places
    pub fn with_decimal_places(mut self, places: u8) -> Self {
        self.decimal_places = places;
        self
    }

    /// Set the minimum number of integer digits
    pub fn with_min_integer_digits(mut self, digits: u8) -> Self {
        self.min_integer_digits = digits;
        self
    }

    /// Group thousands
    pub fn with_grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }

    fn write_number(&self, out: &mut String) {
        out.push_str("<number:number");
        attr_display(out, "number:decimal-places", self.decimal_places);
        attr_display(out, "number:min-integer-digits", self.min_integer_digits);
        if self.grouping {
            attr_display(out, "number:grouping", "true");
        }
        out.push_str("/>");
    }
}

/// A currency format: digits plus a symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyStyle {
    pub number: NumberStyle,
    pub symbol: String,
    /// Put the symbol before the amount
    pub symbol_first: bool,
}

impl CurrencyStyle {
    /// Create a currency format with the symbol after the amount
    pub fn new<S: Into<String>>(symbol: S) -> Self {
        Self {
            number: NumberStyle::new().with_grouping(true),
            symbol: symbol.into(),
            symbol_first: false,
        }
    }

    /// Set the digits format
    pub fn with_number(mut self, number: NumberStyle) -> Self {
        self.number = number;
        self
    }

    /// Put the symbol before the amount
    pub fn with_symbol_first(mut self, first: bool) -> Self {
        self.symbol_first = first;
        self
    }
}

/// Predefined date layouts
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `31.12.99`
    DDMMYY,
    /// `31.12.1999`
    DDMMYYYY,
    /// `December`
    MMMM,
    /// `12.99`
    MMYY,
    /// `31. December 1999`
    TMMMMYYYY,
    /// Week of the year
    WW,
    /// `1999-12-31`
    YYYYMMDD,
}

impl DateFormat {
    fn write_parts(self, out: &mut String) {
        const DAY_LONG: &str = "<number:day number:style=\"long\"/>";
        const MONTH_LONG: &str = "<number:month number:style=\"long\"/>";
        const MONTH_TEXT: &str = "<number:month number:style=\"long\" number:textual=\"true\"/>";
        const YEAR: &str = "<number:year/>";
        const YEAR_LONG: &str = "<number:year number:style=\"long\"/>";

        let sep = |out: &mut String, s: &str| text_element(out, "number:text", s);
        match self {
            DateFormat::DDMMYY => {
                out.push_str(DAY_LONG);
                sep(out, ".");
                out.push_str(MONTH_LONG);
                sep(out, ".");
                out.push_str(YEAR);
            }
            DateFormat::DDMMYYYY => {
                out.push_str(DAY_LONG);
                sep(out, ".");
                out.push_str(MONTH_LONG);
                sep(out, ".");
                out.push_str(YEAR_LONG);
            }
            DateFormat::MMMM => out.push_str(MONTH_TEXT),
            DateFormat::MMYY => {
                out.push_str(MONTH_LONG);
                sep(out, ".");
                out.push_str(YEAR);
            }
            DateFormat::TMMMMYYYY => {
                out.push_str("<number:day/>");
                sep(out, ". ");
                out.push_str(MONTH_TEXT);
                sep(out, " ");
                out.push_str(YEAR_LONG);
            }
            DateFormat::WW => out.push_str("<number:week-of-year/>"),
            DateFormat::YYYYMMDD => {
                out.push_str(YEAR_LONG);
                sep(out, "-");
                out.push_str(MONTH_LONG);
                sep(out, "-");
                out.push_str(DAY_LONG);
            }
        }
    }
}

/// A date format
///
/// Without a [`DateFormat`] the consumer picks the layout from the locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateStyle {
    pub format: Option<DateFormat>,
    pub automatic_order: bool,
}

impl DateStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed layout
    pub fn with_format(mut self, format: DateFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Let the consumer reorder the parts for the locale
    pub fn with_automatic_order(mut self, automatic: bool) -> Self {
        self.automatic_order = automatic;
        self
    }
}

/// A time format (`hh:mm[:ss]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeStyle {
    pub seconds: bool,
}

impl Default for TimeStyle {
    fn default() -> Self {
        Self { seconds: true }
    }
}

/// Kind-specific part of a [`DataStyle`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataFormat {
    Number(NumberStyle),
    Percentage(NumberStyle),
    Currency(CurrencyStyle),
    Boolean,
    Date(DateStyle),
    Time(TimeStyle),
}

/// A data style
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataStyle {
    pub locale: Locale,
    /// Keep the style even if no cell uses it
    pub volatile: bool,
    pub format: DataFormat,
}

impl DataStyle {
    fn with_format(format: DataFormat) -> Self {
        Self {
            locale: Locale::default(),
            volatile: true,
            format,
        }
    }

    /// A number format
    pub fn number(number: NumberStyle) -> Self {
        Self::with_format(DataFormat::Number(number))
    }

    /// A percentage format
    pub fn percentage(number: NumberStyle) -> Self {
        Self::with_format(DataFormat::Percentage(number))
    }

    /// A currency format
    pub fn currency(currency: CurrencyStyle) -> Self {
        Self::with_format(DataFormat::Currency(currency))
    }

    /// A boolean format
    pub fn boolean() -> Self {
        Self::with_format(DataFormat::Boolean)
    }

    /// A date format
    pub fn date(date: DateStyle) -> Self {
        Self::with_format(DataFormat::Date(date))
    }

    /// A time format
    pub fn time(time: TimeStyle) -> Self {
        Self::with_format(DataFormat::Time(time))
    }

    /// Set the locale
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set only the language, keeping the country
    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.locale.language = language.into();
        self
    }

    /// Set the volatile flag
    pub fn with_volatile(mut self, volatile: bool) -> Self {
        self.volatile = volatile;
        self
    }

    fn element(&self) -> &'static str {
        match self.format {
            DataFormat::Number(_) => "number:number-style",
            DataFormat::Percentage(_) => "number:percentage-style",
            DataFormat::Currency(_) => "number:currency-style",
            DataFormat::Boolean => "number:boolean-style",
            DataFormat::Date(_) => "number:date-style",
            DataFormat::Time(_) => "number:time-style",
        }
    }

    pub(crate) fn write_xml(&self, name: &str, out: &mut String) {
        let element = self.element();
        out.push('<');
        out.push_str(element);
        attr(out, "style:name", name);
        attr(out, "number:language", &self.locale.language);
        if let Some(country) = &self.locale.country {
            attr(out, "number:country", country);
        }
        if self.volatile {
            attr_display(out, "style:volatile", "true");
        }

        match &self.format {
            DataFormat::Number(number) => {
                out.push('>');
                number.write_number(out);
            }
            DataFormat::Percentage(number) => {
                out.push('>');
                number.write_number(out);
                text_element(out, "number:text", "%");
            }
            DataFormat::Currency(currency) => {
                out.push('>');
                if currency.symbol_first {
                    text_element(out, "number:currency-symbol", &currency.symbol);
                    currency.number.write_number(out);
                } else {
                    currency.number.write_number(out);
                    text_element(out, "number:text", " ");
                    text_element(out, "number:currency-symbol", &currency.symbol);
                }
            }
            DataFormat::Boolean => out.push_str("><number:boolean/>"),
            DataFormat::Date(date) => {
                attr_display(out, "number:automatic-order", date.automatic_order);
                match date.format {
                    Some(format) => {
                        attr_display(out, "number:format-source", "fixed");
                        out.push('>');
                        format.write_parts(out);
                    }
                    None => {
                        attr_display(out, "number:format-source", "language");
                        out.push_str("/>");
                        return;
                    }
                }
            }
            DataFormat::Time(time) => {
                out.push_str("><number:hours number:style=\"long\"/>");
                text_element(out, "number:text", ":");
                out.push_str("<number:minutes number:style=\"long\"/>");
                if time.seconds {
                    text_element(out, "number:text", ":");
                    out.push_str("<number:seconds number:style=\"long\"/>");
                }
            }
        }

        out.push_str("</");
        out.push_str(element);
        out.push('>');
    }
}
