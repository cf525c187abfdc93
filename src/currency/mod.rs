use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils::dates::month_name;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub date_format: DateFormatStyle,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
            date_format: DateFormatStyle::Long,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormatOptions {
    pub currency_display: CurrencyDisplay,
    pub negative_style: NegativeStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            currency_display: CurrencyDisplay::Symbol,
            negative_style: NegativeStyle::Sign,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NegativeStyle {
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CurrencyDisplay {
    Symbol,
    Code,
    SymbolAndCode,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DateFormatStyle {
    /// `2025-11-03`
    Short,
    /// `03 Nov 2025`
    Medium,
    /// `November 3, 2025`
    Long,
}

/// Presentation collaborator used by the engine and renderers.
///
/// Formatting never feeds back into comparisons; callers keep raw numbers.
pub trait Formatter: Send + Sync {
    fn format_currency(&self, amount: f64) -> String;
    /// Truncates toward zero and groups thousands.
    fn format_number(&self, value: f64) -> String;
    fn format_date(&self, date: NaiveDate) -> String;
}

/// Stateless [`Formatter`] driven by a locale, currency and display options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleFormatter {
    pub locale: LocaleConfig,
    pub currency: CurrencyCode,
    pub options: FormatOptions,
}

impl LocaleFormatter {
    pub fn new(locale: LocaleConfig, currency: CurrencyCode, options: FormatOptions) -> Self {
        Self {
            locale,
            currency,
            options,
        }
    }
}

impl Formatter for LocaleFormatter {
    fn format_currency(&self, amount: f64) -> String {
        format_currency_value(amount, &self.currency, &self.locale, &self.options)
    }

    fn format_number(&self, value: f64) -> String {
        format_number(&self.locale, value.trunc(), 0)
    }

    fn format_date(&self, date: NaiveDate) -> String {
        format_date(&self.locale, date)
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (body.as_str(), None),
    };
    let mut rendered = group_signed(int_part, locale.grouping_separator);
    if let Some(frac) = frac_part {
        rendered.push(locale.decimal_separator);
        rendered.push_str(frac);
    }
    // `format!` keeps the sign of values that round to zero.
    if rendered.starts_with('-') && rendered.chars().all(|ch| !ch.is_ascii_digit() || ch == '0')
    {
        rendered.remove(0);
    }
    rendered
}

fn group_signed(int_part: &str, separator: char) -> String {
    match int_part.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits, separator)),
        None => group_digits(int_part, separator),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (len - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Renders an amount with symbol or code, e.g. `-$1,234.50`.
pub fn format_currency_value(
    amount: f64,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    options: &FormatOptions,
) -> String {
    let precision = minor_units_for(code.as_str());
    let body = format_number(locale, amount.abs(), precision);
    let negative = amount < 0.0 && body.chars().any(|ch| ch.is_ascii_digit() && ch != '0');
    let symbol = symbol_for(code.as_str());

    let unsigned = match options.currency_display {
        CurrencyDisplay::Symbol => format!("{}{}", symbol, body),
        CurrencyDisplay::Code => format!("{} {}", code.as_str(), body),
        CurrencyDisplay::SymbolAndCode => format!("{}{} ({})", symbol, body, code.as_str()),
    };
    if !negative {
        return unsigned;
    }
    match options.negative_style {
        NegativeStyle::Sign => format!("-{}", unsigned),
        NegativeStyle::Parentheses => format!("({})", unsigned),
    }
}

pub fn format_date(locale: &LocaleConfig, date: NaiveDate) -> String {
    match locale.date_format {
        DateFormatStyle::Short => date.format("%Y-%m-%d").to_string(),
        DateFormatStyle::Medium => format!(
            "{:02} {} {}",
            date.day(),
            &month_name(date.month())[..3],
            date.year()
        ),
        DateFormatStyle::Long => format!(
            "{} {}, {}",
            month_name(date.month()),
            date.day(),
            date.year()
        ),
    }
}
