//! Currency symbols and locale-aware amount formatting for CLI output.

/// How integer digits are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// `1,234,567`
    Thousands,
    /// Lakh/crore style: `12,34,567`
    Indian,
}

/// Separators and grouping derived from a locale tag such as `en-IN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub grouping: Grouping,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
            grouping: Grouping::Thousands,
        }
    }
}

impl NumberLocale {
    /// Resolves a BCP 47 style tag; unknown tags use `1,234.5`.
    pub fn for_tag(tag: &str) -> Self {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
        let language = normalized.split('-').next().unwrap_or_default();
        match (language, normalized.as_str()) {
            (_, "en-in") | ("hi", _) | ("bn", _) | ("ta", _) | ("te", _) | ("mr", _) => Self {
                grouping: Grouping::Indian,
                ..Self::default()
            },
            ("de", _) | ("es", _) | ("it", _) | ("nl", _) | ("pt", _) => Self {
                decimal_separator: ',',
                grouping_separator: '.',
                grouping: Grouping::Thousands,
            },
            ("fr", _) => Self {
                decimal_separator: ',',
                grouping_separator: ' ',
                grouping: Grouping::Thousands,
            },
            _ => Self::default(),
        }
    }
}

/// Formats amounts for one currency under one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountFormat {
    pub locale: NumberLocale,
    pub currency: String,
}

impl AmountFormat {
    pub fn new(locale_tag: &str, currency: &str) -> Self {
        Self {
            locale: NumberLocale::for_tag(locale_tag),
            currency: currency.to_ascii_uppercase(),
        }
    }

    pub fn format(&self, amount: f64) -> String {
        format_amount(&self.locale, amount, &self.currency)
    }
}

pub fn symbol_for(code: &str) -> String {
    match code.to_ascii_uppercase().as_str() {
        "INR" => "₹".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        other => format!("{} ", other),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code.to_ascii_uppercase().as_str() {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Formats `value` with `precision` decimals using the locale's separators
/// and grouping.
pub fn format_number(locale: &NumberLocale, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, fraction) = match body.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (body.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };
    let grouped = group_digits(digits, locale.grouping, locale.grouping_separator);
    match fraction {
        Some(fraction) => format!("{sign}{grouped}{}{fraction}", locale.decimal_separator),
        None => format!("{sign}{grouped}"),
    }
}

fn group_digits(digits: &str, grouping: Grouping, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        let boundary = match grouping {
            Grouping::Thousands => count != 0 && count % 3 == 0,
            Grouping::Indian => count == 3 || (count > 3 && count % 2 == 1),
        };
        if boundary {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// Renders an amount with its currency symbol, e.g. `₹1,00,000` or `-$12.50`.
///
/// Whole amounts drop their decimals.
pub fn format_amount(locale: &NumberLocale, amount: f64, code: &str) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let precision = if amount.fract() == 0.0 {
        0
    } else {
        minor_units_for(code)
    };
    let body = format_number(locale, amount.abs(), precision);
    let symbol = symbol_for(code);
    if amount < 0.0 {
        format!("-{}{}", symbol, body)
    } else {
        format!("{}{}", symbol, body)
    }
}
