//! Money rendering used by the list rows and forms.
//!
//! Two notations coexist: the compact "millions" form for market values
//! (`"1.5M €"`) and the grouped European form for salaries and budgets
//! (`"1.200.000 €"`). They disagree on zero: `format_millions` treats `0` as
//! a missing value while `format_currency` renders it. Both behaviors are
//! kept until product decides which one is intended.

use crate::MISSING_VALUE_LABEL;

const ONE_MILLION: f64 = 1_000_000.0;
const MILLIONS_EXPONENT: i64 = 6;
const MILLIONS_SUFFIX: &str = "M €";
const CURRENCY_SUFFIX: &str = " €";

/// Renders an amount in millions, e.g. `1_500_000` as `"1.5M €"`.
///
/// `None`, zero and NaN all render as `"0M €"`. Infinite amounts render as
/// `"Infinity"`, the spelling [`parse_millions`] reads back.
pub fn format_millions(value: Option<f64>) -> String {
    match value {
        Some(amount) if amount.is_infinite() => {
            let sign = if amount < 0.0 { "-" } else { "" };
            format!("{sign}Infinity{MILLIONS_SUFFIX}")
        }
        Some(amount) if amount != 0.0 && !amount.is_nan() => {
            format!("{}{MILLIONS_SUFFIX}", amount / ONE_MILLION)
        }
        _ => format!("0{MILLIONS_SUFFIX}"),
    }
}

/// Reads back an amount written by [`format_millions`].
///
/// Every `M`, `€` and whitespace character is ignored and the longest
/// leading number is used; text without a leading number reads as `0`.
/// The decimal point is shifted on the literal itself, so `"4.1M €"` reads
/// as exactly `4_100_000`.
pub fn parse_millions(formatted: &str) -> f64 {
    let cleaned: String = formatted
        .chars()
        .filter(|c| *c != 'M' && *c != '€' && !c.is_whitespace())
        .collect();

    match leading_number(&cleaned) {
        Some(LeadingNumber::Finite { mantissa, exponent }) => {
            let shifted = exponent.saturating_add(MILLIONS_EXPONENT);
            format!("{mantissa}e{shifted}").parse().unwrap_or(0.0)
        }
        Some(LeadingNumber::Infinite { negative: true }) => f64::NEG_INFINITY,
        Some(LeadingNumber::Infinite { negative: false }) => f64::INFINITY,
        None => 0.0,
    }
}

/// Renders an amount grouped by `.` every three digits, e.g. `"1.200.000 €"`.
///
/// `None` renders as [`MISSING_VALUE_LABEL`]; zero is a real amount.
pub fn format_currency(value: Option<i64>, with_symbol: bool) -> String {
    let Some(amount) = value else {
        return MISSING_VALUE_LABEL.to_string();
    };

    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    if with_symbol {
        grouped.push_str(CURRENCY_SUFFIX);
    }
    grouped
}

/// Salary column of players and coaches.
pub fn format_salary(value: Option<i64>) -> String {
    format_currency(value, true)
}

/// Budget column of clubs.
pub fn format_budget(value: Option<i64>) -> String {
    format_currency(value, true)
}

enum LeadingNumber<'a> {
    Finite { mantissa: &'a str, exponent: i64 },
    Infinite { negative: bool },
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Scans the longest numeric prefix the way a lenient float reader does:
/// optional sign, digits, optional fraction, optional exponent.
fn leading_number(text: &str) -> Option<LeadingNumber<'_>> {
    let bytes = text.as_bytes();
    let mut end = 0;
    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        return Some(LeadingNumber::Infinite { negative });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    let mantissa = &text[..end];
    let mut exponent = 0;

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let exp_digits = count_digits(&bytes[cursor..]);
        if exp_digits > 0 {
            let literal = &text[end + 1..cursor + exp_digits];
            exponent = literal.parse().unwrap_or(if literal.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            });
        }
    }

    Some(LeadingNumber::Finite { mantissa, exponent })
}
