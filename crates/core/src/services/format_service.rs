use crate::models::figures::{DerivedFigures, FormattedFigures};
use crate::models::number_format::{NumberFormat, MAX_DECIMALS};

/// Format an amount for display.
///
/// Exactly `fmt.decimals` fraction digits (at most `MAX_DECIMALS`), integer
/// part grouped by thousands. Rounding is half away from zero on the shortest
/// decimal form of the `f64`, so `2.675` rounds to `2,68` and `1.005` to
/// `1,01`. Negative values keep their sign even when they round to zero.
///
/// ```
/// use price_calculator_core::models::number_format::NumberFormat;
/// use price_calculator_core::services::format_service::format_amount;
///
/// assert_eq!(format_amount(1234567.891, &NumberFormat::es_ar()), "1.234.567,89");
/// ```
pub fn format_amount(value: f64, fmt: &NumberFormat) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞".into() } else { "∞".into() };
    }

    let decimals = fmt.decimals.min(MAX_DECIMALS);
    let (integer, fraction) = round_half_up(value.abs(), decimals);

    let mut out = String::new();
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_digits(&integer, fmt));
    if decimals > 0 {
        out.push(fmt.decimal_separator);
        out.push_str(&fraction);
    }
    out
}

/// Render every derived figure with the same format.
pub fn format_figures(figures: &DerivedFigures, fmt: &NumberFormat) -> FormattedFigures {
    let f = |value: f64| format_amount(value, fmt);
    FormattedFigures {
        price_with_discount: f(figures.price_with_discount),
        cost_excl_vat: f(figures.cost_excl_vat),
        vat_amount: f(figures.vat_amount),
        cost_incl_vat: f(figures.cost_incl_vat),
        cost_excl_vat_ars: f(figures.cost_excl_vat_ars),
        vat_amount_ars: f(figures.vat_amount_ars),
        cost_incl_vat_ars: f(figures.cost_incl_vat_ars),
        margin_amount: f(figures.margin_amount),
        margin_total: f(figures.margin_total),
        unit_price: f(figures.unit_price),
        total_price: f(figures.total_price),
    }
}

/// Insert group separators every three digits from the right.
fn group_digits(digits: &str, fmt: &NumberFormat) -> String {
    if digits.len() < 3 + fmt.min_grouping_digits.max(1) {
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(fmt.group_separator);
        }
        out.push(ch);
    }
    out
}

/// Round a finite, non-negative value to `decimals` places.
/// Returns the integer digits and exactly `decimals` fraction digits.
fn round_half_up(value: f64, decimals: usize) -> (String, String) {
    let (integer, fraction) = shortest_decimal(value);

    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .collect();
    let round_up = fraction.as_bytes().get(decimals).is_some_and(|&b| b >= b'5');

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - decimals;
    let fraction = digits.split_off(split);
    // Only ASCII digits were pushed
    let to_string = |bytes: Vec<u8>| bytes.into_iter().map(char::from).collect::<String>();
    (to_string(digits), to_string(fraction))
}

/// Integer and fraction digits of the shortest decimal that round-trips to
/// `value` (`1.005` → `("1", "005")`, `1e8` → `("100000000", "")`).
fn shortest_decimal(value: f64) -> (String, String) {
    // `{:e}` yields the shortest round-trip mantissa, e.g. "1.005e0", "1e-3"
    let sci = format!("{value:e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    // Position of the decimal point within `digits`
    let point = exponent + 1;
    if point <= 0 {
        let zeros = "0".repeat(point.unsigned_abs() as usize);
        ("0".to_string(), zeros + &digits)
    } else {
        let point = point as usize;
        if point >= digits.len() {
            let zeros = "0".repeat(point - digits.len());
            (digits + &zeros, String::new())
        } else {
            (digits[..point].to_string(), digits[point..].to_string())
        }
    }
}
