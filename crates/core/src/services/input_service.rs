use crate::models::pricing::{Currency, PricingInput, RawPricingInput, VatRate};

/// Fallback for amounts and percentages that fail to parse.
pub const DEFAULT_AMOUNT: f64 = 0.0;

/// Fallback for exchange rates that fail to parse or are not positive.
pub const DEFAULT_EXCHANGE_RATE: f64 = 1.0;

/// Fallback for quantities that fail to parse or are below one.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Input boundary: turns raw form text into a validated `PricingInput`.
///
/// Nothing here ever fails. Bad input is replaced by a safe default so the
/// pricing engine always receives usable numbers.
pub struct InputService;

impl InputService {
    pub fn new() -> Self {
        Self
    }

    /// Coerce every field of the form uniformly.
    pub fn parse(&self, raw: &RawPricingInput) -> PricingInput {
        PricingInput {
            price_list: parse_price(&raw.price_list),
            currency: parse_currency(&raw.currency),
            exchange_rate: parse_exchange_rate(&raw.exchange_rate),
            include_vat: raw.include_vat,
            vat_rate: parse_vat_rate(&raw.vat_rate),
            margin_rate: parse_decimal(&raw.margin_rate, DEFAULT_AMOUNT),
            quantity: parse_quantity(&raw.quantity),
            discount: parse_decimal(&raw.discount, DEFAULT_AMOUNT),
        }
    }
}

impl Default for InputService {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the leading decimal number of `text`, or return `fallback`.
///
/// Leading whitespace is skipped and trailing garbage ignored
/// (`"12.5 kg"` → 12.5). Zero, empty, unparseable and non-finite values
/// all yield `fallback`.
pub fn parse_decimal(text: &str, fallback: f64) -> f64 {
    let prefix = decimal_prefix(text.trim_start());
    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => fallback,
    }
}

/// Parse a list price. Negative prices become 0.
pub fn parse_price(text: &str) -> f64 {
    parse_decimal(text, DEFAULT_AMOUNT).max(0.0)
}

/// Parse the leading integer of `text` as a quantity (`"3.7"` → 3).
/// Anything below one, or unparseable, yields 1.
pub fn parse_quantity(text: &str) -> u32 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if negative || digits_len == 0 {
        return DEFAULT_QUANTITY;
    }
    // Only digits remain, so the parse can only fail on overflow
    match rest[..digits_len].parse::<u32>() {
        Ok(0) => DEFAULT_QUANTITY,
        Ok(quantity) => quantity,
        Err(_) => u32::MAX,
    }
}

/// Exchange rates must be strictly positive.
pub fn parse_exchange_rate(text: &str) -> f64 {
    let rate = parse_decimal(text, DEFAULT_EXCHANGE_RATE);
    if rate > 0.0 {
        rate
    } else {
        DEFAULT_EXCHANGE_RATE
    }
}

/// Unknown currencies fall back to the home currency.
pub fn parse_currency(text: &str) -> Currency {
    text.parse().unwrap_or_default()
}

/// Anything other than 10.5 or 21 falls back to the general rate.
pub fn parse_vat_rate(text: &str) -> VatRate {
    VatRate::from_percent(parse_decimal(text, VatRate::default().percent()))
        .unwrap_or_default()
}

/// Longest prefix of `s` shaped like `[+-]digits[.digits][e[+-]digits]`.
/// Returns "" when the mantissa has no digits.
fn decimal_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return "";
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    &s[..end]
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
