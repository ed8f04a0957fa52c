use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Currency the list price is quoted in.
///
/// ARS is the home currency: every sale figure is expressed in ARS, and
/// the other currencies are converted using a user-entered exchange rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Argentine Peso (home currency)
    #[default]
    Ars,
    /// Euro
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Ars, Currency::Eur];

    /// ISO 4217 code, as shown in the currency selector.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Ars => "ARS",
            Currency::Eur => "EUR",
        }
    }

    /// Whether this is the home currency (no conversion needed).
    pub fn is_home(&self) -> bool {
        *self == Currency::Ars
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "ARS" => Ok(Currency::Ars),
            "EUR" => Ok(Currency::Eur),
            other => Err(format!("Unknown currency: {other}")),
        }
    }
}

/// VAT (IVA) rate. Only the two Argentine rates are selectable.
///
/// Serialized as the bare percentage number (`10.5` or `21`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum VatRate {
    /// 10.5% reduced rate
    Reduced,
    /// 21% general rate
    #[default]
    General,
}

impl VatRate {
    pub const ALL: [VatRate; 2] = [VatRate::Reduced, VatRate::General];

    /// The rate as a percentage (10.5 or 21.0).
    pub fn percent(&self) -> f64 {
        match self {
            VatRate::Reduced => 10.5,
            VatRate::General => 21.0,
        }
    }

    /// The rate as a fraction (0.105 or 0.21).
    pub fn fraction(&self) -> f64 {
        self.percent() / 100.0
    }

    /// Map a percentage back onto the closed set. Returns None for any other value.
    pub fn from_percent(percent: f64) -> Option<Self> {
        VatRate::ALL
            .into_iter()
            .find(|rate| (rate.percent() - percent).abs() < 1e-9)
    }
}

impl std::fmt::Display for VatRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

impl From<VatRate> for f64 {
    fn from(rate: VatRate) -> Self {
        rate.percent()
    }
}

impl TryFrom<f64> for VatRate {
    type Error = String;

    fn try_from(percent: f64) -> Result<Self, Self::Error> {
        VatRate::from_percent(percent)
            .ok_or_else(|| format!("Unsupported VAT rate: {percent} (expected 10.5 or 21)"))
    }
}

/// Validated calculator input. Produced by the input boundary
/// (`InputService::parse`) or restored from a saved scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingInput {
    /// List price in `currency`
    pub price_list: f64,

    pub currency: Currency,

    /// ARS per unit of `currency`. Ignored when `currency` is ARS.
    pub exchange_rate: f64,

    /// Whether `price_list` already includes VAT
    #[serde(rename = "includeVAT")]
    pub include_vat: bool,

    pub vat_rate: VatRate,

    /// Markup over cost, in percent
    pub margin_rate: f64,

    pub quantity: u32,

    /// Discount on the list price, in percent
    pub discount: f64,
}

impl Default for PricingInput {
    fn default() -> Self {
        Self {
            price_list: 0.0,
            currency: Currency::Ars,
            exchange_rate: 1000.0,
            include_vat: false,
            vat_rate: VatRate::General,
            margin_rate: 50.0,
            quantity: 1,
            discount: 0.0,
        }
    }
}

impl PricingInput {
    /// The rate actually applied for conversion to ARS.
    /// The entered exchange rate is ignored for ARS prices.
    pub fn effective_rate(&self) -> f64 {
        if self.currency.is_home() {
            1.0
        } else {
            self.exchange_rate
        }
    }
}

/// Unparsed form state, exactly as typed by the user.
///
/// Numeric fields stay as text until `InputService::parse` coerces them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPricingInput {
    pub price_list: String,
    pub currency: String,
    pub exchange_rate: String,
    #[serde(rename = "includeVAT")]
    pub include_vat: bool,
    pub vat_rate: String,
    pub margin_rate: String,
    pub quantity: String,
    pub discount: String,
}

impl From<&PricingInput> for RawPricingInput {
    /// Render a validated input back into form text (used when a saved
    /// scenario repopulates the form).
    fn from(input: &PricingInput) -> Self {
        Self {
            price_list: input.price_list.to_string(),
            currency: input.currency.code().to_string(),
            exchange_rate: input.exchange_rate.to_string(),
            include_vat: input.include_vat,
            vat_rate: input.vat_rate.percent().to_string(),
            margin_rate: input.margin_rate.to_string(),
            quantity: input.quantity.to_string(),
            discount: input.discount.to_string(),
        }
    }
}
