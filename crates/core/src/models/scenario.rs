use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use super::pricing::{Currency, PricingInput, VatRate};

/// Display format of `saved_at` (es-AR style: `19/10/2026, 14:05:09`).
pub const SAVED_AT_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// A named snapshot of every calculator input.
///
/// Entries are never edited after saving; the only way to change one is
/// to delete it and save a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioEntry {
    /// Display name (never blank, a placeholder is used instead)
    pub name: String,

    /// Free-text product description, may be empty
    #[serde(default)]
    pub product: String,

    pub price_list: f64,
    pub currency: Currency,
    pub margin_rate: f64,
    pub quantity: u32,
    #[serde(rename = "includeVAT")]
    pub include_vat: bool,
    pub exchange_rate: f64,
    #[serde(default)]
    pub discount: f64,
    pub vat_rate: VatRate,

    /// Human-readable local time of the save
    pub saved_at: String,
}

impl ScenarioEntry {
    /// Snapshot `input` under `name`.
    ///
    /// `name` and `product` are trimmed; a blank name becomes `placeholder`.
    pub fn capture<Tz: TimeZone>(
        name: &str,
        product: &str,
        placeholder: &str,
        input: &PricingInput,
        saved_at: &DateTime<Tz>,
    ) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let name = match name.trim() {
            "" => placeholder.to_string(),
            trimmed => trimmed.to_string(),
        };

        Self {
            name,
            product: product.trim().to_string(),
            price_list: input.price_list,
            currency: input.currency,
            margin_rate: input.margin_rate,
            quantity: input.quantity,
            include_vat: input.include_vat,
            exchange_rate: input.exchange_rate,
            discount: input.discount,
            vat_rate: input.vat_rate,
            saved_at: saved_at.format(SAVED_AT_FORMAT).to_string(),
        }
    }

    /// Name of the first numeric field that is NaN or infinite, if any.
    /// JSON has no encoding for those values.
    pub fn non_finite_field(&self) -> Option<&'static str> {
        [
            ("priceList", self.price_list),
            ("marginRate", self.margin_rate),
            ("exchangeRate", self.exchange_rate),
            ("discount", self.discount),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(field, _)| field)
    }

    /// The inputs needed to repopulate the calculator form.
    pub fn to_input(&self) -> PricingInput {
        PricingInput {
            price_list: self.price_list,
            currency: self.currency,
            exchange_rate: self.exchange_rate,
            include_vat: self.include_vat,
            vat_rate: self.vat_rate,
            margin_rate: self.margin_rate,
            quantity: self.quantity,
            discount: self.discount,
        }
    }
}

/// Ordered list of saved scenarios. Insertion order is display order.
pub type ScenarioCollection = Vec<ScenarioEntry>;
