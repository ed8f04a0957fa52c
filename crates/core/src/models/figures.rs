use serde::{Deserialize, Serialize};

use super::pricing::Currency;

/// Everything the calculator derives from a `PricingInput`.
///
/// The first block is in the source currency, the `*_ars` block is the
/// same cost figures converted with `rate`, and the sale figures are in ARS.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedFigures {
    pub currency: Currency,

    // ── Cost, source currency ───────────────────────────────────────
    pub price_with_discount: f64,
    #[serde(rename = "costExclVAT")]
    pub cost_excl_vat: f64,
    pub vat_amount: f64,
    #[serde(rename = "costInclVAT")]
    pub cost_incl_vat: f64,

    // ── Cost, ARS ───────────────────────────────────────────────────
    /// Conversion rate applied (1 for ARS)
    pub rate: f64,
    #[serde(rename = "costExclVATArs")]
    pub cost_excl_vat_ars: f64,
    pub vat_amount_ars: f64,
    #[serde(rename = "costInclVATArs")]
    pub cost_incl_vat_ars: f64,

    // ── Sale, ARS ───────────────────────────────────────────────────
    /// Margin on one unit
    pub margin_amount: f64,
    /// Margin across the whole quantity
    pub margin_total: f64,
    pub unit_price: f64,
    pub total_price: f64,
}

/// `DerivedFigures` rendered for display, one string per figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedFigures {
    pub price_with_discount: String,
    #[serde(rename = "costExclVAT")]
    pub cost_excl_vat: String,
    pub vat_amount: String,
    #[serde(rename = "costInclVAT")]
    pub cost_incl_vat: String,
    #[serde(rename = "costExclVATArs")]
    pub cost_excl_vat_ars: String,
    pub vat_amount_ars: String,
    #[serde(rename = "costInclVATArs")]
    pub cost_incl_vat_ars: String,
    pub margin_amount: String,
    pub margin_total: String,
    pub unit_price: String,
    pub total_price: String,
}
