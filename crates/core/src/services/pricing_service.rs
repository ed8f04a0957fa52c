use crate::models::figures::DerivedFigures;
use crate::models::pricing::PricingInput;

/// Derives the cost and sale breakdown from calculator inputs.
///
/// Pure business logic: no state, no I/O, no failure modes. Inputs are
/// expected to have been coerced by `InputService` already, so nothing is
/// clamped or validated here.
pub struct PricingService;

impl PricingService {
    pub fn new() -> Self {
        Self
    }

    /// Run the full derivation pipeline.
    ///
    /// Steps are applied in a fixed order:
    /// discount → VAT extraction → VAT → conversion to ARS → margin → quantity.
    pub fn derive(&self, input: &PricingInput) -> DerivedFigures {
        let vat = input.vat_rate.fraction();
        let margin = input.margin_rate / 100.0;

        // 1. Discount on the list price
        let price_with_discount = input.price_list * (1.0 - input.discount / 100.0);

        // 2. Net cost: strip VAT only when the list price includes it
        let cost_excl_vat = if input.include_vat {
            price_with_discount / (1.0 + vat)
        } else {
            price_with_discount
        };

        // 3. VAT always applies on top of the net cost
        let vat_amount = cost_excl_vat * vat;
        let cost_incl_vat = cost_excl_vat + vat_amount;

        // 4-5. Convert to ARS
        let rate = input.effective_rate();
        let cost_excl_vat_ars = cost_excl_vat * rate;
        let vat_amount_ars = vat_amount * rate;
        let cost_incl_vat_ars = cost_incl_vat * rate;

        // 6-8. Sale figures, ARS
        let margin_amount = cost_excl_vat_ars * margin;
        let margin_total = margin_amount * f64::from(input.quantity);
        let unit_price = cost_incl_vat_ars * (1.0 + margin);
        let total_price = unit_price * f64::from(input.quantity);

        DerivedFigures {
            currency: input.currency,
            price_with_discount,
            cost_excl_vat,
            vat_amount,
            cost_incl_vat,
            rate,
            cost_excl_vat_ars,
            vat_amount_ars,
            cost_incl_vat_ars,
            margin_amount,
            margin_total,
            unit_price,
            total_price,
        }
    }
}

impl Default for PricingService {
    fn default() -> Self {
        Self::new()
    }
}

