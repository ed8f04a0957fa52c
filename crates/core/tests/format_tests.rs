// ═══════════════════════════════════════════════════════════════════
// Format Tests — locale amount formatting
// ═══════════════════════════════════════════════════════════════════

use price_calculator_core::models::figures::DerivedFigures;
use price_calculator_core::models::number_format::{NumberFormat, MAX_DECIMALS};
use price_calculator_core::models::pricing::{Currency, PricingInput};
use price_calculator_core::services::format_service::{format_amount, format_figures};
use price_calculator_core::services::pricing_service::PricingService;

fn es_ar(value: f64) -> String {
    format_amount(value, &NumberFormat::es_ar())
}

// ═══════════════════════════════════════════════════════════════════
// es-AR
// ═══════════════════════════════════════════════════════════════════

mod argentina {
    use super::*;

    #[test]
    fn always_two_decimals() {
        assert_eq!(es_ar(0.0), "0,00");
        assert_eq!(es_ar(5.0), "5,00");
        assert_eq!(es_ar(5.1), "5,10");
        assert_eq!(es_ar(999.99), "999,99");
    }

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(es_ar(1000.0), "1.000,00");
        assert_eq!(es_ar(1234.5), "1.234,50");
        assert_eq!(es_ar(3630.0), "3.630,00");
        assert_eq!(es_ar(1_234_567.891), "1.234.567,89");
        assert_eq!(es_ar(100_000_000.0), "100.000.000,00");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(es_ar(0.125), "0,13");
        assert_eq!(es_ar(-0.125), "-0,13");
    }

    #[test]
    fn rounds_the_shortest_decimal_form() {
        // 2.675 is stored as 2.67499999999999982236...
        assert_eq!(es_ar(2.675), "2,68");
        assert_eq!(es_ar(1.005), "1,01");
        assert_eq!(es_ar(1.0049), "1,00");
    }

    #[test]
    fn rounding_carries_into_integer_part() {
        assert_eq!(es_ar(999.999), "1.000,00");
    }

    #[test]
    fn negative_values() {
        assert_eq!(es_ar(-1234.5), "-1.234,50");
        assert_eq!(es_ar(-0.5), "-0,50");
    }

    #[test]
    fn negative_rounding_to_zero_keeps_sign() {
        assert_eq!(es_ar(-0.001), "-0,00");
        assert_eq!(es_ar(-0.0), "-0,00");
        assert_eq!(es_ar(0.001), "0,00");
    }

    #[test]
    fn non_finite() {
        assert_eq!(es_ar(f64::NAN), "NaN");
        assert_eq!(es_ar(f64::INFINITY), "∞");
        assert_eq!(es_ar(f64::NEG_INFINITY), "-∞");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Other conventions
// ═══════════════════════════════════════════════════════════════════

mod conventions {
    use super::*;

    #[test]
    fn es_es_skips_grouping_for_four_digits() {
        let fmt = NumberFormat::es_es();
        assert_eq!(format_amount(1234.5, &fmt), "1234,50");
        assert_eq!(format_amount(12_345.0, &fmt), "12.345,00");
    }

    #[test]
    fn en_us_swaps_separators() {
        let fmt = NumberFormat::en_us();
        assert_eq!(format_amount(1_234_567.891, &fmt), "1,234,567.89");
    }

    #[test]
    fn custom_decimals() {
        let fmt = NumberFormat {
            decimals: 0,
            ..NumberFormat::es_ar()
        };
        assert_eq!(format_amount(1234.5, &fmt), "1.235");

        let fmt = NumberFormat {
            decimals: 3,
            ..NumberFormat::es_ar()
        };
        assert_eq!(format_amount(1.5, &fmt), "1,500");
    }

    #[test]
    fn decimals_are_capped() {
        let fmt = NumberFormat {
            decimals: usize::MAX,
            ..NumberFormat::es_ar()
        };
        let formatted = format_amount(0.5, &fmt);
        assert_eq!(formatted, format!("0,5{}", "0".repeat(MAX_DECIMALS - 1)));
    }

    #[test]
    fn tiny_values_pad_with_zeros() {
        let fmt = NumberFormat {
            decimals: MAX_DECIMALS,
            ..NumberFormat::en_us()
        };
        assert_eq!(format_amount(1e-7, &fmt), "0.00000010000000000000");
    }

    #[test]
    fn default_is_es_ar() {
        assert_eq!(NumberFormat::default(), NumberFormat::es_ar());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Derived figures
// ═══════════════════════════════════════════════════════════════════

mod figures {
    use super::*;

    #[test]
    fn formats_every_figure() {
        let figures = PricingService::new().derive(&PricingInput {
            price_list: 1000.0,
            currency: Currency::Ars,
            margin_rate: 50.0,
            quantity: 2,
            ..PricingInput::default()
        });

        let formatted = format_figures(&figures, &NumberFormat::es_ar());
        assert_eq!(formatted.price_with_discount, "1.000,00");
        assert_eq!(formatted.cost_excl_vat, "1.000,00");
        assert_eq!(formatted.vat_amount, "210,00");
        assert_eq!(formatted.cost_incl_vat, "1.210,00");
        assert_eq!(formatted.cost_excl_vat_ars, "1.000,00");
        assert_eq!(formatted.vat_amount_ars, "210,00");
        assert_eq!(formatted.cost_incl_vat_ars, "1.210,00");
        assert_eq!(formatted.margin_amount, "500,00");
        assert_eq!(formatted.margin_total, "1.000,00");
        assert_eq!(formatted.unit_price, "1.815,00");
        assert_eq!(formatted.total_price, "3.630,00");
    }

    #[test]
    fn vat_extraction_formats_to_round_amounts() {
        let figures = PricingService::new().derive(&PricingInput {
            price_list: 1210.0,
            include_vat: true,
            margin_rate: 0.0,
            ..PricingInput::default()
        });

        let formatted = format_figures(&figures, &NumberFormat::es_ar());
        assert_eq!(formatted.cost_excl_vat, "1.000,00");
        assert_eq!(formatted.vat_amount, "210,00");
        assert_eq!(formatted.cost_incl_vat, "1.210,00");
        assert_eq!(formatted.unit_price, "1.210,00");
    }

    #[test]
    fn default_figures_format_as_zero() {
        let formatted = format_figures(&DerivedFigures::default(), &NumberFormat::es_ar());
        assert_eq!(formatted.total_price, "0,00");
    }
}
