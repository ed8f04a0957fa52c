use serde::{Deserialize, Serialize};

/// Largest supported `decimals`, same cap as `Number.prototype.toLocaleString`.
pub const MAX_DECIMALS: usize = 20;

/// Locale convention for displaying amounts.
///
/// Swapping the convention only means handing a different `NumberFormat`
/// to `format_amount`; the pricing logic never sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Separator between integer and fraction digits
    pub decimal_separator: char,

    /// Separator between groups of three integer digits
    pub group_separator: char,

    /// Fixed number of fraction digits, at most `MAX_DECIMALS`
    pub decimals: usize,

    /// Integer part needs at least `3 + min_grouping_digits` digits before
    /// grouping kicks in. 1 = group from 1.000 on, 2 = from 10.000 on.
    pub min_grouping_digits: usize,
}

impl NumberFormat {
    /// Spanish (Argentina): `1.234.567,89`
    pub fn es_ar() -> Self {
        Self {
            decimal_separator: ',',
            group_separator: '.',
            decimals: 2,
            min_grouping_digits: 1,
        }
    }

    /// Spanish (Spain): like es-AR, but four-digit numbers stay ungrouped (`1234,50`).
    pub fn es_es() -> Self {
        Self {
            min_grouping_digits: 2,
            ..Self::es_ar()
        }
    }

    /// English (US): `1,234,567.89`
    pub fn en_us() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: ',',
            decimals: 2,
            min_grouping_digits: 1,
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::es_ar()
    }
}
