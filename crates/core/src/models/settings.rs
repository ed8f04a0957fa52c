use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::number_format::{NumberFormat, MAX_DECIMALS};
use super::pricing::PricingInput;

pub const DEFAULT_STORAGE_KEY: &str = "price-calculator.scenarios";
pub const DEFAULT_EXPORT_FILE_NAME: &str = "escenarios.json";
pub const DEFAULT_SCENARIO_NAME: &str = "Sin nombre";

/// Calculator configuration.
///
/// Every field has a default, so a partial JSON document only overrides
/// what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key under which the scenario collection is persisted
    pub storage_key: String,

    /// File name offered when exporting scenarios
    pub export_file_name: String,

    /// Name given to scenarios saved with a blank name
    pub default_scenario_name: String,

    /// How amounts are displayed
    pub number_format: NumberFormat,

    /// Initial form values
    pub defaults: PricingInput,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            default_scenario_name: DEFAULT_SCENARIO_NAME.to_string(),
            number_format: NumberFormat::default(),
            defaults: PricingInput::default(),
        }
    }
}

impl Settings {
    /// Parse settings overrides from JSON.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)
            .map_err(|e| CoreError::InvalidSettings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that would make the store or formatter unusable.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.storage_key.trim().is_empty() {
            return Err(CoreError::InvalidSettings("storage_key must not be empty".into()));
        }
        if self.export_file_name.trim().is_empty() {
            return Err(CoreError::InvalidSettings(
                "export_file_name must not be empty".into(),
            ));
        }
        if self.default_scenario_name.trim().is_empty() {
            return Err(CoreError::InvalidSettings(
                "default_scenario_name must not be empty".into(),
            ));
        }
        let fmt = &self.number_format;
        if fmt.decimal_separator == fmt.group_separator {
            return Err(CoreError::InvalidSettings(format!(
                "decimal and group separators must differ (both '{}')",
                fmt.decimal_separator
            )));
        }
        if fmt.decimals > MAX_DECIMALS {
            return Err(CoreError::InvalidSettings(format!(
                "decimals must be at most {MAX_DECIMALS}, got {}",
                fmt.decimals
            )));
        }
        Ok(())
    }
}
