pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use chrono::{DateTime, Local, TimeZone};
use models::{
    figures::{DerivedFigures, FormattedFigures},
    pricing::{PricingInput, RawPricingInput},
    scenario::ScenarioEntry,
    settings::Settings,
};
use services::{
    format_service, input_service::InputService, pricing_service::PricingService,
};
use storage::{
    backend::{MemoryStorage, ScenarioStorage},
    format::EXPORT_MIME_TYPE,
    scenario_store::ScenarioStore,
};

use errors::CoreError;

/// A scenario export ready to hand to the user as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: Vec<u8>,
}

/// Main entry point for the price calculator core library.
/// Holds the settings, the services and the saved-scenario store.
#[must_use]
pub struct PriceCalculator<S: ScenarioStorage = MemoryStorage> {
    settings: Settings,
    input_service: InputService,
    pricing_service: PricingService,
    store: ScenarioStore<S>,
}

impl<S: ScenarioStorage> std::fmt::Debug for PriceCalculator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceCalculator")
            .field("settings", &self.settings)
            .field("scenarios", &self.store.len())
            .finish()
    }
}

impl PriceCalculator<MemoryStorage> {
    /// Calculator with default settings and non-persistent storage.
    pub fn in_memory() -> Self {
        Self::open(MemoryStorage::new())
    }
}

impl<S: ScenarioStorage> PriceCalculator<S> {
    /// Open a calculator over `storage` with default settings.
    /// Previously saved scenarios are loaded immediately.
    pub fn open(storage: S) -> Self {
        Self::build(Settings::default(), storage)
    }

    /// Open a calculator with custom settings.
    pub fn with_settings(settings: Settings, storage: S) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(settings, storage))
    }

    fn build(settings: Settings, storage: S) -> Self {
        let store = ScenarioStore::open(storage, settings.storage_key.clone());
        Self {
            settings,
            input_service: InputService::new(),
            pricing_service: PricingService::new(),
            store,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Initial form values.
    #[must_use]
    pub fn default_input(&self) -> PricingInput {
        self.settings.defaults.clone()
    }

    // ── Pricing ─────────────────────────────────────────────────────

    /// Derive the cost and sale breakdown.
    #[must_use]
    pub fn derive(&self, input: &PricingInput) -> DerivedFigures {
        self.pricing_service.derive(input)
    }

    /// Coerce raw form text into a validated input.
    #[must_use]
    pub fn parse_input(&self, raw: &RawPricingInput) -> PricingInput {
        self.input_service.parse(raw)
    }

    /// Parse raw form text and derive in one step.
    #[must_use]
    pub fn derive_raw(&self, raw: &RawPricingInput) -> DerivedFigures {
        self.derive(&self.parse_input(raw))
    }

    /// Format a single amount with the configured number format.
    #[must_use]
    pub fn format_amount(&self, value: f64) -> String {
        format_service::format_amount(value, &self.settings.number_format)
    }

    /// Format every derived figure with the configured number format.
    #[must_use]
    pub fn format_figures(&self, figures: &DerivedFigures) -> FormattedFigures {
        format_service::format_figures(figures, &self.settings.number_format)
    }

    // ── Scenarios ───────────────────────────────────────────────────

    /// All saved scenarios, in save order.
    #[must_use]
    pub fn list_scenarios(&self) -> &[ScenarioEntry] {
        self.store.list()
    }

    /// Save `input` as a new scenario, stamped with the current local time.
    /// A blank `name` is replaced by the configured placeholder.
    pub fn save_scenario(
        &mut self,
        name: &str,
        product: &str,
        input: &PricingInput,
    ) -> Result<&ScenarioEntry, CoreError> {
        self.save_scenario_at(name, product, input, &Local::now())
    }

    /// Like `save_scenario`, with an explicit timestamp.
    pub fn save_scenario_at<Tz: TimeZone>(
        &mut self,
        name: &str,
        product: &str,
        input: &PricingInput,
        saved_at: &DateTime<Tz>,
    ) -> Result<&ScenarioEntry, CoreError>
    where
        Tz::Offset: std::fmt::Display,
    {
        let entry = ScenarioEntry::capture(
            name,
            product,
            &self.settings.default_scenario_name,
            input,
            saved_at,
        );
        self.store.save(entry)?;
        self.store.load(self.store.len() - 1)
    }

    /// Inputs of the scenario at `index`, for repopulating the form.
    pub fn load_scenario(&self, index: usize) -> Result<PricingInput, CoreError> {
        Ok(self.store.load(index)?.to_input())
    }

    /// Delete the scenario at `index`.
    pub fn delete_scenario(&mut self, index: usize) -> Result<ScenarioEntry, CoreError> {
        self.store.delete(index)
    }

    /// Delete every scenario, but only if `confirm` agrees.
    /// Returns whether the collection was cleared.
    pub fn clear_scenarios<F>(&mut self, confirm: F) -> Result<bool, CoreError>
    where
        F: FnOnce(usize) -> bool,
    {
        if !confirm(self.store.len()) {
            return Ok(false);
        }
        self.store.clear_all()?;
        Ok(true)
    }

    /// Build the downloadable export of all scenarios.
    pub fn export_scenarios(&self) -> Result<ExportFile, CoreError> {
        Ok(ExportFile {
            file_name: self.settings.export_file_name.clone(),
            mime_type: EXPORT_MIME_TYPE,
            contents: self.store.export_json()?,
        })
    }

    /// Direct access to the scenario store.
    #[must_use]
    pub fn store(&self) -> &ScenarioStore<S> {
        &self.store
    }

    /// Consume the calculator and return the underlying storage.
    pub fn into_storage(self) -> S {
        self.store.into_storage()
    }
}
