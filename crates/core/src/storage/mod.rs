pub mod backend;
pub mod format;
pub mod scenario_store;
