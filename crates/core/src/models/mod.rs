pub mod figures;
pub mod number_format;
pub mod pricing;
pub mod scenario;
pub mod settings;
