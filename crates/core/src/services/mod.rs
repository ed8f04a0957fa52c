pub mod format_service;
pub mod input_service;
pub mod pricing_service;
