pub mod api;
pub mod browser;
pub mod configuration;
pub mod fixture;
pub mod pages;
pub mod session;
pub mod telemetry;
pub mod test_data;
