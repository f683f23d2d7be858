#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod dashboard;
pub mod telemetry;
pub use app::PlayerScopeApp;
pub use dashboard::Dashboard;
