pub mod comparison;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod detail;
pub mod error;
pub mod figure;
pub mod globe;
pub mod web;

pub use dashboard::{Dashboard, DashboardView};
pub use dataset::{Dataset, TyphoonRecord};
pub use error::RenderError;
