#[cfg(feature = "desktop")]
pub mod commands;
pub mod controller;
pub mod document;

pub use controller::SummaryController;
pub use document::{Document, DocumentSummary};
