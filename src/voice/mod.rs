#[cfg(feature = "desktop")]
pub mod commands;
pub mod controller;

pub use controller::{VoiceSearchController, VoiceSearchSession};
