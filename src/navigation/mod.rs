#[cfg(feature = "desktop")]
pub mod commands;
pub mod controller;
pub mod state;

pub use controller::{Credentials, NavigationController};
pub use state::{NavigationState, Page};
