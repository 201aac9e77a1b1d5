#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod domain;
pub mod ui;

// Re-export commonly used types outside of crate
pub use app::{App, UserRole};
pub use domain::{Creator, Currency, CurrencyDraft, DraftError, MarketStore, Portfolio};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start with an empty market instead of the demo listings
    #[arg(long, default_value_t = false)]
    pub empty_market: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
