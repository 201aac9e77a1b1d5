// Can all be private now because we have a public re-export.
mod currency;
mod market;
mod portfolio;

// Re-export commonly used items
pub use currency::{Creator, Currency, CurrencyDraft, DraftError};
pub use market::MarketStore;
pub use portfolio::Portfolio;
