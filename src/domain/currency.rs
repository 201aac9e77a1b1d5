use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::ui::UI_TEXT;

/// Who launched a currency. Closed enum instead of a sentinel display string,
/// so the "own records" filter can never be confused by a seed creator whose
/// name happens to match the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Creator {
    /// Launched by the user of this session.
    Session,
    /// A named third party (seed listings only).
    Named(String),
}

impl fmt::Display for Creator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Creator::Session => write!(f, "{}", UI_TEXT.creator_you),
            Creator::Named(name) => write!(f, "{}", name),
        }
    }
}

/// One listed virtual currency.
///
/// Supply, price and the derived market cap are frozen at launch time.
/// `available_amount` starts equal to `total_supply` and nothing in the app
/// decrements it (the Buy/Sell controls are inert).
#[derive(Debug, Clone, PartialEq)]
pub struct Currency {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub total_supply: u64,
    pub current_price: f64,
    pub available_amount: u64,
    pub creator: Creator,
    pub market_cap: f64,
    pub change_24h: f64,
    pub created_at: DateTime<Utc>,
}

/// Raw text captured by the creation form. Everything is a string until
/// `Currency::from_draft` parses it.
#[derive(Debug, Clone, Default)]
pub struct CurrencyDraft {
    pub name: String,
    pub symbol: String,
    pub total_supply: String,
    pub initial_price: String,
}

impl CurrencyDraft {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("All four fields are required")]
    MissingField,
    #[error("Total supply must be a whole number")]
    InvalidSupply,
    #[error("Initial price must be a number")]
    InvalidPrice,
}

impl Currency {
    /// Validate a draft and mint the full record.
    ///
    /// The symbol is stored upper-cased regardless of input case. Ids are
    /// random v4 uuids, so two launches within the same clock tick still get
    /// distinct ids.
    pub fn from_draft(draft: &CurrencyDraft) -> Result<Self, DraftError> {
        let name = draft.name.trim();
        let symbol = draft.symbol.trim();
        let supply_text = draft.total_supply.trim();
        let price_text = draft.initial_price.trim();

        if name.is_empty() || symbol.is_empty() || supply_text.is_empty() || price_text.is_empty()
        {
            return Err(DraftError::MissingField);
        }

        let total_supply: u64 = supply_text.parse().map_err(|_| DraftError::InvalidSupply)?;
        let current_price: f64 = price_text.parse().map_err(|_| DraftError::InvalidPrice)?;
        if !current_price.is_finite() {
            return Err(DraftError::InvalidPrice);
        }

        Ok(Currency {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            symbol: symbol.to_uppercase(),
            total_supply,
            current_price,
            available_amount: total_supply,
            creator: Creator::Session,
            market_cap: total_supply as f64 * current_price,
            change_24h: 0.0,
            created_at: Utc::now(),
        })
    }

    /// Session-launched records show up in the creator's own list.
    #[inline]
    pub fn is_session_created(&self) -> bool {
        self.creator == Creator::Session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn valid_draft() -> CurrencyDraft {
        CurrencyDraft {
            name: "TestCoin".to_string(),
            symbol: "tst".to_string(),
            total_supply: "100".to_string(),
            initial_price: "2.5".to_string(),
        }
    }

    #[test]
    fn mint_from_valid_draft() {
        let c = Currency::from_draft(&valid_draft()).unwrap();
        assert_eq!(c.symbol, "TST");
        assert_eq!(c.total_supply, 100);
        assert_eq!(c.available_amount, 100);
        assert_relative_eq!(c.current_price, 2.5);
        assert_relative_eq!(c.market_cap, 250.0);
        assert_relative_eq!(c.change_24h, 0.0);
        assert_eq!(c.creator, Creator::Session);
        assert!(c.is_session_created());
    }

    #[test]
    fn every_field_is_required() {
        for blank in ["", "   "] {
            for field in 0..4 {
                let mut draft = valid_draft();
                match field {
                    0 => draft.name = blank.to_string(),
                    1 => draft.symbol = blank.to_string(),
                    2 => draft.total_supply = blank.to_string(),
                    _ => draft.initial_price = blank.to_string(),
                }
                assert_eq!(Currency::from_draft(&draft), Err(DraftError::MissingField));
            }
        }
    }

    #[test]
    fn non_numeric_supply_is_rejected() {
        let mut draft = valid_draft();
        draft.total_supply = "lots".to_string();
        assert_eq!(Currency::from_draft(&draft), Err(DraftError::InvalidSupply));

        draft.total_supply = "10.5".to_string(); // whole units only
        assert_eq!(Currency::from_draft(&draft), Err(DraftError::InvalidSupply));
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let mut draft = valid_draft();
        draft.initial_price = "cheap".to_string();
        assert_eq!(Currency::from_draft(&draft), Err(DraftError::InvalidPrice));

        draft.initial_price = "NaN".to_string();
        assert_eq!(Currency::from_draft(&draft), Err(DraftError::InvalidPrice));
    }

    #[test]
    fn rapid_launches_get_distinct_ids() {
        let a = Currency::from_draft(&valid_draft()).unwrap();
        let b = Currency::from_draft(&valid_draft()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn available_never_exceeds_supply_at_mint() {
        let c = Currency::from_draft(&valid_draft()).unwrap();
        assert!(c.available_amount <= c.total_supply);
    }
}
