use chrono::Utc;

use crate::domain::{Creator, Currency, CurrencyDraft, DraftError};

/// The in-memory record store. Ordered newest-first; launches prepend.
///
/// Owned by the page shell (`App`) and handed to the view layer by reference,
/// so both roles browse the same instance. Nothing here survives a restart.
pub struct MarketStore {
    listings: Vec<Currency>,
}

impl MarketStore {
    /// Demo market: three pre-seeded listings from named creators.
    pub fn with_demo_listings() -> Self {
        Self {
            listings: demo_listings(),
        }
    }

    pub fn empty() -> Self {
        Self {
            listings: Vec::new(),
        }
    }

    /// Validate the draft and, on success, prepend the minted currency.
    /// On any error the store is left untouched.
    pub fn launch(&mut self, draft: &CurrencyDraft) -> Result<&Currency, DraftError> {
        let currency = Currency::from_draft(draft)?;
        log::info!(
            "Launched {} ({}) supply={} price={} cap={}",
            currency.name,
            currency.symbol,
            currency.total_supply,
            currency.current_price,
            currency.market_cap,
        );
        self.listings.insert(0, currency);
        Ok(&self.listings[0])
    }

    /// Full market, newest first (investor view).
    #[inline]
    pub fn all(&self) -> &[Currency] {
        &self.listings
    }

    /// Only the records launched in this session (creator view). Seed
    /// listings never show up here.
    pub fn created_this_session(&self) -> impl Iterator<Item = &Currency> {
        self.listings.iter().filter(|c| c.is_session_created())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

fn demo_listings() -> Vec<Currency> {
    let seeded_at = Utc::now();
    let seed = |name: &str,
                symbol: &str,
                total_supply: u64,
                current_price: f64,
                available_amount: u64,
                creator: &str,
                change_24h: f64| Currency {
        id: format!("seed-{}", symbol.to_lowercase()),
        name: name.to_string(),
        symbol: symbol.to_string(),
        total_supply,
        current_price,
        available_amount,
        creator: Creator::Named(creator.to_string()),
        market_cap: total_supply as f64 * current_price,
        change_24h,
        created_at: seeded_at,
    };

    vec![
        seed("DiamondCoin", "DMD", 1_000_000, 0.05, 750_000, "Alex K.", 12.5),
        seed("SpaceCoin", "SPC", 500_000, 0.08, 300_000, "Maria V.", -3.2),
        seed("EcoCoin", "ECO", 2_000_000, 0.02, 1_800_000, "Dmitry S.", 8.7),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn draft(name: &str, symbol: &str, supply: &str, price: &str) -> CurrencyDraft {
        CurrencyDraft {
            name: name.to_string(),
            symbol: symbol.to_string(),
            total_supply: supply.to_string(),
            initial_price: price.to_string(),
        }
    }

    #[test]
    fn demo_market_has_three_listings() {
        let market = MarketStore::with_demo_listings();
        assert_eq!(market.len(), 3);
        let symbols: Vec<_> = market.all().iter().map(|c| c.symbol.as_str()).collect();
        assert_eq!(symbols, ["DMD", "SPC", "ECO"]);
    }

    #[test]
    fn fresh_session_owns_nothing() {
        let market = MarketStore::with_demo_listings();
        assert_eq!(market.created_this_session().count(), 0);
        assert_eq!(market.len(), 3); // seeds still listed for investors
    }

    #[test]
    fn launches_prepend_newest_first() {
        let mut market = MarketStore::with_demo_listings();
        market.launch(&draft("First", "ONE", "10", "1.0")).unwrap();
        market.launch(&draft("Second", "TWO", "20", "2.0")).unwrap();

        let symbols: Vec<_> = market.all().iter().map(|c| c.symbol.as_str()).collect();
        assert_eq!(symbols, ["TWO", "ONE", "DMD", "SPC", "ECO"]);
        assert_eq!(market.created_this_session().count(), 2);
    }

    #[test]
    fn failed_launch_leaves_store_untouched() {
        let mut market = MarketStore::with_demo_listings();
        let before: Vec<_> = market.all().to_vec();

        for bad in [
            draft("", "TST", "100", "2.5"),
            draft("TestCoin", "", "100", "2.5"),
            draft("TestCoin", "TST", "", "2.5"),
            draft("TestCoin", "TST", "100", ""),
            draft("TestCoin", "TST", "many", "2.5"),
            draft("TestCoin", "TST", "100", "cheap"),
        ] {
            assert!(market.launch(&bad).is_err());
            assert_eq!(market.all(), before.as_slice());
        }
    }

    #[test]
    fn example_scenario_from_demo_market() {
        let mut market = MarketStore::with_demo_listings();
        let minted = market
            .launch(&draft("TestCoin", "tst", "100", "2.5"))
            .unwrap();
        assert_eq!(minted.symbol, "TST");
        assert_relative_eq!(minted.market_cap, 250.0);

        assert_eq!(market.len(), 4);
        assert_eq!(market.all()[0].symbol, "TST"); // first for investors
        let mine: Vec<_> = market.created_this_session().collect();
        assert_eq!(mine.len(), 1); // sole entry for the creator
        assert_eq!(mine[0].name, "TestCoin");
    }

    #[test]
    fn empty_market_flag_starts_bare() {
        let market = MarketStore::empty();
        assert!(market.is_empty());
        assert_eq!(market.created_this_session().count(), 0);
    }
}
