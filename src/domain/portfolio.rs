/// Static demo figures for the investor's portfolio panel. These are fixed
/// display values, not derived from the market store.
#[derive(Debug, Clone, Copy)]
pub struct Portfolio {
    pub total_balance_usd: f64,
    pub pnl_24h_usd: f64,
    pub active_positions: usize,
}

pub const DEMO: Portfolio = Portfolio {
    total_balance_usd: 1247.83,
    pnl_24h_usd: 89.21,
    active_positions: 3,
};

impl Default for Portfolio {
    fn default() -> Self {
        DEMO
    }
}
