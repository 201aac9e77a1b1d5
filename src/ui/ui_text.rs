use std::sync::LazyLock;

/// Every user-visible string in one place. The source locale used Russian
/// labels; this build ships the English set with the same semantics.
pub struct UiText {
    pub app_title: String,
    pub badge_beta: String,
    pub button_profile: String,

    // --- Role switch ---
    pub role_creator: String,
    pub role_investor: String,
    pub creator_dashboard: String,
    pub creator_tagline: String,
    pub investor_dashboard: String,
    pub investor_tagline: String,

    // --- Creation form ---
    pub create_title: String,
    pub create_subtitle: String,
    pub label_name: String,
    pub hint_name: String,
    pub label_symbol: String,
    pub hint_symbol: String,
    pub label_supply: String,
    pub hint_supply: String,
    pub label_price: String,
    pub hint_price: String,
    pub button_launch: String,

    // --- Creator listing ---
    pub my_title: String,
    pub my_subtitle: String,
    pub my_empty: String,
    pub label_market_cap: String,
    pub label_available: String,
    pub label_launched: String,

    // --- Investor listing ---
    pub market_title: String,
    pub market_subtitle: String,
    pub market_empty: String,
    pub label_creator: String,
    pub button_buy: String,
    pub button_sell: String,

    // --- Portfolio panel ---
    pub portfolio_title: String,
    pub portfolio_subtitle: String,
    pub pf_balance: String,
    pub pf_pnl: String,
    pub pf_positions: String,

    pub creator_you: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "CryptoCreator".to_string(),
    badge_beta: "BETA".to_string(),
    button_profile: "Profile".to_string(),

    role_creator: "Creator".to_string(),
    role_investor: "Investor".to_string(),
    creator_dashboard: "Creator Dashboard".to_string(),
    creator_tagline: "Create and manage your own cryptocurrencies".to_string(),
    investor_dashboard: "Investor Dashboard".to_string(),
    investor_tagline: "Invest in promising virtual currencies".to_string(),

    create_title: "Create a new cryptocurrency".to_string(),
    create_subtitle: "Configure the parameters of your virtual currency".to_string(),
    label_name: "Currency name".to_string(),
    hint_name: "e.g. DiamondCoin".to_string(),
    label_symbol: "Symbol (3-4 letters)".to_string(),
    hint_symbol: "DMD".to_string(),
    label_supply: "Total supply".to_string(),
    hint_supply: "1000000".to_string(),
    label_price: "Initial price ($)".to_string(),
    hint_price: "0.05".to_string(),
    button_launch: "Launch currency".to_string(),

    my_title: "My currencies".to_string(),
    my_subtitle: "Manage the currencies you created".to_string(),
    my_empty: "Nothing launched yet. Fill in the form above to mint your first currency."
        .to_string(),
    label_market_cap: "Market cap".to_string(),
    label_available: "available".to_string(),
    label_launched: "Launched".to_string(),

    market_title: "Available currencies".to_string(),
    market_subtitle: "Buy and sell virtual currencies".to_string(),
    market_empty: "No currencies listed yet.".to_string(),
    label_creator: "Creator".to_string(),
    button_buy: "Buy".to_string(),
    button_sell: "Sell".to_string(),

    portfolio_title: "My portfolio".to_string(),
    portfolio_subtitle: "Your investments and balance".to_string(),
    pf_balance: "Total balance".to_string(),
    pf_pnl: "24h profit".to_string(),
    pf_positions: "Active positions".to_string(),

    creator_you: "You".to_string(),
});
