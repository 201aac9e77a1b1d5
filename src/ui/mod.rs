mod creator;
mod header;
mod investor;
mod styles;
mod ui_config;
mod ui_text;
mod utils;

pub use creator::CreatorPanel;
pub use header::{HeaderEvent, render_header};
pub use investor::{InvestorPanel, TradeEvent};
pub use styles::{UiStyleExt, change_color};
pub use ui_config::UI_CONFIG;
pub use ui_text::UI_TEXT;
pub use utils::{format_change, format_price, format_usd, group_digits};
