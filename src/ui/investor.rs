use eframe::egui::{Align, Layout, RichText, Ui};

use crate::{
    domain::{Currency, MarketStore, Portfolio},
    ui::{
        UI_CONFIG, UI_TEXT, UiStyleExt, change_color, format_change, format_price, format_usd,
        group_digits,
    },
};

/// Trade button clicks. The mock market has no execution path, so the shell
/// only logs these.
pub enum TradeEvent {
    Buy(String),
    Sell(String),
}

/// Investor view: the full market listing plus the static portfolio panel.
pub struct InvestorPanel<'a> {
    market: &'a MarketStore,
    portfolio: &'a Portfolio,
}

impl<'a> InvestorPanel<'a> {
    pub fn new(market: &'a MarketStore, portfolio: &'a Portfolio) -> Self {
        Self { market, portfolio }
    }

    pub fn render(&mut self, ui: &mut Ui) -> Option<TradeEvent> {
        let event = self.render_market_card(ui);
        ui.add_space(12.0);
        self.render_portfolio_card(ui);
        event
    }

    fn render_market_card(&self, ui: &mut Ui) -> Option<TradeEvent> {
        let mut event = None;

        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.card_heading(&UI_TEXT.market_title, &UI_TEXT.market_subtitle);

            if self.market.is_empty() {
                ui.label_subdued(&UI_TEXT.market_empty);
                return;
            }

            for currency in self.market.all() {
                if let Some(e) = render_listing_row(ui, currency) {
                    event = Some(e);
                }
            }
        });

        event
    }

    fn render_portfolio_card(&self, ui: &mut Ui) {
        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.card_heading(&UI_TEXT.portfolio_title, &UI_TEXT.portfolio_subtitle);

            ui.horizontal(|ui| {
                ui.metric(
                    &UI_TEXT.pf_balance,
                    &format_usd(self.portfolio.total_balance_usd),
                    UI_CONFIG.colors.accent,
                );
                ui.add_space(32.0);
                ui.metric(
                    &UI_TEXT.pf_pnl,
                    &format!("+{}", format_usd(self.portfolio.pnl_24h_usd)),
                    UI_CONFIG.colors.profit,
                );
                ui.add_space(32.0);
                ui.metric(
                    &UI_TEXT.pf_positions,
                    &self.portfolio.active_positions.to_string(),
                    UI_CONFIG.colors.heading,
                );
            });
        });
    }
}

fn render_listing_row(ui: &mut Ui, currency: &Currency) -> Option<TradeEvent> {
    let mut event = None;

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(&currency.symbol)
                    .size(16.0)
                    .strong()
                    .color(UI_CONFIG.colors.accent),
            );

            ui.vertical(|ui| {
                ui.label(RichText::new(&currency.name).size(15.0).strong());
                ui.label_small_subdued(format!("{}: {}", UI_TEXT.label_creator, currency.creator));
                ui.label_small_subdued(format!(
                    "{} of {}",
                    group_digits(currency.available_amount),
                    group_digits(currency.total_supply)
                ));
            });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                // Inert by design: no order flow behind these.
                if ui.button(&UI_TEXT.button_sell).clicked() {
                    event = Some(TradeEvent::Sell(currency.symbol.clone()));
                }
                if ui.button(&UI_TEXT.button_buy).clicked() {
                    event = Some(TradeEvent::Buy(currency.symbol.clone()));
                }

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(format_price(currency.current_price))
                                .size(17.0)
                                .strong(),
                        );
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(format_change(currency.change_24h))
                                .small()
                                .color(change_color(currency.change_24h)),
                        );
                    });
                });
            });
        });
    });

    event
}
