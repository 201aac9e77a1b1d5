use eframe::egui::{Align, Button, Grid, Layout, RichText, TextEdit, Ui};

use crate::{
    domain::{CurrencyDraft, DraftError, MarketStore},
    ui::{UI_CONFIG, UI_TEXT, UiStyleExt, format_price, format_usd, group_digits},
};

/// Creator view: the launch form plus the session's own listings.
pub struct CreatorPanel<'a> {
    draft: &'a mut CurrencyDraft,
    draft_error: Option<DraftError>,
    market: &'a MarketStore,
}

impl<'a> CreatorPanel<'a> {
    pub fn new(
        draft: &'a mut CurrencyDraft,
        draft_error: Option<DraftError>,
        market: &'a MarketStore,
    ) -> Self {
        Self {
            draft,
            draft_error,
            market,
        }
    }

    /// Returns true when the Launch button was clicked this frame.
    pub fn render(&mut self, ui: &mut Ui) -> bool {
        let launch_clicked = self.render_create_card(ui);
        ui.add_space(12.0);
        self.render_own_listings_card(ui);
        launch_clicked
    }

    fn render_create_card(&mut self, ui: &mut Ui) -> bool {
        let mut clicked = false;

        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.card_heading(&UI_TEXT.create_title, &UI_TEXT.create_subtitle);

            Grid::new("create_form")
                .num_columns(2)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    ui.label(&UI_TEXT.label_name);
                    ui.add(
                        TextEdit::singleline(&mut self.draft.name)
                            .hint_text(&UI_TEXT.hint_name)
                            .desired_width(220.0),
                    );
                    ui.end_row();

                    ui.label(&UI_TEXT.label_symbol);
                    // Form-level truncation only; the workflow re-uppercases
                    // on submit regardless.
                    let symbol_edit = ui.add(
                        TextEdit::singleline(&mut self.draft.symbol)
                            .hint_text(&UI_TEXT.hint_symbol)
                            .char_limit(4)
                            .desired_width(80.0),
                    );
                    if symbol_edit.changed() {
                        self.draft.symbol = self.draft.symbol.to_uppercase();
                    }
                    ui.end_row();

                    ui.label(&UI_TEXT.label_supply);
                    ui.add(
                        TextEdit::singleline(&mut self.draft.total_supply)
                            .hint_text(&UI_TEXT.hint_supply)
                            .desired_width(140.0),
                    );
                    ui.end_row();

                    ui.label(&UI_TEXT.label_price);
                    ui.add(
                        TextEdit::singleline(&mut self.draft.initial_price)
                            .hint_text(&UI_TEXT.hint_price)
                            .desired_width(140.0),
                    );
                    ui.end_row();
                });

            if let Some(err) = self.draft_error {
                ui.add_space(4.0);
                ui.label(RichText::new(err.to_string()).color(UI_CONFIG.colors.error));
            }

            ui.add_space(8.0);
            let launch = Button::new(RichText::new(&UI_TEXT.button_launch).strong());
            if ui
                .add_sized([ui.available_width(), 30.0], launch)
                .clicked()
            {
                clicked = true;
            }
        });

        clicked
    }

    fn render_own_listings_card(&mut self, ui: &mut Ui) {
        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.card_heading(&UI_TEXT.my_title, &UI_TEXT.my_subtitle);

            let mut any = false;
            for currency in self.market.created_this_session() {
                any = true;
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(&currency.symbol)
                                .strong()
                                .color(UI_CONFIG.colors.accent),
                        );
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&currency.name).strong());
                            ui.label_small_subdued(format!(
                                "{}: {}",
                                UI_TEXT.label_market_cap,
                                format_usd(currency.market_cap)
                            ));
                            ui.label_small_subdued(format!(
                                "{}: {}",
                                UI_TEXT.label_launched,
                                currency.created_at.format("%Y-%m-%d %H:%M UTC")
                            ));
                        });
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.vertical(|ui| {
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    ui.label(
                                        RichText::new(format_price(currency.current_price))
                                            .size(16.0)
                                            .strong(),
                                    );
                                });
                                ui.label_small_subdued(format!(
                                    "{} {}",
                                    group_digits(currency.available_amount),
                                    UI_TEXT.label_available
                                ));
                            });
                        });
                    });
                });
            }

            if !any {
                ui.label_subdued(&UI_TEXT.my_empty);
            }
        });
    }
}
