use eframe::{
    Frame,
    egui::{CentralPanel, Context, RichText, ScrollArea, Visuals},
};

use crate::{
    Cli,
    app::UserRole,
    domain::{CurrencyDraft, DraftError, MarketStore, Portfolio},
    ui::{CreatorPanel, HeaderEvent, InvestorPanel, TradeEvent, UI_CONFIG, render_header},
};

/// The page shell. Owns the selected role, the shared market store and the
/// in-progress creation draft; everything below it borrows from here.
pub struct App {
    pub(crate) role: UserRole,
    pub(crate) market: MarketStore,
    pub(crate) draft: CurrencyDraft,
    pub(crate) draft_error: Option<DraftError>,
    pub(crate) portfolio: Portfolio,
}

impl App {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let market = if args.empty_market {
            MarketStore::empty()
        } else {
            MarketStore::with_demo_listings()
        };

        Self {
            role: UserRole::default(),
            market,
            draft: CurrencyDraft::default(),
            draft_error: None,
            portfolio: Portfolio::default(),
        }
    }

    pub(crate) fn switch_role(&mut self, role: UserRole) {
        if self.role == role {
            return;
        }
        log::info!("Role switched to {:?}", role);
        self.role = role;
    }

    /// Run the creation workflow against the current draft. Success clears
    /// the form; any error leaves the store untouched and is surfaced inline.
    pub(crate) fn handle_launch(&mut self) {
        match self.market.launch(&self.draft) {
            Ok(_) => {
                self.draft.clear();
                self.draft_error = None;
            }
            Err(err) => {
                log::info!("Launch rejected: {}", err);
                self.draft_error = Some(err);
            }
        }
    }

    fn render_central_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.central_panel_frame();

        CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading(RichText::new(self.role.heading()).strong());
            ui.label(RichText::new(self.role.tagline()).color(UI_CONFIG.colors.label));
            ui.add_space(8.0);

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.role {
                    UserRole::Creator => {
                        let launch_clicked = {
                            let mut panel = CreatorPanel::new(
                                &mut self.draft,
                                self.draft_error,
                                &self.market,
                            );
                            panel.render(ui)
                        };
                        if launch_clicked {
                            self.handle_launch();
                        }
                    }
                    UserRole::Investor => {
                        let mut panel = InvestorPanel::new(&self.market, &self.portfolio);
                        if let Some(event) = panel.render(ui) {
                            // Inert by design: the market mock has no trade
                            // execution. Log and drop.
                            match event {
                                TradeEvent::Buy(symbol) => {
                                    log::debug!("Buy clicked for {} (not implemented)", symbol)
                                }
                                TradeEvent::Sell(symbol) => {
                                    log::debug!("Sell clicked for {} (not implemented)", symbol)
                                }
                            }
                        }
                    }
                });
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        if let Some(event) = render_header(ctx, self.role) {
            match event {
                HeaderEvent::SwitchRole(role) => self.switch_role(role),
                HeaderEvent::ProfileClicked => {
                    log::debug!("Profile clicked (not implemented)")
                }
            }
        }

        self.render_central_panel(ctx);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App {
            role: UserRole::default(),
            market: MarketStore::with_demo_listings(),
            draft: CurrencyDraft::default(),
            draft_error: None,
            portfolio: Portfolio::default(),
        }
    }

    fn fill_draft(app: &mut App) {
        app.draft = CurrencyDraft {
            name: "TestCoin".to_string(),
            symbol: "tst".to_string(),
            total_supply: "100".to_string(),
            initial_price: "2.5".to_string(),
        };
    }

    #[test]
    fn launch_clears_draft_and_error() {
        let mut app = test_app();
        fill_draft(&mut app);
        app.draft_error = Some(DraftError::MissingField); // stale from earlier attempt

        app.handle_launch();

        assert_eq!(app.market.len(), 4);
        assert!(app.draft.name.is_empty());
        assert!(app.draft_error.is_none());
    }

    #[test]
    fn rejected_launch_keeps_draft_for_correction() {
        let mut app = test_app();
        fill_draft(&mut app);
        app.draft.initial_price = "cheap".to_string();

        app.handle_launch();

        assert_eq!(app.market.len(), 3);
        assert_eq!(app.draft_error, Some(DraftError::InvalidPrice));
        assert_eq!(app.draft.name, "TestCoin"); // user can fix the price
    }

    #[test]
    fn role_switching_never_touches_the_store() {
        let mut app = test_app();
        fill_draft(&mut app);
        app.handle_launch();
        let before: Vec<_> = app.market.all().to_vec();

        app.switch_role(UserRole::Investor);
        app.switch_role(UserRole::Creator);
        app.switch_role(UserRole::Creator); // idempotent

        assert_eq!(app.role, UserRole::Creator);
        assert_eq!(app.market.all(), before.as_slice());
    }
}
