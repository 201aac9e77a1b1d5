use eframe::egui::{Align, Context, Layout, RichText, TopBottomPanel};
use strum::IntoEnumIterator;

use crate::{
    app::UserRole,
    ui::{UI_CONFIG, UI_TEXT},
};

pub enum HeaderEvent {
    SwitchRole(UserRole),
    ProfileClicked,
}

/// Brand + BETA badge on the left, role switch and profile button on the
/// right. Returns the interaction (if any) for the shell to apply.
pub fn render_header(ctx: &Context, current_role: UserRole) -> Option<HeaderEvent> {
    let mut event = None;
    let frame = UI_CONFIG.top_panel_frame();

    TopBottomPanel::top("header")
        .frame(frame)
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&UI_TEXT.app_title)
                        .size(20.0)
                        .strong()
                        .color(UI_CONFIG.colors.accent),
                );
                ui.label(
                    RichText::new(&UI_TEXT.badge_beta)
                        .small()
                        .color(UI_CONFIG.colors.label),
                );

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(&UI_TEXT.button_profile).clicked() {
                        event = Some(HeaderEvent::ProfileClicked);
                    }

                    ui.separator();

                    // Two-state role switch, rendered Investor|Creator due to
                    // the right-to-left layout.
                    for role in UserRole::iter().rev() {
                        if ui
                            .selectable_label(current_role == role, role.label())
                            .clicked()
                        {
                            event = Some(HeaderEvent::SwitchRole(role));
                        }
                    }
                });
            });
        });

    event
}
