use eframe::egui::{Color32, RichText, Ui};

use crate::ui::UI_CONFIG;

/// Color for a signed 24h change: gains green, losses red, flat gray.
pub fn change_color(value: f64) -> Color32 {
    if value > 0.0 {
        UI_CONFIG.colors.profit
    } else if value < 0.0 {
        UI_CONFIG.colors.loss
    } else {
        UI_CONFIG.colors.flat
    }
}

pub trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn label_small_subdued(&mut self, text: impl Into<String>);
    /// Stacked "label over value" block used by the portfolio figures.
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn card_heading(&mut self, title: &str, subtitle: &str);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text.into()).color(UI_CONFIG.colors.label));
    }

    fn label_small_subdued(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text.into())
                .small()
                .color(UI_CONFIG.colors.label),
        );
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.vertical(|ui| {
            ui.label(RichText::new(label).small().color(UI_CONFIG.colors.label));
            ui.label(RichText::new(value).size(20.0).strong().color(color));
        });
    }

    fn card_heading(&mut self, title: &str, subtitle: &str) {
        self.label(
            RichText::new(title)
                .size(16.0)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        self.label(RichText::new(subtitle).small().color(UI_CONFIG.colors.label));
        self.add_space(8.0);
    }
}
