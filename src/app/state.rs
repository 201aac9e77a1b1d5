// src/app/state.rs

use strum_macros::EnumIter;

use crate::ui::UI_TEXT;

/// The one piece of cross-cutting page state. Two states, user-driven,
/// fully connected: each switch flips to the other role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter)]
pub enum UserRole {
    #[default]
    Creator,
    Investor,
}

impl UserRole {
    pub fn toggled(self) -> Self {
        match self {
            UserRole::Creator => UserRole::Investor,
            UserRole::Investor => UserRole::Creator,
        }
    }

    /// Header toggle label.
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Creator => &UI_TEXT.role_creator,
            UserRole::Investor => &UI_TEXT.role_investor,
        }
    }

    /// Dashboard heading for the central panel.
    pub fn heading(self) -> &'static str {
        match self {
            UserRole::Creator => &UI_TEXT.creator_dashboard,
            UserRole::Investor => &UI_TEXT.investor_dashboard,
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            UserRole::Creator => &UI_TEXT.creator_tagline,
            UserRole::Investor => &UI_TEXT.investor_tagline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_role_is_creator() {
        assert_eq!(UserRole::default(), UserRole::Creator);
    }

    #[test]
    fn toggling_round_trips() {
        let start = UserRole::Creator;
        assert_eq!(start.toggled(), UserRole::Investor);
        assert_eq!(start.toggled().toggled(), start);
    }
}
