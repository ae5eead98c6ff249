//! Navigation - Pages

use gpui::App;

use crate::app::entities::AppEntities;

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActivePage {
    /// Landing page with hero, stats, and process sections
    #[default]
    Home,
    /// Retainer tiers, production items, additional services
    Services,
    /// Case studies
    Portfolio,
    /// Industry focus cards
    Industries,
    /// Agency profile
    About,
    /// Lead form and booking card
    Contact,
    /// Privacy policy (reachable from the footer only)
    Privacy,
}

impl ActivePage {
    /// Translation key for the page's navigation label
    pub fn title_key(&self) -> &'static str {
        match self {
            ActivePage::Home => "nav.home",
            ActivePage::Services => "nav.services",
            ActivePage::Portfolio => "nav.portfolio",
            ActivePage::Industries => "nav.industries",
            ActivePage::About => "nav.about",
            ActivePage::Contact => "nav.contact",
            ActivePage::Privacy => "privacy.title",
        }
    }

    /// Pages shown in the header navigation
    pub fn navigation() -> &'static [ActivePage] {
        &[
            ActivePage::Home,
            ActivePage::Services,
            ActivePage::Portfolio,
            ActivePage::Industries,
            ActivePage::About,
            ActivePage::Contact,
        ]
    }
}

/// Click-handler helper: switch the active page
pub fn navigate(entities: &AppEntities, page: ActivePage, cx: &mut App) {
    entities.nav.update(cx, |nav, cx| {
        nav.set_active_page(page);
        cx.notify();
    });
}
