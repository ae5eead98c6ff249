//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and
//! management. State is split by update frequency: the locale cell
//! changes rarely but re-renders everything, navigation changes per
//! click, the lead state only moves while the contact form is in use.

use gpui::{App, AppContext, Entity, Global};

use crate::state::{i18n_state::I18nState, lead_state::LeadState, nav_state::NavState};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Active locale and switch-transition state
    pub i18n: Entity<I18nState>,
    /// Active page
    pub nav: Entity<NavState>,
    /// Contact form submission state
    pub lead: Entity<LeadState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities with default values
    pub fn init(cx: &mut App) -> Self {
        Self {
            i18n: cx.new(|_| I18nState::default()),
            nav: cx.new(|_| NavState::default()),
            lead: cx.new(|_| LeadState::default()),
        }
    }
}
