//! Workspace - Main Shell with Layout and Event Pump
//!
//! The workspace is the main container that holds the header, the
//! scrolling page column with the footer, and the floating call
//! button. It also manages the event pump that bridges service events
//! to UI updates, and applies the cross-fade while a locale switch is
//! in flight.

use gpui::{
    div, prelude::*, App, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::layout::call_button::CallButton;
use crate::components::layout::footer::Footer;
use crate::components::layout::header::Header;
use crate::eventing::app_event::AppEvent;
use crate::features::about::page::AboutPage;
use crate::features::contact::page::ContactPage;
use crate::features::home::page::HomePage;
use crate::features::industries::page::IndustriesPage;
use crate::features::portfolio::page::PortfolioPage;
use crate::features::privacy::page::PrivacyPage;
use crate::features::services::page::ServicesPage;
use crate::state::lead_state::LeadOutcome;
use crate::theme::colors::KairosColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    footer: Entity<Footer>,
    // Page views (created lazily and cached)
    home_page: Option<Entity<HomePage>>,
    services_page: Option<Entity<ServicesPage>>,
    portfolio_page: Option<Entity<PortfolioPage>>,
    industries_page: Option<Entity<IndustriesPage>>,
    about_page: Option<Entity<AboutPage>>,
    contact_page: Option<Entity<ContactPage>>,
    privacy_page: Option<Entity<PrivacyPage>>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) -> Self {
        // Create layout components
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let footer = cx.new(|cx| Footer::new(entities.clone(), cx));

        // Create the landing page eagerly
        let home_page = Some(cx.new(|cx| HomePage::new(entities.clone(), cx)));

        // Start event pump
        Self::start_event_pump(event_rx, entities.clone(), cx);

        // Re-render on navigation and locale transitions
        cx.observe(&entities.nav, |_this, _, cx| cx.notify()).detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify()).detach();

        Self {
            entities,
            header,
            footer,
            home_page,
            services_page: None,
            portfolio_page: None,
            industries_page: None,
            about_page: None,
            contact_page: None,
            privacy_page: None,
        }
    }

    /// Start the event pump that dispatches service events to UI
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }

    /// Get or create a page view for the given page
    fn get_or_create_page(&mut self, page: ActivePage, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let entities = self.entities.clone();
        match page {
            ActivePage::Home => self
                .home_page
                .get_or_insert_with(|| cx.new(|cx| HomePage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Services => self
                .services_page
                .get_or_insert_with(|| cx.new(|cx| ServicesPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Portfolio => self
                .portfolio_page
                .get_or_insert_with(|| cx.new(|cx| PortfolioPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Industries => self
                .industries_page
                .get_or_insert_with(|| cx.new(|cx| IndustriesPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActivePage::About => self
                .about_page
                .get_or_insert_with(|| cx.new(|cx| AboutPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Contact => self
                .contact_page
                .get_or_insert_with(|| cx.new(|cx| ContactPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Privacy => self
                .privacy_page
                .get_or_insert_with(|| cx.new(|cx| PrivacyPage::new(entities, cx)))
                .clone()
                .into_any_element(),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.nav.read(cx).active_page;
        let changing = self.entities.i18n.read(cx).is_changing();
        let content = self.get_or_create_page(active_page, cx);

        div()
            .size_full()
            .relative()
            .flex()
            .flex_col()
            .bg(KairosColors::background())
            .child(
                // Header
                self.header.clone(),
            )
            .child(
                // Scrolling page column; the footer scrolls with the page
                div()
                    .id("page-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .child(
                        // The page body fades while a locale switch is in
                        // flight; the text swap happens at zero opacity.
                        div()
                            .opacity(if changing { 0.0 } else { 1.0 })
                            .child(content),
                    )
                    .child(self.footer.clone()),
            )
            .child(
                // Floating call button
                CallButton,
            )
    }
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::LeadAccepted { request_id } => {
            entities.lead.update(cx, |lead, cx| {
                lead.finish(&request_id, LeadOutcome::Accepted, None);
                cx.notify();
            });
        }
        AppEvent::LeadFailed { request_id, reason } => {
            entities.lead.update(cx, |lead, cx| {
                lead.finish(&request_id, LeadOutcome::Failed, Some(reason));
                cx.notify();
            });
        }
    }
}
