//! Header Component
//!
//! Brand block, page navigation pills, language switcher, and the
//! booking call-to-action.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::primitives::button::Button;
use crate::domain::agency;
use crate::i18n::{t, Locale};
use crate::theme::colors::KairosColors;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        // Observe navigation changes
        cx.observe(&entities.nav, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_item(
        &self,
        page: ActivePage,
        locale: Locale,
        active_page: ActivePage,
    ) -> impl IntoElement {
        let is_active = page == active_page;
        let label = t(locale, page.title_key());
        let entities = self.entities.clone();

        let bg_color = if is_active {
            gpui::rgba(0xffffff1a)
        } else {
            gpui::rgba(0x00000000)
        };

        let text_color = if is_active {
            KairosColors::text_primary()
        } else {
            KairosColors::text_secondary()
        };

        div()
            .id(SharedString::from(format!("nav-{:?}", page)))
            .px_3()
            .py_2()
            .rounded_lg()
            .bg(bg_color)
            .text_color(text_color)
            .text_size(px(12.0))
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .cursor_pointer()
            .hover(|s| s.bg(gpui::rgba(0xffffff0d)))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.nav.update(cx, |nav, cx| {
                    nav.set_active_page(page);
                    cx.notify();
                });
            })
            .child(label)
    }

    fn render_locale_button(&self, locale: Locale, active: Locale) -> impl IntoElement {
        let is_active = locale == active;
        let entities = self.entities.clone();

        let (bg_color, text_color) = if is_active {
            (KairosColors::accent(), KairosColors::text_primary())
        } else {
            (gpui::rgba(0x00000000), KairosColors::text_muted())
        };

        div()
            .id(SharedString::from(format!("lang-{}", locale.tag())))
            .px_3()
            .py_1()
            .rounded_md()
            .bg(bg_color)
            .text_color(text_color)
            .text_size(px(11.0))
            .font_weight(gpui::FontWeight::BOLD)
            .cursor_pointer()
            .hover(|s| s.bg(gpui::rgba(0xffffff22)))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.i18n.update(cx, |i18n, cx| {
                    i18n.set_locale(locale, cx);
                });
            })
            .child(locale.tag())
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale();
        let active_page = self.entities.nav.read(cx).active_page;

        // The tagline is not a dictionary entry; only the Russian
        // rendition differs.
        let tagline = if locale == Locale::Ru {
            agency::BRAND_TAGLINE_RU
        } else {
            agency::BRAND_TAGLINE
        };

        let entities = self.entities.clone();

        div()
            .h(px(64.0))
            .w_full()
            .bg(KairosColors::chrome_bg())
            .border_b_1()
            .border_color(KairosColors::border())
            .flex()
            .items_center()
            .justify_between()
            .px_6()
            // Left side: logo and brand
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(36.0))
                            .rounded_lg()
                            .bg(KairosColors::accent())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(KairosColors::text_primary())
                            .font_weight(gpui::FontWeight::BOLD)
                            .child("K"),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .text_color(KairosColors::text_primary())
                                    .text_size(px(15.0))
                                    .font_weight(gpui::FontWeight::EXTRA_BOLD)
                                    .child(agency::BRAND_NAME),
                            )
                            .child(
                                div()
                                    .text_color(KairosColors::text_muted())
                                    .text_size(px(9.0))
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .child(tagline),
                            ),
                    ),
            )
            // Right side: navigation, language switcher, booking CTA
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_1()
                            .rounded_xl()
                            .bg(gpui::rgba(0xffffff0a))
                            .p_1()
                            .children(
                                ActivePage::navigation()
                                    .iter()
                                    .map(|page| self.render_nav_item(*page, locale, active_page)),
                            ),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .rounded_xl()
                            .bg(gpui::rgba(0xffffff0a))
                            .p_1()
                            .children(
                                Locale::ALL
                                    .iter()
                                    .map(|l| self.render_locale_button(*l, locale)),
                            ),
                    )
                    .child(
                        Button::light("header-book", t(locale, "nav.book")).on_click(
                            move |_event: &ClickEvent, _window, cx| {
                                entities.nav.update(cx, |nav, cx| {
                                    nav.set_active_page(ActivePage::Contact);
                                    cx.notify();
                                });
                            },
                        ),
                    ),
            )
    }
}
