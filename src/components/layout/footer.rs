//! Footer Component
//!
//! Brand and contact details, navigation columns, social links, and
//! the rights line.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::domain::agency;
use crate::i18n::{t, Locale};
use crate::theme::colors::KairosColors;

/// Footer component
pub struct Footer {
    entities: AppEntities,
}

impl Footer {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_page_link(
        &self,
        id: &str,
        label: SharedString,
        page: ActivePage,
    ) -> impl IntoElement {
        let entities = self.entities.clone();

        div()
            .id(SharedString::from(format!("footer-{id}")))
            .text_size(px(13.0))
            .text_color(KairosColors::text_secondary())
            .cursor_pointer()
            .hover(|s| s.text_color(KairosColors::text_primary()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.nav.update(cx, |nav, cx| {
                    nav.set_active_page(page);
                    cx.notify();
                });
            })
            .child(label)
    }

    fn render_contact_row(
        &self,
        id: &str,
        label: SharedString,
        value: &'static str,
        url: &'static str,
    ) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .child(
                div()
                    .text_size(px(10.0))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(KairosColors::text_muted())
                    .child(label),
            )
            .child(
                div()
                    .id(SharedString::from(format!("footer-{id}")))
                    .text_size(px(14.0))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(KairosColors::text_primary())
                    .cursor_pointer()
                    .hover(|s| s.text_color(KairosColors::accent()))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        cx.open_url(url);
                    })
                    .child(value),
            )
    }

    fn render_social_button(&self, id: &str, label: &'static str, url: &'static str) -> impl IntoElement {
        div()
            .id(SharedString::from(format!("footer-{id}")))
            .size(px(40.0))
            .rounded_lg()
            .bg(gpui::rgba(0xffffff0d))
            .flex()
            .items_center()
            .justify_center()
            .text_size(px(12.0))
            .font_weight(gpui::FontWeight::BOLD)
            .text_color(KairosColors::text_primary())
            .cursor_pointer()
            .hover(|s| s.bg(KairosColors::accent()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                cx.open_url(url);
            })
            .child(label)
    }
}

impl Render for Footer {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale();

        // Column titles and the privacy label are locale-conditional
        // text rather than dictionary entries.
        let company_title = match locale {
            Locale::En => "Company",
            Locale::Pl => "Firma",
            Locale::Ru => "Компания",
        };
        let support_title = match locale {
            Locale::En => "Support",
            Locale::Pl => "Wsparcie",
            Locale::Ru => "Поддержка",
        };
        let privacy_label = match locale {
            Locale::En => "Privacy",
            Locale::Pl => "Prywatność",
            Locale::Ru => "Политика",
        };

        let column_title = |text: &'static str| {
            div()
                .text_size(px(11.0))
                .font_weight(gpui::FontWeight::EXTRA_BOLD)
                .text_color(KairosColors::text_primary())
                .child(text)
        };

        div()
            .w_full()
            .bg(KairosColors::chrome_bg())
            .border_t_1()
            .border_color(KairosColors::border())
            .px_8()
            .pt_8()
            .pb_6()
            .flex()
            .flex_col()
            .gap_8()
            .child(
                div()
                    .flex()
                    .justify_between()
                    .gap_8()
                    // Brand, description, and contact rows
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_4()
                            .max_w(px(420.0))
                            .child(
                                div()
                                    .flex()
                                    .items_center()
                                    .gap_3()
                                    .child(
                                        div()
                                            .size(px(36.0))
                                            .rounded_lg()
                                            .bg(KairosColors::accent_violet())
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
                                                    .text_size(px(14.0))
                                                    .font_weight(gpui::FontWeight::EXTRA_BOLD)
                                                    .child(agency::BRAND_NAME),
                                            )
                                            .child(
                                                div()
                                                    .text_color(KairosColors::text_muted())
                                                    .text_size(px(10.0))
                                                    .child(t(locale, "footer.location")),
                                            ),
                                    ),
                            )
                            .child(
                                div()
                                    .text_size(px(13.0))
                                    .text_color(KairosColors::text_secondary())
                                    .child(t(locale, "footer.desc")),
                            )
                            .child(self.render_contact_row(
                                "phone",
                                t(locale, "footer.phone"),
                                agency::PHONE_DISPLAY,
                                agency::PHONE_URL,
                            ))
                            .child(self.render_contact_row(
                                "email",
                                t(locale, "footer.email"),
                                agency::EMAIL,
                                agency::EMAIL_URL,
                            )),
                    )
                    // Link columns and socials
                    .child(
                        div()
                            .flex()
                            .gap_8()
                            .child(
                                div()
                                    .flex()
                                    .flex_col()
                                    .gap_3()
                                    .child(column_title(company_title))
                                    .child(self.render_page_link(
                                        "about",
                                        t(locale, "nav.about"),
                                        ActivePage::About,
                                    ))
                                    .child(self.render_page_link(
                                        "portfolio",
                                        t(locale, "nav.portfolio"),
                                        ActivePage::Portfolio,
                                    ))
                                    .child(self.render_page_link(
                                        "services",
                                        t(locale, "nav.services"),
                                        ActivePage::Services,
                                    )),
                            )
                            .child(
                                div()
                                    .flex()
                                    .flex_col()
                                    .gap_3()
                                    .child(column_title(support_title))
                                    .child(self.render_page_link(
                                        "contact",
                                        t(locale, "nav.contact"),
                                        ActivePage::Contact,
                                    ))
                                    .child(self.render_page_link(
                                        "privacy",
                                        SharedString::from(privacy_label),
                                        ActivePage::Privacy,
                                    )),
                            )
                            .child(
                                div()
                                    .flex()
                                    .gap_3()
                                    .child(self.render_social_button(
                                        "ig",
                                        "IG",
                                        agency::INSTAGRAM_URL,
                                    ))
                                    .child(self.render_social_button(
                                        "li",
                                        "IN",
                                        agency::LINKEDIN_URL,
                                    )),
                            ),
                    ),
            )
            .child(
                div()
                    .pt_4()
                    .border_t_1()
                    .border_color(KairosColors::border())
                    .flex()
                    .justify_between()
                    .items_center()
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(KairosColors::text_muted())
                            .child(t(locale, "footer.rights")),
                    )
                    .child(
                        div()
                            .flex()
                            .gap_6()
                            .text_size(px(11.0))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(KairosColors::text_muted())
                            .child(t(locale, "footer.location"))
                            .child("Est. 2024"),
                    ),
            )
    }
}
