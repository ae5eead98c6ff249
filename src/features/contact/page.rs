//! Contact Page
//!
//! Lead form (free audit), booking card, and social channels.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::card::{bullet_row, card, kicker, section_intro, section_title};
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::agency;
use crate::domain::lead::LeadPayload;
use crate::features::contact::controller::ContactController;
use crate::i18n::{t, t_list, Locale};
use crate::state::lead_state::{LeadOutcome, LeadState};
use crate::theme::colors::KairosColors;
use crate::theme::typography::Typography;

/// Contact page component
pub struct ContactPage {
    entities: AppEntities,
    controller: ContactController,
    // Form fields
    name_input: Entity<TextInput>,
    email_input: Entity<TextInput>,
    link_input: Entity<TextInput>,
    message_input: Entity<TextInput>,
    /// Request id the form was last cleared for
    cleared_for: Option<String>,
}

impl ContactPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = ContactController::new(entities.clone());
        let locale = entities.i18n.read(cx).locale();

        let name_input = text_input(
            "contact-name",
            t(locale, "contact.audit.labels.namePlaceholder"),
            cx,
        );
        let email_input = text_input("contact-email", "name@company.com", cx);
        let link_input = text_input(
            "contact-link",
            t(locale, "contact.audit.labels.companyPlaceholder"),
            cx,
        );
        let message_input = text_input(
            "contact-message",
            t(locale, "contact.audit.labels.messagePlaceholder"),
            cx,
        );
        message_input.update(cx, |input, _| input.set_multiline(true));

        // Placeholders are dictionary entries, so they follow the locale.
        cx.observe(&entities.i18n, |this: &mut Self, i18n, cx| {
            let locale = i18n.read(cx).locale();
            this.apply_placeholders(locale, cx);
            cx.notify();
        })
        .detach();

        // Reset the form once a submission is accepted.
        cx.observe(&entities.lead, |this: &mut Self, lead, cx| {
            let accepted = lead
                .read(cx)
                .last_attempt()
                .filter(|attempt| attempt.outcome == LeadOutcome::Accepted)
                .map(|attempt| attempt.request_id.clone());
            if let Some(request_id) = accepted {
                if this.cleared_for.as_ref() != Some(&request_id) {
                    this.cleared_for = Some(request_id);
                    this.clear_form(cx);
                }
            }
            cx.notify();
        })
        .detach();

        Self {
            entities,
            controller,
            name_input,
            email_input,
            link_input,
            message_input,
            cleared_for: None,
        }
    }

    fn apply_placeholders(&self, locale: Locale, cx: &mut Context<Self>) {
        self.name_input.update(cx, |input, cx| {
            input.set_placeholder(t(locale, "contact.audit.labels.namePlaceholder"));
            cx.notify();
        });
        self.link_input.update(cx, |input, cx| {
            input.set_placeholder(t(locale, "contact.audit.labels.companyPlaceholder"));
            cx.notify();
        });
        self.message_input.update(cx, |input, cx| {
            input.set_placeholder(t(locale, "contact.audit.labels.messagePlaceholder"));
            cx.notify();
        });
    }

    fn clear_form(&self, cx: &mut Context<Self>) {
        for input in [
            &self.name_input,
            &self.email_input,
            &self.link_input,
            &self.message_input,
        ] {
            input.update(cx, |input, cx| {
                input.clear();
                cx.notify();
            });
        }
    }

    fn build_payload(&self, cx: &Context<Self>) -> LeadPayload {
        LeadPayload {
            name: self.name_input.read(cx).value().to_string(),
            email: self.email_input.read(cx).value().to_string(),
            message: self.message_input.read(cx).value().to_string(),
            link: self.link_input.read(cx).value().to_string(),
        }
    }

    /// "Sending..." / "Done." / "Failed. Please try again."
    fn status_line(lead: &LeadState) -> Option<(SharedString, gpui::Rgba)> {
        if lead.is_sending() {
            return Some(("Sending...".into(), KairosColors::text_secondary()));
        }
        lead.last_attempt().map(|attempt| match attempt.outcome {
            LeadOutcome::Accepted => ("Done.".into(), KairosColors::success()),
            LeadOutcome::Failed => ("Failed. Please try again.".into(), KairosColors::danger()),
        })
    }

    fn render_field(
        &self,
        label: SharedString,
        input: &Entity<TextInput>,
    ) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_2()
            .child(kicker(label))
            .child(input.clone())
    }

    fn render_form(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let lead = self.entities.lead.read(cx);
        let sending = lead.is_sending();
        let status = Self::status_line(lead);
        let failure_detail = lead.last_attempt().and_then(|attempt| {
            (attempt.outcome == LeadOutcome::Failed)
                .then(|| attempt.detail.clone())
                .flatten()
        });

        card()
            .p_8()
            .flex()
            .flex_col()
            .gap_6()
            .child(
                div()
                    .text_size(px(Typography::TEXT_2XL))
                    .font_weight(gpui::FontWeight::EXTRA_BOLD)
                    .text_color(KairosColors::text_primary())
                    .child(t(locale, "contact.audit.title")),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(KairosColors::text_secondary())
                    .child(t(locale, "contact.audit.desc")),
            )
            .child(
                div().flex().flex_col().gap_2().children(
                    t_list(locale, "contact.audit.items")
                        .into_iter()
                        .map(bullet_row),
                ),
            )
            .child(
                div()
                    .flex()
                    .gap_6()
                    .child(
                        div().flex_1().child(self.render_field(
                            t(locale, "contact.audit.labels.name"),
                            &self.name_input,
                        )),
                    )
                    .child(
                        div().flex_1().child(self.render_field(
                            t(locale, "contact.audit.labels.email"),
                            &self.email_input,
                        )),
                    ),
            )
            .child(self.render_field(
                t(locale, "contact.audit.labels.company"),
                &self.link_input,
            ))
            .child(self.render_field(
                t(locale, "contact.audit.labels.message"),
                &self.message_input,
            ))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_6()
                    .child(
                        Button::primary("contact-send", t(locale, "contact.audit.labels.send"))
                            .size(ButtonSize::Large)
                            .disabled(sending)
                            .on_click(cx.listener(
                                |this, _event: &ClickEvent, _window, cx| {
                                    let payload = this.build_payload(cx);
                                    this.controller.submit(payload, cx);
                                },
                            )),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_1()
                            .children(status.map(|(text, color)| {
                                div()
                                    .text_size(px(Typography::TEXT_SM))
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .text_color(color)
                                    .child(text)
                            }))
                            .children(failure_detail.map(|detail| {
                                div()
                                    .text_size(px(Typography::TEXT_XS))
                                    .text_color(KairosColors::text_muted())
                                    .child(detail)
                            })),
                    ),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(KairosColors::text_muted())
                    .child(t(locale, "contact.audit.labels.slow")),
            )
    }

    fn render_booking(&self, locale: Locale) -> impl IntoElement {
        // The booking card is intentionally light-on-white, inverted
        // against the rest of the page.
        div()
            .bg(gpui::rgba(0xffffffff))
            .rounded_xl()
            .p_8()
            .flex()
            .flex_col()
            .gap_5()
            .child(
                div()
                    .text_size(px(Typography::TEXT_2XL))
                    .font_weight(gpui::FontWeight::EXTRA_BOLD)
                    .text_color(KairosColors::text_on_light())
                    .child(t(locale, "contact.book.title")),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(KairosColors::text_muted())
                    .child(t(locale, "contact.book.desc")),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_XS))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(KairosColors::text_muted())
                    .child(t(locale, "contact.book.cover.title")),
            )
            .child(
                div().flex().flex_col().gap_2().children(
                    t_list(locale, "contact.book.cover.items")
                        .into_iter()
                        .map(|item| {
                            div()
                                .flex()
                                .items_center()
                                .gap_3()
                                .child(
                                    div()
                                        .size(px(6.0))
                                        .rounded_full()
                                        .bg(KairosColors::accent()),
                                )
                                .child(
                                    div()
                                        .text_size(px(Typography::TEXT_SM))
                                        .font_weight(gpui::FontWeight::SEMIBOLD)
                                        .text_color(KairosColors::text_on_light())
                                        .child(item),
                                )
                        }),
                ),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .child(
                        div()
                            .id("contact-calendar")
                            .w_full()
                            .py_3()
                            .rounded_lg()
                            .bg(KairosColors::text_on_light())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_size(px(Typography::TEXT_XS))
                            .font_weight(gpui::FontWeight::EXTRA_BOLD)
                            .text_color(gpui::rgba(0xffffffff))
                            .cursor_pointer()
                            .hover(|s| s.bg(gpui::rgba(0x1e293bff)))
                            .on_click(|_event: &ClickEvent, _window, cx| {
                                cx.open_url(agency::CALENDAR_URL);
                            })
                            .child(t(locale, "contact.book.btns.calendar")),
                    )
                    .child(
                        div()
                            .id("contact-call")
                            .w_full()
                            .py_3()
                            .rounded_lg()
                            .bg(gpui::rgba(0xf1f5f9ff))
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_size(px(Typography::TEXT_XS))
                            .font_weight(gpui::FontWeight::EXTRA_BOLD)
                            .text_color(KairosColors::text_on_light())
                            .cursor_pointer()
                            .hover(|s| s.bg(gpui::rgba(0xe2e8f0ff)))
                            .on_click(|_event: &ClickEvent, _window, cx| {
                                cx.open_url(agency::PHONE_URL);
                            })
                            .child(t(locale, "contact.book.btns.call")),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(KairosColors::text_muted())
                    .child(format!(
                        "{} {}",
                        t(locale, "contact.book.info.phone"),
                        agency::PHONE_DISPLAY
                    ))
                    .child(format!("{} @_kairos_team_", t(locale, "contact.book.info.ig")))
                    .child(format!("{} kairos-team", t(locale, "contact.book.info.li"))),
            )
    }

    fn render_socials(&self, locale: Locale) -> impl IntoElement {
        let social_button = |id: &str, label: &'static str, url: &'static str| {
            div()
                .id(SharedString::from(format!("contact-{id}")))
                .size(px(56.0))
                .rounded_xl()
                .bg(gpui::rgba(0xffffff0d))
                .border_1()
                .border_color(KairosColors::border())
                .flex()
                .items_center()
                .justify_center()
                .text_size(px(Typography::TEXT_SM))
                .font_weight(gpui::FontWeight::BOLD)
                .text_color(KairosColors::text_primary())
                .cursor_pointer()
                .hover(|s| s.bg(KairosColors::accent()))
                .on_click(move |_event: &ClickEvent, _window, cx| {
                    cx.open_url(url);
                })
                .child(label)
        };

        card()
            .p_8()
            .flex()
            .flex_col()
            .gap_5()
            .child(kicker(t(locale, "contact.socials")))
            .child(
                div()
                    .flex()
                    .gap_4()
                    .child(social_button("ig", "IG", agency::INSTAGRAM_URL))
                    .child(social_button("li", "IN", agency::LINKEDIN_URL)),
            )
    }
}

impl Render for ContactPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale();

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_10()
            .p_8()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .max_w(px(760.0))
                    .child(section_title(t(locale, "contact.title")))
                    .child(section_intro(t(locale, "contact.intro"))),
            )
            .child(
                div()
                    .flex()
                    .gap_8()
                    .child(div().flex_1().child(self.render_form(locale, cx)))
                    .child(
                        div()
                            .w(px(420.0))
                            .flex()
                            .flex_col()
                            .gap_6()
                            .child(self.render_booking(locale))
                            .child(self.render_socials(locale)),
                    ),
            )
    }
}
