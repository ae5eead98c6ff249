//! Services Page
//!
//! Retainer tiers, production deliverables, and additional one-off
//! services.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::{navigate, ActivePage};
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::card::{bullet_row, card, kicker, section_intro, section_title};
use crate::i18n::{seq, t, t_list, Locale};
use crate::theme::colors::KairosColors;
use crate::theme::typography::Typography;

/// Services page component
pub struct ServicesPage {
    entities: AppEntities,
}

impl ServicesPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_tier(&self, locale: Locale, base: &str) -> impl IntoElement {
        card()
            .flex_1()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div().flex().child(
                    div()
                        .px_3()
                        .py_1()
                        .rounded_full()
                        .bg(gpui::rgba(0x3b82f622))
                        .text_size(px(Typography::TEXT_XS))
                        .font_weight(gpui::FontWeight::BOLD)
                        .text_color(KairosColors::accent())
                        .child(t(locale, &format!("{base}.tag"))),
                ),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_BASE))
                    .font_weight(gpui::FontWeight::EXTRA_BOLD)
                    .text_color(KairosColors::text_primary())
                    .child(t(locale, &format!("{base}.title"))),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(KairosColors::text_secondary())
                    .child(t(locale, &format!("{base}.desc"))),
            )
            .child(
                div().flex().flex_col().gap_2().children(
                    t_list(locale, &format!("{base}.items"))
                        .into_iter()
                        .map(bullet_row),
                ),
            )
    }

    fn render_addon(&self, locale: Locale, base: &str) -> impl IntoElement {
        card()
            .flex_1()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .text_size(px(Typography::TEXT_LG))
                    .font_weight(gpui::FontWeight::EXTRA_BOLD)
                    .text_color(KairosColors::text_primary())
                    .child(t(locale, &format!("{base}.title"))),
            )
            .child(
                div().flex().flex_col().gap_2().children(
                    t_list(locale, &format!("{base}.items"))
                        .into_iter()
                        .map(bullet_row),
                ),
            )
    }
}

impl Render for ServicesPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale();
        let entities = self.entities.clone();

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
                    .child(section_title(t(locale, "services.title")))
                    .child(section_intro(t(locale, "services.intro"))),
            )
            // Retainer tiers
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_6()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_2()
                            .child(section_title(t(locale, "services.retainerTitle")))
                            .child(section_intro(t(locale, "services.retainerIntro"))),
                    )
                    .child(
                        div()
                            .flex()
                            .gap_6()
                            .child(self.render_tier(locale, "services.starter"))
                            .child(self.render_tier(locale, "services.growth"))
                            .child(self.render_tier(locale, "services.performance")),
                    ),
            )
            // Production deliverables
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_6()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_2()
                            .child(section_title(t(locale, "services.productionTitle")))
                            .child(section_intro(t(locale, "services.productionIntro"))),
                    )
                    .child(
                        div().flex().flex_col().gap_4().children(
                            seq(locale, "services.prodItems").iter().map(|item| {
                                card()
                                    .flex()
                                    .flex_col()
                                    .gap_3()
                                    .child(
                                        div()
                                            .text_size(px(Typography::TEXT_BASE))
                                            .font_weight(gpui::FontWeight::EXTRA_BOLD)
                                            .text_color(KairosColors::text_primary())
                                            .child(item.str("title")),
                                    )
                                    .child(kicker(item.str("desc")))
                                    .child(
                                        div().flex().flex_col().gap_2().children(
                                            item.get("items")
                                                .map(|node| node.items())
                                                .unwrap_or_default()
                                                .iter()
                                                .map(|entry| bullet_row(*entry)),
                                        ),
                                    )
                            }),
                        ),
                    ),
            )
            // Additional services
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_6()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_2()
                            .child(section_title(t(locale, "services.additionalTitle")))
                            .child(section_intro(t(locale, "services.additionalIntro"))),
                    )
                    .child(
                        div()
                            .flex()
                            .gap_6()
                            .child(self.render_addon(locale, "services.social"))
                            .child(self.render_addon(locale, "services.ads"))
                            .child(self.render_addon(locale, "services.design")),
                    ),
            )
            // Tailored-scope call to action
            .child(
                card()
                    .p_10()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_4()
                    .child(section_title(t(locale, "services.tailored.title")))
                    .child(section_intro(t(locale, "services.tailored.desc")))
                    .child(
                        Button::light("services-book", t(locale, "nav.book"))
                            .size(ButtonSize::Large)
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                navigate(&entities, ActivePage::Contact, cx);
                            }),
                    ),
            )
    }
}
