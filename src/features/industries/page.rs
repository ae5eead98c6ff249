//! Industries Page

use gpui::{
    div, prelude::*, px, Context, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::card::{bullet_row, card, kicker, section_intro, section_title};
use crate::i18n::{seq, t, Locale};
use crate::theme::colors::KairosColors;
use crate::theme::typography::Typography;

/// Industries page component
pub struct IndustriesPage {
    entities: AppEntities,
}

impl IndustriesPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for IndustriesPage {
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
                    .child(section_title(t(locale, "industries.title")))
                    .child(section_intro(t(locale, "industries.intro"))),
            )
            .child(
                div()
                    .flex()
                    .gap_6()
                    .children(seq(locale, "industries.items").iter().map(|item| {
                        card()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .gap_3()
                            .child(kicker(item.str("desc")))
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_XL))
                                    .font_weight(gpui::FontWeight::EXTRA_BOLD)
                                    .text_color(KairosColors::text_primary())
                                    .child(item.str("title")),
                            )
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_SM))
                                    .text_color(KairosColors::text_secondary())
                                    .child(item.str("text")),
                            )
                            .child(
                                div().flex().flex_col().gap_2().children(
                                    item.get("items")
                                        .map(|node| node.items())
                                        .unwrap_or_default()
                                        .iter()
                                        .map(|entry| bullet_row(*entry)),
                                ),
                            )
                    })),
            )
            .child(
                card()
                    .p_10()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_3()
                    .child(section_title(t(locale, "industries.different.title")))
                    .child(section_intro(t(locale, "industries.different.desc"))),
            )
    }
}
