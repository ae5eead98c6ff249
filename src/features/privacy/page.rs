//! Privacy Page

use gpui::{div, prelude::*, px, Context, IntoElement, ParentElement, Render, Styled, Window};

use crate::app::entities::AppEntities;
use crate::components::primitives::card::{card, section_intro, section_title};
use crate::i18n::t;
use crate::theme::colors::KairosColors;
use crate::theme::typography::Typography;

/// Privacy page component
pub struct PrivacyPage {
    entities: AppEntities,
}

impl PrivacyPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for PrivacyPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale();

        let block = |title_path: &str, desc_path: &str| {
            card()
                .flex()
                .flex_col()
                .gap_3()
                .child(
                    div()
                        .text_size(px(Typography::TEXT_LG))
                        .font_weight(gpui::FontWeight::EXTRA_BOLD)
                        .text_color(KairosColors::text_primary())
                        .child(t(locale, title_path)),
                )
                .child(
                    div()
                        .text_size(px(Typography::TEXT_SM))
                        .text_color(KairosColors::text_secondary())
                        .child(t(locale, desc_path)),
                )
        };

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_8()
            .p_8()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .max_w(px(760.0))
                    .child(section_title(t(locale, "privacy.title")))
                    .child(section_intro(t(locale, "privacy.intro"))),
            )
            .child(block("privacy.collect.title", "privacy.collect.desc"))
            .child(block("privacy.why.title", "privacy.why.desc"))
    }
}
