//! About Page

use gpui::{
    div, prelude::*, px, ClickEvent, Context, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::{navigate, ActivePage};
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::card::{card, kicker, section_intro, section_title};
use crate::i18n::{seq, t, Locale};
use crate::theme::colors::KairosColors;
use crate::theme::typography::Typography;

/// About page component
pub struct AboutPage {
    entities: AppEntities,
}

impl AboutPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_stat(&self, value: gpui::SharedString, label: gpui::SharedString) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .flex_col()
            .items_center()
            .gap_2()
            .p_6()
            .rounded_xl()
            .bg(KairosColors::inset_bg())
            .child(
                div()
                    .text_size(px(Typography::TEXT_3XL))
                    .font_weight(gpui::FontWeight::EXTRA_BOLD)
                    .text_color(KairosColors::accent())
                    .child(value),
            )
            .child(kicker(label))
    }
}

impl Render for AboutPage {
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
                    .child(section_title(t(locale, "about.title")))
                    .child(section_intro(t(locale, "about.intro"))),
            )
            // Approach cards
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_6()
                    .child(section_title(t(locale, "about.approach.title")))
                    .child(
                        div().flex().gap_6().children(
                            seq(locale, "about.approach.items").iter().map(|item| {
                                card()
                                    .flex_1()
                                    .flex()
                                    .flex_col()
                                    .gap_3()
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
                                            .child(item.str("desc")),
                                    )
                            }),
                        ),
                    ),
            )
            // Why it works
            .child(
                card()
                    .p_8()
                    .flex()
                    .flex_col()
                    .gap_6()
                    .child(section_title(t(locale, "about.why.title")))
                    .child(section_intro(t(locale, "about.why.desc")))
                    .child(
                        div()
                            .flex()
                            .gap_6()
                            .child(self.render_stat(
                                t(locale, "about.why.stats.growth"),
                                t(locale, "about.why.stats.growthLabel"),
                            ))
                            .child(self.render_stat(
                                t(locale, "about.why.stats.brands"),
                                t(locale, "about.why.stats.brandsLabel"),
                            )),
                    ),
            )
            // Closing call to action
            .child(
                card()
                    .p_10()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_4()
                    .child(section_title(t(locale, "about.cta.title")))
                    .child(section_intro(t(locale, "about.cta.desc")))
                    .child(
                        Button::light("about-book", t(locale, "about.cta.button"))
                            .size(ButtonSize::Large)
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                navigate(&entities, ActivePage::Contact, cx);
                            }),
                    ),
            )
    }
}
