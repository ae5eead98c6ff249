//! Home Page
//!
//! Hero, monthly scope, stats, what-we-do tiles, process steps, and
//! the closing call to action.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, IntoElement, ParentElement, Render, SharedString,
    Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::{navigate, ActivePage};
use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};
use crate::components::primitives::card::{bullet_row, card, kicker, section_intro, section_title};
use crate::i18n::{seq, t, t_list, Locale};
use crate::theme::colors::KairosColors;
use crate::theme::typography::Typography;

/// Home page component
pub struct HomePage {
    entities: AppEntities,
}

impl HomePage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn nav_button(
        &self,
        id: &'static str,
        label: SharedString,
        page: ActivePage,
        variant: ButtonVariant,
    ) -> Button {
        let entities = self.entities.clone();
        Button::new(id, label)
            .variant(variant)
            .size(ButtonSize::Large)
            .on_click(move |_event: &ClickEvent, _window, cx| navigate(&entities, page, cx))
    }

    fn render_hero(&self, locale: Locale) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .items_center()
            .gap_6()
            .pt_12()
            .pb_6()
            .child(
                div()
                    .px_4()
                    .py_2()
                    .rounded_full()
                    .bg(gpui::rgba(0xffffff0d))
                    .border_1()
                    .border_color(KairosColors::border())
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(div().size(px(8.0)).rounded_full().bg(KairosColors::accent()))
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_XS))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(KairosColors::text_primary())
                            .child(t(locale, "hero.kicker")),
                    ),
            )
            .child(
                div()
                    .max_w(px(900.0))
                    .text_size(px(Typography::TEXT_HERO))
                    .font_weight(gpui::FontWeight::EXTRA_BOLD)
                    .text_color(KairosColors::text_primary())
                    .text_center()
                    .child(t(locale, "hero.title")),
            )
            .child(
                div()
                    .max_w(px(720.0))
                    .text_size(px(Typography::TEXT_LG))
                    .text_color(KairosColors::text_secondary())
                    .text_center()
                    .child(t(locale, "hero.lead")),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(self.nav_button(
                        "hero-book",
                        t(locale, "nav.book"),
                        ActivePage::Contact,
                        ButtonVariant::Light,
                    ))
                    .child(self.nav_button(
                        "hero-portfolio",
                        t(locale, "nav.portfolio"),
                        ActivePage::Portfolio,
                        ButtonVariant::Ghost,
                    ))
                    .child(self.nav_button(
                        "hero-services",
                        t(locale, "nav.services"),
                        ActivePage::Services,
                        ButtonVariant::Ghost,
                    )),
            )
            .child(
                div().flex().items_center().gap_4().children(
                    t_list(locale, "hero.points").into_iter().enumerate().map(|(i, point)| {
                        div()
                            .id(SharedString::from(format!("hero-point-{i}")))
                            .px_4()
                            .py_2()
                            .rounded_xl()
                            .bg(gpui::rgba(0xffffff0d))
                            .border_1()
                            .border_color(KairosColors::border())
                            .text_size(px(Typography::TEXT_XS))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(KairosColors::text_secondary())
                            .child(point)
                    }),
                ),
            )
    }

    fn render_scope(&self, locale: Locale) -> impl IntoElement {
        card()
            .p_8()
            .flex()
            .flex_col()
            .gap_6()
            .child(
                div()
                    .flex()
                    .justify_center()
                    .child(section_title(t(locale, "hero.scope.title"))),
            )
            .child(
                div().flex().flex_col().gap_3().children(
                    t_list(locale, "hero.scope.items")
                        .into_iter()
                        .map(bullet_row),
                ),
            )
            .child(
                div()
                    .flex()
                    .justify_center()
                    .gap_4()
                    .child(self.nav_button(
                        "scope-book",
                        t(locale, "nav.book"),
                        ActivePage::Contact,
                        ButtonVariant::Primary,
                    ))
                    .child(self.nav_button(
                        "scope-audit",
                        t(locale, "nav.audit"),
                        ActivePage::Contact,
                        ButtonVariant::Ghost,
                    )),
            )
    }

    fn render_stats(&self, locale: Locale) -> impl IntoElement {
        let stats = [
            ("30+", t(locale, "stats.brands")),
            ("1000+", t(locale, "stats.assets")),
            ("2+", t(locale, "stats.years")),
        ];

        div()
            .flex()
            .flex_col()
            .gap_8()
            .child(
                div()
                    .flex()
                    .justify_center()
                    .child(section_title(t(locale, "stats.title"))),
            )
            .child(
                div()
                    .flex()
                    .gap_6()
                    .children(stats.into_iter().map(|(value, label)| {
                        card()
                            .flex_1()
                            .p_8()
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap_3()
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_4XL))
                                    .font_weight(gpui::FontWeight::EXTRA_BOLD)
                                    .text_color(KairosColors::text_primary())
                                    .child(value),
                            )
                            .child(kicker(label))
                    })),
            )
    }

    fn render_what_we_do(&self, locale: Locale) -> impl IntoElement {
        let tiles = ["whatWeDo.packages", "whatWeDo.production", "whatWeDo.ads"];

        div()
            .flex()
            .flex_col()
            .gap_8()
            .child(
                div()
                    .flex()
                    .items_end()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_3()
                            .max_w(px(640.0))
                            .child(section_title(t(locale, "whatWeDo.title")))
                            .child(section_intro(t(locale, "whatWeDo.intro"))),
                    )
                    .child(self.nav_button(
                        "wwd-services",
                        t(locale, "nav.services"),
                        ActivePage::Services,
                        ButtonVariant::Light,
                    )),
            )
            .child(div().flex().gap_6().children(tiles.into_iter().map(|base| {
                card()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_XL))
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
            })))
    }

    fn render_how_we_work(&self, locale: Locale) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_8()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_3()
                    .child(section_title(t(locale, "howWeWork.title")))
                    .child(section_intro(t(locale, "howWeWork.intro"))),
            )
            .child(
                div().flex().gap_4().children(
                    seq(locale, "howWeWork.steps")
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            card()
                                .flex_1()
                                .flex()
                                .flex_col()
                                .items_center()
                                .gap_3()
                                .child(
                                    div()
                                        .size(px(40.0))
                                        .rounded_lg()
                                        .bg(gpui::rgba(0xffffff0d))
                                        .flex()
                                        .items_center()
                                        .justify_center()
                                        .text_color(KairosColors::accent())
                                        .font_weight(gpui::FontWeight::EXTRA_BOLD)
                                        .child(format!("{}", i + 1)),
                                )
                                .child(
                                    div()
                                        .text_size(px(Typography::TEXT_BASE))
                                        .font_weight(gpui::FontWeight::EXTRA_BOLD)
                                        .text_color(KairosColors::text_primary())
                                        .text_center()
                                        .child(step.str("title")),
                                )
                                .child(
                                    div()
                                        .text_size(px(Typography::TEXT_XS))
                                        .text_color(KairosColors::text_muted())
                                        .text_center()
                                        .child(step.str("desc")),
                                )
                        }),
                ),
            )
    }

    fn render_cta(&self, locale: Locale) -> impl IntoElement {
        card()
            .p_12()
            .flex()
            .flex_col()
            .items_center()
            .gap_6()
            .child(
                div()
                    .max_w(px(760.0))
                    .text_center()
                    .child(section_title(t(locale, "cta.title"))),
            )
            .child(
                div()
                    .max_w(px(600.0))
                    .text_center()
                    .child(section_intro(t(locale, "cta.desc"))),
            )
            .child(
                div()
                    .flex()
                    .gap_4()
                    .child(self.nav_button(
                        "cta-audit",
                        t(locale, "cta.audit"),
                        ActivePage::Contact,
                        ButtonVariant::Light,
                    ))
                    .child(self.nav_button(
                        "cta-book",
                        t(locale, "cta.book"),
                        ActivePage::Contact,
                        ButtonVariant::Ghost,
                    )),
            )
    }
}

impl Render for HomePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale();

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_12()
            .p_8()
            .child(self.render_hero(locale))
            .child(self.render_scope(locale))
            .child(self.render_stats(locale))
            .child(self.render_what_we_do(locale))
            .child(self.render_how_we_work(locale))
            .child(self.render_cta(locale))
    }
}
