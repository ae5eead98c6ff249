//! Portfolio Page
//!
//! Case studies with external links, work/result lists, and the
//! before/after result charts.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::case_chart::{CaseChart, ChartPoint};
use crate::components::primitives::card::{bullet_row, card, section_intro, section_title};
use crate::i18n::{seq, t, t_list, Locale, Node};
use crate::theme::colors::KairosColors;
use crate::theme::typography::Typography;

/// Portfolio page component
pub struct PortfolioPage {
    entities: AppEntities,
}

impl PortfolioPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    /// External links of one case: (label, url) pairs
    fn case_links(case: &'static Node) -> Vec<(SharedString, &'static str)> {
        let Some(Node::Map(entries)) = case.get("links") else {
            return Vec::new();
        };
        entries
            .iter()
            .filter_map(|(_, link)| {
                let url = link.get("url").and_then(Node::text)?;
                Some((link.str("label"), url))
            })
            .collect()
    }

    fn render_case(&self, index: usize, case: &'static Node) -> impl IntoElement {
        let links = Self::case_links(case);

        let points: Vec<ChartPoint> = case
            .get("chart")
            .and_then(|chart| chart.get("data"))
            .map(Node::records)
            .unwrap_or_default()
            .iter()
            .map(|point| ChartPoint {
                name: point.str("name"),
                value: point.get("value").and_then(Node::num).unwrap_or(0),
                tooltip: point.str("tooltip"),
            })
            .collect();

        let chart = case.get("chart");
        let chart_label = chart.map(|c| c.str("label")).unwrap_or_default();
        let chart_growth = chart.map(|c| c.str("growthText")).unwrap_or_default();

        card()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .text_size(px(Typography::TEXT_2XL))
                    .font_weight(gpui::FontWeight::EXTRA_BOLD)
                    .text_color(KairosColors::text_primary())
                    .child(case.str("name")),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(KairosColors::text_secondary())
                    .child(case.str("title")),
            )
            .child(
                div()
                    .flex()
                    .gap_3()
                    .children(links.into_iter().enumerate().map(|(j, (label, url))| {
                        div()
                            .id(SharedString::from(format!("case-{index}-link-{j}")))
                            .px_3()
                            .py_2()
                            .rounded_lg()
                            .bg(gpui::rgba(0xffffff0d))
                            .border_1()
                            .border_color(KairosColors::border())
                            .text_size(px(Typography::TEXT_XS))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(KairosColors::text_primary())
                            .cursor_pointer()
                            .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                cx.open_url(url);
                            })
                            .child(label)
                    })),
            )
            .child(CaseChart::new(chart_label, chart_growth, points))
            .child(
                div().flex().flex_col().gap_2().children(
                    case.get("items")
                        .map(|node| node.items())
                        .unwrap_or_default()
                        .iter()
                        .map(|entry| bullet_row(*entry)),
                ),
            )
            .child(
                div().flex().flex_col().gap_2().children(
                    case.get("results")
                        .map(|node| node.items())
                        .unwrap_or_default()
                        .iter()
                        .map(|entry| {
                            div()
                                .flex()
                                .items_center()
                                .gap_3()
                                .child(
                                    div()
                                        .size(px(6.0))
                                        .rounded_full()
                                        .bg(KairosColors::success()),
                                )
                                .child(
                                    div()
                                        .text_size(px(Typography::TEXT_SM))
                                        .font_weight(gpui::FontWeight::SEMIBOLD)
                                        .text_color(KairosColors::text_primary())
                                        .child(*entry),
                                )
                        }),
                ),
            )
    }
}

impl Render for PortfolioPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale();
        let cases = seq(locale, "portfolio.cases");

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
                    .child(section_title(t(locale, "portfolio.title")))
                    .child(section_intro(t(locale, "portfolio.intro"))),
            )
            .child(
                div().flex().flex_col().gap_6().children(
                    cases
                        .iter()
                        .enumerate()
                        .map(|(i, case)| self.render_case(i, case)),
                ),
            )
            .child(
                card()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_LG))
                            .font_weight(gpui::FontWeight::EXTRA_BOLD)
                            .text_color(KairosColors::text_primary())
                            .child(t(locale, "portfolio.otherBrands.title")),
                    )
                    .child(
                        div().flex().gap_3().children(
                            t_list(locale, "portfolio.otherBrands.items").into_iter().map(
                                |brand| {
                                    div()
                                        .px_3()
                                        .py_2()
                                        .rounded_lg()
                                        .bg(gpui::rgba(0xffffff0d))
                                        .text_size(px(Typography::TEXT_XS))
                                        .font_weight(gpui::FontWeight::BOLD)
                                        .text_color(KairosColors::text_secondary())
                                        .child(brand)
                                },
                            ),
                        ),
                    ),
            )
            .child(
                card()
                    .p_10()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_3()
                    .child(section_title(t(locale, "portfolio.similar.title")))
                    .child(section_intro(t(locale, "portfolio.similar.desc"))),
            )
    }
}
