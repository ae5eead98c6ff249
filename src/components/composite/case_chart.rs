//! CaseChart - Before/After Bar Chart for Case Studies
//!
//! Two-point bar chart summarizing a case result. Bars scale against
//! the largest absolute value; the latest point is highlighted and a
//! negative point (a deficit) is tinted red. Each point carries its
//! tooltip text as a caption.

use gpui::{
    div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window,
};

use crate::theme::colors::KairosColors;
use crate::theme::typography::Typography;

/// One bar of the chart
#[derive(Debug, Clone)]
pub struct ChartPoint {
    pub name: SharedString,
    pub value: i64,
    pub tooltip: SharedString,
}

/// Case-study result chart
#[derive(IntoElement)]
pub struct CaseChart {
    label: SharedString,
    growth_text: SharedString,
    points: Vec<ChartPoint>,
}

impl CaseChart {
    pub fn new(
        label: impl Into<SharedString>,
        growth_text: impl Into<SharedString>,
        points: Vec<ChartPoint>,
    ) -> Self {
        Self {
            label: label.into(),
            growth_text: growth_text.into(),
            points,
        }
    }

    fn bar_height(value: i64, max_abs: u64) -> f32 {
        let scaled = (value.unsigned_abs() as f32 / max_abs as f32) * 72.0;
        scaled.max(4.0)
    }
}

impl RenderOnce for CaseChart {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let max_abs = self
            .points
            .iter()
            .map(|point| point.value.unsigned_abs())
            .max()
            .unwrap_or(1)
            .max(1);
        let last = self.points.len().saturating_sub(1);

        div()
            .bg(KairosColors::inset_bg())
            .border_1()
            .border_color(KairosColors::border())
            .rounded_xl()
            .p_4()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_XS))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(KairosColors::text_muted())
                            .child(self.label),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_2XL))
                            .font_weight(gpui::FontWeight::EXTRA_BOLD)
                            .text_color(KairosColors::text_primary())
                            .child(self.growth_text),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_end()
                    .gap_6()
                    .children(self.points.into_iter().enumerate().map(|(i, point)| {
                        let height = Self::bar_height(point.value, max_abs);
                        let color = if point.value < 0 {
                            KairosColors::danger()
                        } else if i == last {
                            KairosColors::chart_bar_highlight()
                        } else {
                            KairosColors::chart_bar()
                        };

                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .flex()
                                    .flex_col()
                                    .justify_end()
                                    .h(px(76.0))
                                    .child(div().w(px(40.0)).h(px(height)).rounded_sm().bg(color)),
                            )
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_XS))
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .text_color(KairosColors::text_muted())
                                    .child(point.name),
                            )
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_XS))
                                    .text_color(KairosColors::text_secondary())
                                    .child(point.tooltip),
                            )
                    })),
            )
    }
}
