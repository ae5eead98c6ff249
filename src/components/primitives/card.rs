//! Card - Surface Panels, Headings, and Bullet Rows

use gpui::{div, prelude::*, px, Div, ParentElement, SharedString, Styled};

use crate::theme::colors::KairosColors;
use crate::theme::typography::Typography;

/// Rounded surface card
pub fn card() -> Div {
    div()
        .bg(KairosColors::surface())
        .border_1()
        .border_color(KairosColors::border())
        .rounded_xl()
        .p_6()
}

/// Section heading
pub fn section_title(text: impl Into<SharedString>) -> Div {
    div()
        .text_size(px(Typography::TEXT_3XL))
        .font_weight(gpui::FontWeight::EXTRA_BOLD)
        .text_color(KairosColors::text_primary())
        .child(text.into())
}

/// Muted paragraph under a section heading
pub fn section_intro(text: impl Into<SharedString>) -> Div {
    div()
        .text_size(px(Typography::TEXT_LG))
        .text_color(KairosColors::text_secondary())
        .child(text.into())
}

/// Small uppercase kicker label
pub fn kicker(text: impl Into<SharedString>) -> Div {
    div()
        .text_size(px(Typography::TEXT_XS))
        .font_weight(gpui::FontWeight::BOLD)
        .text_color(KairosColors::text_muted())
        .child(text.into())
}

/// Bullet row: accent dot plus label
pub fn bullet_row(text: impl Into<SharedString>) -> Div {
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
                .text_color(KairosColors::text_secondary())
                .child(text.into()),
        )
}
