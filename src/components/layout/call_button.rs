//! CallButton - Floating Call Shortcut
//!
//! Always-visible shortcut to dial the agency, overlaid in the bottom
//! right corner of the window.

use gpui::{
    div, prelude::*, px, App, ClickEvent, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, StatefulInteractiveElement, Styled, Window,
};

use crate::domain::agency;
use crate::theme::colors::KairosColors;

/// Floating call button
#[derive(IntoElement)]
pub struct CallButton;

impl RenderOnce for CallButton {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .id("floating-call")
            .absolute()
            .bottom(px(24.0))
            .right(px(24.0))
            .px_5()
            .py_3()
            .rounded_full()
            .bg(KairosColors::accent())
            .flex()
            .items_center()
            .gap_2()
            .text_color(KairosColors::text_primary())
            .text_sm()
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .cursor_pointer()
            .hover(|s| s.bg(gpui::rgba(0x2563ebff)))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                cx.open_url(agency::PHONE_URL);
            })
            .child("✆")
            .child("Call Us")
    }
}
