//! Shared building blocks: modal overlay and filled buttons

use gpui::{
    deferred, div, px, ClickEvent, Context, FontWeight, InteractiveElement, IntoElement,
    ParentElement, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::App;

impl App {
    /// Centered card over a dimmed backdrop. Clicking the backdrop calls
    /// `on_dismiss`; clicks inside the card stay inside.
    pub fn render_modal(
        &self,
        id: &'static str,
        on_dismiss: impl Fn(&mut Self, &ClickEvent, &mut Window, &mut Context<Self>) + 'static,
        body: impl IntoElement,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let palette = &self.palette;

        deferred(
            div()
                .id(SharedString::from(format!("{}-backdrop", id)))
                .occlude()
                .absolute()
                .top_0()
                .left_0()
                .size_full()
                .bg(palette.scrim)
                .flex()
                .items_center()
                .justify_center()
                .on_click(cx.listener(on_dismiss))
                .child(
                    div()
                        .id(SharedString::from(id))
                        .w_full()
                        .max_w(px(420.))
                        .mx_4()
                        .p_5()
                        .rounded_xl()
                        .bg(palette.card)
                        .shadow_lg()
                        .on_click(cx.listener(|_this, _event, _window, cx| {
                            cx.stop_propagation();
                        }))
                        .child(body),
                ),
        )
        .with_priority(1)
    }

    pub fn render_button(
        &self,
        id: &'static str,
        label: &'static str,
        on_click: impl Fn(&mut Self, &ClickEvent, &mut Window, &mut Context<Self>) + 'static,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let palette = &self.palette;

        div()
            .id(id)
            .cursor_pointer()
            .px_6()
            .py_2()
            .rounded_full()
            .bg(palette.primary)
            .text_sm()
            .font_weight(FontWeight::MEDIUM)
            .text_color(palette.on_primary)
            .hover(|style| style.bg(palette.primary.opacity(0.85)))
            .on_click(cx.listener(on_click))
            .child(label)
    }
}
