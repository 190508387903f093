//! Header component: title and the "ADD" trigger

use gpui::{div, Context, FontWeight, IntoElement, ParentElement, Styled};

use crate::app::App;

impl App {
    pub fn render_header(&self, cx: &Context<Self>) -> impl IntoElement {
        div()
            .w_full()
            .pt_5()
            .pb_3()
            .flex()
            .flex_col()
            .items_center()
            .gap_5()
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::BOLD)
                    .child("Employee Database".to_uppercase()),
            )
            .child(self.render_button("add-btn", "ADD", Self::handle_add_click, cx))
    }
}
