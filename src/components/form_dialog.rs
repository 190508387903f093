//! Add/edit employee dialog

use gpui::{div, prelude::FluentBuilder, Context, FontWeight, IntoElement, ParentElement, Styled};
use gpui_component::input::Input;

use crate::app::App;
use crate::error::join_fields;

impl App {
    pub fn render_form_dialog(&self, cx: &Context<Self>) -> impl IntoElement {
        let palette = &self.palette;
        let highlight = self.config.highlight_missing_fields;
        let missing = self.roster.form().missing();

        let body = div()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .mb_2()
                    .text_lg()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child(self.roster.form().title()),
            )
            .children(self.inputs.iter().map(|(field, input_state)| {
                let flagged = highlight && missing.contains(field);

                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_xs()
                            .text_color(if flagged {
                                palette.danger
                            } else {
                                palette.text_muted
                            })
                            .child(field.label()),
                    )
                    .child(
                        div()
                            .rounded_md()
                            .border_1()
                            .border_color(if flagged {
                                palette.danger
                            } else {
                                palette.divider
                            })
                            .child(Input::new(input_state)),
                    )
            }))
            .when(highlight && !missing.is_empty(), |el| {
                el.child(
                    div()
                        .text_xs()
                        .text_color(palette.danger)
                        .child(format!("Please fill in: {}", join_fields(missing))),
                )
            })
            .when_some(self.date_of_birth_hint(), |el, hint| {
                el.child(div().text_xs().text_color(palette.text_muted).child(hint))
            })
            .child(
                div()
                    .mt_3()
                    .flex()
                    .justify_between()
                    .child(self.render_button(
                        "form-confirm",
                        self.roster.form().confirm_label(),
                        Self::handle_commit_click,
                        cx,
                    ))
                    .child(self.render_button("form-cancel", "CANCEL", Self::handle_cancel_click, cx)),
            );

        self.render_modal("employee-form", Self::handle_cancel_click, body, cx)
    }
}
