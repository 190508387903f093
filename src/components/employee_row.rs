//! Employee list and its rows

use gpui::{
    div, prelude::FluentBuilder, ClickEvent, Context, FontWeight, Hsla, InteractiveElement,
    IntoElement, ParentElement, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::App;
use crate::models::Employee;

impl App {
    pub fn render_employee_list(&self, cx: &Context<Self>) -> impl IntoElement {
        let palette = &self.palette;

        div()
            .id("employee-list")
            .flex_1()
            .overflow_y_scroll()
            .px_3()
            .pb_4()
            .when(self.roster.store().is_empty(), |el| {
                el.child(
                    div()
                        .w_full()
                        .py_6()
                        .flex()
                        .justify_center()
                        .text_sm()
                        .text_color(palette.text_muted)
                        .child("No employees yet"),
                )
            })
            .children(
                self.roster
                    .store()
                    .employees()
                    .iter()
                    .enumerate()
                    .map(|(index, employee)| self.render_employee_row(index, employee, cx)),
            )
    }

    pub fn render_employee_row(
        &self,
        index: usize,
        employee: &Employee,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let palette = &self.palette;

        div()
            .w_full()
            .mt_2()
            .flex()
            .items_center()
            .bg(palette.card)
            .border_1()
            .border_color(palette.outline)
            .child(
                div()
                    .flex_1()
                    .p_3()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(
                        div()
                            .text_sm()
                            .font_weight(FontWeight::MEDIUM)
                            .child(employee.name.clone()),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(palette.text_muted)
                            .child(employee.role.clone()),
                    ),
            )
            .child(self.render_row_action(
                format!("row-{}-details", index),
                "👤",
                palette.text,
                move |this, _event, _window, cx| this.show_details(index, cx),
                cx,
            ))
            .child(self.render_row_action(
                format!("row-{}-edit", index),
                "✏️",
                palette.text,
                move |this, _event, window, cx| this.edit_employee(index, window, cx),
                cx,
            ))
            .child(self.render_row_action(
                format!("row-{}-delete", index),
                "🗑",
                palette.danger,
                move |this, _event, _window, cx| this.delete_employee(index, cx),
                cx,
            ))
    }

    fn render_row_action(
        &self,
        id: String,
        icon: &'static str,
        color: Hsla,
        on_click: impl Fn(&mut Self, &ClickEvent, &mut Window, &mut Context<Self>) + 'static,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        div()
            .id(SharedString::from(id))
            .cursor_pointer()
            .w_10()
            .h_10()
            .flex()
            .items_center()
            .justify_center()
            .rounded_full()
            .text_color(color)
            .hover(|style| style.bg(self.palette.hover))
            .on_click(cx.listener(on_click))
            .child(icon)
    }
}
