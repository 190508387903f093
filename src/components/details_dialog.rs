//! Read-only employee details

use gpui::{div, Context, FontWeight, IntoElement, ParentElement, Styled};

use crate::app::App;
use crate::models::Employee;

impl App {
    pub fn render_details_dialog(&self, employee: &Employee, cx: &Context<Self>) -> impl IntoElement {
        let body = div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .mb_2()
                    .text_lg()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child("Employee Details"),
            )
            .children(
                details_lines(employee)
                    .into_iter()
                    .map(|line| div().text_sm().child(line)),
            )
            .child(
                div()
                    .mt_3()
                    .flex()
                    .justify_end()
                    .child(self.render_button("details-close", "Close", Self::handle_close_details, cx)),
            );

        self.render_modal("employee-details", Self::handle_close_details, body, cx)
    }
}

fn details_lines(employee: &Employee) -> [String; 4] {
    [
        format!("Name: {} ,   {}", employee.name, employee.gender),
        format!("ID: {}  , DOB: {}", employee.id, employee.date_of_birth),
        format!("Role: {}", employee.role),
        format!("Address: {}", employee.address),
    ]
}
