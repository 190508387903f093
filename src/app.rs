//! Core App state and initialization for the Employee Database GUI

use gpui::{
    div, prelude::FluentBuilder, AppContext as _, Context, Entity, IntoElement, ParentElement,
    Render, Styled, Window,
};
use gpui_component::input::{InputEvent, InputState as GpuiInputState};

use crate::config::AppConfig;
use crate::models::FormField;
use crate::roster::Roster;
use crate::theme::Palette;

/// Main application state
pub struct App {
    pub palette: Palette,
    pub config: AppConfig,

    pub roster: Roster,

    // One text input per form field, in display order
    pub inputs: Vec<(FormField, Entity<GpuiInputState>)>,
}

impl App {
    pub fn new(config: AppConfig, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let inputs = FormField::ALL
            .into_iter()
            .map(|field| {
                let input_state =
                    cx.new(|cx| GpuiInputState::new(window, cx).placeholder(field.label()));

                // Inputs only report edits; the form holds the values
                cx.subscribe_in(
                    &input_state,
                    window,
                    move |this, input_state: &Entity<GpuiInputState>, event: &InputEvent, _window, cx| {
                        if let InputEvent::Change { .. } = event {
                            let value = input_state.read(cx).value().to_string();
                            this.handle_field_change(field, value, cx);
                        }
                    },
                )
                .detach();

                (field, input_state)
            })
            .collect();

        Self {
            palette: Palette::new(),
            roster: Roster::new(config.id_scheme),
            config,
            inputs,
        }
    }
}

impl Render for App {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = &self.palette;

        div()
            .size_full()
            .relative()
            .bg(palette.background)
            .text_color(palette.text)
            .flex()
            .flex_col()
            .child(self.render_header(cx))
            .child(self.render_employee_list(cx))
            .when(self.roster.form().is_open(), |el| el.child(self.render_form_dialog(cx)))
            .when_some(self.roster.details_employee().cloned(), |el, employee| {
                el.child(self.render_details_dialog(&employee, cx))
            })
    }
}
