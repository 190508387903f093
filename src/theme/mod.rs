//! Colour palette for the Employee Database GUI
//!
//! A light Material-like scheme: white cards with dark outlines on a pale
//! background, a single purple accent for buttons.

use gpui::Hsla;

pub mod colors {
    use gpui::rgb;

    pub fn surface() -> gpui::Hsla { rgb(0xfffbfe).into() }      // #fffbfe - Screen background
    pub fn card() -> gpui::Hsla { rgb(0xffffff).into() }         // #ffffff - Rows and dialogs
    pub fn hover() -> gpui::Hsla { rgb(0xf3edf7).into() }        // #f3edf7 - Hovered controls

    pub fn text() -> gpui::Hsla { rgb(0x1c1b1f).into() }         // #1c1b1f - Main text
    pub fn text_muted() -> gpui::Hsla { rgb(0x79747e).into() }   // #79747e - Labels and hints

    pub fn primary() -> gpui::Hsla { rgb(0x6750a4).into() }      // #6750a4 - Buttons
    pub fn on_primary() -> gpui::Hsla { rgb(0xffffff).into() }   // #ffffff - Button text
    pub fn danger() -> gpui::Hsla { rgb(0xb3261e).into() }       // #b3261e - Delete, missing fields

    pub fn outline() -> gpui::Hsla { rgb(0x000000).into() }      // #000000 - Row border
    pub fn divider() -> gpui::Hsla { rgb(0xcac4d0).into() }      // #cac4d0 - Input border
}

#[derive(Clone)]
pub struct Palette {
    pub background: Hsla,
    pub card: Hsla,
    pub hover: Hsla,

    pub text: Hsla,
    pub text_muted: Hsla,

    pub primary: Hsla,
    pub on_primary: Hsla,
    pub danger: Hsla,

    pub outline: Hsla,
    pub divider: Hsla,
    /// Dimmed layer behind modal dialogs
    pub scrim: Hsla,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: colors::surface(),
            card: colors::card(),
            hover: colors::hover(),
            text: colors::text(),
            text_muted: colors::text_muted(),
            primary: colors::primary(),
            on_primary: colors::on_primary(),
            danger: colors::danger(),
            outline: colors::outline(),
            divider: colors::divider(),
            scrim: colors::outline().opacity(0.32),
        }
    }
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }
}
