#![forbid(unsafe_code)]

//! The overlay palette.
//!
//! One flat struct of colors; widgets take it by reference at draw time so a
//! host can restyle the whole overlay in one place.

use glaze_core::Color;

/// Colors shared across panels, rows, and buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Panel body fill.
    pub panel_bg: Color,
    /// Panel border stroke.
    pub panel_border: Color,
    /// Title-bar fill; hover blends from half strength to full.
    pub title_bg: Color,
    /// Cross (×) stroke at full hover.
    pub cross: Color,
    /// Drop shadow behind floating panels.
    pub shadow: Color,

    /// Row border while hovered/selected.
    pub row_border_hot: Color,
    /// Row border at rest.
    pub row_border: Color,
    /// Row fill while hovered/selected.
    pub row_fill_hot: Color,
    /// Row fill at rest.
    pub row_fill: Color,
    /// Inset backdrop behind the path line.
    pub path_bg: Color,
    /// Thin rule between the name and the buttons.
    pub separator: Color,

    /// Entry name at rest.
    pub name: Color,
    /// Entry name under the pointer.
    pub name_hot: Color,
    /// Entry name when the row is the applied selection.
    pub name_active: Color,
    /// Path line text.
    pub path_text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            panel_bg: Color::rgb(44, 57, 105),
            panel_border: Color::rgb(18, 25, 62),
            title_bg: Color::rgb(35, 40, 83),
            cross: Color::rgb(220, 230, 245),
            shadow: Color::rgba(0, 0, 0, 64),

            row_border_hot: Color::rgb(89, 116, 213),
            row_border: Color::rgb(39, 46, 100),
            row_fill_hot: Color::rgb(73, 94, 171),
            row_fill: Color::rgb(62, 80, 146),
            path_bg: Color::rgb(35, 40, 83),
            separator: Color::rgb(95, 100, 180),

            name: Color::LIGHT_GRAY,
            name_hot: Color::WHITE,
            name_active: Color::rgb(255, 231, 69),
            path_text: Color::GRAY,
        }
    }
}
