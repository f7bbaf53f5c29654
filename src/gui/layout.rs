//! Menu Layout
//!
//! The button stack, title and font choices are described by a JSON document
//! compiled into the binary. Each button entry pairs a label with the
//! [`MenuAction`] it triggers, so dispatch never depends on a button's index.

use sdl2::rect::Rect;
use serde::Deserialize;

const BUILTIN_LAYOUT: &str = include_str!("../../assets/config/menu_layout.json");

/// What a button does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuAction {
    Play,
    Options,
    Credits,
    Exit,
}

impl MenuAction {
    /// Line printed to stdout when the action fires, if any
    pub fn console_message(&self) -> Option<&'static str> {
        match self {
            MenuAction::Play => Some("Play clicked!"),
            MenuAction::Options => Some("Options clicked!"),
            MenuAction::Credits => Some("Credits clicked!"),
            MenuAction::Exit => None,
        }
    }

    /// Whether firing this action ends the menu
    pub fn terminates(&self) -> bool {
        matches!(self, MenuAction::Exit)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuLayout {
    pub title: TitleLayout,
    pub buttons: ButtonLayout,
    pub fonts: FontLayout,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TitleLayout {
    pub text: String,

    /// Top edge of the title in pixels
    pub y: i32,
}

/// Vertical stack of equally sized buttons, centered horizontally
#[derive(Debug, Clone, Deserialize)]
pub struct ButtonLayout {
    pub width: u32,
    pub height: u32,

    /// Top edge of the first button
    pub start_y: i32,

    /// Distance between the top edges of consecutive buttons
    pub spacing: i32,

    /// Buttons in top-to-bottom order
    pub entries: Vec<ButtonEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ButtonEntry {
    pub label: String,
    pub action: MenuAction,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FontLayout {
    pub body: FontSpec,
    pub title: FontSpec,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FontSpec {
    pub path: String,
    pub point_size: u16,
}

impl MenuLayout {
    /// Parses the layout compiled into the binary
    pub fn builtin() -> Result<Self, serde_json::Error> {
        Self::from_json(BUILTIN_LAYOUT)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Bounding rects of every button, in entry order
    pub fn button_rects(&self, window_width: u32) -> Vec<Rect> {
        let b = &self.buttons;
        let x = (window_width as i32 - b.width as i32) / 2;

        (0..b.entries.len())
            .map(|i| Rect::new(x, b.start_y + i as i32 * b.spacing, b.width, b.height))
            .collect()
    }
}
