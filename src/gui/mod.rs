//! Screen-Space GUI
//!
//! Widgets that render at fixed window positions using SDL2 primitives and
//! SDL2_ttf text.
//!
//! # Available Components
//!
//! - [`MainMenu`] - Title plus a vertical stack of clickable buttons
//! - [`Button`] - Labelled rectangle with hover highlighting
//! - [`MenuLayout`] - Built-in description of the menu's buttons and fonts
//!
//! # Example Usage
//!
//! ```rust
//! use crate::gui::{MainMenu, MenuLayout};
//!
//! let layout = MenuLayout::builtin()?;
//! let mut menu = MainMenu::new(&layout, WINDOW_WIDTH);
//!
//! // Feed inputs
//! if let Some(action) = menu.handle_input(input) { /* ... */ }
//!
//! // Render
//! menu.render(&mut canvas, &texture_creator, &fonts)?;
//! ```

pub mod button;
pub mod layout;
pub mod main_menu;

pub use layout::MenuLayout;
pub use main_menu::MainMenu;
