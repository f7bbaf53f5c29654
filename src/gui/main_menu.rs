//! Main Menu Controller
//!
//! Owns the button stack and the running flag. Inputs update hover state
//! and dispatch clicks; `render` redraws the whole screen each frame.
//!
//! # Example
//!
//! ```rust
//! let mut menu = MainMenu::new(&layout, WINDOW_WIDTH);
//!
//! while menu.is_running() {
//!     for input in input_system.poll_events(&mut event_pump) {
//!         if let Some(action) = menu.handle_input(input) {
//!             // print action.console_message()
//!         }
//!     }
//!     menu.render(&mut canvas, &texture_creator, &fonts)?;
//!     canvas.present();
//! }
//! ```

use super::button::{Button, ButtonStyle};
use super::layout::{MenuAction, MenuLayout};
use crate::fonts::MenuFonts;
use crate::input_system::MenuInput;
use crate::text::draw_text_centered_x;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, RenderTarget, TextureCreator};

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Screen clear color
    pub background_color: Color,

    /// Title text color
    pub title_color: Color,

    pub button: ButtonStyle,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            background_color: Color::RGB(20, 20, 40),
            title_color: Color::RGB(255, 255, 255),
            button: ButtonStyle::default(),
        }
    }
}

/// Whether the frame loop keeps going
///
/// `Terminated` is absorbing: nothing moves the menu back to `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Terminated,
}

pub struct MainMenu {
    title: String,
    title_y: i32,
    center_x: i32,
    buttons: Vec<Button>,
    state: MenuState,
    style: MenuStyle,
}

impl MainMenu {
    /// Builds the button stack described by `layout` with default styling
    pub fn new(layout: &MenuLayout, window_width: u32) -> Self {
        Self::with_style(layout, window_width, MenuStyle::default())
    }

    pub fn with_style(layout: &MenuLayout, window_width: u32, style: MenuStyle) -> Self {
        let buttons = layout
            .button_rects(window_width)
            .into_iter()
            .zip(&layout.buttons.entries)
            .map(|(rect, entry)| Button::new(rect, entry.label.clone(), entry.action))
            .collect();

        MainMenu {
            title: layout.title.text.clone(),
            title_y: layout.title.y,
            center_x: window_width as i32 / 2,
            buttons,
            state: MenuState::Running,
            style,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == MenuState::Running
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Moves to `Terminated`; calling it again has no effect
    pub fn terminate(&mut self) {
        if self.state == MenuState::Running {
            log::info!("Menu terminating");
        }
        self.state = MenuState::Terminated;
    }

    /// Applies one input and returns the action it fired, if any
    ///
    /// Inputs arriving after termination are ignored.
    pub fn handle_input(&mut self, input: MenuInput) -> Option<MenuAction> {
        if !self.is_running() {
            return None;
        }

        match input {
            MenuInput::Quit => {
                self.terminate();
                None
            }
            MenuInput::PointerMoved { x, y } => {
                self.update_hover(x, y);
                None
            }
            MenuInput::PointerPressed { x, y } => {
                let action = self.button_at(x, y)?.action;
                log::debug!("Pressed {:?} at ({}, {})", action, x, y);
                if action.terminates() {
                    self.terminate();
                }
                Some(action)
            }
        }
    }

    /// Applies a batch of inputs in order and collects the console lines
    /// their actions print
    pub fn handle_inputs<I>(&mut self, inputs: I) -> Vec<&'static str>
    where
        I: IntoIterator<Item = MenuInput>,
    {
        inputs
            .into_iter()
            .filter_map(|input| self.handle_input(input))
            .filter_map(|action| action.console_message())
            .collect()
    }

    /// Sets every button's hover flag from the pointer position
    pub fn update_hover(&mut self, x: i32, y: i32) {
        for button in &mut self.buttons {
            button.hovered = button.contains(x, y);
        }
    }

    /// First button whose rect contains the point
    pub fn button_at(&self, x: i32, y: i32) -> Option<&Button> {
        self.buttons.iter().find(|button| button.contains(x, y))
    }

    /// Clears the screen and draws the title and buttons
    ///
    /// Without a title font the title is skipped; without a body font the
    /// buttons are skipped. Text that fails to rasterize is logged and
    /// left out of the frame.
    pub fn render<T: RenderTarget>(
        &self,
        canvas: &mut Canvas<T>,
        texture_creator: &TextureCreator<T::Context>,
        fonts: &MenuFonts<'_>,
    ) -> Result<(), String> {
        canvas.set_draw_color(self.style.background_color);
        canvas.clear();

        if let Some(title_font) = &fonts.title {
            if let Err(e) = draw_text_centered_x(
                canvas,
                texture_creator,
                title_font,
                &self.title,
                self.style.title_color,
                self.center_x,
                self.title_y,
            ) {
                log::warn!("Skipping title: {}", e);
            }
        }

        if let Some(body_font) = &fonts.body {
            for button in &self.buttons {
                button.render(canvas, texture_creator, body_font, &self.style.button)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::WINDOW_WIDTH;
    use sdl2::pixels::PixelFormatEnum;
    use sdl2::rect::Rect;
    use sdl2::surface::Surface;

    fn menu() -> MainMenu {
        let layout = MenuLayout::builtin().unwrap();
        MainMenu::new(&layout, WINDOW_WIDTH)
    }

    fn hovered(menu: &MainMenu) -> Vec<bool> {
        menu.buttons().iter().map(|b| b.hovered).collect()
    }

    #[test]
    fn test_menu_starts_running_with_four_buttons() {
        let menu = menu();
        assert!(menu.is_running());
        assert_eq!(menu.state(), MenuState::Running);
        assert_eq!(menu.buttons().len(), 4);
        assert_eq!(hovered(&menu), [false, false, false, false]);
    }

    #[test]
    fn test_hover_top_left_corner_of_first_button() {
        let mut menu = menu();
        menu.handle_input(MenuInput::PointerMoved { x: 250, y: 200 });
        assert_eq!(hovered(&menu), [true, false, false, false]);
    }

    #[test]
    fn test_hover_is_idempotent() {
        let mut menu = menu();
        menu.handle_input(MenuInput::PointerMoved { x: 400, y: 390 });
        let first = hovered(&menu);
        menu.handle_input(MenuInput::PointerMoved { x: 400, y: 390 });
        assert_eq!(hovered(&menu), first);
        assert_eq!(first, [false, false, true, false]);
    }

    #[test]
    fn test_hover_moves_between_buttons_and_clears() {
        let mut menu = menu();
        menu.handle_input(MenuInput::PointerMoved { x: 400, y: 230 });
        assert_eq!(hovered(&menu), [true, false, false, false]);

        menu.handle_input(MenuInput::PointerMoved { x: 400, y: 310 });
        assert_eq!(hovered(&menu), [false, true, false, false]);

        // Gap between buttons
        menu.handle_input(MenuInput::PointerMoved { x: 400, y: 270 });
        assert_eq!(hovered(&menu), [false, false, false, false]);
    }

    #[test]
    fn test_quit_terminates_without_action() {
        let mut menu = menu();
        assert_eq!(menu.handle_input(MenuInput::Quit), None);
        assert!(!menu.is_running());
        assert_eq!(menu.state(), MenuState::Terminated);
    }

    #[test]
    fn test_click_play_keeps_running() {
        let mut menu = menu();
        let action = menu.handle_input(MenuInput::PointerPressed { x: 400, y: 230 });
        assert_eq!(action, Some(MenuAction::Play));
        assert_eq!(action.and_then(|a| a.console_message()), Some("Play clicked!"));
        assert!(menu.is_running());
    }

    #[test]
    fn test_click_dispatch_per_button() {
        let cases = [
            (230, MenuAction::Play),
            (310, MenuAction::Options),
            (390, MenuAction::Credits),
            (470, MenuAction::Exit),
        ];

        for (y, expected) in cases {
            let mut menu = menu();
            assert_eq!(
                menu.handle_input(MenuInput::PointerPressed { x: 400, y }),
                Some(expected)
            );
            assert_eq!(menu.is_running(), expected != MenuAction::Exit);
        }
    }

    #[test]
    fn test_click_exit_terminates() {
        let mut menu = menu();
        let action = menu.handle_input(MenuInput::PointerPressed { x: 400, y: 470 });
        assert_eq!(action, Some(MenuAction::Exit));
        assert_eq!(action.and_then(|a| a.console_message()), None);
        assert!(!menu.is_running());
    }

    #[test]
    fn test_click_outside_does_nothing() {
        let mut menu = menu();
        assert_eq!(menu.handle_input(MenuInput::PointerPressed { x: 10, y: 10 }), None);
        assert!(menu.is_running());
        assert_eq!(hovered(&menu), [false, false, false, false]);
    }

    #[test]
    fn test_at_most_one_button_per_point() {
        let menu = menu();
        for y in (0..600).step_by(5) {
            for x in (0..800).step_by(25) {
                let hits = menu.buttons().iter().filter(|b| b.contains(x, y)).count();
                assert!(hits <= 1, "({}, {}) hits {} buttons", x, y, hits);
            }
        }
    }

    #[test]
    fn test_terminated_is_absorbing() {
        let mut menu = menu();
        menu.handle_input(MenuInput::Quit);

        assert_eq!(menu.handle_input(MenuInput::PointerPressed { x: 400, y: 230 }), None);
        menu.handle_input(MenuInput::PointerMoved { x: 400, y: 230 });
        assert_eq!(hovered(&menu), [false, false, false, false]);

        menu.terminate();
        assert_eq!(menu.state(), MenuState::Terminated);
    }

    #[test]
    fn test_batch_quit_prints_nothing() {
        let mut menu = menu();
        let lines = menu.handle_inputs([MenuInput::Quit]);
        assert!(lines.is_empty());
        assert!(!menu.is_running());
    }

    #[test]
    fn test_batch_play_prints_once() {
        let mut menu = menu();
        let lines = menu.handle_inputs([MenuInput::PointerPressed { x: 400, y: 230 }]);
        assert_eq!(lines, ["Play clicked!"]);
        assert!(menu.is_running());
    }

    #[test]
    fn test_batch_ignores_clicks_queued_after_quit() {
        let mut menu = menu();
        let lines = menu.handle_inputs([
            MenuInput::Quit,
            MenuInput::PointerPressed { x: 400, y: 230 },
        ]);
        assert!(lines.is_empty());
        assert!(!menu.is_running());
    }

    #[test]
    fn test_batch_keeps_order() {
        let mut menu = menu();
        let lines = menu.handle_inputs([
            MenuInput::PointerPressed { x: 400, y: 390 },
            MenuInput::PointerMoved { x: 400, y: 310 },
            MenuInput::PointerPressed { x: 10, y: 10 },
            MenuInput::PointerPressed { x: 400, y: 310 },
        ]);
        assert_eq!(lines, ["Credits clicked!", "Options clicked!"]);
        assert_eq!(hovered(&menu), [false, true, false, false]);
    }

    #[test]
    fn test_render_without_fonts_draws_background_only() {
        let surface = Surface::new(800, 600, PixelFormatEnum::RGB888).unwrap();
        let mut canvas = surface.into_canvas().unwrap();
        let texture_creator = canvas.texture_creator();

        let mut menu = menu();
        menu.handle_input(MenuInput::PointerMoved { x: 400, y: 230 });
        menu.render(&mut canvas, &texture_creator, &MenuFonts::none())
            .unwrap();

        let pixels = canvas
            .read_pixels(Rect::new(400, 230, 1, 1), PixelFormatEnum::RGB24)
            .unwrap();
        assert_eq!(&pixels[..3], &[20, 20, 40]);
        assert!(menu.is_running());
    }
}
