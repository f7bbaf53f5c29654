use sdl2::event::Event;
use sdl2::EventPump;

/// Pointer and window inputs the menu reacts to
///
/// SDL2 events are reduced to these before reaching the menu, which keeps
/// the menu logic independent of the event pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    /// Window close or OS quit request
    Quit,
    PointerMoved { x: i32, y: i32 },
    /// Any mouse button pressed
    PointerPressed { x: i32, y: i32 },
}

/// InputSystem drains SDL2 events and produces MenuInputs
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Drains every pending event without blocking
    ///
    /// Events the menu has no use for (keyboard, wheel, window focus, etc.)
    /// are dropped here.
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<MenuInput> {
        event_pump
            .poll_iter()
            .filter_map(|event| Self::translate(&event))
            .collect()
    }

    pub fn translate(event: &Event) -> Option<MenuInput> {
        match *event {
            Event::Quit { .. } => Some(MenuInput::Quit),
            Event::MouseMotion { x, y, .. } => Some(MenuInput::PointerMoved { x, y }),
            Event::MouseButtonDown { x, y, .. } => Some(MenuInput::PointerPressed { x, y }),
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
