//! Platform abstraction layer
//!
//! Handles the outside world for the game loop:
//! - Input events ([`InputSource`]) and their mapping to game commands
//! - A terminal backend implementing both input and drawing

pub mod terminal;

use std::io;

use crate::sim::Direction;

/// A key the game may care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Escape,
    Char(char),
    /// Anything else the backend saw
    Other,
}

/// One buffered input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed, Ctrl+C and the like
    Quit,
    KeyDown(Key),
}

/// Source of input events, drained once per tick
pub trait InputSource {
    /// Everything buffered since the last poll, oldest first; never blocks
    fn poll(&mut self) -> io::Result<Vec<InputEvent>>;
}

/// What an event asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Faster,
    Slower,
    Exit,
}

impl Command {
    /// Map an event to a command; unknown keys map to `None`
    pub fn from_event(event: InputEvent) -> Option<Command> {
        match event {
            InputEvent::Quit => Some(Command::Exit),
            InputEvent::KeyDown(key) => Self::from_key(key),
        }
    }

    pub fn from_key(key: Key) -> Option<Command> {
        let command = match key {
            // Movement - Arrow keys
            Key::Up => Command::Turn(Direction::Up),
            Key::Down => Command::Turn(Direction::Down),
            Key::Left => Command::Turn(Direction::Left),
            Key::Right => Command::Turn(Direction::Right),

            Key::Escape => Command::Exit,
            Key::Char(c) => match c.to_ascii_lowercase() {
                // Movement - WASD
                'w' => Command::Turn(Direction::Up),
                's' => Command::Turn(Direction::Down),
                'a' => Command::Turn(Direction::Left),
                'd' => Command::Turn(Direction::Right),

                '+' | '=' => Command::Faster,
                '-' | '_' => Command::Slower,
                'q' => Command::Exit,
                _ => return None,
            },
            Key::Other => return None,
        };
        Some(command)
    }
}
