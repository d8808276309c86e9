use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

use crate::session::{Command, Direction, GameSession};

pub struct App {
    session: GameSession,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        App {
            session,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => self.move_cursor(Direction::Left),
            KeyCode::Right => self.move_cursor(Direction::Right),
            KeyCode::Up => self.move_cursor(Direction::Up),
            KeyCode::Down => self.move_cursor(Direction::Down),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.swap_at_cursor();
            }
            KeyCode::Char('r') => {
                let _ = self.session.apply(Command::Reset);
                self.message = Some("Board reset.".to_string());
            }
            _ => {}
        }
    }

    fn move_cursor(&mut self, direction: Direction) {
        // Cursor movement clamps and never fails.
        let _ = self.session.apply(Command::MoveCursor(direction));
    }

    /// Swap the pair under the cursor and report what happened.
    fn swap_at_cursor(&mut self) {
        match self.session.apply(Command::Swap) {
            Ok(()) => {
                if self.session.board().is_cleared() {
                    self.message = Some(format!(
                        "Board cleared in {} moves!",
                        self.session.moves()
                    ));
                } else {
                    match self.session.last_chains() {
                        0 => {}
                        1 => self.message = Some("Match cleared!".to_string()),
                        chains => self.message = Some(format!("Chain x{chains}!")),
                    }
                }
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, &self.message);
    }
}
