//! Game session: the live board, the swap cursor, move counting, and the
//! command interface the presentation layer drives.

use crate::config::AppConfig;
use crate::error::SwapError;
use crate::game::{matcher, Board, HEIGHT, WIDTH};
use crate::solver::{self, SolveOutcome};

/// Cursor movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The position of the left cell of the swappable pair.
///
/// The column is clamped to `WIDTH - 2` so a right-hand swap partner always
/// exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    row: usize,
    col: usize,
}

impl Cursor {
    pub fn origin() -> Self {
        Cursor { row: 0, col: 0 }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Move one step, clamped to the board.
    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.row = self.row.saturating_sub(1),
            Direction::Down => self.row = (self.row + 1).min(HEIGHT - 1),
            Direction::Left => self.col = self.col.saturating_sub(1),
            Direction::Right => self.col = (self.col + 1).min(WIDTH - 2),
        }
    }
}

/// Discrete input events consumed by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveCursor(Direction),
    Swap,
    Reset,
}

/// A running game: board, cursor, counters, and the solver's verdict on the
/// starting arrangement.
pub struct GameSession {
    board: Board,
    cursor: Cursor,
    moves: u32,
    last_chains: u32,
    solution: Option<SolveOutcome>,
}

impl GameSession {
    /// Start a session on the authored layout. When enabled in the
    /// configuration, the solver runs once here, before any input.
    pub fn new(config: &AppConfig) -> Self {
        let board = Board::starting_layout();
        let solution = config
            .solver
            .enabled
            .then(|| solver::solve(&board, config.solver.max_nodes));
        GameSession {
            board,
            cursor: Cursor::origin(),
            moves: 0,
            last_chains: 0,
            solution,
        }
    }

    /// Apply one input command.
    pub fn apply(&mut self, command: Command) -> Result<(), SwapError> {
        match command {
            Command::MoveCursor(direction) => {
                self.cursor.step(direction);
                Ok(())
            }
            Command::Swap => self.swap(),
            Command::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Swap at the cursor and resolve the result. Counts as a move whether
    /// or not anything clears.
    fn swap(&mut self) -> Result<(), SwapError> {
        let chains = matcher::apply_swap(&mut self.board, self.cursor.row(), self.cursor.col())?;
        self.moves += 1;
        self.last_chains = chains;
        Ok(())
    }

    /// Restore the authored layout, zero the counters, and park the cursor
    /// at the origin. The solver verdict is kept: it describes the starting
    /// arrangement, which is exactly what reset restores.
    fn reset(&mut self) {
        self.board = Board::starting_layout();
        self.cursor = Cursor::origin();
        self.moves = 0;
        self.last_chains = 0;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Chain length of the most recent swap resolution.
    pub fn last_chains(&self) -> u32 {
        self.last_chains
    }

    pub fn solution(&self) -> Option<&SolveOutcome> {
        self.solution.as_ref()
    }
}
