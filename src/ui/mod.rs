//! Terminal UI: board view with the swap cursor, move counter, solver
//! verdict, and chain feedback. No game logic lives here.

mod app;
mod game_view;

pub use app::App;
