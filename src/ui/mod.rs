//! Front-ends for the engine: an interactive terminal game view and a
//! headless replay mode for scripted input.

mod app;
mod game_view;
pub mod headless;

pub use app::App;
