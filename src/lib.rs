//! # Connect Four
//!
//! A Connect Four game engine with a terminal front-end built with Ratatui.
//! The engine owns the grid and the turn order; front-ends pass in column
//! indices and render the [`game::MoveResult`] they get back.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, drop/win/tie resolution
//! - [`ui`] — Terminal UI: interactive game view and headless replay
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
