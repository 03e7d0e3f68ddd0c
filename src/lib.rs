//! # Connect Four Core
//!
//! Rules engine for a Connect-Four-style drop-piece board game: a
//! rectangular grid with gravity-based placement, two colors, and
//! N-in-a-row win detection along four axes. Move selection strategy is
//! out of scope; callers supply move sequences (or a [`source::MoveSource`])
//! and the engine validates moves and reports outcomes.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, win evaluation, move-sequence driver
//! - [`source`] — Pluggable column selection (random move source)
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod source;
