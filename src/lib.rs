//! # Connect Four AI
//!
//! A Connect Four game with a depth-limited, alpha-beta-pruned minimax bot.
//! The binary plays a terminal game against a human (or a random opponent
//! in autoplay mode); the library exposes the board environment and the
//! search so they can be embedded elsewhere.
//!
//! ## Modules
//!
//! - [`game`] — Board environment: grid, players, move application,
//!   perspective switching, cheap forks
//! - [`search`] — Evaluator, Min/Max search layers, root move selector
//! - [`agent`] — Move-source trait plus the random autoplay opponent
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod agent;
pub mod config;
pub mod error;
pub mod game;
pub mod search;
