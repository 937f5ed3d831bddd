//! Implementation of checkers, its rules and specifics.

pub mod board;
pub mod core;
pub mod game;
