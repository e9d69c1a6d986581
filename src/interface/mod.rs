//! Startup prompts run before a game begins.

pub mod setup;
