//! mathmysteryctl library - exposes modules for testing

pub mod commands;
pub mod display;
pub mod errors;
pub mod logging;
pub mod quiz;
