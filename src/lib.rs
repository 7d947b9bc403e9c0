//! herodeck: an interactive hero-slide deck engine.
//!
//! The deck itself (`deck`, `slide`, `counter`, `swipe`) is a plain state
//! machine ticked by frame time and knows nothing about rendering; `render`
//! projects it onto a raylib window and `input` translates raylib events
//! into deck commands. `notify` and `forms` are standalone collaborators
//! the deck never touches.

pub mod config;
pub mod constants;
pub mod counter;
pub mod deck;
pub mod forms;
pub mod input;
pub mod notify;
pub mod particles;
pub mod render;
pub mod slide;
pub mod state;
pub mod swipe;
pub mod texture_loader;
