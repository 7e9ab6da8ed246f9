//! The components module contains all shared components for our app.

mod app;
mod audio_manager;
mod cards;
mod icons;
mod player;

pub use app::*;
pub use audio_manager::*;
pub use cards::*;
pub use icons::*;
pub use player::*;
