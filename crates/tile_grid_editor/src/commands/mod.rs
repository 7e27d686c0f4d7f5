//! Keyboard input for the editor
//!
//! Editing itself lives in [`tile_grid_core::MapEditor`]; this module only
//! turns key presses into [`crate::ui::PendingAction`]s.

mod shortcuts;

pub use shortcuts::*;
