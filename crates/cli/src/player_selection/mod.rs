//! Interactive choice between several matching players.
//!
//! When a name matches more than one player, the candidates are listed with
//! their active years and the user picks one.
//!
//! # User Interface
//!
//! The list supports:
//! - Up/Down arrows to move the selection (no wrapping at either end)
//! - Enter to pick the highlighted player
//! - `/` to filter the list by typing (fuzzy search)
//! - `q` or Escape to go back without picking

pub mod types;
pub mod ui;

// Re-exports for convenience
pub use types::{CycleDirection, SelectionState, ViewportState};
pub use ui::choose_player;
