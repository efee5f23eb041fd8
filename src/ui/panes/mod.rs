//! TUI pane rendering modules
//!
//! Each pane is a stateless function that draws one region of the screen
//! from a [`Snapshot`](crate::snapshot::Snapshot) or the move history.
//!
//! # Pane Modules
//!
//! - [`towers`]: The three pegs with their colored disks
//! - [`counter`]: The binary counter that picks each move
//! - [`moves`]: A running log of disk transfers
//! - [`status`]: Status bar with keybindings and run state

pub mod counter;
pub mod moves;
pub mod status;
pub mod towers;

// Re-export render functions for convenience
pub use counter::render_counter_pane;
pub use moves::render_moves_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use towers::render_towers_pane;
