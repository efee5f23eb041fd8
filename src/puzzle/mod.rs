//! The puzzle model and its move engine
//!
//! This module provides the core of the simulation:
//! - [`peg`]: Disks, the peg stack, and the [`PegId`] ring positions
//! - [`topology`]: Three pegs wired into a ring and seeded with the tower
//! - [`sequencer`]: The binary counter that names the next disk to move
//! - [`driver`]: The loop that turns a disk rank into a peg-to-peg transfer
//!
//! # Move Rule
//!
//! For move `k`, the disk to move is the position of the bit that flips from
//! 0 to 1 when the counter goes from `k - 1` to `k`. The source peg is the one
//! whose top disk has that rank; the destination is the first peg after it
//! along the ring whose top is empty or larger:
//!
//! ```text
//! counter  001  010  011  100  101  110  111
//! disk       0    1    0    2    0    1    0
//! ```

pub mod driver;
pub mod peg;
pub mod sequencer;
pub mod topology;

pub use driver::{
    optimal_moves, Control, Frame, MoveRecord, Outcome, Renderer, RunState, Simulation, Stats,
};
pub use peg::{Disk, Peg, PegId, Rank};
pub use sequencer::{MoveSequencer, Step};
pub use topology::Topology;
