//! # Introduction
//!
//! A Tower of Hanoi simulation that solves the three-peg puzzle without
//! recursion. A binary counter with one bit per disk names the disk to move at
//! each step; the driver finds that disk on the ring of pegs and moves it to
//! the first peg along the ring that can take it. Every state is handed to a
//! renderer, by default a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Config → Topology + MoveSequencer → Simulation → Renderer (TUI / text / recorder)
//! ```
//!
//! 1. [`config`] — command-line parsing and the disk-count prompt.
//! 2. [`puzzle`] — pegs, the three-peg ring, the counter, and the driver loop.
//! 3. [`snapshot`] — owned frame copies and a bounded frame history.
//! 4. [`ui`] — the TUI and text renderers.
//! 5. [`errors`] and [`logging`] — setup errors, invariant checks, logger setup.
//!
//! ## Example
//!
//! ```
//! use hanoi::puzzle::{Outcome, Simulation, Stats};
//! use hanoi::snapshot::Recorder;
//!
//! let mut sim = Simulation::new(3);
//! let mut recorder = Recorder::new(1 << 20);
//! let outcome = sim.run(&mut recorder).unwrap();
//!
//! assert_eq!(outcome, Outcome::Solved(Stats { moves: 7, wraps: 0 }));
//! assert_eq!(recorder.log.last().unwrap().layout[1], vec![2, 1, 0]);
//! ```

pub mod config;
pub mod errors;
pub mod logging;
pub mod puzzle;
pub mod snapshot;
pub mod ui;
