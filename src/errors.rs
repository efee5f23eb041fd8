//! Error types
//!
//! - [`SetupError`]: the run could not be configured (bad disk count, bad goal,
//!   prompt or logger failure). Raised before the puzzle is built.
//! - [`InvariantViolation`]: a topology breaks disk conservation or ordering.
//!   Never produced by a correct run; used by checks and tests.
//!
//! Renderer failures are carried by each renderer's own error type.

use crate::puzzle::peg::{PegId, Rank};
use std::fmt;

/// Errors raised while setting up a run
#[derive(Debug)]
pub enum SetupError {
    /// Disk count outside `1..=max`
    InvalidDiskCount { requested: usize, max: usize },

    /// The goal peg cannot be the peg the disks start on
    GoalIsStart { peg: PegId },

    /// Reading the disk count interactively failed
    Prompt { message: String },

    /// The logger could not be installed
    Logger { message: String },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::InvalidDiskCount { requested, max } if *requested == 0 => {
                write!(f, "number of disks must be > 0 (max {})", max)
            }
            SetupError::InvalidDiskCount { requested, max } => {
                write!(f, "number of disks must be <= {} (got {})", max, requested)
            }
            SetupError::GoalIsStart { peg } => {
                write!(f, "goal peg cannot be the start peg ({})", peg)
            }
            SetupError::Prompt { message } => write!(f, "failed to read disk count: {}", message),
            SetupError::Logger { message } => write!(f, "failed to set up logging: {}", message),
        }
    }
}

impl std::error::Error for SetupError {}

/// A breach of the "every disk exactly once, ordered on its peg" rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The same rank sits on two pegs (or twice on one)
    DuplicateDisk {
        rank: Rank,
        first: PegId,
        second: PegId,
    },

    /// A rank is on no peg
    MissingDisk { rank: Rank },

    /// A disk sits on top of a smaller one
    OutOfOrder { peg: PegId, below: Rank, above: Rank },

    /// A rank outside `0..num_disks`
    UnknownRank { rank: Rank, peg: PegId },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::DuplicateDisk {
                rank,
                first,
                second,
            } => write!(f, "disk {} found on {} and {} pegs", rank, first, second),
            InvariantViolation::MissingDisk { rank } => write!(f, "disk {} is on no peg", rank),
            InvariantViolation::OutOfOrder { peg, below, above } => write!(
                f,
                "disk {} sits on smaller disk {} on the {} peg",
                above, below, peg
            ),
            InvariantViolation::UnknownRank { rank, peg } => {
                write!(f, "unknown disk {} on the {} peg", rank, peg)
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}
