//! Pegs and the disks stacked on them
//!
//! This module provides the stack that the move engine manipulates:
//! - [`Disk`]: A disk identified by its rank (0 is the smallest)
//! - [`Peg`]: An owned bottom-to-top stack of disks with O(1) push/pop/top
//! - [`PegId`]: One of the three peg positions, and the ring successor relation
//!
//! # Ring Links
//!
//! A peg does not hold a reference to its neighbour. It stores the [`PegId`] of
//! its successor, and the [`Topology`](super::topology::Topology) resolves that
//! id against its fixed array of three pegs. No peg owns another.

use std::fmt;

/// Rank of a disk; smaller rank means a smaller disk
pub type Rank = usize;

/// A single disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Disk {
    pub rank: Rank,
}

impl Disk {
    pub fn new(rank: Rank) -> Self {
        Disk { rank }
    }
}

/// Position of a peg in the three-peg ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PegId {
    Left,
    Middle,
    Right,
}

impl PegId {
    pub const ALL: [PegId; 3] = [PegId::Left, PegId::Middle, PegId::Right];

    /// Index of this peg in the ring (0, 1 or 2)
    pub fn index(self) -> usize {
        match self {
            PegId::Left => 0,
            PegId::Middle => 1,
            PegId::Right => 2,
        }
    }

    /// Peg at `index`, taken modulo 3
    pub fn from_index(index: usize) -> Self {
        PegId::ALL[index % 3]
    }

    /// The next peg clockwise: Left -> Middle -> Right -> Left
    pub fn successor(self) -> Self {
        PegId::from_index(self.index() + 1)
    }

    pub fn name(self) -> &'static str {
        match self {
            PegId::Left => "left",
            PegId::Middle => "middle",
            PegId::Right => "right",
        }
    }
}

impl fmt::Display for PegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A stack of disks, bottom at index 0
#[derive(Debug, Clone)]
pub struct Peg {
    disks: Vec<Disk>,
    successor: PegId,
}

impl Peg {
    /// Create an empty peg whose successor is `successor`
    pub fn new(successor: PegId) -> Self {
        Peg {
            disks: Vec::new(),
            successor,
        }
    }

    /// Create an empty peg with room for `capacity` disks
    pub fn with_capacity(successor: PegId, capacity: usize) -> Self {
        Peg {
            disks: Vec::with_capacity(capacity),
            successor,
        }
    }

    /// Place a disk on top
    pub fn push(&mut self, rank: Rank) {
        self.disks.push(Disk::new(rank));
    }

    /// Remove the top disk. Popping an empty peg does nothing and returns `None`.
    pub fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }

    /// Rank of the top disk, `None` when the peg is empty
    pub fn top(&self) -> Option<Rank> {
        self.disks.last().map(|d| d.rank)
    }

    /// Rank of the bottom disk, `None` when the peg is empty
    pub fn bottom(&self) -> Option<Rank> {
        self.disks.first().map(|d| d.rank)
    }

    pub fn size(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    pub fn successor(&self) -> PegId {
        self.successor
    }

    pub fn set_successor(&mut self, successor: PegId) {
        self.successor = successor;
    }

    /// Disks from bottom to top
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Ranks from bottom to top
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.disks.iter().map(|d| d.rank)
    }

    /// Whether `rank` may be placed on this peg (empty, or top is larger)
    pub fn accepts(&self, rank: Rank) -> bool {
        self.top().map_or(true, |top| top > rank)
    }

    /// Release every disk
    pub fn clear(&mut self) {
        self.disks.clear();
    }
}
