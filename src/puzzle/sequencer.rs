//! Binary-counter move generator
//!
//! [`MoveSequencer`] keeps one bit per disk. Bit `i` is the 2^i place of a
//! counter holding the number of moves made so far, modulo 2^N. Incrementing
//! the counter clears the run of low 1-bits (the carry) and sets the first
//! 0-bit it finds; the position of that bit is the rank of the disk to move.
//!
//! When every bit is 1 the carry runs off the top, the counter returns to
//! all-zero and [`Step::Wrapped`] is reported instead of a rank.

use super::peg::Rank;
use bitvec::prelude::{BitVec, Lsb0};
use std::fmt;

/// Result of one counter increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Move the disk with this rank
    Move(Rank),
    /// The counter rolled over to zero; no disk moves
    Wrapped,
}

#[derive(Debug, Clone)]
pub struct MoveSequencer {
    bits: BitVec<usize, Lsb0>,
}

impl MoveSequencer {
    pub fn new(num_disks: usize) -> Self {
        MoveSequencer {
            bits: BitVec::repeat(false, num_disks),
        }
    }

    /// Increment the counter and report which disk moves next
    pub fn next_move_rank(&mut self) -> Step {
        let len = self.bits.len();
        let mut i = 0;
        while i < len && self.bits[i] {
            self.bits.set(i, false);
            i += 1;
        }

        if i == len {
            return Step::Wrapped;
        }

        self.bits.set(i, true);
        Step::Move(i)
    }

    pub fn num_disks(&self) -> usize {
        self.bits.len()
    }

    /// Per-disk bits, index 0 is the smallest disk
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.bits.len()).map(move |i| self.bits[i])
    }

    /// Current counter value. Only the low 64 bits are counted.
    pub fn counter(&self) -> u64 {
        (0..self.bits.len().min(64))
            .filter(|&i| self.bits[i])
            .fold(0, |acc, i| acc | (1u64 << i))
    }
}

impl fmt::Display for MoveSequencer {
    /// Bits printed most significant first
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..self.bits.len()).rev() {
            f.write_str(if self.bits[i] { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruler_sequence() {
        let mut seq = MoveSequencer::new(3);
        let steps: Vec<Step> = (0..8).map(|_| seq.next_move_rank()).collect();
        assert_eq!(
            steps,
            vec![
                Step::Move(0),
                Step::Move(1),
                Step::Move(0),
                Step::Move(2),
                Step::Move(0),
                Step::Move(1),
                Step::Move(0),
                Step::Wrapped,
            ]
        );
        assert_eq!(seq.counter(), 0);
    }

    #[test]
    fn test_counter_tracks_increments() {
        let mut seq = MoveSequencer::new(4);
        for expected in 1..16u64 {
            assert!(matches!(seq.next_move_rank(), Step::Move(_)));
            assert_eq!(seq.counter(), expected);
        }
        assert_eq!(seq.next_move_rank(), Step::Wrapped);
        assert_eq!(seq.counter(), 0);
        assert_eq!(seq.next_move_rank(), Step::Move(0));
    }

    #[test]
    fn test_display_most_significant_first() {
        let mut seq = MoveSequencer::new(4);
        seq.next_move_rank();
        seq.next_move_rank();
        seq.next_move_rank();
        seq.next_move_rank();
        seq.next_move_rank();
        assert_eq!(seq.to_string(), "0101");
        assert_eq!(seq.bits().collect::<Vec<_>>(), vec![true, false, true, false]);
    }

    #[test]
    fn test_single_disk_alternates() {
        let mut seq = MoveSequencer::new(1);
        assert_eq!(seq.next_move_rank(), Step::Move(0));
        assert_eq!(seq.next_move_rank(), Step::Wrapped);
        assert_eq!(seq.next_move_rank(), Step::Move(0));
    }
}
