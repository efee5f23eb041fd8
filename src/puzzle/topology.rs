//! The three-peg ring
//!
//! [`Topology`] owns exactly three [`Peg`]s wired Left -> Middle -> Right -> Left
//! and seeds the start peg with every disk, largest at the bottom.

use super::peg::{Peg, PegId, Rank};
use crate::errors::InvariantViolation;
use rustc_hash::FxHashMap;

/// Three pegs in a ring, plus the disk count they were seeded with
#[derive(Debug, Clone)]
pub struct Topology {
    pegs: [Peg; 3],
    start: PegId,
    num_disks: usize,
}

impl Topology {
    /// Build the ring and stack every disk on the left peg
    pub fn new(num_disks: usize) -> Self {
        Self::with_start(num_disks, PegId::Left)
    }

    /// Build the ring and stack every disk on `start`
    pub fn with_start(num_disks: usize, start: PegId) -> Self {
        let mut pegs = PegId::ALL.map(|_| Peg::with_capacity(PegId::Left, num_disks));
        for id in PegId::ALL {
            pegs[id.index()].set_successor(id.successor());
        }

        let mut topology = Topology {
            pegs,
            start,
            num_disks,
        };
        topology.seed();
        topology
    }

    // Push N-1, N-2, ..., 0 so the smallest disk ends on top
    fn seed(&mut self) {
        let start = self.start.index();
        for rank in (0..self.num_disks).rev() {
            self.pegs[start].push(rank);
        }
    }

    pub fn num_disks(&self) -> usize {
        self.num_disks
    }

    pub fn start(&self) -> PegId {
        self.start
    }

    /// The peg that receives the whole stack after 2^N - 1 moves.
    ///
    /// The smallest disk always steps to the successor peg, so an odd tower
    /// lands one step along the ring and an even tower two steps along.
    pub fn natural_goal(&self) -> PegId {
        if self.num_disks % 2 == 1 {
            self.start.successor()
        } else {
            self.start.successor().successor()
        }
    }

    pub fn peg(&self, id: PegId) -> &Peg {
        &self.pegs[id.index()]
    }

    pub fn peg_mut(&mut self, id: PegId) -> &mut Peg {
        &mut self.pegs[id.index()]
    }

    /// Follow the successor link of `id`
    pub fn successor(&self, id: PegId) -> PegId {
        self.peg(id).successor()
    }

    pub fn pegs(&self) -> &[Peg; 3] {
        &self.pegs
    }

    /// Owned copy of every peg's ranks, bottom to top
    pub fn layout(&self) -> [Vec<Rank>; 3] {
        PegId::ALL.map(|id| self.peg(id).ranks().collect())
    }

    /// Check that every disk is on exactly one peg and every peg is ordered.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut seen: FxHashMap<Rank, PegId> = FxHashMap::default();

        for id in PegId::ALL {
            let mut below: Option<Rank> = None;
            for rank in self.peg(id).ranks() {
                if rank >= self.num_disks {
                    return Err(InvariantViolation::UnknownRank { rank, peg: id });
                }
                if let Some(first) = seen.insert(rank, id) {
                    return Err(InvariantViolation::DuplicateDisk {
                        rank,
                        first,
                        second: id,
                    });
                }
                if let Some(lower) = below {
                    if lower <= rank {
                        return Err(InvariantViolation::OutOfOrder {
                            peg: id,
                            below: lower,
                            above: rank,
                        });
                    }
                }
                below = Some(rank);
            }
        }

        match (0..self.num_disks).find(|rank| !seen.contains_key(rank)) {
            Some(rank) => Err(InvariantViolation::MissingDisk { rank }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_wiring() {
        let topology = Topology::new(3);
        assert_eq!(topology.successor(PegId::Left), PegId::Middle);
        assert_eq!(topology.successor(PegId::Middle), PegId::Right);
        assert_eq!(topology.successor(PegId::Right), PegId::Left);
    }

    #[test]
    fn test_seeding_puts_smallest_on_top() {
        let topology = Topology::new(4);
        let left = topology.peg(PegId::Left);
        assert_eq!(left.size(), 4);
        assert_eq!(left.top(), Some(0));
        assert_eq!(left.bottom(), Some(3));
        assert!(topology.peg(PegId::Middle).is_empty());
        assert!(topology.peg(PegId::Right).is_empty());
        assert_eq!(topology.layout()[0], vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_seeding_other_start() {
        let topology = Topology::with_start(2, PegId::Right);
        assert_eq!(topology.layout(), [vec![], vec![], vec![1, 0]]);
        assert_eq!(topology.natural_goal(), PegId::Middle);
    }

    #[test]
    fn test_natural_goal_parity() {
        assert_eq!(Topology::new(1).natural_goal(), PegId::Middle);
        assert_eq!(Topology::new(2).natural_goal(), PegId::Right);
        assert_eq!(Topology::new(3).natural_goal(), PegId::Middle);
        assert_eq!(Topology::new(8).natural_goal(), PegId::Right);
    }

    #[test]
    fn test_invariants_hold_after_seeding() {
        assert_eq!(Topology::new(6).check_invariants(), Ok(()));
    }

    #[test]
    fn test_invariants_catch_out_of_order() {
        let mut topology = Topology::new(3);
        topology.peg_mut(PegId::Left).pop();
        topology.peg_mut(PegId::Left).pop();
        topology.peg_mut(PegId::Middle).push(1);
        topology.peg_mut(PegId::Middle).push(0);
        // 2 on the left, [1, 0] in the middle: still valid
        assert_eq!(topology.check_invariants(), Ok(()));

        let mut topology = Topology::new(2);
        topology.peg_mut(PegId::Left).pop();
        topology.peg_mut(PegId::Left).pop();
        topology.peg_mut(PegId::Right).push(0);
        topology.peg_mut(PegId::Right).push(1);
        assert_eq!(
            topology.check_invariants(),
            Err(InvariantViolation::OutOfOrder {
                peg: PegId::Right,
                below: 0,
                above: 1,
            })
        );
    }

    #[test]
    fn test_invariants_catch_loss_and_duplication() {
        let mut topology = Topology::new(3);
        topology.peg_mut(PegId::Left).pop();
        assert_eq!(
            topology.check_invariants(),
            Err(InvariantViolation::MissingDisk { rank: 0 })
        );

        topology.peg_mut(PegId::Middle).push(1);
        assert_eq!(
            topology.check_invariants(),
            Err(InvariantViolation::DuplicateDisk {
                rank: 1,
                first: PegId::Left,
                second: PegId::Middle,
            })
        );
    }
}
