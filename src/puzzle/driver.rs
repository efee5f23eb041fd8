//! Simulation driver
//!
//! [`Simulation`] asks the [`MoveSequencer`] which disk moves next, finds the
//! peg holding that disk by walking the ring from the start peg, finds the
//! first peg along the ring that can take it, and moves it. After every move
//! the state is handed to a [`Renderer`], which may ask the run to stop.
//!
//! # States
//!
//! ```text
//! Running --move--> Running
//! Running --goal peg holds N disks--> Solved
//! ```
//!
//! A renderer returning [`Control::Quit`] ends [`Simulation::run`] early with
//! [`Outcome::Aborted`]; the simulation stays in `Running`.

use super::peg::{PegId, Rank};
use super::sequencer::{MoveSequencer, Step};
use super::topology::Topology;
use crate::errors::SetupError;

/// Whether the run should keep going after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Presentation collaborator, called once after seeding and once per move
pub trait Renderer {
    type Error;

    /// Present `frame`. Return [`Control::Quit`] to stop the run.
    fn render(&mut self, frame: &Frame<'_>) -> Result<Control, Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Solved,
}

/// One disk transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// 1-based move number
    pub number: u64,
    pub rank: Rank,
    pub from: PegId,
    pub to: PegId,
}

/// Move and wrap counts of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub moves: u64,
    pub wraps: u64,
}

/// How [`Simulation::run`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved(Stats),
    /// The renderer asked to quit before the goal peg was full
    Aborted(Stats),
}

impl Outcome {
    pub fn stats(&self) -> Stats {
        match self {
            Outcome::Solved(stats) | Outcome::Aborted(stats) => *stats,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }
}

/// Read-only view of the puzzle handed to a renderer
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub topology: &'a Topology,
    pub sequencer: &'a MoveSequencer,
    pub goal: PegId,
    pub state: RunState,
    pub last_move: Option<MoveRecord>,
    pub stats: Stats,
}

impl<'a> Frame<'a> {
    pub fn num_disks(&self) -> usize {
        self.topology.num_disks()
    }

    /// Ranks on `id`, bottom to top
    pub fn ranks(&self, id: PegId) -> Vec<Rank> {
        self.topology.peg(id).ranks().collect()
    }

    /// Ranks on every peg, bottom to top
    pub fn layout(&self) -> [Vec<Rank>; 3] {
        self.topology.layout()
    }

    pub fn is_solved(&self) -> bool {
        self.state == RunState::Solved
    }
}

/// Number of moves in the optimal solution for `num_disks` disks
pub fn optimal_moves(num_disks: usize) -> u64 {
    if num_disks >= 64 {
        u64::MAX
    } else {
        (1u64 << num_disks) - 1
    }
}

/// The puzzle plus its move engine
#[derive(Debug, Clone)]
pub struct Simulation {
    topology: Topology,
    sequencer: MoveSequencer,
    goal: PegId,
    stats: Stats,
    last_move: Option<MoveRecord>,
}

impl Simulation {
    /// Seed the left peg; the goal is the peg the stack reaches in 2^N - 1 moves
    pub fn new(num_disks: usize) -> Self {
        let topology = Topology::new(num_disks);
        let goal = topology.natural_goal();
        Self::from_parts(topology, goal)
    }

    /// Seed the left peg with an explicit goal peg.
    ///
    /// A goal other than the natural one takes two passes of the counter,
    /// with one wrap in between.
    pub fn with_goal(num_disks: usize, goal: PegId) -> Result<Self, SetupError> {
        let topology = Topology::new(num_disks);
        if goal == topology.start() {
            return Err(SetupError::GoalIsStart { peg: goal });
        }
        Ok(Self::from_parts(topology, goal))
    }

    fn from_parts(topology: Topology, goal: PegId) -> Self {
        let sequencer = MoveSequencer::new(topology.num_disks());
        log::debug!(
            "seeded {} disks on the {} peg, goal is the {} peg",
            topology.num_disks(),
            topology.start(),
            goal
        );
        Simulation {
            topology,
            sequencer,
            goal,
            stats: Stats::default(),
            last_move: None,
        }
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn sequencer(&self) -> &MoveSequencer {
        &self.sequencer
    }

    pub fn goal(&self) -> PegId {
        self.goal
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn last_move(&self) -> Option<MoveRecord> {
        self.last_move
    }

    pub fn state(&self) -> RunState {
        if self.topology.peg(self.goal).size() == self.topology.num_disks() {
            RunState::Solved
        } else {
            RunState::Running
        }
    }

    pub fn is_solved(&self) -> bool {
        self.state() == RunState::Solved
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            topology: &self.topology,
            sequencer: &self.sequencer,
            goal: self.goal,
            state: self.state(),
            last_move: self.last_move,
            stats: self.stats,
        }
    }

    /// Perform the next disk transfer. Returns `None` once solved.
    pub fn step(&mut self) -> Option<MoveRecord> {
        if self.is_solved() {
            return None;
        }

        let rank = loop {
            match self.sequencer.next_move_rank() {
                Step::Move(rank) => break rank,
                Step::Wrapped => {
                    self.stats.wraps += 1;
                    log::debug!("counter wrapped after {} moves", self.stats.moves);
                }
            }
        };

        let from = self.find_source(rank);
        let popped = self.topology.peg_mut(from).pop();
        debug_assert_eq!(popped.map(|d| d.rank), Some(rank));

        let to = self.find_destination(from, rank);
        self.topology.peg_mut(to).push(rank);

        self.stats.moves += 1;
        let record = MoveRecord {
            number: self.stats.moves,
            rank,
            from,
            to,
        };
        self.last_move = Some(record);
        log::debug!(
            "move {}: disk {} {} -> {} [{}]",
            record.number,
            rank,
            from,
            to,
            self.sequencer
        );
        debug_assert_eq!(self.topology.check_invariants(), Ok(()));

        Some(record)
    }

    /// Render the seeded state, then move until solved or told to quit
    pub fn run<R: Renderer>(&mut self, renderer: &mut R) -> Result<Outcome, R::Error> {
        if renderer.render(&self.frame())? == Control::Quit && !self.is_solved() {
            return Ok(self.abort());
        }

        while self.step().is_some() {
            if renderer.render(&self.frame())? == Control::Quit && !self.is_solved() {
                return Ok(self.abort());
            }
        }

        log::info!(
            "solved {} disks in {} moves ({} wraps)",
            self.topology.num_disks(),
            self.stats.moves,
            self.stats.wraps
        );
        Ok(Outcome::Solved(self.stats))
    }

    fn abort(&self) -> Outcome {
        log::info!("aborted after {} moves", self.stats.moves);
        Outcome::Aborted(self.stats)
    }

    // Walk the ring from the start peg to the peg whose top is `rank`
    fn find_source(&self, rank: Rank) -> PegId {
        let mut peg = self.topology.start();
        for _ in 0..2 {
            if self.topology.peg(peg).top() == Some(rank) {
                break;
            }
            peg = self.topology.successor(peg);
        }
        peg
    }

    // Walk the ring past `from`, skipping pegs topped by a smaller disk
    fn find_destination(&self, from: PegId, rank: Rank) -> PegId {
        let mut peg = self.topology.successor(from);
        for _ in 0..2 {
            if self.topology.peg(peg).accepts(rank) {
                break;
            }
            peg = self.topology.successor(peg);
        }
        peg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    struct Layouts(Vec<[Vec<Rank>; 3]>);

    impl Renderer for Layouts {
        type Error = Infallible;

        fn render(&mut self, frame: &Frame<'_>) -> Result<Control, Infallible> {
            self.0.push(frame.layout());
            Ok(Control::Continue)
        }
    }

    #[test]
    fn test_single_disk() {
        let mut sim = Simulation::new(1);
        assert_eq!(sim.goal(), PegId::Middle);
        let record = sim.step().unwrap();
        assert_eq!(record.from, PegId::Left);
        assert_eq!(record.to, PegId::Middle);
        assert!(sim.is_solved());
        assert_eq!(sim.step(), None);
    }

    #[test]
    fn test_two_disk_trace() {
        let mut sim = Simulation::new(2);
        let mut frames = Layouts(Vec::new());
        let outcome = sim.run(&mut frames).unwrap();

        assert_eq!(outcome, Outcome::Solved(Stats { moves: 3, wraps: 0 }));
        assert_eq!(
            frames.0,
            vec![
                [vec![1, 0], vec![], vec![]],
                [vec![1], vec![0], vec![]],
                [vec![], vec![0], vec![1]],
                [vec![], vec![], vec![1, 0]],
            ]
        );
    }

    #[test]
    fn test_source_search_walks_ring() {
        let mut sim = Simulation::new(3);
        sim.step();
        sim.step();
        // [2] [0] [1]: disk 0 is one hop from the start peg
        assert_eq!(sim.find_source(0), PegId::Middle);
        assert_eq!(sim.find_source(1), PegId::Right);
        assert_eq!(sim.find_destination(PegId::Middle, 0), PegId::Right);
    }

    #[test]
    fn test_destination_skips_smaller_top() {
        let mut sim = Simulation::new(3);
        sim.step();
        // [2, 1] [0] []: disk 1 skips the middle peg
        assert_eq!(sim.find_destination(PegId::Left, 1), PegId::Right);
    }

    #[test]
    fn test_goal_cannot_be_start() {
        assert!(matches!(
            Simulation::with_goal(3, PegId::Left),
            Err(SetupError::GoalIsStart { peg: PegId::Left })
        ));
    }

    #[test]
    fn test_far_goal_wraps_once() {
        let mut sim = Simulation::with_goal(3, PegId::Right).unwrap();
        while sim.step().is_some() {}
        assert_eq!(sim.stats(), Stats { moves: 14, wraps: 1 });
        assert_eq!(sim.topology().layout()[2], vec![2, 1, 0]);
    }

    #[test]
    fn test_optimal_moves() {
        assert_eq!(optimal_moves(1), 1);
        assert_eq!(optimal_moves(10), 1023);
    }
}
