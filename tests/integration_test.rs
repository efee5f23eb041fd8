// Integration tests for the move engine

use hanoi::puzzle::{
    optimal_moves, Control, Frame, Outcome, PegId, Rank, Renderer, Simulation, Stats,
};
use hanoi::snapshot::Recorder;
use std::convert::Infallible;

const FRAME_MEMORY: usize = 64 * 1024 * 1024;

/// Checks every frame against the conservation and ordering rules
struct Checker {
    frames: usize,
    violations: Vec<String>,
}

impl Checker {
    fn new() -> Self {
        Checker {
            frames: 0,
            violations: Vec::new(),
        }
    }
}

impl Renderer for Checker {
    type Error = Infallible;

    fn render(&mut self, frame: &Frame<'_>) -> Result<Control, Infallible> {
        self.frames += 1;
        if let Err(e) = frame.topology.check_invariants() {
            self.violations.push(format!("frame {}: {}", self.frames, e));
        }
        Ok(Control::Continue)
    }
}

fn run(num_disks: usize) -> (Outcome, Recorder) {
    let mut sim = Simulation::new(num_disks);
    let mut recorder = Recorder::new(FRAME_MEMORY);
    let outcome = sim.run(&mut recorder).expect("recording failed");
    (outcome, recorder)
}

fn tower(num_disks: usize) -> Vec<Rank> {
    (0..num_disks).rev().collect()
}

#[test]
fn test_optimal_move_count() {
    for n in 1..=10 {
        let (outcome, recorder) = run(n);
        assert_eq!(
            outcome,
            Outcome::Solved(Stats {
                moves: optimal_moves(n),
                wraps: 0,
            }),
            "n = {}",
            n
        );
        // Seeded frame plus one per move
        assert_eq!(recorder.log.len() as u64, optimal_moves(n) + 1);
    }
}

#[test]
fn test_every_frame_conserves_and_orders_disks() {
    for n in 1..=10 {
        let mut sim = Simulation::new(n);
        let mut checker = Checker::new();
        sim.run(&mut checker).unwrap();
        assert!(checker.violations.is_empty(), "{:?}", checker.violations);
        assert_eq!(checker.frames as u64, optimal_moves(n) + 1);
    }
}

#[test]
fn test_far_goal_conserves_and_orders_disks() {
    for n in 1..=8 {
        let natural = Simulation::new(n).goal();
        let far = if natural == PegId::Middle {
            PegId::Right
        } else {
            PegId::Middle
        };
        let mut sim = Simulation::with_goal(n, far).unwrap();
        let mut checker = Checker::new();
        let outcome = sim.run(&mut checker).unwrap();

        assert!(checker.violations.is_empty(), "{:?}", checker.violations);
        assert_eq!(
            outcome,
            Outcome::Solved(Stats {
                moves: 2 * optimal_moves(n),
                wraps: 1,
            }),
            "n = {}",
            n
        );
        assert_eq!(sim.topology().layout()[far.index()], tower(n));
    }
}

#[test]
fn test_one_disk_trace() {
    let (outcome, recorder) = run(1);
    assert_eq!(outcome.stats().moves, 1);

    let frames: Vec<_> = recorder.log.iter().map(|s| s.layout.clone()).collect();
    assert_eq!(
        frames,
        vec![[vec![0], vec![], vec![]], [vec![], vec![0], vec![]]]
    );

    let last = recorder.log.last().unwrap();
    let record = last.last_move.unwrap();
    assert_eq!((record.from, record.to), (PegId::Left, PegId::Middle));
    assert_eq!(last.goal, PegId::Middle);
}

#[test]
fn test_two_disk_trace() {
    let (outcome, recorder) = run(2);
    assert_eq!(outcome, Outcome::Solved(Stats { moves: 3, wraps: 0 }));

    let last = recorder.log.last().unwrap();
    assert_eq!(last.goal, PegId::Right);
    assert_eq!(last.layout[PegId::Right.index()], vec![1, 0]);

    let ranks: Vec<Rank> = recorder
        .log
        .iter()
        .filter_map(|s| s.last_move.map(|m| m.rank))
        .collect();
    assert_eq!(ranks, vec![0, 1, 0]);
}

#[test]
fn test_two_disks_to_middle_wraps_once() {
    let mut sim = Simulation::with_goal(2, PegId::Middle).unwrap();
    let mut recorder = Recorder::new(FRAME_MEMORY);
    let outcome = sim.run(&mut recorder).unwrap();

    assert_eq!(outcome, Outcome::Solved(Stats { moves: 6, wraps: 1 }));

    // The wrap happens between the third and fourth move, once the
    // counter has reached 11 and every disk sits on the right peg
    let wraps: Vec<u64> = recorder.log.iter().map(|s| s.stats.wraps).collect();
    assert_eq!(wraps, vec![0, 0, 0, 0, 1, 1, 1]);
    assert_eq!(
        recorder.log.get(3).unwrap().layout,
        [vec![], vec![], vec![1, 0]]
    );
    assert_eq!(
        recorder.log.last().unwrap().layout,
        [vec![], vec![1, 0], vec![]]
    );
}

#[test]
fn test_three_disk_trace() {
    let (outcome, recorder) = run(3);
    assert_eq!(outcome, Outcome::Solved(Stats { moves: 7, wraps: 0 }));

    let ranks: Vec<Rank> = recorder
        .log
        .iter()
        .filter_map(|s| s.last_move.map(|m| m.rank))
        .collect();
    assert_eq!(ranks, vec![0, 1, 0, 2, 0, 1, 0]);

    let last = recorder.log.last().unwrap();
    assert_eq!(last.layout, [vec![], vec![2, 1, 0], vec![]]);
    assert_eq!(last.counter, "111");
}

#[test]
fn test_smallest_disk_always_steps_along_ring() {
    let (_, recorder) = run(5);
    for snapshot in recorder.log.iter() {
        if let Some(m) = snapshot.last_move {
            if m.rank == 0 {
                assert_eq!(m.to, m.from.successor());
            }
        }
    }
}

#[test]
fn test_quit_stops_run() {
    let mut sim = Simulation::new(4);
    let mut recorder = Recorder::new(FRAME_MEMORY).quit_after(4);
    let outcome = sim.run(&mut recorder).unwrap();

    // Seeded frame plus three moves
    assert_eq!(outcome, Outcome::Aborted(Stats { moves: 3, wraps: 0 }));
    assert_eq!(recorder.log.len(), 4);
    assert!(!sim.is_solved());
}

#[test]
fn test_quit_on_seeded_frame() {
    let mut sim = Simulation::new(3);
    let mut recorder = Recorder::new(FRAME_MEMORY).quit_after(1);
    let outcome = sim.run(&mut recorder).unwrap();
    assert_eq!(outcome, Outcome::Aborted(Stats::default()));
    assert_eq!(sim.topology().layout(), [tower(3), vec![], vec![]]);
}

#[test]
fn test_quit_on_final_frame_still_solves() {
    let mut sim = Simulation::new(2);
    let mut recorder = Recorder::new(FRAME_MEMORY).quit_after(4);
    let outcome = sim.run(&mut recorder).unwrap();
    assert!(outcome.is_solved());
}

#[test]
fn test_fresh_runs_are_independent() {
    let (first, first_frames) = run(4);
    let (_, _) = run(6);
    let (second, second_frames) = run(4);

    assert_eq!(first, second);
    let a: Vec<_> = first_frames.log.iter().cloned().collect();
    let b: Vec<_> = second_frames.log.iter().cloned().collect();
    assert_eq!(a, b);
}

#[test]
fn test_step_after_solved_is_none() {
    let mut sim = Simulation::new(3);
    let mut count = 0;
    while sim.step().is_some() {
        count += 1;
    }
    assert_eq!(count, 7);
    assert_eq!(sim.step(), None);
    assert_eq!(sim.stats().moves, 7);
}
