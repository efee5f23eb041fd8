// Frame history for replay and inspection

use crate::puzzle::{Control, Frame, MoveRecord, PegId, Rank, Renderer, RunState, Stats};
use std::mem::size_of;

/// Owned copy of one rendered frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub layout: [Vec<Rank>; 3],
    pub counter: String, // Most significant bit first
    pub last_move: Option<MoveRecord>,
    pub stats: Stats,
    pub state: RunState,
    pub goal: PegId,
    pub num_disks: usize,
}

impl Snapshot {
    pub fn capture(frame: &Frame<'_>) -> Self {
        Snapshot {
            layout: frame.layout(),
            counter: frame.sequencer.to_string(),
            last_move: frame.last_move,
            stats: frame.stats,
            state: frame.state,
            goal: frame.goal,
            num_disks: frame.num_disks(),
        }
    }

    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        let disks: usize = self.layout.iter().map(|peg| peg.len()).sum();
        size_of::<Self>() + disks * size_of::<Rank>() + self.counter.len()
    }
}

/// Frames captured so far, bounded by a memory limit
#[derive(Debug)]
pub struct FrameLog {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl FrameLog {
    pub fn new(max_memory: usize) -> Self {
        FrameLog {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), String> {
        let snapshot_size = snapshot.estimated_size();

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(format!(
                "Frame memory limit exceeded: {} + {} > {}",
                self.current_memory, snapshot_size, self.max_memory
            ));
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

/// Renderer that keeps every frame in a [`FrameLog`]
#[derive(Debug)]
pub struct Recorder {
    pub log: FrameLog,
    quit_after: Option<usize>,
}

impl Recorder {
    pub fn new(max_memory: usize) -> Self {
        Recorder {
            log: FrameLog::new(max_memory),
            quit_after: None,
        }
    }

    /// Ask the run to stop once `frames` frames have been recorded
    pub fn quit_after(mut self, frames: usize) -> Self {
        self.quit_after = Some(frames);
        self
    }
}

impl Renderer for Recorder {
    type Error = String;

    fn render(&mut self, frame: &Frame<'_>) -> Result<Control, String> {
        self.log.push(Snapshot::capture(frame))?;
        match self.quit_after {
            Some(limit) if self.log.len() >= limit => Ok(Control::Quit),
            _ => Ok(Control::Continue),
        }
    }
}
