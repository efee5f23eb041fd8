//! Line-oriented renderer for runs without a TUI
//!
//! Each frame becomes a header line followed by one line per peg, listing the
//! disks bottom to top:
//!
//! ```text
//! move 2: disk 1 left -> right [010]
//! left   |2
//! middle |0
//! right  |1
//! ```

use super::palette::{disk_colors, Rgb};
use crate::puzzle::{Control, Frame, PegId, Renderer};
use colored::Colorize;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

pub struct TextRenderer<W: Write> {
    out: W,
    colors: Vec<Rgb>,
    color: bool,
    delay: Duration,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, num_disks: usize) -> Self {
        TextRenderer {
            out,
            colors: disk_colors(num_disks),
            color: false,
            delay: Duration::ZERO,
        }
    }

    /// Color each disk number with its palette color
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Sleep this long after every frame
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn disk(&self, rank: usize) -> String {
        match self.colors.get(rank) {
            Some(&Rgb(r, g, b)) if self.color => rank.to_string().truecolor(r, g, b).to_string(),
            _ => rank.to_string(),
        }
    }

    fn write_frame(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        match frame.last_move {
            Some(m) => {
                let disk = self.disk(m.rank);
                writeln!(
                    self.out,
                    "move {}: disk {} {} -> {} [{}]",
                    m.number, disk, m.from, m.to, frame.sequencer
                )?
            }
            None => writeln!(
                self.out,
                "start: {} disks, goal {} [{}]",
                frame.num_disks(),
                frame.goal,
                frame.sequencer
            )?,
        }

        for id in PegId::ALL {
            let disks: Vec<String> = frame
                .topology
                .peg(id)
                .ranks()
                .map(|rank| self.disk(rank))
                .collect();
            writeln!(self.out, "{:<6} |{}", id.name(), disks.join(" "))?;
        }

        if frame.is_solved() {
            writeln!(self.out, "solved in {} moves", frame.stats.moves)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, frame: &Frame<'_>) -> io::Result<Control> {
        self.write_frame(frame)?;
        if !self.delay.is_zero() && !frame.is_solved() {
            thread::sleep(self.delay);
        }
        Ok(Control::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Simulation;

    #[test]
    fn test_two_disk_transcript() {
        let mut sim = Simulation::new(2);
        let mut renderer = TextRenderer::new(Vec::new(), 2);
        sim.run(&mut renderer).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let expected = "\
start: 2 disks, goal right [00]
left   |1 0
middle |
right  |

move 1: disk 0 left -> middle [01]
left   |1
middle |0
right  |

move 2: disk 1 left -> right [10]
left   |
middle |0
right  |1

move 3: disk 0 middle -> right [11]
left   |
middle |
right  |1 0
solved in 3 moves

";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_color_wraps_disk_numbers() {
        let sim = Simulation::new(3);
        let mut renderer = TextRenderer::new(Vec::new(), 3).with_color(true);
        colored::control::set_override(true);
        renderer.render(&sim.frame()).unwrap();
        colored::control::unset_override();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.contains("\x1b["));
        assert!(text.contains("0\x1b[0m"));
    }
}
