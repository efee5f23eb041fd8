//! Disk colors picked from a color wheel
//!
//! The 360 degree wheel is split into N equal steps and disk `i` takes the hue
//! at step `i + 1`. Each channel reads the same trapezoid wave at a different
//! phase: red at the hue, green 240 degrees on, blue 120 degrees on.

/// An 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

const RED_OFFSET: u32 = 0;
const GREEN_OFFSET: u32 = 240;
const BLUE_OFFSET: u32 = 120;

/// Channel intensity at `degrees` on the wheel
pub fn channel(degrees: u32) -> u8 {
    let d = degrees % 360;
    match d {
        0..=59 => (255.0 * (d as f64 / 60.0)) as u8,
        60..=180 => 255,
        181..=239 => (255.0 * ((240 - d) as f64 / 60.0)) as u8,
        _ => 0,
    }
}

/// Color at `degrees` on the wheel
pub fn wheel(degrees: u32) -> Rgb {
    Rgb(
        channel(degrees + RED_OFFSET),
        channel(degrees + GREEN_OFFSET),
        channel(degrees + BLUE_OFFSET),
    )
}

/// One color per disk, indexed by rank
pub fn disk_colors(num_disks: usize) -> Vec<Rgb> {
    if num_disks == 0 {
        return Vec::new();
    }
    let step = 360 / num_disks as u32;
    (1..=num_disks as u32).map(|i| wheel(step * i)).collect()
}
