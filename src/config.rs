//! Command-line configuration
//!
//! [`Cli`] is parsed with clap. [`Config::resolve`] turns it into a validated
//! [`Config`], prompting for the disk count when it was not given.

use crate::errors::SetupError;
use crate::puzzle::PegId;
use clap::{Parser, ValueEnum};
use dialoguer::Input;
use std::path::PathBuf;
use std::time::Duration;

/// Largest disk count accepted; beyond this the animation takes too long
pub const MAX_DISKS: usize = 10;

/// Default pause between frames
pub const DEFAULT_DELAY_MS: u64 = 1000;

#[derive(Debug, Parser)]
#[command(author, version, about = "Tower of Hanoi, solved with a binary counter", long_about = None)]
pub struct Cli {
    /// Number of disks (prompted for when omitted)
    #[arg(short = 'n', long)]
    pub disks: Option<usize>,

    /// Peg that should end up holding the tower
    #[arg(long, value_enum)]
    pub goal: Option<GoalArg>,

    /// Pause between frames, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Print frames as text instead of opening the TUI
    #[arg(long)]
    pub headless: bool,

    /// Disable colored text output
    #[arg(long)]
    pub no_color: bool,

    /// Where to write the log
    #[arg(long, default_value = "hanoi.log")]
    pub log_file: PathBuf,

    /// Log every move
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GoalArg {
    Middle,
    Right,
}

impl From<GoalArg> for PegId {
    fn from(goal: GoalArg) -> Self {
        match goal {
            GoalArg::Middle => PegId::Middle,
            GoalArg::Right => PegId::Right,
        }
    }
}

/// Validated run settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub num_disks: usize,
    /// `None` means the peg the tower reaches in the fewest moves
    pub goal: Option<PegId>,
    pub delay: Duration,
    pub headless: bool,
    pub color: bool,
    pub log_file: PathBuf,
    pub verbose: bool,
}

impl Config {
    /// Validate `cli`, prompting on stdin for a missing disk count
    pub fn resolve(cli: Cli) -> Result<Self, SetupError> {
        let num_disks = match cli.disks {
            Some(n) => validate_disks(n)?,
            None => prompt_disks()?,
        };
        Ok(Self::with_disks(cli, num_disks))
    }

    /// Validate `cli` when the disk count must be given on the command line
    pub fn from_cli(cli: Cli) -> Result<Self, SetupError> {
        let num_disks = validate_disks(cli.disks.unwrap_or(0))?;
        Ok(Self::with_disks(cli, num_disks))
    }

    fn with_disks(cli: Cli, num_disks: usize) -> Self {
        Config {
            num_disks,
            goal: cli.goal.map(PegId::from),
            delay: Duration::from_millis(cli.delay_ms),
            headless: cli.headless,
            color: !cli.no_color,
            log_file: cli.log_file,
            verbose: cli.verbose,
        }
    }
}

/// Accept `1..=MAX_DISKS`
pub fn validate_disks(n: usize) -> Result<usize, SetupError> {
    if n == 0 || n > MAX_DISKS {
        return Err(SetupError::InvalidDiskCount {
            requested: n,
            max: MAX_DISKS,
        });
    }
    Ok(n)
}

fn prompt_disks() -> Result<usize, SetupError> {
    let input: String = Input::new()
        .with_prompt(format!("Enter the number of disks [1 ... {}]", MAX_DISKS))
        .validate_with(|i: &String| -> Result<(), String> {
            let n = i
                .trim()
                .parse::<usize>()
                .map_err(|_| String::from("Enter a positive integer"))?;
            validate_disks(n).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(|e| SetupError::Prompt {
            message: e.to_string(),
        })?;

    input.trim().parse::<usize>().map_err(|e| SetupError::Prompt {
        message: e.to_string(),
    })
}
