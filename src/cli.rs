//! Command-line interface for simply_tictactoe.

use crate::tui::Options;
use clap::{Parser, ValueEnum};
use simply_tictactoe::{GameMode, THINKING_DELAY};
use std::time::Duration;

/// Simply Tic-Tac-Toe - play in the terminal
#[derive(Parser, Debug)]
#[command(name = "simply_tictactoe")]
#[command(about = "Terminal tic-tac-toe with a random computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Opponent mode
    #[arg(short, long, value_enum, default_value_t = ModeArg::Pvp)]
    pub mode: ModeArg,

    /// Fixed seed for the computer opponent (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Computer "thinking" delay in milliseconds
    #[arg(long, default_value_t = THINKING_DELAY.as_millis() as u64)]
    pub delay_ms: u64,
}

/// Who plays O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Two humans at one keyboard
    Pvp,
    /// Human (X) against the computer (O)
    Pvc,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pvp => GameMode::HumanVsHuman,
            ModeArg::Pvc => GameMode::HumanVsComputer,
        }
    }
}

impl Cli {
    /// Resolves the parsed arguments into runtime options.
    pub fn into_options(self) -> Options {
        Options {
            mode: self.mode.into(),
            seed: self.seed,
            delay: Duration::from_millis(self.delay_ms),
        }
    }
}
