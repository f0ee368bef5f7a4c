pub mod calculator;
pub mod commands;
pub mod config;
pub mod duration;
pub mod error;
pub mod logging;
pub mod platform;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use calculator::{Calculation, Operation, compute, evaluate};
pub use duration::{Duration, SignedDuration};
pub use error::TimeCalcError;

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
