//! ATS resume scorer library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use error::{Result, AtsError};
pub use config::Config;
pub use processing::analyzer::ATSAnalyzer;
pub use processing::score::ATSScore;
