pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod hasher;
pub mod logging;
pub mod output;
pub mod report;
pub mod scanner;

pub use error::{FccError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_DRIFT_DETECTED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
