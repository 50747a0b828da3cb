//! Shared building blocks for TicTacGo: the three-in-a-row rules engine, its
//! board abstraction, and the logging and configuration plumbing used by the
//! command line driver.

pub mod config;
pub mod games;
pub mod identifiers;
pub mod logger;

pub use identifiers::*;
