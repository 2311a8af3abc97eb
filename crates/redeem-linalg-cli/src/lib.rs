//! redeem-linalg-cli: command line front end for `redeem-linalg`.
//!
//! The argument parser, config loading and the command runners live here so
//! they can be exercised from tests without spawning the binary.
pub mod cli;
pub mod commands;
pub mod input;
