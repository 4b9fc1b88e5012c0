#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! civetw — expose the CIVET MRI processing pipeline as a
//! containerized-workflow plugin from the CLI.
//!
//! The wrapper translates clap-style flags one-to-one into the single-dash
//! syntax of the externally installed `CIVET_Processing_Pipeline` executable
//! and launches it as a synchronous subprocess. It performs no validation of
//! flag semantics; the pipeline rejects bad input itself.

pub mod assemble;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod errors;
pub mod exec;
pub mod helpgen;
pub mod types;
