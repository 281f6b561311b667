//! Core types and definitions for QUICKDRAW.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, events, state snapshots, difficulty profiles
//! and constants. It has no dependency on any runtime or presentation layer.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod profiles;
pub mod scoring;
pub mod state;
pub mod types;
