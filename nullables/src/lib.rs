//! Nullable infrastructure for deterministic testing.
//!
//! Draws depend on exactly one external resource, the random byte source.
//! This crate provides controllable stand-ins that:
//! - Return scripted or constant bytes
//! - Record what was requested of them
//! - Never touch the OS entropy pool
//!
//! Usage: pass a nullable wherever a `&mut dyn RandomSource` is expected.

pub mod random;

pub use random::{NullRandom, ZeroRandom};
