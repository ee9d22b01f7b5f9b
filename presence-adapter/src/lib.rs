//! Adapter utilities for the `presence` crate.
//!
//! The `presence` crate is UI-agnostic and focuses on the core diffing and lifecycle state.
//! This crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A render-loop [`Controller`] that wires reconciliation, exit timers, and the
//!   out-of-band render request together
//! - A timed [`ExitSchedule`] for hosts without an animation system of their own,
//!   standing in for the transition primitive that reports finished hide animations
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod key;
mod schedule;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use key::ReconcilerKey;
pub use schedule::{ExitSchedule, ExitTimer};
