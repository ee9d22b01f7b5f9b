//! A headless enter/exit transition reconciler for keyed item collections.
//!
//! For adapter-level utilities (render-loop controller, timed exit schedules), see the
//! `presence-adapter` crate.
//!
//! This crate focuses on the core lifecycle algorithm needed to animate items out of a
//! changing list: diffing the keys requested this cycle against the keys currently shown,
//! keeping removed items around in a hidden state until their exit animation completes, and
//! requesting one extra render once all pending exits have drained.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the ordered node collection for each render cycle
//! - a transition primitive that plays show/hide animations
//! - an `exit complete` call once a hide animation has fully finished
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod key;
mod options;
mod reconciler;
mod types;


pub use options::{DiagnosticCallback, ReconcilerOptions, RenderRequestCallback};
pub use reconciler::{Reconciler, filter_nodes};
pub use types::{Diagnostic, DisplayFlags, ExitCompletion, ItemKey, Node, RenderedItem};

#[doc(hidden)]
pub use key::PresenceKey;
