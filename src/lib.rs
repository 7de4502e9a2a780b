//! # site-enhance
//!
//! Progressive-enhancement layer for a static site, compiled to WASM.
//! Wires navigation highlighting, scroll-triggered entrance animations,
//! and a persisted light/dark theme onto existing markup, plus a small
//! set of standalone browser utilities.
//!
//! DESIGN
//! ======
//! Decision logic (path matching, theme state, debounce/throttle timing,
//! the reveal state machine) is plain Rust and unit-tested natively.
//! Everything that touches the DOM sits behind the `web` feature and
//! degrades to a no-op elsewhere, so the crate compiles and tests on any
//! target.

pub mod boot;
pub mod nav;
pub mod reveal;
pub mod theme;
pub mod util;
