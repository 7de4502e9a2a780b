//! Standalone helpers, each independent of the page components and of
//! one another.

pub mod clipboard;
pub mod date_format;
pub mod debounce;
pub mod fallback;
pub mod perf;
pub mod sanitize;
pub mod scroll;
pub mod throttle;
