//! Requested-then-fallback theme resolution.

mod resolve;


pub use resolve::{Resolution, ThemeResolver};
