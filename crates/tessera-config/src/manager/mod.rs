//! Theme manager service.
//!
//! Owns the memoized registry and the theme cache for one themes root.
//! Construct one per application and share it behind an `Arc`.

mod service;


pub use service::ThemeManager;
