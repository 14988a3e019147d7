//! Internal crate for `flipnote-rs`.
//!
//! This module is separated into its own crate so the `flipnote-rs` facade
//! stays a pure re-export, and should not be used directly.
//!
//! # Examples
//!
//! ```rust
//! use flipnote_internal::prelude::*;
//!
//! let config = OpenConfig::metadata_only();
//! assert!(config.skip_frames);
//! ```

/// `use flipnote_internal::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export flipnote_types for convenience
pub use flipnote_types;

pub use flipnote_types::file::ppm::File as PpmFile;
pub use flipnote_types::file::{OpenConfig, PpmError};
