//! Prelude module for `flipnote_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use flipnote_internal::prelude::*;
//!
//! let config = OpenConfig::default();
//! let decoder = ImaAdpcmDecoder::new();
//! let _ = (config, decoder);
//! ```

// Re-export everything from flipnote_types::prelude
#[doc(inline)]
pub use flipnote_types::prelude::*;

// Re-export the entire flipnote_types module for advanced usage
#[doc(inline)]
pub use flipnote_types;
