//! Prelude module for `flipnote_types`.
//!
//! This module provides a convenient way to import commonly used types,
//! traits, and constants.
//!
//! # Examples
//!
//! ```
//! use flipnote_types::prelude::*;
//!
//! let config = OpenConfig::metadata_only();
//! let decoder = ImaAdpcmDecoder::new();
//! let _ = (config, decoder);
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	AuthorIdKind,
	FileNameKind,
	// Configuration
	OpenConfig,
	// Errors
	PpmError,
	SoundTrack,
};

// PPM types
#[doc(inline)]
pub use crate::file::ppm::{
	AdpcmDecoder, Color, File as PpmFile, Frame, FrameData, Image, ImaAdpcmDecoder, Metadata,
	SfxTriggers, SoundData, SoundMeta, TrackSlice,
};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
