//! This crate provides core data types and file format support for the
//! `flipnote-rs` project.
//!
//! # File Formats
//!
//! - **PPM**: Flipnote Studio animation container bundling authorship
//!   metadata, a 4bpp preview thumbnail, delta-compressed two-layer frames,
//!   and four ADPCM sound tracks
//!
//! # Examples
//!
//! ```no_run
//! use flipnote_types::file::ppm::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let flipnote = File::open("samplememo.ppm")?;
//!
//! println!("Author: {}", flipnote.author_name());
//! println!("Frames: {}", flipnote.frame_data().frames.len());
//! # Ok(())
//! # }
//! ```

pub mod file;
pub mod prelude;

// Re-export commonly used file types at crate root for convenience
pub use file::{
	AuthorIdKind, FileNameKind, OpenConfig, PpmError, SoundTrack,
	ppm::{File as PpmFile, Frame, FrameData, SoundData},
};
