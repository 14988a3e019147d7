#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `flipnote-rs` decodes Flipnote Studio PPM animation files: authorship
//! metadata, the 4bpp preview thumbnail, delta-compressed frames, and the
//! four ADPCM sound tracks.
//!
//! # Examples
//!
//! ```no_run
//! use flipnote_rs::PpmFile;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let flipnote = PpmFile::open("samplememo.ppm")?;
//! println!("{} by {}", flipnote.file_name(), flipnote.author_name());
//! println!("{} frames", flipnote.frame_data().frames.len());
//! # Ok(())
//! # }
//! ```

pub use flipnote_internal::*;
