//! Error types for PPM file parsing.
//!
//! This module provides the unified [`PpmError`] type used by every parsing
//! stage of the decoder, plus the small enums naming which field or track an
//! error refers to.
//!
//! # Examples
//!
//! ```no_run
//! use flipnote_types::file::{PpmError, ppm::File};
//!
//! fn load(path: &str) -> Result<File, PpmError> {
//!     File::open(path)
//! }
//!
//! fn handle_error(err: PpmError) {
//!     match err {
//!         PpmError::InvalidMagic { .. } => println!("not a PPM file"),
//!         PpmError::TruncatedFrame { index } => println!("frame {index} is damaged"),
//!         other => println!("decode failed: {other}"),
//!     }
//! }
//! ```

use thiserror::Error;

/// Unified error type for PPM decoding.
#[derive(Debug, Error)]
pub enum PpmError {
	/// Not enough data to read the requested range
	#[error(
		"insufficient data at offset 0x{offset:06X} (expected {expected} bytes, {available} available)"
	)]
	InsufficientData {
		/// Absolute file offset of the failed read
		offset: usize,
		/// Number of bytes requested
		expected: usize,
		/// Number of bytes actually available
		available: usize,
	},

	/// File does not begin with the "PARA" magic
	#[error("invalid magic number (expected {expected:02X?}, got {actual:02X?})")]
	InvalidMagic {
		/// Expected magic bytes
		expected: [u8; 4],
		/// Actual bytes at offset 0
		actual: [u8; 4],
	},

	/// An author ID field does not match the console ID pattern
	#[error("{which} author ID {id:?} is not valid")]
	InvalidAuthorId {
		/// Which of the three author ID fields failed
		which: AuthorIdKind,
		/// The rendered ID string that failed validation
		id: String,
	},

	/// A filename field does not match the flipnote filename pattern
	#[error("{which} file name {name:?} is not valid")]
	InvalidFileName {
		/// Which of the two filename fields failed
		which: FileNameKind,
		/// The rendered filename that failed validation
		name: String,
	},

	/// Frame data ends before the line decode is complete
	#[error("frame {index} is truncated")]
	TruncatedFrame {
		/// Index of the frame that could not be decoded
		index: usize,
	},

	/// An audio track payload is shorter than its advertised length
	#[error("{track} track is truncated (expected {expected} bytes, {available} available)")]
	TruncatedAudio {
		/// Which track could not be read
		track: SoundTrack,
		/// Advertised payload length
		expected: usize,
		/// Bytes actually available
		available: usize,
	},

	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl PpmError {
	/// Returns true if this is an I/O or short-read error
	pub fn is_io_error(&self) -> bool {
		matches!(self, Self::Io(_) | Self::InsufficientData { .. })
	}

	/// Returns true if this error refers to damaged frame or audio payloads
	pub fn is_truncation(&self) -> bool {
		matches!(self, Self::TruncatedFrame { .. } | Self::TruncatedAudio { .. })
	}

	/// Create an insufficient data error
	pub fn insufficient_data(offset: usize, expected: usize, available: usize) -> Self {
		Self::InsufficientData {
			offset,
			expected,
			available,
		}
	}
}

/// Identifies which author ID field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorIdKind {
	/// The original author (offset 0x56)
	Original,
	/// The last-edited author (offset 0x5E)
	LastEdited,
	/// The previous editing author (offset 0x8A)
	PreviousEditing,
}

impl std::fmt::Display for AuthorIdKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			AuthorIdKind::Original => write!(f, "original"),
			AuthorIdKind::LastEdited => write!(f, "last-edited"),
			AuthorIdKind::PreviousEditing => write!(f, "previous-editing"),
		}
	}
}

/// Identifies which filename field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileNameKind {
	/// The current filename (parts at 0x78/0x7B/0x8E)
	Current,
	/// The original filename (parts at 0x66/0x69/0x7C)
	Original,
}

impl std::fmt::Display for FileNameKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			FileNameKind::Current => write!(f, "current"),
			FileNameKind::Original => write!(f, "original"),
		}
	}
}

/// Identifies one of the four audio tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundTrack {
	/// Background music
	Bgm,
	/// Sound effect 1
	Sfx1,
	/// Sound effect 2
	Sfx2,
	/// Sound effect 3
	Sfx3,
}

impl std::fmt::Display for SoundTrack {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			SoundTrack::Bgm => write!(f, "BGM"),
			SoundTrack::Sfx1 => write!(f, "SFX1"),
			SoundTrack::Sfx2 => write!(f, "SFX2"),
			SoundTrack::Sfx3 => write!(f, "SFX3"),
		}
	}
}
