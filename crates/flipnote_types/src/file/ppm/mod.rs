//! PPM (Flipnote Studio animation) file format support.
//!
//! A PPM file is a self-contained container bundling identity and authorship
//! metadata, a 64x48 preview thumbnail, up to 999 delta-compressed 256x192
//! two-layer frames, and four ADPCM sound tracks with a per-frame trigger
//! table.
//!
//! # File Structure
//!
//! - **Header (0x00-0x9F):** magic, section sizes, frame count, lock flag,
//!   author names and console IDs, filenames, timestamp
//! - **Thumbnail (0xA0-0x69F):** 1536-byte tiled 4bpp preview bitmap
//! - **Animation data (0x6A0):** frame offset table followed by per-frame
//!   line-encoded layer data
//! - **Sound data:** per-frame SFX trigger table, 4-aligned sound header,
//!   then the four ADPCM track payloads
//!
//! Frames are decoded in index order because every non-key frame is an XOR
//! delta against its predecessor.
//!
//! # Usage Examples
//!
//! ## Loading a PPM file
//!
//! ```no_run
//! use flipnote_types::file::ppm::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let flipnote = File::open("samplememo.ppm")?;
//!
//! println!("{} by {}", flipnote.file_name(), flipnote.author_name());
//! println!("frames: {}", flipnote.frame_data().frames.len());
//! println!("BGM samples: {}", flipnote.sound_data().bgm.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Skipping expensive sections
//!
//! ```no_run
//! use flipnote_types::file::{OpenConfig, ppm::File};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Metadata and thumbnail only, for a gallery listing
//! let flipnote = File::open_with("samplememo.ppm", &OpenConfig::metadata_only())?;
//! assert!(flipnote.frame_data().frames.is_empty());
//! # Ok(())
//! # }
//! ```

use log::{debug, warn};

use crate::file::{PpmError, SoundTrack};

pub mod adpcm;
pub mod constants;
pub mod frame;
pub mod image;
pub mod meta;
pub mod parse_config;
pub mod reader;
pub mod sound;
pub mod thumbnail;

pub use adpcm::{AdpcmDecoder, ImaAdpcmDecoder};
pub use frame::{Frame, FrameData};
pub use image::{Color, Image};
pub use meta::Metadata;
pub use parse_config::OpenConfig;
pub use reader::Reader;
pub use sound::{SfxTriggers, SoundData, SoundMeta, TrackSlice};

/// A decoded PPM file.
///
/// All contents are materialized during [`File::from_bytes`]; nothing is
/// decoded lazily and nothing is mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct File {
	meta: Metadata,
	frame_data: FrameData,
	sound_data: SoundData,
}

impl File {
	/// Opens and fully decodes a PPM file from the specified path.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read, fails validation, or
	/// contains truncated frame or audio data.
	pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, PpmError> {
		let data = std::fs::read(path)?;
		Self::from_bytes(&data)
	}

	/// Opens a PPM file with the given parse configuration.
	pub fn open_with(
		path: impl AsRef<std::path::Path>,
		config: &OpenConfig,
	) -> Result<Self, PpmError> {
		let data = std::fs::read(path)?;
		Self::from_bytes_with(&data, config)
	}

	/// Decodes a PPM file from any reader.
	pub fn from_reader<R: std::io::Read>(mut reader: R) -> Result<Self, PpmError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(&data)
	}

	/// Decodes a PPM file from a byte slice with full validation.
	pub fn from_bytes(data: &[u8]) -> Result<Self, PpmError> {
		Self::from_bytes_with(data, &OpenConfig::default())
	}

	/// Decodes a PPM file from a byte slice with the given configuration.
	///
	/// Decoding is fail-fast: the first validation or I/O error aborts and
	/// no partial result is returned. Fields named by a skip flag are left
	/// at their zero value.
	pub fn from_bytes_with(data: &[u8], config: &OpenConfig) -> Result<Self, PpmError> {
		let reader = Reader::new(data);

		let actual: [u8; 4] = reader.read_array_at(0)?;
		if !config.skip_magic_check && actual != constants::MAGIC {
			return Err(PpmError::InvalidMagic {
				expected: constants::MAGIC,
				actual,
			});
		}

		let mut frame_data = FrameData::default();
		let mut sound_data = SoundData::default();

		if !config.skip_animation_size {
			frame_data.animation_size = reader.read_u32_le_at(constants::ANIMATION_SIZE_OFFSET)?;
		}
		if !config.skip_audio_size {
			sound_data.size = reader.read_u32_le_at(constants::AUDIO_SIZE_OFFSET)?;
		}
		if !config.skip_frame_count {
			// The file stores count - 1; 0xFFFF clamps to the 999 maximum
			let raw = reader.read_u16_le_at(constants::FRAME_COUNT_OFFSET)?;
			frame_data.frame_count =
				(u32::from(raw) + 1).min(u32::from(constants::MAX_FRAME_COUNT)) as u16;
		}
		if !config.skip_preview_frame_n {
			frame_data.preview_frame_index = reader.read_u8_at(constants::PREVIEW_FRAME_OFFSET)?;
		}

		let meta = Metadata::parse(&reader, config)?;

		if !config.skip_thumbnail {
			let bitmap = reader.read_at(constants::THUMBNAIL_OFFSET, constants::THUMBNAIL_LEN)?;
			frame_data.preview_bitmap = bitmap.to_vec();
			frame_data.preview_thumbnail = Some(thumbnail::decode(bitmap)?);
		}

		if !config.skip_frame_data && frame_data.frame_count > 0 {
			Self::decode_frame_section(data, config, &mut frame_data)?;
		}

		if !config.skip_audio_data {
			Self::decode_sound_section(data, &frame_data, &mut sound_data)?;
		}

		debug!("finished decoding flipnote {}", meta.file_name);
		Ok(Self {
			meta,
			frame_data,
			sound_data,
		})
	}

	/// Reads the frame offset table and decodes the frame chain.
	fn decode_frame_section(
		data: &[u8],
		config: &OpenConfig,
		frame_data: &mut FrameData,
	) -> Result<(), PpmError> {
		// Frames must not read past the animation region; clamping the view
		// turns escapes into truncation errors
		let region_end =
			(constants::ANIMATION_SECTION_OFFSET + frame_data.animation_size as usize)
				.min(data.len());
		let mut region = Reader::new(&data[..region_end]);

		frame_data.frame_offsets = frame::read_frame_offsets(&mut region, frame_data.frame_count)?;
		if config.skip_frames {
			return Ok(());
		}

		debug!("decoding {} frames", frame_data.frame_count);
		frame_data.frames = Vec::with_capacity(frame_data.frame_count as usize);

		let mut prev: Option<frame::UnpackedFrame> = None;
		for (index, &offset) in frame_data.frame_offsets.iter().enumerate() {
			let mut unpacked = frame::decode_frame(&mut region, offset, index)?;
			if index == 0 && !unpacked.is_key_frame {
				warn!("frame 0 is not a key frame");
			}
			// Key frames are absolute; the predecessor stays untouched but
			// unused for them
			if !unpacked.is_key_frame {
				if let Some(prev) = &prev {
					unpacked.apply_delta(prev);
				}
			}
			frame_data.frames.push(Frame {
				image: unpacked.to_image(),
				is_key_frame: unpacked.is_key_frame,
				is_translated: unpacked.is_translated,
				translate_x: unpacked.translate_x,
				translate_y: unpacked.translate_y,
			});
			prev = Some(unpacked);
		}
		Ok(())
	}

	/// Reads the trigger table and sound header, then decodes all four tracks.
	fn decode_sound_section(
		data: &[u8],
		frame_data: &FrameData,
		sound_data: &mut SoundData,
	) -> Result<(), PpmError> {
		let mut reader = Reader::new(data);
		sound_data.sfx_flags =
			sound::read_sfx_flags(&mut reader, frame_data.animation_size, frame_data.frame_count)?;
		sound_data.meta = sound::parse_sound_header(
			&mut reader,
			frame_data.animation_size,
			frame_data.frame_count,
		)?;

		debug!("decoding sound tracks");
		let meta = sound_data.meta;
		sound_data.bgm =
			sound::decode_track(&reader, meta.bgm, SoundTrack::Bgm, &mut ImaAdpcmDecoder::new())?;
		sound_data.sfx1 =
			sound::decode_track(&reader, meta.sfx1, SoundTrack::Sfx1, &mut ImaAdpcmDecoder::new())?;
		sound_data.sfx2 =
			sound::decode_track(&reader, meta.sfx2, SoundTrack::Sfx2, &mut ImaAdpcmDecoder::new())?;
		sound_data.sfx3 =
			sound::decode_track(&reader, meta.sfx3, SoundTrack::Sfx3, &mut ImaAdpcmDecoder::new())?;
		Ok(())
	}

	/// Returns true when the flipnote is locked against editing.
	pub fn locked(&self) -> bool {
		self.meta.locked
	}

	/// Returns the creation timestamp as Unix seconds.
	pub fn date_unix(&self) -> i64 {
		self.meta.date_unix
	}

	/// Returns the current author name.
	pub fn author_name(&self) -> &str {
		&self.meta.author_name
	}

	/// Returns the original author name.
	pub fn original_author_name(&self) -> &str {
		&self.meta.original_author_name
	}

	/// Returns the last-edited author name.
	pub fn last_edited_author_name(&self) -> &str {
		&self.meta.last_edited_author_name
	}

	/// Returns the current filename.
	pub fn file_name(&self) -> &str {
		&self.meta.file_name
	}

	/// Returns the full authorship metadata.
	pub fn metadata(&self) -> &Metadata {
		&self.meta
	}

	/// Returns the decoded animation data.
	pub fn frame_data(&self) -> &FrameData {
		&self.frame_data
	}

	/// Returns the decoded audio data.
	pub fn sound_data(&self) -> &SoundData {
		&self.sound_data
	}
}

impl std::fmt::Display for File {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"PPM File: {} by {}, {} frames",
			self.meta.file_name, self.meta.author_name, self.frame_data.frame_count
		)
	}
}
