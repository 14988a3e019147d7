//! Sound data: header parsing, track decoding, and the SFX trigger table.
//!
//! The audio block sits after the frame region, aligned to 4 bytes. Its
//! 32-byte header carries the four track sizes and two playback speeds; the
//! track payloads follow contiguously in order BGM, SFX1, SFX2, SFX3.

use crate::file::{PpmError, SoundTrack};

use super::adpcm::AdpcmDecoder;
use super::constants::{ANIMATION_SECTION_OFFSET, SOUND_HEADER_LEN};
use super::reader::Reader;

/// Decoded audio data of a flipnote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoundData {
	/// Byte size of the audio section, from the file header
	pub size: u32,
	/// Track locations and playback speeds
	pub meta: SoundMeta,
	/// Background music PCM samples
	pub bgm: Vec<i16>,
	/// Sound effect 1 PCM samples
	pub sfx1: Vec<i16>,
	/// Sound effect 2 PCM samples
	pub sfx2: Vec<i16>,
	/// Sound effect 3 PCM samples
	pub sfx3: Vec<i16>,
	/// Per-frame sound effect triggers
	pub sfx_flags: Vec<SfxTriggers>,
}

/// Track locations and playback speeds from the sound header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SoundMeta {
	/// Background music payload location
	pub bgm: TrackSlice,
	/// Sound effect 1 payload location
	pub sfx1: TrackSlice,
	/// Sound effect 2 payload location
	pub sfx2: TrackSlice,
	/// Sound effect 3 payload location
	pub sfx3: TrackSlice,
	/// Playback frame rate selector (stored as `8 - value`)
	pub frame_speed: u8,
	/// Frame rate selector used when the BGM was recorded (stored as `8 - value`)
	pub bgm_speed: u8,
}

/// Absolute location of one track payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackSlice {
	/// Absolute file offset of the payload
	pub offset: u32,
	/// Payload length in bytes
	pub length: u32,
}

/// Sound effect trigger flags for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SfxTriggers {
	/// Play sound effect 1 on this frame
	pub sfx1: bool,
	/// Play sound effect 2 on this frame
	pub sfx2: bool,
	/// Play sound effect 3 on this frame
	pub sfx3: bool,
}

/// Computes the 4-aligned sound header offset.
pub(crate) fn sound_header_offset(animation_size: u32, frame_count: u16) -> usize {
	let offset = ANIMATION_SECTION_OFFSET + animation_size as usize + frame_count as usize;
	offset.next_multiple_of(4)
}

/// Parses the sound header and lays out the four track slices.
pub(crate) fn parse_sound_header(
	reader: &mut Reader<'_>,
	animation_size: u32,
	frame_count: u16,
) -> Result<SoundMeta, PpmError> {
	let header_offset = sound_header_offset(animation_size, frame_count);
	reader.seek(header_offset);

	let bgm_size = reader.read_u32_le()?;
	let sfx1_size = reader.read_u32_le()?;
	let sfx2_size = reader.read_u32_le()?;
	let sfx3_size = reader.read_u32_le()?;
	let frame_speed = 8u8.wrapping_sub(reader.read_u8()?);
	let bgm_speed = 8u8.wrapping_sub(reader.read_u8()?);
	// 14 reserved bytes follow; the payloads start at header + 32

	let mut offset = header_offset + SOUND_HEADER_LEN;
	let mut next_slice = |length: u32| {
		let slice = TrackSlice {
			offset: offset as u32,
			length,
		};
		offset += length as usize;
		slice
	};

	Ok(SoundMeta {
		bgm: next_slice(bgm_size),
		sfx1: next_slice(sfx1_size),
		sfx2: next_slice(sfx2_size),
		sfx3: next_slice(sfx3_size),
		frame_speed,
		bgm_speed,
	})
}

/// Reads the per-frame SFX trigger table at the end of the frame region.
///
/// One byte per frame; the low three bits are the SFX1..SFX3 triggers.
pub(crate) fn read_sfx_flags(
	reader: &mut Reader<'_>,
	animation_size: u32,
	frame_count: u16,
) -> Result<Vec<SfxTriggers>, PpmError> {
	reader.seek(ANIMATION_SECTION_OFFSET + animation_size as usize);
	let bytes = reader.read(frame_count as usize)?;
	Ok(bytes
		.iter()
		.map(|&byte| SfxTriggers {
			sfx1: byte & 0x01 != 0,
			sfx2: byte & 0x02 != 0,
			sfx3: byte & 0x04 != 0,
		})
		.collect())
}

/// Reads one track payload, fixes its nibble order, and decodes it.
///
/// PPM stores ADPCM nibbles with low and high reversed, so every byte is
/// swapped before it reaches the decoder.
pub(crate) fn decode_track(
	reader: &Reader<'_>,
	slice: TrackSlice,
	track: SoundTrack,
	decoder: &mut dyn AdpcmDecoder,
) -> Result<Vec<i16>, PpmError> {
	let bytes =
		reader.read_at(slice.offset as usize, slice.length as usize).map_err(|_| {
			PpmError::TruncatedAudio {
				track,
				expected: slice.length as usize,
				available: reader.len().saturating_sub(slice.offset as usize),
			}
		})?;

	let swapped: Vec<u8> = bytes.iter().map(|&byte| swap_nibbles(byte)).collect();
	Ok(decoder.decode(&swapped))
}

/// Swaps the two nibbles of a byte.
#[inline]
pub fn swap_nibbles(byte: u8) -> u8 {
	(byte << 4) | (byte >> 4)
}
