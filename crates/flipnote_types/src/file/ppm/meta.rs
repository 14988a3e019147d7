//! Authorship metadata parsing.
//!
//! The metadata block sits at fixed offsets in the file prefix: lock flag,
//! three UTF-16LE author names, three console IDs, the current and original
//! filenames (each stored as three parts), the partial filename, and the
//! creation timestamp.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::file::{AuthorIdKind, FileNameKind, PpmError};

use super::constants;
use super::parse_config::OpenConfig;
use super::reader::Reader;

/// Console ID pattern shared by all three author ID fields.
static AUTHOR_ID_REGEX: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^[0159][0-9A-F]{6}0[0-9A-F]{8}$").unwrap());

/// Flipnote filename pattern: 6 hex digits, 13 hex digits, 3 decimal digits.
static FILE_NAME_REGEX: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^[0-9A-F]{6}_[0-9A-F]{13}_[0-9]{3}$").unwrap());

/// Authorship and identity metadata of a flipnote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
	/// Lock flag (a locked flipnote cannot be edited by other authors)
	pub locked: bool,
	/// Creation timestamp as Unix seconds
	pub date_unix: i64,
	/// Current author name
	pub author_name: String,
	/// Original author name
	pub original_author_name: String,
	/// Last-edited author name
	pub last_edited_author_name: String,
	/// Original author console ID (16 uppercase hex digits)
	pub original_author_id: String,
	/// Last-edited author console ID
	pub last_edited_author_id: String,
	/// Previous editing author console ID
	pub previous_editing_author_id: String,
	/// Current filename (`XXXXXX_XXXXXXXXXXXXX_NNN`)
	pub file_name: String,
	/// Original filename
	pub original_file_name: String,
	/// Partial filename (8 raw bytes, lossily decoded)
	pub partial_file_name: String,
}

impl Metadata {
	/// Parses the metadata block from the file prefix.
	///
	/// # Errors
	///
	/// Returns an error if a field lies outside the data, or if an author ID
	/// or filename fails its pattern check and the corresponding skip flag is
	/// not set.
	pub fn parse(reader: &Reader<'_>, config: &OpenConfig) -> Result<Self, PpmError> {
		let mut meta = Self::default();

		if !config.skip_lock_status {
			meta.locked = reader.read_u16_le_at(constants::LOCK_OFFSET)? != 0;
		}

		if !config.skip_original_author_name {
			meta.original_author_name =
				read_author_name(reader, constants::ORIGINAL_AUTHOR_NAME_OFFSET)?;
		}
		if !config.skip_last_edited_author_name {
			meta.last_edited_author_name =
				read_author_name(reader, constants::LAST_EDITED_AUTHOR_NAME_OFFSET)?;
		}
		if !config.skip_author_name {
			meta.author_name = read_author_name(reader, constants::AUTHOR_NAME_OFFSET)?;
		}

		if !config.skip_original_author_id {
			meta.original_author_id = read_author_id(
				reader,
				constants::ORIGINAL_AUTHOR_ID_OFFSET,
				AuthorIdKind::Original,
				config.skip_original_author_id_check,
			)?;
		}
		if !config.skip_last_edited_author_id {
			meta.last_edited_author_id = read_author_id(
				reader,
				constants::LAST_EDITED_AUTHOR_ID_OFFSET,
				AuthorIdKind::LastEdited,
				config.skip_last_edited_author_id_check,
			)?;
		}
		if !config.skip_previous_editing_author_id {
			meta.previous_editing_author_id = read_author_id(
				reader,
				constants::PREVIOUS_EDITING_AUTHOR_ID_OFFSET,
				AuthorIdKind::PreviousEditing,
				config.skip_previous_editing_author_id_check,
			)?;
		}

		if !config.skip_original_file_name {
			meta.original_file_name = read_file_name(
				reader,
				constants::ORIGINAL_FILE_NAME_OFFSETS,
				FileNameKind::Original,
				config.skip_original_file_name_check,
			)?;
		}
		if !config.skip_file_name {
			meta.file_name = read_file_name(
				reader,
				constants::FILE_NAME_OFFSETS,
				FileNameKind::Current,
				config.skip_file_name_check,
			)?;
		}
		if !config.skip_partial_file_name {
			let bytes = reader
				.read_at(constants::PARTIAL_FILE_NAME_OFFSET, constants::PARTIAL_FILE_NAME_LEN)?;
			meta.partial_file_name = String::from_utf8_lossy(bytes).into_owned();
		}

		if !config.skip_date {
			let raw = reader.read_u32_le_at(constants::DATE_OFFSET)?;
			meta.date_unix = i64::from(raw) + constants::EPOCH_2000_OFFSET;
		}

		Ok(meta)
	}
}

/// Decodes a 22-byte UTF-16LE author name, trimming trailing NULs.
fn read_author_name(reader: &Reader<'_>, offset: usize) -> Result<String, PpmError> {
	let bytes = reader.read_at(offset, constants::AUTHOR_NAME_LEN)?;
	let (decoded, _, _) = encoding_rs::UTF_16LE.decode(bytes);
	Ok(decoded.trim_end_matches('\u{0}').to_string())
}

/// Reads an 8-byte console ID and renders it as 16 uppercase hex digits.
///
/// The ID is stored little-endian, so the display form is the raw bytes in
/// reverse order.
fn read_author_id(
	reader: &Reader<'_>,
	offset: usize,
	which: AuthorIdKind,
	skip_check: bool,
) -> Result<String, PpmError> {
	let bytes: [u8; 8] = reader.read_array_at(offset)?;
	let id: String = bytes.iter().rev().map(|b| format!("{b:02X}")).collect();

	if !skip_check && !AUTHOR_ID_REGEX.is_match(&id) {
		return Err(PpmError::InvalidAuthorId {
			which,
			id,
		});
	}
	Ok(id)
}

/// Assembles a filename from its three stored parts.
///
/// Part one is 3 raw bytes rendered as hex, part two is 13 ASCII characters,
/// part three is a little-endian u16 edit counter rendered as 3 decimal
/// digits.
fn read_file_name(
	reader: &Reader<'_>,
	offsets: (usize, usize, usize),
	which: FileNameKind,
	skip_check: bool,
) -> Result<String, PpmError> {
	let part1 = reader.read_at(offsets.0, 3)?;
	let part2 = reader.read_at(offsets.1, 13)?;
	let part3 = reader.read_u16_le_at(offsets.2)?;

	let prefix: String = part1.iter().map(|b| format!("{b:02X}")).collect();
	let body = String::from_utf8_lossy(part2);
	let name = format!("{prefix}_{body}_{part3:03}");

	if !skip_check && !FILE_NAME_REGEX.is_match(&name) {
		return Err(PpmError::InvalidFileName {
			which,
			name,
		});
	}
	Ok(name)
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Builds a metadata block with valid IDs, filenames and names.
	fn sample_header() -> Vec<u8> {
		let mut data = vec![0u8; 0x06A0];

		// Lock flag
		data[constants::LOCK_OFFSET] = 0x01;

		// Author names: "A" / "BC" / "D" in UTF-16LE
		data[constants::ORIGINAL_AUTHOR_NAME_OFFSET] = b'A';
		data[constants::LAST_EDITED_AUTHOR_NAME_OFFSET] = b'B';
		data[constants::LAST_EDITED_AUTHOR_NAME_OFFSET + 2] = b'C';
		data[constants::AUTHOR_NAME_OFFSET] = b'D';

		// Author IDs: stored reversed, rendered "5607006012345678"
		let id_bytes = [0x78, 0x56, 0x34, 0x12, 0x60, 0x00, 0x07, 0x56];
		data[constants::ORIGINAL_AUTHOR_ID_OFFSET..constants::ORIGINAL_AUTHOR_ID_OFFSET + 8]
			.copy_from_slice(&id_bytes);
		data[constants::LAST_EDITED_AUTHOR_ID_OFFSET..constants::LAST_EDITED_AUTHOR_ID_OFFSET + 8]
			.copy_from_slice(&id_bytes);
		data[constants::PREVIOUS_EDITING_AUTHOR_ID_OFFSET
			..constants::PREVIOUS_EDITING_AUTHOR_ID_OFFSET + 8]
			.copy_from_slice(&id_bytes);

		// Filenames: prefix F1A2B3, body "0123456789ABC", counter 7
		for offsets in [constants::ORIGINAL_FILE_NAME_OFFSETS, constants::FILE_NAME_OFFSETS] {
			data[offsets.0..offsets.0 + 3].copy_from_slice(&[0xF1, 0xA2, 0xB3]);
			data[offsets.1..offsets.1 + 13].copy_from_slice(b"0123456789ABC");
			data[offsets.2..offsets.2 + 2].copy_from_slice(&7u16.to_le_bytes());
		}

		// Partial filename
		data[constants::PARTIAL_FILE_NAME_OFFSET..constants::PARTIAL_FILE_NAME_OFFSET + 8]
			.copy_from_slice(b"F1A2B3_0");

		// Timestamp: 100 seconds past the 2000 epoch
		data[constants::DATE_OFFSET..constants::DATE_OFFSET + 4]
			.copy_from_slice(&100u32.to_le_bytes());

		data
	}

	#[test]
	fn test_parse_sample_header() {
		let data = sample_header();
		let reader = Reader::new(&data);
		let meta = Metadata::parse(&reader, &OpenConfig::default()).unwrap();

		assert!(meta.locked);
		assert_eq!(meta.original_author_name, "A");
		assert_eq!(meta.last_edited_author_name, "BC");
		assert_eq!(meta.author_name, "D");
		assert_eq!(meta.original_author_id, "5607006012345678");
		assert_eq!(meta.file_name, "F1A2B3_0123456789ABC_007");
		assert_eq!(meta.partial_file_name, "F1A2B3_0");
		assert_eq!(meta.date_unix, 946_684_900);
	}

	#[test]
	fn test_invalid_author_id_rejected() {
		let mut data = sample_header();
		// First rendered digit comes from the LAST stored byte
		data[constants::ORIGINAL_AUTHOR_ID_OFFSET + 7] = 0x2A;

		let reader = Reader::new(&data);
		let err = Metadata::parse(&reader, &OpenConfig::default()).unwrap_err();
		match err {
			PpmError::InvalidAuthorId {
				which,
				id,
			} => {
				assert_eq!(which, AuthorIdKind::Original);
				assert!(id.starts_with("2A"));
			}
			_ => panic!("unexpected error: {err:?}"),
		}
	}

	#[test]
	fn test_invalid_author_id_skippable() {
		let mut data = sample_header();
		data[constants::ORIGINAL_AUTHOR_ID_OFFSET + 7] = 0x2A;

		let config = OpenConfig {
			skip_original_author_id_check: true,
			..OpenConfig::default()
		};
		let reader = Reader::new(&data);
		let meta = Metadata::parse(&reader, &config).unwrap();
		assert!(meta.original_author_id.starts_with("2A"));
	}

	#[test]
	fn test_invalid_file_name_rejected() {
		let mut data = sample_header();
		let offsets = constants::FILE_NAME_OFFSETS;
		data[offsets.1] = b'z'; // lowercase is not a hex digit

		let reader = Reader::new(&data);
		let err = Metadata::parse(&reader, &OpenConfig::default()).unwrap_err();
		match err {
			PpmError::InvalidFileName {
				which,
				..
			} => assert_eq!(which, FileNameKind::Current),
			_ => panic!("unexpected error: {err:?}"),
		}
	}

	#[test]
	fn test_counter_overflow_fails_pattern() {
		let mut data = sample_header();
		let offsets = constants::FILE_NAME_OFFSETS;
		data[offsets.2..offsets.2 + 2].copy_from_slice(&1000u16.to_le_bytes());

		let reader = Reader::new(&data);
		assert!(Metadata::parse(&reader, &OpenConfig::default()).is_err());
	}

	#[test]
	fn test_skipped_fields_stay_zero() {
		let data = sample_header();
		let config = OpenConfig {
			skip_author_name: true,
			skip_date: true,
			skip_lock_status: true,
			..OpenConfig::default()
		};
		let reader = Reader::new(&data);
		let meta = Metadata::parse(&reader, &config).unwrap();

		assert!(!meta.locked);
		assert_eq!(meta.author_name, "");
		assert_eq!(meta.date_unix, 0);
		// Unskipped fields still parse
		assert_eq!(meta.original_author_name, "A");
	}
}
