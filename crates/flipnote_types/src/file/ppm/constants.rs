//! PPM file format constants.

use super::image::Color;

/// Magic bytes at the start of every PPM file ("PARA")
pub const MAGIC: [u8; 4] = *b"PARA";

/// Offset of the animation size field (u32 LE)
pub const ANIMATION_SIZE_OFFSET: usize = 0x04;

/// Offset of the audio size field (u32 LE)
pub const AUDIO_SIZE_OFFSET: usize = 0x08;

/// Offset of the frame count field (u16 LE, stores count - 1)
pub const FRAME_COUNT_OFFSET: usize = 0x0C;

/// Offset of the lock flag (u16 LE, nonzero = locked)
pub const LOCK_OFFSET: usize = 0x10;

/// Offset of the preview frame index (u8 used)
pub const PREVIEW_FRAME_OFFSET: usize = 0x12;

/// Offset of the original author name (22 bytes UTF-16LE)
pub const ORIGINAL_AUTHOR_NAME_OFFSET: usize = 0x14;

/// Offset of the last-edited author name (22 bytes UTF-16LE)
pub const LAST_EDITED_AUTHOR_NAME_OFFSET: usize = 0x2A;

/// Offset of the current author name (22 bytes UTF-16LE)
pub const AUTHOR_NAME_OFFSET: usize = 0x40;

/// Byte length of each author name field
pub const AUTHOR_NAME_LEN: usize = 22;

/// Offset of the original author ID (8 raw bytes)
pub const ORIGINAL_AUTHOR_ID_OFFSET: usize = 0x56;

/// Offset of the last-edited author ID (8 raw bytes)
pub const LAST_EDITED_AUTHOR_ID_OFFSET: usize = 0x5E;

/// Offset of the previous editing author ID (8 raw bytes)
pub const PREVIOUS_EDITING_AUTHOR_ID_OFFSET: usize = 0x8A;

/// Offsets of the original filename parts (3 hex bytes, 13 ASCII bytes, u16 LE counter)
pub const ORIGINAL_FILE_NAME_OFFSETS: (usize, usize, usize) = (0x66, 0x69, 0x7C);

/// Offsets of the current filename parts
pub const FILE_NAME_OFFSETS: (usize, usize, usize) = (0x78, 0x7B, 0x8E);

/// Offset of the partial filename (8 raw bytes)
pub const PARTIAL_FILE_NAME_OFFSET: usize = 0x92;

/// Byte length of the partial filename field
pub const PARTIAL_FILE_NAME_LEN: usize = 8;

/// Offset of the timestamp (u32 LE, seconds since 2000-01-01 UTC)
pub const DATE_OFFSET: usize = 0x9A;

/// Seconds between the Unix epoch and 2000-01-01 00:00:00 UTC
pub const EPOCH_2000_OFFSET: i64 = 946_684_800;

/// Offset of the preview thumbnail bitmap
pub const THUMBNAIL_OFFSET: usize = 0xA0;

/// Byte length of the preview thumbnail bitmap (64x48 pixels at 4bpp)
pub const THUMBNAIL_LEN: usize = 1536;

/// Thumbnail width in pixels
pub const THUMBNAIL_WIDTH: u32 = 64;

/// Thumbnail height in pixels
pub const THUMBNAIL_HEIGHT: u32 = 48;

/// Start of the animation data section (offset table header)
pub const ANIMATION_SECTION_OFFSET: usize = 0x06A0;

/// Start of the frame offset entries (after the u16 table length and 6
/// padding bytes)
pub const FRAME_OFFSET_TABLE_OFFSET: usize = 0x06A8;

/// Maximum number of frames in a flipnote
pub const MAX_FRAME_COUNT: u16 = 999;

/// Frame width in pixels
pub const FRAME_WIDTH: usize = 256;

/// Frame height in pixels
pub const FRAME_HEIGHT: usize = 192;

/// Byte length of one layer's line-encoding table (192 lines at 2 bits each)
pub const LINE_ENCODING_LEN: usize = 48;

/// Size of the sound header (four u32 sizes, two speed bytes, 14 reserved)
pub const SOUND_HEADER_LEN: usize = 32;

/// Fixed 16-entry palette used by the preview thumbnail.
///
/// Entries 0xB and above repeat pure green; real files only use 0x0-0xA.
pub const THUMBNAIL_PALETTE: [Color; 16] = [
	Color::rgb(255, 255, 255), // 0x0 not used / white
	Color::rgb(84, 84, 84),    // 0x1 dark grey
	Color::rgb(255, 255, 255), // 0x2 white
	Color::rgb(165, 165, 165), // 0x3 light grey
	Color::rgb(255, 0, 0),     // 0x4 pure red
	Color::rgb(128, 0, 0),     // 0x5 dark red
	Color::rgb(255, 128, 128), // 0x6 light red / pink
	Color::rgb(0, 255, 0),     // 0x7 pure green
	Color::rgb(0, 0, 255),     // 0x8 pure blue
	Color::rgb(0, 0, 128),     // 0x9 dark blue
	Color::rgb(128, 128, 255), // 0xA light blue
	Color::rgb(0, 255, 0),     // 0xB pure green
	Color::rgb(255, 0, 255),   // 0xC magenta
	Color::rgb(0, 255, 0),     // 0xD pure green
	Color::rgb(0, 255, 0),     // 0xE pure green
	Color::rgb(0, 255, 0),     // 0xF pure green
];

/// Frame palette: paper black
pub const FRAME_BLACK: Color = Color::rgb(14, 14, 14);

/// Frame palette: paper white
pub const FRAME_WHITE: Color = Color::rgb(255, 255, 255);

/// Frame palette: red pen
pub const FRAME_RED: Color = Color::rgb(255, 42, 42);

/// Frame palette: blue pen
pub const FRAME_BLUE: Color = Color::rgb(10, 57, 255);
