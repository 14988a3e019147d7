//! Random-access byte source for PPM decoding.
//!
//! Every multi-byte header integer in the PPM format is little-endian, with
//! one exception: the per-line encoding headers inside frame data are
//! big-endian and walked MSB-first. Both read directions live here so the
//! rest of the decoder never touches byte order directly.

use crate::file::PpmError;

/// Cursor over an in-memory PPM file.
///
/// Reads fail with [`PpmError::InsufficientData`] instead of silently
/// returning short buffers.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
	data: &'a [u8],
	pos: usize,
}

impl<'a> Reader<'a> {
	/// Creates a reader over the given bytes, positioned at offset 0.
	pub fn new(data: &'a [u8]) -> Self {
		Self {
			data,
			pos: 0,
		}
	}

	/// Total length of the underlying data.
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Returns `true` when the underlying data is empty.
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Current cursor position.
	pub fn position(&self) -> usize {
		self.pos
	}

	/// Moves the cursor to an absolute offset.
	///
	/// Seeking past the end is allowed; the next read will fail.
	pub fn seek(&mut self, offset: usize) {
		self.pos = offset;
	}

	/// Reads `n` bytes at the cursor, advancing it.
	pub fn read(&mut self, n: usize) -> Result<&'a [u8], PpmError> {
		let available = self.data.len().saturating_sub(self.pos);
		if available < n {
			return Err(PpmError::insufficient_data(self.pos, n, available));
		}
		let slice = &self.data[self.pos..self.pos + n];
		self.pos += n;
		Ok(slice)
	}

	/// Reads `n` bytes at an absolute offset without moving the cursor.
	pub fn read_at(&self, offset: usize, n: usize) -> Result<&'a [u8], PpmError> {
		let available = self.data.len().saturating_sub(offset);
		if available < n {
			return Err(PpmError::insufficient_data(offset, n, available));
		}
		Ok(&self.data[offset..offset + n])
	}

	/// Reads a fixed-size byte array at an absolute offset.
	pub fn read_array_at<const N: usize>(&self, offset: usize) -> Result<[u8; N], PpmError> {
		let slice = self.read_at(offset, N)?;
		let mut buf = [0u8; N];
		buf.copy_from_slice(slice);
		Ok(buf)
	}

	/// Reads a u8 at the cursor.
	pub fn read_u8(&mut self) -> Result<u8, PpmError> {
		Ok(self.read(1)?[0])
	}

	/// Reads a little-endian u16 at the cursor.
	pub fn read_u16_le(&mut self) -> Result<u16, PpmError> {
		let bytes = self.read(2)?;
		Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
	}

	/// Reads a little-endian u32 at the cursor.
	pub fn read_u32_le(&mut self) -> Result<u32, PpmError> {
		let bytes = self.read(4)?;
		Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
	}

	/// Reads a big-endian u32 at the cursor.
	///
	/// Used only for the per-line encoding headers of the frame codec.
	pub fn read_u32_be(&mut self) -> Result<u32, PpmError> {
		let bytes = self.read(4)?;
		Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
	}

	/// Reads a u8 at an absolute offset.
	pub fn read_u8_at(&self, offset: usize) -> Result<u8, PpmError> {
		Ok(self.read_at(offset, 1)?[0])
	}

	/// Reads a little-endian u16 at an absolute offset.
	pub fn read_u16_le_at(&self, offset: usize) -> Result<u16, PpmError> {
		let bytes = self.read_at(offset, 2)?;
		Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
	}

	/// Reads a little-endian u32 at an absolute offset.
	pub fn read_u32_le_at(&self, offset: usize) -> Result<u32, PpmError> {
		let bytes = self.read_at(offset, 4)?;
		Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sequential_reads() {
		let data = [0x01, 0x02, 0x03, 0x04, 0x05];
		let mut reader = Reader::new(&data);

		assert_eq!(reader.read_u8().unwrap(), 0x01);
		assert_eq!(reader.read_u16_le().unwrap(), 0x0302);
		assert_eq!(reader.position(), 3);
	}

	#[test]
	fn test_endianness() {
		let data = [0x12, 0x34, 0x56, 0x78];
		let mut reader = Reader::new(&data);
		assert_eq!(reader.read_u32_le().unwrap(), 0x7856_3412);

		reader.seek(0);
		assert_eq!(reader.read_u32_be().unwrap(), 0x1234_5678);
	}

	#[test]
	fn test_read_at_does_not_move_cursor() {
		let data = [0xAA, 0xBB, 0xCC];
		let reader = Reader::new(&data);
		assert_eq!(reader.read_u8_at(2).unwrap(), 0xCC);
		assert_eq!(reader.position(), 0);
	}

	#[test]
	fn test_short_read_fails() {
		let data = [0x00, 0x01];
		let mut reader = Reader::new(&data);
		reader.seek(1);

		let err = reader.read_u32_le().unwrap_err();
		match err {
			PpmError::InsufficientData {
				offset,
				expected,
				available,
			} => {
				assert_eq!(offset, 1);
				assert_eq!(expected, 4);
				assert_eq!(available, 1);
			}
			_ => panic!("unexpected error: {err:?}"),
		}
	}

	#[test]
	fn test_seek_past_end() {
		let data = [0x00];
		let mut reader = Reader::new(&data);
		reader.seek(100);
		assert!(reader.read_u8().is_err());
	}
}
