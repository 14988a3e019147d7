//! Benchmark helper utilities for flipnote-rs
//!
//! This module generates synthetic PPM files for benchmarking. Real flipnote
//! files cannot be redistributed, so the generator builds worst-case-ish
//! frame payloads instead: raw (type 3) lines on every layer, which maximize
//! the bytes the line decoder has to walk.

/// Generates a minimal valid PPM header block with the given animation and
/// frame-count fields filled in.
fn header_block(animation_size: u32, frame_count: u16, audio_size: u32) -> Vec<u8> {
	let mut data = vec![0u8; 0x06A0];
	data[0..4].copy_from_slice(b"PARA");
	data[0x04..0x08].copy_from_slice(&animation_size.to_le_bytes());
	data[0x08..0x0C].copy_from_slice(&audio_size.to_le_bytes());
	data[0x0C..0x0E].copy_from_slice(&(frame_count - 1).to_le_bytes());

	// Valid console IDs, stored little-endian
	let id = [0x78, 0x56, 0x34, 0x12, 0x60, 0x00, 0x07, 0x56];
	data[0x56..0x5E].copy_from_slice(&id);
	data[0x5E..0x66].copy_from_slice(&id);
	data[0x8A..0x92].copy_from_slice(&id);

	// Valid filenames
	for (p1, p2, p3) in [(0x66, 0x69, 0x7C), (0x78, 0x7B, 0x8E)] {
		data[p1..p1 + 3].copy_from_slice(&[0xF1, 0xA2, 0xB3]);
		data[p2..p2 + 13].copy_from_slice(b"0123456789ABC");
		data[p3..p3 + 2].copy_from_slice(&1u16.to_le_bytes());
	}

	data
}

/// Serializes one key frame where every line of both layers is a raw
/// (type 3) line with an alternating bit pattern.
fn raw_frame() -> Vec<u8> {
	let mut frame = vec![0x83u8];
	// Line type 3 for all 192 lines of both layers
	frame.extend(std::iter::repeat(0xFF).take(96));
	// 192 lines x 2 layers x 32 bytes of bit plane
	for i in 0..(192 * 2 * 32) {
		frame.push(if i % 2 == 0 {
			0x55
		} else {
			0xAA
		});
	}
	frame
}

/// Generates a synthetic PPM file with `frame_count` raw-encoded key frames
/// and `bgm_len` bytes of BGM.
pub fn generate_test_ppm(frame_count: u16, bgm_len: usize) -> Vec<u8> {
	assert!(frame_count >= 1);

	let blob = raw_frame();
	let table_length = 4 * frame_count as usize;

	let mut animation = Vec::new();
	animation.extend_from_slice(&(table_length as u16).to_le_bytes());
	animation.extend_from_slice(&[0u8; 6]);
	for i in 0..frame_count as u32 {
		animation.extend_from_slice(&(i * blob.len() as u32).to_le_bytes());
	}
	for _ in 0..frame_count {
		animation.extend_from_slice(&blob);
	}

	let audio_size = 32 + bgm_len as u32;
	let mut data = header_block(animation.len() as u32, frame_count, audio_size);
	data.extend_from_slice(&animation);

	// Trigger table, then 4-aligned sound header
	data.extend(std::iter::repeat(0).take(frame_count as usize));
	while data.len() % 4 != 0 {
		data.push(0);
	}
	let mut sound_header = Vec::with_capacity(32);
	sound_header.extend_from_slice(&(bgm_len as u32).to_le_bytes());
	sound_header.resize(32, 0);
	data.extend_from_slice(&sound_header);
	data.extend((0..bgm_len).map(|i| (i % 251) as u8));

	data
}

#[cfg(test)]
mod tests {
	use super::*;
	use flipnote_types::file::ppm::File;

	#[test]
	fn test_generated_file_decodes() {
		let data = generate_test_ppm(3, 64);
		let flipnote = File::from_bytes(&data).unwrap();
		assert_eq!(flipnote.frame_data().frames.len(), 3);
		assert_eq!(flipnote.sound_data().bgm.len(), 128);
	}
}
