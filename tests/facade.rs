//! Facade re-export tests for `flipnote-rs`

use flipnote_rs::prelude::*;
use flipnote_rs::{PpmError, PpmFile};

#[test]
fn test_facade_exposes_decoder() {
	let err = PpmFile::from_bytes(b"PANA").unwrap_err();
	assert!(matches!(err, PpmError::InvalidMagic { .. }));
}

#[test]
fn test_prelude_exposes_config_and_decoder() {
	let config = OpenConfig::metadata_only();
	assert!(config.skip_frames);

	let mut decoder = ImaAdpcmDecoder::new();
	assert_eq!(decoder.decode(&[0x00]).len(), 2);
}
