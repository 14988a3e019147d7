//! Parse configuration for opening PPM files.
//!
//! Malformed flipnotes are common in the wild (truncated uploads, hand-edited
//! metadata). [`OpenConfig`] lets a caller skip individual parse steps or
//! validity checks instead of failing the whole decode.

/// Configuration for opening a PPM file.
///
/// Every flag defaults to `false` (nothing skipped). A `skip_*` flag leaves
/// the corresponding field at its zero value; a `skip_*_check` flag parses
/// the field but bypasses its pattern validation. Skip flags are the only
/// mechanism for tolerating malformed files: with a default config the
/// decoder fails fast at the first invalid field.
///
/// Note that some fields feed later parse stages. Skipping `animation_size`
/// or `frame_count` also starves the frame and audio sections, which are
/// located relative to those values.
///
/// # Presets
///
/// - [`OpenConfig::default`]: full decode, full validation
/// - [`OpenConfig::metadata_only`]: header and thumbnail only, no frame or
///   audio decoding
/// - [`OpenConfig::unchecked`]: full decode with every validity check
///   bypassed
///
/// # Examples
///
/// ```
/// use flipnote_types::file::OpenConfig;
///
/// // Tolerate a file with a rewritten author ID
/// let config = OpenConfig {
///     skip_original_author_id_check: true,
///     ..OpenConfig::default()
/// };
/// # let _ = config;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct OpenConfig {
	/// Do not verify the "PARA" magic bytes
	pub skip_magic_check: bool,

	/// Leave the animation size at zero (also starves frame decoding)
	pub skip_animation_size: bool,
	/// Leave the audio size at zero
	pub skip_audio_size: bool,
	/// Leave the frame count at zero (also starves frame decoding)
	pub skip_frame_count: bool,
	/// Leave the lock status at `false`
	pub skip_lock_status: bool,
	/// Leave the preview frame index at zero
	pub skip_preview_frame_n: bool,
	/// Leave the timestamp at zero
	pub skip_date: bool,

	/// Leave the current author name empty
	pub skip_author_name: bool,
	/// Leave the original author name empty
	pub skip_original_author_name: bool,
	/// Leave the last-edited author name empty
	pub skip_last_edited_author_name: bool,

	/// Leave the original author ID empty
	pub skip_original_author_id: bool,
	/// Parse the original author ID but skip its pattern check
	pub skip_original_author_id_check: bool,
	/// Leave the last-edited author ID empty
	pub skip_last_edited_author_id: bool,
	/// Parse the last-edited author ID but skip its pattern check
	pub skip_last_edited_author_id_check: bool,
	/// Leave the previous editing author ID empty
	pub skip_previous_editing_author_id: bool,
	/// Parse the previous editing author ID but skip its pattern check
	pub skip_previous_editing_author_id_check: bool,

	/// Leave the current filename empty
	pub skip_file_name: bool,
	/// Parse the current filename but skip its pattern check
	pub skip_file_name_check: bool,
	/// Leave the original filename empty
	pub skip_original_file_name: bool,
	/// Parse the original filename but skip its pattern check
	pub skip_original_file_name_check: bool,
	/// Leave the partial filename empty
	pub skip_partial_file_name: bool,

	/// Leave the preview thumbnail empty
	pub skip_thumbnail: bool,

	/// Skip the whole frame section (offset table and frames)
	pub skip_frame_data: bool,
	/// Read the frame offset table but do not decode frames
	pub skip_frames: bool,

	/// Skip the whole audio section (sound header, tracks, trigger table)
	pub skip_audio_data: bool,
}

impl OpenConfig {
	/// Decode only the header metadata and thumbnail.
	///
	/// Frame offsets are still read (they are cheap and locate the animation
	/// region) but frames and audio stay undecoded. Useful for building
	/// gallery listings.
	pub fn metadata_only() -> Self {
		Self {
			skip_frames: true,
			skip_audio_data: true,
			..Self::default()
		}
	}

	/// Full decode with every validity check bypassed.
	///
	/// Accepts files with a wrong magic, rewritten author IDs, or mangled
	/// filenames. Structural failures (truncated frames or tracks) still
	/// error.
	pub fn unchecked() -> Self {
		Self {
			skip_magic_check: true,
			skip_original_author_id_check: true,
			skip_last_edited_author_id_check: true,
			skip_previous_editing_author_id_check: true,
			skip_file_name_check: true,
			skip_original_file_name_check: true,
			..Self::default()
		}
	}
}
