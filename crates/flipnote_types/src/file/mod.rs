//! File type support for the `flipnote-rs` project.

mod error;

pub mod ppm;

// Re-export error types
pub use error::{AuthorIdKind, FileNameKind, PpmError, SoundTrack};

// Re-export main file types
pub use ppm::File as PpmFile;
pub use ppm::parse_config::OpenConfig;
