//! smilseq-core: SMIL playlist to clip-sequence translation.
//!
//! Two stages, both free of shared state:
//!
//! - [`SmilDocument`] loads a well-formed XML document from a file or a byte
//!   buffer, reporting I/O and syntax failures as distinct [`Error`] kinds.
//! - [`extract`] walks the `<video>` elements and resolves each `src` against
//!   a base directory, producing a [`TranslationResult`].

pub mod document;
pub mod error;
pub mod sequence;

use std::path::Path;

pub use document::{Attribute, Element, SmilDocument};
pub use error::{Error, Result};
pub use sequence::{extract, Clip, ClipType, Sequence, TranslationResult, VideoSource};

/// Load the SMIL file at `path` and resolve its sources against `base_dir`.
pub fn translate_file(
    path: impl AsRef<Path>,
    base_dir: impl AsRef<Path>,
) -> Result<TranslationResult> {
    let doc = SmilDocument::load_from_file(path)?;
    Ok(extract(&doc, base_dir))
}

/// Parse raw SMIL bytes and resolve their sources against `base_dir`.
pub fn translate_bytes(data: &[u8], base_dir: impl AsRef<Path>) -> Result<TranslationResult> {
    let doc = SmilDocument::load_from_bytes(data)?;
    Ok(extract(&doc, base_dir))
}
