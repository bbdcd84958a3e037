//! Sequence extraction: turning `<video>` sources into playable clips.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::document::SmilDocument;

/// Kind of a [`Clip`]. Only file sources are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipType {
    Source,
}

/// A single playable unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clip {
    #[serde(rename = "type")]
    pub clip_type: ClipType,
    pub path: PathBuf,
}

impl Clip {
    pub fn source(path: PathBuf) -> Self {
        Self {
            clip_type: ClipType::Source,
            path,
        }
    }
}

/// One group of clips; always a single clip per `<video>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sequence {
    pub clips: Vec<Clip>,
}

/// The full translation output, ordered like the `<video>` elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    pub sequences: Vec<Sequence>,
}

impl TranslationResult {
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Iterate over every clip path in order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.sequences
            .iter()
            .flat_map(|s| s.clips.iter())
            .map(|c| c.path.as_path())
    }
}

/// A `src` attribute split into its scheme and path fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoSource<'a> {
    scheme: &'a str,
    fragment: &'a str,
}

impl<'a> VideoSource<'a> {
    /// Split on the first `:`. Without one the scheme is empty and the whole
    /// value is the fragment.
    pub fn parse(src: &'a str) -> Self {
        match src.split_once(':') {
            Some((scheme, fragment)) => Self { scheme, fragment },
            None => Self {
                scheme: "",
                fragment: src,
            },
        }
    }

    /// The discarded prefix, e.g. `file` or `mp4`.
    pub fn scheme(&self) -> &'a str {
        self.scheme
    }

    /// Join the fragment onto `base`. An absolute fragment replaces `base`.
    pub fn resolve(&self, base: &Path) -> PathBuf {
        base.join(self.fragment)
    }
}

/// Collect every `<video>` source of `doc`, resolved against `base_dir`.
///
/// Elements without a `src` attribute are skipped.
pub fn extract(doc: &SmilDocument, base_dir: impl AsRef<Path>) -> TranslationResult {
    let base_dir = base_dir.as_ref();
    let mut result = TranslationResult::default();

    for video in doc.elements_by_tag_name("video") {
        let Some(src) = video.attribute("src") else {
            tracing::debug!("Skipping <video> without src");
            continue;
        };

        let source = VideoSource::parse(src);
        let path = source.resolve(base_dir);
        tracing::debug!(scheme = source.scheme(), "Source file found in SMIL: {}", path.display());

        result.sequences.push(Sequence {
            clips: vec![Clip::source(path)],
        });
    }

    result
}
