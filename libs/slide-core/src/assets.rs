//! Asset lookup for local image references in chapter markdown.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Maps image names (file stems) to resolvable URLs.
///
/// References without an entry resolve against `fallback_base`, the remote
/// raw-content folder the chapter images are published to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetTable {
    entries: HashMap<String, String>,
    fallback_base: String,
}

impl AssetTable {
    pub fn new(fallback_base: impl Into<String>) -> Self {
        Self {
            entries: HashMap::new(),
            fallback_base: fallback_base.into(),
        }
    }

    /// Build a table from image file names found at build time.
    ///
    /// Each file is registered under its stem with the URL
    /// `url_prefix + file_name`. Entries without a stem are skipped.
    pub fn from_files<I, S>(files: I, url_prefix: &str, fallback_base: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new(fallback_base);
        for file in files {
            let file = file.as_ref();
            let Some(name) = Path::new(file).file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(stem) = Path::new(name).file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            table.insert(stem, format!("{url_prefix}{name}"));
        }
        table
    }

    pub fn insert(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.entries.insert(name.into(), url.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn fallback_base(&self) -> &str {
        &self.fallback_base
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve an image by stem, falling back to `fallback_base + path`.
    pub fn resolve<'a>(&'a self, stem: &str, path: &str) -> Cow<'a, str> {
        match self.get(stem) {
            Some(url) => Cow::Borrowed(url),
            None => {
                tracing::debug!("No local asset for {}, using remote fallback", stem);
                Cow::Owned(format!("{}{}", self.fallback_base, path))
            }
        }
    }
}
