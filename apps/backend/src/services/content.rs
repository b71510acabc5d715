//! Chapter markdown stored on disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use slide_core::{slugify, AssetTable, Chapter, SiteUrls};
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Chapter not found: {0}")]
    ChapterNotFound(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Directory of chapter `*.md` files with an `images/` folder beside them.
#[derive(Debug, Clone)]
pub struct ContentRepository {
    root: PathBuf,
    urls: SiteUrls,
}

impl ContentRepository {
    pub fn new(root: impl Into<PathBuf>, urls: SiteUrls) -> Self {
        Self {
            root: root.into(),
            urls,
        }
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root.join("images")
    }

    /// All chapters sorted by basename. Markdown files without a level-1
    /// heading are skipped.
    pub async fn list_chapters(&self) -> Result<Vec<Chapter>, ContentError> {
        let mut chapters = Vec::new();
        for (basename, path) in self.markdown_files().await? {
            if let Some(chapter) = self.load_chapter(&basename, &path).await? {
                chapters.push(chapter);
            }
        }
        Ok(chapters)
    }

    /// Only the file whose basename slugifies to `slug` is read.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Chapter, ContentError> {
        let not_found = || ContentError::ChapterNotFound(slug.to_string());

        let (basename, path) = self
            .markdown_files()
            .await?
            .into_iter()
            .find(|(basename, _)| slugify(basename) == slug)
            .ok_or_else(not_found)?;

        self.load_chapter(&basename, &path).await?.ok_or_else(not_found)
    }

    pub async fn read_markdown(&self, chapter: &Chapter) -> Result<String, ContentError> {
        Ok(fs::read_to_string(self.root.join(&chapter.filename)).await?)
    }

    /// `(basename, path)` of every `*.md` file in the root, sorted by basename.
    async fn markdown_files(&self) -> Result<Vec<(String, PathBuf)>, ContentError> {
        let mut files = Vec::new();
        let mut entries = fs::read_dir(&self.root).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !entry.file_type().await?.is_file()
                || path.extension().and_then(|e| e.to_str()) != Some("md")
            {
                continue;
            }
            if let Some(basename) = path.file_stem().and_then(|s| s.to_str()) {
                files.push((basename.to_string(), path.clone()));
            }
        }

        files.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(files)
    }

    async fn load_chapter(
        &self,
        basename: &str,
        path: &Path,
    ) -> Result<Option<Chapter>, ContentError> {
        let markdown = fs::read_to_string(path).await?;
        let chapter = Chapter::from_markdown(basename, &markdown, &self.urls);
        if chapter.is_none() {
            tracing::debug!("Skipping {}: no title heading", path.display());
        }
        Ok(chapter)
    }

    /// Register every file in the images folder as a local asset.
    ///
    /// A missing folder gives a table that only resolves to the fallback.
    pub async fn discover_assets(
        &self,
        url_prefix: &str,
        fallback_base: &str,
    ) -> Result<AssetTable, ContentError> {
        let images_dir = self.images_dir();
        let mut entries = match fs::read_dir(&images_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("No images folder at {}", images_dir.display());
                return Ok(AssetTable::new(fallback_base));
            }
            Err(e) => return Err(e.into()),
        };

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                if let Some(name) = entry.file_name().to_str() {
                    files.push(name.to_string());
                }
            }
        }

        let table = AssetTable::from_files(&files, url_prefix, fallback_base);
        tracing::info!("Discovered {} local images", table.len());
        Ok(table)
    }
}
