//! API response types

use serde::{Deserialize, Serialize};

// Re-export shared types from slide-core
pub use slide_core::{Chapter, ChapterGroup, ConfirmPrompt, Section, Slide, SlideSummary};

/// Navigation group with the slugs of chapters present on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterGroupView {
    pub title: String,
    pub chapters: Vec<String>,
}

impl ChapterGroupView {
    /// Resolve group basenames against the available chapters, keeping
    /// group order and dropping chapters that do not exist.
    pub fn resolve(group: &ChapterGroup, chapters: &[Chapter]) -> Self {
        Self {
            title: group.title.clone(),
            chapters: group
                .chapters
                .iter()
                .filter_map(|id| chapters.iter().find(|c| &c.id == id))
                .map(|c| c.slug.clone())
                .collect(),
        }
    }
}

/// GET /api/chapters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterListResponse {
    pub chapters: Vec<Chapter>,
    pub groups: Vec<ChapterGroupView>,
}

/// GET /api/chapters/:slug
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub chapter: Chapter,
    pub markdown: String,
}

/// GET /api/chapters/:slug/slides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideshowResponse {
    pub chapter: Chapter,
    pub sections: Vec<Section>,
}

/// GET /api/chapters/:slug/outline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineResponse {
    pub chapter: Chapter,
    pub slides: Vec<SlideSummary>,
}

/// GET /api/slides/:id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideViewResponse {
    pub slide: Slide,
    pub confirm: Option<ConfirmPrompt>,
}
