//! Core slide deck library shared by the content backend.
//!
//! Provides:
//! - Markdown parser splitting a chapter into sections of classified slides
//! - Slide identifier scheme (`prefix-section-slide`) and lookup
//! - Asset lookup table for local image references
//! - Chapter catalog (slugs, titles, navigation groups)

pub mod assets;
pub mod catalog;
pub mod error;
pub mod id;
pub mod parser;
mod patterns;
pub mod types;

pub use assets::AssetTable;
pub use catalog::{slugify, Chapter, ChapterGroup, ChapterPaths, ChapterSeo, SiteUrls};
pub use error::{ParseError, Result};
pub use id::{SlideId, SEPARATOR};
pub use parser::{find_slide_by_id, parse_slides};
pub use types::{ConfirmPrompt, Deck, Section, Slide, SlideSummary};
