//! Chapter catalog: titles, slugs and navigation groups.

use serde::{Deserialize, Serialize};

use crate::patterns::HEADING_RE;

/// Site-wide URL settings used to build chapter paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteUrls {
    pub site_url: String,
    pub slideshows: String,
    pub documents: String,
}

impl Default for SiteUrls {
    fn default() -> Self {
        Self {
            site_url: "https://learn-javascript.dev".to_string(),
            slideshows: "/slides".to_string(),
            documents: "/docs".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterSeo {
    pub title: String,
    pub canonical_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterPaths {
    pub slideshow: String,
    pub document: String,
}

/// One lecture chapter backed by a markdown file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// File basename without extension, e.g. `AsyncProgramming`.
    pub id: String,
    pub filename: String,
    pub title: String,
    pub slug: String,
    pub seo: ChapterSeo,
    pub paths: ChapterPaths,
}

impl Chapter {
    /// Build a chapter from its file basename and markdown body.
    ///
    /// The title is the first level-1 heading. Files without one are not
    /// chapters and yield `None`.
    pub fn from_markdown(basename: &str, markdown: &str, urls: &SiteUrls) -> Option<Self> {
        let title = first_heading(markdown)?.to_string();
        let slug = slugify(basename);

        Some(Self {
            id: basename.to_string(),
            filename: format!("{basename}.md"),
            seo: ChapterSeo {
                title: format!("{title} | JavaScript Training"),
                canonical_url: format!("{}{}/{}", urls.site_url, urls.documents, slug),
            },
            paths: ChapterPaths {
                slideshow: format!("{}/{}", urls.slideshows, slug),
                document: format!("{}/{}", urls.documents, slug),
            },
            title,
            slug,
        })
    }
}

/// Text of the first level-1 heading in `markdown`.
pub fn first_heading(markdown: &str) -> Option<&str> {
    HEADING_RE
        .captures_iter(markdown)
        .find(|caps| &caps[1] == "#")
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
}

/// Kebab-case a CamelCase basename: `IteratorsAndGenerators` becomes
/// `iterators-and-generators`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;

    for c in name.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            slug.push('-');
        }
        prev_lower = c.is_ascii_lowercase();
        slug.extend(c.to_lowercase());
    }

    slug
}

/// Titled group of chapters for navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterGroup {
    pub title: String,
    /// Chapter basenames in display order.
    pub chapters: Vec<String>,
}

impl ChapterGroup {
    pub fn new(title: &str, chapters: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            chapters: chapters.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// The course outline.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("Intro", &["Presentation"]),
            Self::new(
                "JavaScript Syntax",
                &[
                    "Operators",
                    "Objects",
                    "Strings",
                    "Classes",
                    "Symbols",
                    "Modules",
                    "IteratorsAndGenerators",
                ],
            ),
            Self::new(
                "JavaScript Core Concepts",
                &["ScopesAndClosures", "Functions", "AsyncProgramming"],
            ),
            Self::new("APIs and Libraries", &["React", "Testing", "WebAnimationsAPI"]),
            Self::new(
                "Programming Paradigms",
                &[
                    "FunctionalProgramming",
                    "ObjectOrientedProgramming",
                    "ObjectOrientedDesignPrinciples",
                    "DesignPatterns",
                    "DomainDrivenDesign",
                ],
            ),
        ]
    }
}
