//! Markdown parser for chapter slide decks.
//!
//! # Format
//! ```markdown
//! # Promises
//! Note: mention callbacks first
//!
//! <!--slide-->
//! <!-- .slide: class="questionSlide" -->
//! What does `Promise.all` return?
//!
//! ![](./images/event-loop.png)
//!
//! <!--section-->
//! # Async functions
//! ```
//!
//! `<!--section-->` separates horizontal sections and `<!--slide-->`
//! separates vertical slides inside a section. Both must stand alone on
//! their line.

use std::borrow::Cow;

use regex::Captures;

use crate::assets::AssetTable;
use crate::id::SlideId;
use crate::patterns::{ATTRIBUTE_RE, DIRECTIVE_RE, LOCAL_IMAGE_RE, NOTE_RE};
use crate::types::{Deck, Section, Slide};

pub const SECTION_SEPARATOR: &str = "<!--section-->";
pub const SLIDE_SEPARATOR: &str = "<!--slide-->";

const EXERCISE_CLASS: &str = "questionSlide";
const SOLUTION_CLASS: &str = "responseSlide";
const IMPORTANT_CLASS: &str = "alertSlide";

/// Parse chapter markdown into a deck of classified slides.
///
/// Never fails: missing directives leave slides unclassified, unknown
/// images resolve to the remote fallback and a document without
/// separators becomes a single slide.
pub fn parse_slides(raw: &str, prefix: &str, assets: &AssetTable) -> Deck {
    let sections = split_on_marker(raw, SECTION_SEPARATOR)
        .into_iter()
        .map(|fragment| rewrite_section(fragment, assets))
        .enumerate()
        .map(|(i, section_md)| Section {
            slides: split_on_marker(&section_md, SLIDE_SEPARATOR)
                .into_iter()
                .enumerate()
                .map(|(j, content)| build_slide(SlideId::new(prefix, i, j), content))
                .collect(),
        })
        .collect();

    Deck {
        prefix: prefix.to_string(),
        sections,
    }
}

/// Look up a slide by identifier.
///
/// Returns `None` for ids that do not parse, belong to another deck or
/// point past the end of a section.
pub fn find_slide_by_id<'a>(deck: &'a Deck, id: &str) -> Option<&'a Slide> {
    let slide_id: SlideId = id.parse().ok()?;
    if slide_id.prefix != deck.prefix {
        return None;
    }

    deck.sections
        .get(slide_id.section)?
        .slides
        .get(slide_id.slide)
        .filter(|slide| slide.id == id)
}

fn build_slide(id: SlideId, content: &str) -> Slide {
    let class_name = extract_class(content).unwrap_or_default();
    Slide {
        id: id.to_string(),
        content: content.to_string(),
        is_exercise: class_name.contains(EXERCISE_CLASS),
        is_solution: class_name.contains(SOLUTION_CLASS),
        is_important: class_name.contains(IMPORTANT_CLASS),
    }
}

/// Split `text` on lines equal to `marker`.
///
/// The separator takes the line break ending the previous line and at most
/// one blank line before it. A trailing `\r` on the marker line is ignored.
fn split_on_marker<'a>(text: &'a str, marker: &str) -> Vec<&'a str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        if line.trim_end_matches(['\n', '\r']) == marker {
            fragments.push(strip_separator_padding(&text[start..line_start]));
            start = offset;
        }
    }

    fragments.push(&text[start..]);
    fragments
}

fn strip_separator_padding(fragment: &str) -> &str {
    let fragment = strip_line_break(fragment);
    if fragment.ends_with('\n') {
        strip_line_break(fragment)
    } else {
        fragment
    }
}

fn strip_line_break(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .unwrap_or(s)
}

fn rewrite_section(section: &str, assets: &AssetTable) -> String {
    let with_notes = rewrite_notes(section);
    rewrite_images(&with_notes, assets).into_owned()
}

/// `Note: text` lines become speaker-note asides.
fn rewrite_notes(markdown: &str) -> Cow<'_, str> {
    NOTE_RE.replace_all(markdown, r#"<aside class="notes">$1</aside>"#)
}

/// Relative image paths become asset URLs.
fn rewrite_images<'a>(markdown: &'a str, assets: &AssetTable) -> Cow<'a, str> {
    LOCAL_IMAGE_RE.replace_all(markdown, |caps: &Captures<'_>| {
        format!("{}{}", &caps[1], assets.resolve(&caps[3], &caps[2]))
    })
}

/// Value of the `class` attribute of the slide directive.
///
/// Only the first `key="value"` pair of the first directive is read; a
/// directive whose first pair is not `class` yields nothing.
fn extract_class(fragment: &str) -> Option<String> {
    let body = DIRECTIVE_RE.captures(fragment)?.get(1)?.as_str();
    let attribute = ATTRIBUTE_RE.captures(body)?;

    if &attribute[1] != "class" {
        return None;
    }

    attribute
        .get(2)
        .or_else(|| attribute.get(3))
        .map(|value| value.as_str().to_string())
}
