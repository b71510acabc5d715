//! Core types for slide decks.

use serde::{Deserialize, Serialize};

use crate::patterns::HEADING_RE;

/// A single slide parsed from chapter markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    /// Markdown body after note and image rewrites.
    pub content: String,
    pub is_exercise: bool,
    pub is_solution: bool,
    pub is_important: bool,
}

impl Slide {
    /// Text of the first markdown heading in the slide, if any.
    pub fn title(&self) -> Option<&str> {
        HEADING_RE
            .captures(&self.content)
            .and_then(|caps| caps.get(2))
            .map(|m| m.as_str())
    }

    /// Navigation projection of this slide.
    pub fn summary(&self) -> SlideSummary {
        SlideSummary {
            id: self.id.clone(),
            title: self.title().map(str::to_string),
        }
    }

    /// Prompt to show before leaving an exercise slide.
    pub fn confirm_prompt(&self) -> Option<ConfirmPrompt> {
        self.is_exercise.then(ConfirmPrompt::exercise)
    }
}

/// Horizontally navigable group of slides.
///
/// Serialized as a bare array so a deck reads as `Slide[][]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section {
    pub slides: Vec<Slide>,
}

impl Section {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// Parsed chapter: sections of slides in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub prefix: String,
    pub sections: Vec<Section>,
}

impl Deck {
    /// All slides, section by section.
    pub fn slides(&self) -> impl Iterator<Item = &Slide> {
        self.sections.iter().flat_map(|section| section.slides.iter())
    }

    pub fn slide_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    /// Find a slide by its identifier.
    pub fn find_slide(&self, id: &str) -> Option<&Slide> {
        crate::parser::find_slide_by_id(self, id)
    }

    /// `{id, title}` projection used by navigation.
    pub fn outline(&self) -> Vec<SlideSummary> {
        self.slides().map(Slide::summary).collect()
    }
}

/// Slide reference for navigation menus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSummary {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Confirmation shown to a viewer moving past a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmPrompt {
    pub message: String,
    pub button: String,
}

impl ConfirmPrompt {
    pub fn exercise() -> Self {
        Self {
            message: "Solve the exercise!".to_string(),
            button: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn slide(id: &str, content: &str) -> Slide {
        Slide {
            id: id.to_string(),
            content: content.to_string(),
            is_exercise: false,
            is_solution: false,
            is_important: false,
        }
    }

    #[test]
    fn title_from_first_heading() {
        let s = slide("c-0-0", "intro text\n## Closures ##\n\n# Later");
        assert_eq!(s.title(), Some("Closures"));
    }

    #[test]
    fn title_handles_crlf() {
        let s = slide("c-0-0", "# Promises\r\nbody");
        assert_eq!(s.title(), Some("Promises"));
    }

    #[test]
    fn title_absent() {
        let s = slide("c-0-0", "```js\nconst a = 1\n```");
        assert_eq!(s.title(), None);
        assert_eq!(s.summary(), SlideSummary { id: "c-0-0".into(), title: None });
    }

    #[test]
    fn confirm_prompt_only_for_exercises() {
        let mut s = slide("c-0-0", "What is 2+2?");
        assert_eq!(s.confirm_prompt(), None);
        s.is_exercise = true;
        assert_eq!(s.confirm_prompt().unwrap().message, "Solve the exercise!");
    }

    #[test]
    fn deck_serializes_as_nested_arrays() {
        let deck = Deck {
            prefix: "c".to_string(),
            sections: vec![Section {
                slides: vec![slide("c-0-0", "A")],
            }],
        };
        let json = serde_json::to_value(&deck.sections).unwrap();
        assert_eq!(json[0][0]["id"], "c-0-0");
        assert_eq!(json[0][0]["is_exercise"], false);
    }

    #[test]
    fn deck_counts_and_outline() {
        let deck = Deck {
            prefix: "c".to_string(),
            sections: vec![
                Section {
                    slides: vec![slide("c-0-0", "# One"), slide("c-0-1", "two")],
                },
                Section {
                    slides: vec![slide("c-1-0", "### Three")],
                },
            ],
        };
        assert_eq!(deck.slide_count(), 3);
        let outline = deck.outline();
        assert_eq!(outline.len(), 3);
        assert_eq!(outline[0].title.as_deref(), Some("One"));
        assert_eq!(outline[1].title, None);
        assert_eq!(outline[2].id, "c-1-0");
    }
}
