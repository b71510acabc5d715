pub mod chapters;
pub mod slides;

use std::sync::Arc;

use slide_core::{Chapter, Deck};

use crate::error::Result;
use crate::AppState;

/// Read a chapter's markdown and return its (cached) deck.
pub(crate) async fn load_deck(state: &AppState, chapter: &Chapter) -> Result<Arc<Deck>> {
    let markdown = state.content.read_markdown(chapter).await?;
    Ok(state
        .cache
        .get_or_parse(&chapter.slug, &markdown, &state.assets))
}
