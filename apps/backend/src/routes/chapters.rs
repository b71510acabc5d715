//! Chapter endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::routes::load_deck;
use crate::AppState;

/// GET /api/chapters
pub async fn list(State(state): State<AppState>) -> Result<Json<ChapterListResponse>> {
    let chapters = state.content.list_chapters().await?;
    let groups = state
        .groups
        .iter()
        .map(|group| ChapterGroupView::resolve(group, &chapters))
        .collect();
    Ok(Json(ChapterListResponse { chapters, groups }))
}

/// GET /api/chapters/:slug
pub async fn document(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<DocumentResponse>> {
    let chapter = state.content.find_by_slug(&slug).await?;
    let markdown = state.content.read_markdown(&chapter).await?;
    Ok(Json(DocumentResponse { chapter, markdown }))
}

/// GET /api/chapters/:slug/slides
pub async fn slideshow(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<SlideshowResponse>> {
    let chapter = state.content.find_by_slug(&slug).await?;
    let deck = load_deck(&state, &chapter).await?;
    Ok(Json(SlideshowResponse {
        chapter,
        sections: deck.sections.clone(),
    }))
}

/// GET /api/chapters/:slug/outline
pub async fn outline(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<OutlineResponse>> {
    let chapter = state.content.find_by_slug(&slug).await?;
    let deck = load_deck(&state, &chapter).await?;
    Ok(Json(OutlineResponse {
        chapter,
        slides: deck.outline(),
    }))
}
