//! Single slide endpoint

use axum::{
    extract::{Path, State},
    Json,
};
use slide_core::SlideId;

use crate::error::{ApiError, Result};
use crate::models::SlideViewResponse;
use crate::routes::load_deck;
use crate::AppState;

/// GET /api/slides/:id
///
/// The id prefix is the chapter slug. Exercise slides carry a confirmation
/// prompt for the viewer.
pub async fn view(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SlideViewResponse>> {
    let slide_id: SlideId = id.parse()?;
    let chapter = state.content.find_by_slug(&slide_id.prefix).await?;
    let deck = load_deck(&state, &chapter).await?;

    let slide = deck
        .find_slide(&id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("slide {id}")))?;

    Ok(Json(SlideViewResponse {
        confirm: slide.confirm_prompt(),
        slide,
    }))
}
