//! Sound Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ListSounds;
use crate::infrastructure::http::dto::SoundListDto;
use crate::infrastructure::http::state::AppState;

/// GET /sounds/list
pub async fn list_sounds(State(state): State<Arc<AppState>>) -> Json<SoundListDto> {
    Json(state.list_sounds_handler.handle(ListSounds).into())
}
