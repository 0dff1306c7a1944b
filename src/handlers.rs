use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, header};
use axum::response::{IntoResponse, Response};
use crate::AppState;
use crate::error::RecipeError;
use crate::models::GenerateRecipesRequest;
use crate::prompt::build_payload;

pub async fn health_check() -> &'static str {

    "OK"

}

/// Turns an ingredient list into recipes by way of the Gemini API.
///
/// The upstream JSON body is relayed byte for byte on success. Every failure is
/// rendered by [`RecipeError`], so nothing here can take the server down.
pub async fn generate_recipes(
    State(state): State<AppState>,
    method: Method,
    body: Bytes
) -> Result<Response, RecipeError> {

    if method != Method::POST {
        return Err(RecipeError::MethodNotAllowed);
    }

    let request: GenerateRecipesRequest = serde_json::from_slice(&body)?;

    // checked before anything goes out on the wire
    let api_key = state.config.api_key
        .as_deref()
        .ok_or(RecipeError::MissingApiKey)?;

    tracing::info!(
        recipe_count = %request.recipe_count,
        ingredients = %request.ingredients,
        "generating recipes"
    );

    let payload = build_payload(&request);
    let result = state.gemini.generate(api_key, &payload).await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], result).into_response())

}
