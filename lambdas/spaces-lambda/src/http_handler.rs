use lambda_http::{http::Method, Body, Error, Request, Response};
use spaces_shared::error::SpaceError;
use spaces_shared::response::error_response;
use spaces_shared::{spaces, AppState};
use std::sync::Arc;

/// Main Lambda handler for the spaces resource - dispatches on HTTP method
/// and translates every failure into the uniform error body. Each
/// invocation is handled independently; nothing persists across calls
/// except the shared state.
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    tracing::info!("Spaces resource invoked - Method: {}", event.method());

    let result = match event.method() {
        &Method::GET => spaces::get_spaces(&event, &state.dynamo_client, &state.table_name).await,
        &Method::POST => spaces::post_space(&event, &state.dynamo_client, &state.table_name).await,
        &Method::PUT => {
            spaces::update_space(&event, &state.dynamo_client, &state.table_name).await
        }
        &Method::DELETE => {
            spaces::delete_space(&event, &state.dynamo_client, &state.table_name).await
        }
        other => Err(SpaceError::UnsupportedMethod(other.to_string())),
    };

    match result {
        Ok(response) => Ok(response),
        Err(err) => {
            tracing::warn!("Request failed: {}", err);
            error_response(&err)
        }
    }
}
