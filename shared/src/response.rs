use crate::error::SpaceError;
use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Serialize;

/// Build a JSON response carrying the CORS headers every path must return.
/// Bodies are always JSON; callers pass an empty object literal where there
/// is no payload.
pub fn json_response<T: Serialize>(
    status: StatusCode,
    payload: &T,
) -> Result<Response<Body>, SpaceError> {
    let body = serde_json::to_string(payload)
        .map_err(|e| SpaceError::Infrastructure(e.to_string()))?;

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "*")
        .body(body.into())
        .map_err(|e| SpaceError::Infrastructure(e.to_string()))
}

/// Build the uniform error body `{"error": {"message", "statusCode"}}` with
/// the same CORS headers as success responses.
pub fn error_response(err: &SpaceError) -> Result<Response<Body>, Error> {
    let status = err.status_code();
    let body = serde_json::json!({
        "error": {
            "message": err.to_string(),
            "statusCode": status.as_u16(),
        }
    });

    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "*")
        .body(body.to_string().into())
        .map_err(Box::new)?)
}
