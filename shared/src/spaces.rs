use crate::error::SpaceError;
use crate::response::json_response;
use crate::types::{SpaceDraft, SpaceEntry, UpdateSpaceRequest};
use crate::{authz, store, validator};
use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_http::{http::StatusCode, Body, Request, RequestExt, Response};

fn parse_json<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, SpaceError> {
    serde_json::from_slice(body).map_err(|e| SpaceError::MalformedInput(e.to_string()))
}

/// An empty `?id=` counts as absent: GET falls back to the full scan and
/// PUT/DELETE report the missing parameter instead of sending an empty
/// partition key to DynamoDB.
fn space_id_param(event: &Request) -> Option<String> {
    event
        .query_string_parameters_ref()
        .and_then(|params| params.first("id"))
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// GET — one item when the id query parameter is given, a full scan
/// otherwise. Either way the body is a JSON array of entries.
pub async fn get_spaces(
    event: &Request,
    client: &DynamoClient,
    table_name: &str,
) -> Result<Response<Body>, SpaceError> {
    let entries = match space_id_param(event) {
        Some(space_id) => vec![store::fetch_one(client, table_name, &space_id).await?],
        None => store::list_all(client, table_name).await?,
    };

    json_response(StatusCode::OK, &entries)
}

/// POST — assign a fresh id, validate the candidate, and upsert it.
pub async fn post_space(
    event: &Request,
    client: &DynamoClient,
    table_name: &str,
) -> Result<Response<Body>, SpaceError> {
    let mut draft: SpaceDraft = parse_json(event.body())?;
    draft.id = Some(uuid::Uuid::new_v4().to_string());

    validator::validate_as_space_entry(&draft)?;

    let entry = SpaceEntry {
        id: draft.id.unwrap_or_default(),
        name: draft.name.unwrap_or_default(),
        location: draft.location.unwrap_or_default(),
        photo_url: draft.photo_url,
    };

    store::put(client, table_name, &entry).await?;
    tracing::info!("Created space {}", entry.id);

    json_response(StatusCode::CREATED, &serde_json::json!({ "id": entry.id }))
}

/// PUT — partial update of the location attribute, addressed by the id
/// query parameter. Responds with the post-update attribute map.
pub async fn update_space(
    event: &Request,
    client: &DynamoClient,
    table_name: &str,
) -> Result<Response<Body>, SpaceError> {
    let space_id = space_id_param(event);
    let request: UpdateSpaceRequest = parse_json(event.body())?;

    let (Some(space_id), Some(new_location)) = (space_id, request.location) else {
        return Err(SpaceError::MalformedInput(
            "Both the space id query parameter and a location in the body must be provided for updating the space item.".to_string(),
        ));
    };

    let updated = store::update_location(client, table_name, &space_id, &new_location).await?;

    json_response(StatusCode::OK, &updated)
}

/// DELETE — admin-only. The authorization check runs before the parameter
/// check, so a rejected delete never reaches the store.
pub async fn delete_space(
    event: &Request,
    client: &DynamoClient,
    table_name: &str,
) -> Result<Response<Body>, SpaceError> {
    let claims = authz::caller_claims(event);
    if !authz::is_admin_group_member(claims.as_ref()) {
        return Err(SpaceError::Unauthorized);
    }

    let Some(space_id) = space_id_param(event) else {
        return Err(SpaceError::MalformedInput(
            "For the delete method the space id must be provided as query parameter.".to_string(),
        ));
    };

    store::delete(client, table_name, &space_id).await?;
    tracing::info!("Deleted space {}", space_id);

    json_response(StatusCode::NO_CONTENT, &serde_json::json!({}))
}
