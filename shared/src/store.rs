use crate::codec;
use crate::error::SpaceError;
use crate::types::SpaceEntry;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client as DynamoClient;
use std::collections::HashMap;

/// Map an SDK failure to the taxonomy. The full error context travels in
/// the message; no retries happen at this layer.
fn infrastructure_error<E: std::error::Error>(err: E) -> SpaceError {
    SpaceError::Infrastructure(DisplayErrorContext(err).to_string())
}

/// Point lookup by partition key.
pub async fn fetch_one(
    client: &DynamoClient,
    table_name: &str,
    space_id: &str,
) -> Result<SpaceEntry, SpaceError> {
    let result = client
        .get_item()
        .table_name(table_name)
        .key("id", AttributeValue::S(space_id.to_string()))
        .send()
        .await
        .map_err(infrastructure_error)?;

    match result.item() {
        Some(item) => Ok(codec::from_item(item)),
        None => Err(SpaceError::NotFound(space_id.to_string())),
    }
}

/// Full scan of the table, in store-native order. The result is not a
/// consistent snapshot under concurrent writes.
pub async fn list_all(
    client: &DynamoClient,
    table_name: &str,
) -> Result<Vec<SpaceEntry>, SpaceError> {
    let result = client
        .scan()
        .table_name(table_name)
        .send()
        .await
        .map_err(infrastructure_error)?;

    Ok(result.items().iter().map(codec::from_item).collect())
}

/// Unconditional upsert keyed on the entry id.
pub async fn put(
    client: &DynamoClient,
    table_name: &str,
    entry: &SpaceEntry,
) -> Result<(), SpaceError> {
    client
        .put_item()
        .table_name(table_name)
        .set_item(Some(codec::to_item(entry)))
        .send()
        .await
        .map_err(infrastructure_error)?;

    Ok(())
}

/// Rewrite the location attribute only, returning the post-update value.
/// No existence check is made first: updating an unknown id writes a
/// partial record with just id and location (DynamoDB upsert semantics).
pub async fn update_location(
    client: &DynamoClient,
    table_name: &str,
    space_id: &str,
    new_location: &str,
) -> Result<HashMap<String, String>, SpaceError> {
    let result = client
        .update_item()
        .table_name(table_name)
        .key("id", AttributeValue::S(space_id.to_string()))
        .update_expression("SET #location = :location")
        .expression_attribute_names("#location", "location")
        .expression_attribute_values(":location", AttributeValue::S(new_location.to_string()))
        .return_values(ReturnValue::UpdatedNew)
        .send()
        .await
        .map_err(infrastructure_error)?;

    let updated = result
        .attributes()
        .map(|attrs| {
            attrs
                .iter()
                .filter_map(|(k, v)| v.as_s().ok().map(|s| (k.clone(), s.clone())))
                .collect()
        })
        .unwrap_or_default();

    Ok(updated)
}

/// Unconditional delete by id. Deleting an absent id is not an error.
pub async fn delete(
    client: &DynamoClient,
    table_name: &str,
    space_id: &str,
) -> Result<(), SpaceError> {
    client
        .delete_item()
        .table_name(table_name)
        .key("id", AttributeValue::S(space_id.to_string()))
        .send()
        .await
        .map_err(infrastructure_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::operation::delete_item::DeleteItemOutput;
    use aws_sdk_dynamodb::operation::get_item::GetItemOutput;
    use aws_sdk_dynamodb::operation::update_item::UpdateItemOutput;
    use aws_smithy_mocks::{mock, mock_client, RuleMode};

    #[tokio::test]
    async fn test_fetch_one_miss_maps_to_not_found() {
        let get_miss = mock!(aws_sdk_dynamodb::Client::get_item)
            .match_requests(|req| req.table_name() == Some("spaces-test"))
            .then_output(|| GetItemOutput::builder().build());
        let client = mock_client!(aws_sdk_dynamodb, [&get_miss]);

        match fetch_one(&client, "spaces-test", "nonexistent-id").await {
            Err(SpaceError::NotFound(id)) => assert_eq!(id, "nonexistent-id"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_one_decodes_the_stored_item() {
        let stored = SpaceEntry {
            id: "123".to_string(),
            name: "Loft".to_string(),
            location: "Paris".to_string(),
            photo_url: Some("https://example.com/loft.jpg".to_string()),
        };
        let item = codec::to_item(&stored);
        let get_hit = mock!(aws_sdk_dynamodb::Client::get_item)
            .then_output(move || GetItemOutput::builder().set_item(Some(item.clone())).build());
        let client = mock_client!(aws_sdk_dynamodb, [&get_hit]);

        let entry = fetch_one(&client, "spaces-test", "123").await.unwrap();
        assert_eq!(entry, stored);
    }

    #[tokio::test]
    async fn test_delete_of_absent_id_is_idempotent() {
        let delete_rule = mock!(aws_sdk_dynamodb::Client::delete_item)
            .then_output(|| DeleteItemOutput::builder().build());
        let client = mock_client!(aws_sdk_dynamodb, RuleMode::MatchAny, [&delete_rule]);

        assert!(delete(&client, "spaces-test", "missing-id").await.is_ok());
        assert!(delete(&client, "spaces-test", "missing-id").await.is_ok());
    }

    #[tokio::test]
    async fn test_update_location_flattens_updated_attributes() {
        let update_rule = mock!(aws_sdk_dynamodb::Client::update_item)
            .match_requests(|req| req.table_name() == Some("spaces-test"))
            .then_output(|| {
                UpdateItemOutput::builder()
                    .attributes("location", AttributeValue::S("Berlin".to_string()))
                    .build()
            });
        let client = mock_client!(aws_sdk_dynamodb, [&update_rule]);

        let updated = update_location(&client, "spaces-test", "123", "Berlin")
            .await
            .unwrap();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated.get("location"), Some(&"Berlin".to_string()));
    }
}
