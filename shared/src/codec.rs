use crate::types::SpaceEntry;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

/// Marshal a space entry into the DynamoDB attribute encoding. All domain
/// fields are string-kinded; photoUrl is only written when present.
pub fn to_item(entry: &SpaceEntry) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert("id".to_string(), AttributeValue::S(entry.id.clone()));
    item.insert("name".to_string(), AttributeValue::S(entry.name.clone()));
    item.insert(
        "location".to_string(),
        AttributeValue::S(entry.location.clone()),
    );
    if let Some(url) = &entry.photo_url {
        item.insert("photoUrl".to_string(), AttributeValue::S(url.clone()));
    }
    item
}

/// Unmarshal a DynamoDB item back into a space entry. Attributes this
/// version does not know about are ignored; a missing photoUrl decodes
/// as None.
pub fn from_item(item: &HashMap<String, AttributeValue>) -> SpaceEntry {
    let string_attr = |key: &str| {
        item.get(key)
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
    };

    SpaceEntry {
        id: string_attr("id").unwrap_or_default(),
        name: string_attr("name").unwrap_or_default(),
        location: string_attr("location").unwrap_or_default(),
        photo_url: string_attr("photoUrl"),
    }
}
