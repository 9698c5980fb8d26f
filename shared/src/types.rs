use serde::{Deserialize, Serialize};

// ========== SPACE ==========
/// A bookable space as stored in DynamoDB and returned on the wire.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpaceEntry {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(rename = "photoUrl", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// A candidate entry assembled from a create request body, before the
/// server-side id is attached and the required fields are validated.
#[derive(Debug, Default, Deserialize)]
pub struct SpaceDraft {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "photoUrl")]
    pub photo_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSpaceRequest {
    pub location: Option<String>,
}

// ========== CALLER ==========
/// Claims the Cognito authorizer attached to the request. Read-only input;
/// the handler never issues or refreshes credentials.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallerClaims {
    pub groups: Option<Vec<String>>,
}
