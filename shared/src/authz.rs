use crate::types::CallerClaims;
use lambda_http::{Request, RequestExt};
use serde_json::Value;

/// Pull the Cognito claims off the request context, if the authorizer
/// attached any. REST API authorizers put the claims map under a "claims"
/// key; HTTP APIs carry them in the jwt block. Absence at any level means
/// no claims, never an error.
pub fn caller_claims(event: &Request) -> Option<CallerClaims> {
    let context = event.request_context_ref()?;
    let authorizer = context.authorizer()?;

    let groups = authorizer
        .fields
        .get("claims")
        .and_then(|claims| claims.get("cognito:groups"))
        .and_then(parse_groups)
        .or_else(|| {
            authorizer
                .jwt
                .as_ref()
                .and_then(|jwt| jwt.claims.get("cognito:groups"))
                .map(|raw| parse_group_list(raw))
        });

    Some(CallerClaims { groups })
}

/// True iff the caller's claims list membership in the "admin" group.
/// Only deletes consult this; reads and writes rely on the upstream
/// authorizer having authenticated the caller.
pub fn is_admin_group_member(claims: Option<&CallerClaims>) -> bool {
    claims
        .and_then(|c| c.groups.as_ref())
        .map(|groups| groups.iter().any(|g| g == "admin"))
        .unwrap_or(false)
}

fn parse_groups(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|v| v.as_str().map(|s| s.to_string()))
                .collect(),
        ),
        Value::String(raw) => Some(parse_group_list(raw)),
        _ => None,
    }
}

/// Cognito renders multi-valued group claims as "[admin user]" or a
/// comma-separated list depending on the integration.
fn parse_group_list(raw: &str) -> Vec<String> {
    raw.trim_matches(['[', ']'])
        .split([',', ' '])
        .filter(|g| !g.is_empty())
        .map(|g| g.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims(groups: Option<Vec<&str>>) -> CallerClaims {
        CallerClaims {
            groups: groups.map(|g| g.iter().map(|s| s.to_string()).collect()),
        }
    }

    #[test]
    fn test_admin_group_is_privileged() {
        let caller = claims(Some(vec!["user", "admin"]));
        assert!(is_admin_group_member(Some(&caller)));
    }

    #[test]
    fn test_non_admin_group_is_not_privileged() {
        let caller = claims(Some(vec!["user"]));
        assert!(!is_admin_group_member(Some(&caller)));
    }

    #[test]
    fn test_missing_groups_is_not_privileged() {
        let caller = claims(None);
        assert!(!is_admin_group_member(Some(&caller)));
    }

    #[test]
    fn test_missing_claims_is_not_privileged() {
        assert!(!is_admin_group_member(None));
    }

    #[test]
    fn test_parse_groups_from_array() {
        let value = json!(["admin", "user"]);
        assert_eq!(
            parse_groups(&value),
            Some(vec!["admin".to_string(), "user".to_string()])
        );
    }

    #[test]
    fn test_parse_groups_from_string() {
        let value = json!("[admin user]");
        assert_eq!(
            parse_groups(&value),
            Some(vec!["admin".to_string(), "user".to_string()])
        );
        let value = json!("admin,user");
        assert_eq!(
            parse_groups(&value),
            Some(vec!["admin".to_string(), "user".to_string()])
        );
    }

    #[test]
    fn test_parse_groups_rejects_other_kinds() {
        assert_eq!(parse_groups(&json!(42)), None);
    }
}
