use crate::error::SpaceError;
use crate::types::SpaceDraft;

/// Check that a candidate entry carries every required field. Fields are
/// checked in a fixed order and only the first missing one is reported.
pub fn validate_as_space_entry(draft: &SpaceDraft) -> Result<(), SpaceError> {
    if draft.location.is_none() {
        return Err(SpaceError::MissingField("location".to_string()));
    }
    if draft.name.is_none() {
        return Err(SpaceError::MissingField("name".to_string()));
    }
    if draft.id.is_none() {
        return Err(SpaceError::MissingField("id".to_string()));
    }
    Ok(())
}
