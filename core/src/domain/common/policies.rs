use crate::domain::common::entities::app_errors::CoreError;

/// Turns a policy decision into a `Forbidden` error when access is denied.
pub fn ensure_policy(
    result_has_permission: Result<bool, CoreError>,
    error_message: &str,
) -> Result<(), CoreError> {
    match result_has_permission {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(error_message.to_string())),
        Err(e) => Err(e),
    }
}

/// Ownership rules shared by the food and food request services.
///
/// Identities come from verified token claims; the policy only compares the
/// claimed email with the resource owner.
#[derive(Debug, Clone, Default)]
pub struct RescuePolicy;

impl RescuePolicy {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_policy_allows() {
        assert!(ensure_policy(Ok(true), "nope").is_ok());
    }

    #[test]
    fn test_ensure_policy_denies_with_message() {
        let err = ensure_policy(Ok(false), "not yours").unwrap_err();
        assert_eq!(err, CoreError::Forbidden("not yours".to_string()));
    }

    #[test]
    fn test_ensure_policy_forwards_errors() {
        let err = ensure_policy(Err(CoreError::InternalServerError), "x").unwrap_err();
        assert_eq!(err, CoreError::InternalServerError);
    }
}
