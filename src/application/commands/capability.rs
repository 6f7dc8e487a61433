use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

pub(crate) fn ensure_capability(
    actor: &AuthenticatedUser,
    resource: &str,
    action: &str,
) -> ApplicationResult<()> {
    if actor.has_capability(resource, action) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "missing capability {resource}:{action}"
        )))
    }
}

/// Console writes on `resource` all require the `manage` action.
pub(crate) fn ensure_manage(actor: &AuthenticatedUser, resource: &str) -> ApplicationResult<()> {
    ensure_capability(actor, resource, "manage")
}
