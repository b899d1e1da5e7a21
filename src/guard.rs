use crate::models::{Role, SessionIdentity};

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin";
pub const PRODUCT_DASHBOARD_PATH: &str = "/product-management";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Allow,
    RedirectTo(String),
}

/// Gate for a protected route. Pure: the caller performs the actual
/// navigation. Evaluated fresh on every call, so a role change is picked up
/// on the next navigation and never live.
pub fn authorize(
    session: Option<&SessionIdentity>,
    required: &[Role],
    attempted_path: &str,
) -> Access {
    let session = match session {
        Some(session) => session,
        None => {
            // Carry the attempted path so login can bounce back. Best-effort:
            // the login page may or may not honor it.
            return Access::RedirectTo(format!("{LOGIN_PATH}?from={attempted_path}"));
        }
    };

    if required.iter().any(|role| session.roles.contains(role)) {
        return Access::Allow;
    }

    Access::RedirectTo(landing_path(session).to_string())
}

/// Where a logged-in user belongs when a route rejects them.
pub fn landing_path(session: &SessionIdentity) -> &'static str {
    if session.roles.contains(&Role::Admin) {
        ADMIN_DASHBOARD_PATH
    } else if session.roles.contains(&Role::ProductManager) {
        PRODUCT_DASHBOARD_PATH
    } else {
        HOME_PATH
    }
}
