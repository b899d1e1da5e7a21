use crate::{audit::log_event, codec::StoreCodec, models::SessionIdentity, storage::CURRENT_USER_KEY};

/// Writes the logged-in identity document. Valid until an explicit logout;
/// there is no expiry or refresh in the mocked system.
pub fn login(codec: &StoreCodec, identity: &SessionIdentity) {
    codec.save(CURRENT_USER_KEY, identity);
    log_event(
        Some(identity.id),
        "user_login",
        Some(serde_json::json!({ "username": identity.username })),
    );
}

pub fn logout(codec: &StoreCodec) {
    let user_id = current_user(codec).map(|identity| identity.id);
    codec.remove(CURRENT_USER_KEY);
    log_event(user_id, "user_logout", None);
}

/// A missing or corrupt document reads as "not logged in".
pub fn current_user(codec: &StoreCodec) -> Option<SessionIdentity> {
    codec.load(CURRENT_USER_KEY, None)
}
