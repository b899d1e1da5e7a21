use serde_json::Value;
use uuid::Uuid;

pub fn log_event(user_id: Option<Uuid>, action: &str, metadata: Option<Value>) {
    let metadata = metadata.unwrap_or(Value::Null);
    tracing::info!(
        user_id = ?user_id,
        action,
        metadata = %metadata,
        "audit"
    );
}
