/// Backend primary keys are integer serials.
pub type DbId = i64;

/// Timestamps are passed through exactly as the backend renders them.
///
/// The backend emits naive ISO-8601 strings without an offset, so the
/// client never parses them.
pub type Timestamp = String;

/// Free-form JSON object carrying backend fields the client does not name.
pub type Extra = serde_json::Map<String, serde_json::Value>;
