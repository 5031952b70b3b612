use super::error::CommentsError;
use serde::Deserialize;
use serde_json::Value;

const KNOWN_OPERATIONS: &[&str] = &["install", "update", "uninstall"];

/// A completed package lifecycle transition reported by the host.
///
/// Wire form, one JSON object per event:
/// `{"operation":"update","initial":"vendor/a","target":"vendor/b"}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "operation", rename_all = "lowercase")]
pub enum PackageEvent {
    Install { package: String },
    Update { initial: String, target: String },
    Uninstall { package: String },
}

impl PackageEvent {
    /// The package whose comment applies to this event.
    ///
    /// Updates resolve to the target: the comment follows the package going
    /// forward, not the one being replaced.
    pub fn package(&self) -> &str {
        match self {
            PackageEvent::Install { package } | PackageEvent::Uninstall { package } => package,
            PackageEvent::Update { target, .. } => target,
        }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            PackageEvent::Install { .. } => "install",
            PackageEvent::Update { .. } => "update",
            PackageEvent::Uninstall { .. } => "uninstall",
        }
    }

    /// Decode one event from its JSON wire form.
    ///
    /// An operation kind outside install/update/uninstall means the host broke
    /// its event contract and is reported as [`CommentsError::UnknownOperation`].
    pub fn from_json(line: &str) -> Result<Self, CommentsError> {
        let value: Value =
            serde_json::from_str(line).map_err(|e| CommentsError::invalid_event(e.to_string()))?;

        let operation = match value.get("operation") {
            Some(Value::String(op)) => op.as_str(),
            Some(other) => return Err(CommentsError::unknown_operation(other.to_string())),
            None => return Err(CommentsError::invalid_event("missing \"operation\" field")),
        };
        if !KNOWN_OPERATIONS.contains(&operation) {
            return Err(CommentsError::unknown_operation(operation));
        }

        serde_json::from_value(value).map_err(|e| CommentsError::invalid_event(e.to_string()))
    }
}
