use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow state of an issue.
///
/// The tracker's status set is open-ended: servers ship custom workflows, so
/// anything outside the five well-known states lands in `Other` instead of
/// failing deserialization. Rendering treats `Other` as an unstyled
/// passthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Open,
    Reopened,
    InProgress,
    Resolved,
    Closed,
    Other(String),
}

impl Status {
    /// Whether the issue counts as finished for progress purposes.
    pub fn is_done(&self) -> bool {
        matches!(self, Status::Resolved | Status::Closed)
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Open" => Status::Open,
            "Reopened" => Status::Reopened,
            "In Progress" => Status::InProgress,
            "Resolved" => Status::Resolved,
            "Closed" => Status::Closed,
            _ => Status::Other(s),
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Open => f.write_str("Open"),
            Status::Reopened => f.write_str("Reopened"),
            Status::InProgress => f.write_str("In Progress"),
            Status::Resolved => f.write_str("Resolved"),
            Status::Closed => f.write_str("Closed"),
            Status::Other(s) => f.write_str(s),
        }
    }
}

/// A tracker account.
///
/// Identity is the stable `name` key; `display_name` is presentation only and
/// deliberately excluded from equality, so "is this issue assigned to the
/// viewer" compares accounts, not labels.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
        }
    }

    /// The label shown next to `@` in rendered output.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// An issue as fetched from the tracker. Optional fields are expected
/// non-error states; the renderer skips the matching output for each.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub key: String,
    pub status: Status,
    pub summary: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub issue_type: String,
    #[serde(default)]
    pub assignee: Option<User>,
    #[serde(default)]
    pub parent: Option<Box<Issue>>,
    #[serde(default)]
    pub subtasks: Vec<Issue>,
    pub updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub body: String,
    pub created: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_known_strings() {
        assert_eq!(Status::from("Open".to_string()), Status::Open);
        assert_eq!(Status::from("In Progress".to_string()), Status::InProgress);
        assert_eq!(Status::from("Closed".to_string()), Status::Closed);
    }

    #[test]
    fn test_status_unknown_string_is_other() {
        let status = Status::from("Blocked".to_string());
        assert_eq!(status, Status::Other("Blocked".to_string()));
        assert_eq!(status.to_string(), "Blocked");
    }

    #[test]
    fn test_status_display_roundtrip() {
        for name in ["Open", "Reopened", "In Progress", "Resolved", "Closed"] {
            assert_eq!(Status::from(name.to_string()).to_string(), name);
        }
    }

    #[test]
    fn test_status_is_done() {
        assert!(Status::Resolved.is_done());
        assert!(Status::Closed.is_done());
        assert!(!Status::Open.is_done());
        assert!(!Status::Other("Done-ish".into()).is_done());
    }

    #[test]
    fn test_user_equality_ignores_display_name() {
        let a = User {
            name: "bob".into(),
            display_name: Some("Bob B.".into()),
        };
        let b = User::new("bob");
        assert_eq!(a, b);
        assert_ne!(a, User::new("alice"));
    }

    #[test]
    fn test_user_label_prefers_display_name() {
        let mut user = User::new("bob");
        assert_eq!(user.label(), "bob");
        user.display_name = Some("Bob B.".into());
        assert_eq!(user.label(), "Bob B.");
    }

    #[test]
    fn test_issue_deserializes_from_tracker_json() {
        let json = r#"{
            "key": "TIX-7",
            "status": "In Progress",
            "summary": "Wire up the frobnicator",
            "type": "Task",
            "assignee": { "name": "bob" },
            "updated": "2024-04-05T13:37:00Z"
        }"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.key, "TIX-7");
        assert_eq!(issue.status, Status::InProgress);
        assert_eq!(issue.issue_type, "Task");
        assert!(issue.description.is_none());
        assert!(issue.parent.is_none());
        assert!(issue.subtasks.is_empty());
        assert_eq!(issue.assignee.unwrap().name, "bob");
    }

    #[test]
    fn test_status_serde_roundtrip_keeps_unknown() {
        let issue_json = serde_json::to_string(&Status::Other("Waiting".into())).unwrap();
        assert_eq!(issue_json, "\"Waiting\"");
        let back: Status = serde_json::from_str(&issue_json).unwrap();
        assert_eq!(back, Status::Other("Waiting".into()));
    }
}
