use chrono::{DateTime, FixedOffset};
use serde_json::{from_str, Value};

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub enum EventKind {
    Push { commits: usize },
    Issues { action: String },
    PullRequest { action: String },
    Watch { action: String },
    Other,
}

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Event {
    pub repo: String,
    pub kind: EventKind,
    pub created_at: DateTime<FixedOffset>,
}

// Create
impl Event {
    fn new(repo: impl ToString, kind: EventKind, created_at: &DateTime<FixedOffset>) -> Self {
        Self {
            repo: repo.to_string(),
            kind,
            created_at: created_at.clone(),
        }
    }
}

// Parser
impl Event {
    pub fn parse(json_str: &str) -> crate::model::Result<Vec<Self>> {
        let elements: Vec<Value> = from_str(json_str)?;
        let mut result = Vec::new();
        for details in &elements {
            let Some(event_type) = details["type"].as_str() else {
                return Err("Not found 'type' field".into());
            };
            let Some(repo) = details["repo"]["name"].as_str() else {
                return Err("Not found 'repo.name' field".into());
            };
            let Some(created_at) = details["created_at"].as_str() else {
                return Err("Not found 'created_at' field".into());
            };
            let Ok(created_at) = DateTime::parse_from_rfc3339(created_at) else {
                return Err(format!("Not a valid date time: {}", created_at).into());
            };
            let kind = Self::parse_kind(event_type, &details["payload"]);
            let new = Self::new(repo, kind, &created_at);
            result.push(new);
        }
        Ok(result)
    }

    // Unrecognized event types map to `Other`; a missing action maps to an
    // empty string. Both are skipped later instead of failing the parse.
    fn parse_kind(event_type: &str, payload: &Value) -> EventKind {
        match event_type {
            "PushEvent" => EventKind::Push {
                commits: payload["commits"].as_array().map_or(0, Vec::len),
            },
            "IssuesEvent" => EventKind::Issues {
                action: parse_action(payload),
            },
            "PullRequestEvent" => EventKind::PullRequest {
                action: parse_action(payload),
            },
            "WatchEvent" => EventKind::Watch {
                action: parse_action(payload),
            },
            _ => EventKind::Other,
        }
    }
}

fn parse_action(payload: &Value) -> String {
    payload["action"].as_str().unwrap_or_default().to_string()
}
