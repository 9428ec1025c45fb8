use crate::analyze::{ActivityStats, RepoStats};
use crate::model::Event;

pub trait Aggregator {
    fn aggregate(&self) -> ActivityStats;
}

impl Aggregator for [Event] {
    fn aggregate(&self) -> ActivityStats {
        let mut stats = ActivityStats::new();
        for event in self {
            let repo_stats = stats
                .entry(event.repo.clone())
                .or_insert_with(RepoStats::default);
            repo_stats.record(&event.kind);
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(json: &str) -> Vec<Event> {
        Event::parse(json).unwrap()
    }

    #[test]
    fn mixed_feed_attributes_each_event_to_one_repo() {
        let feed = r#"[
            {"type":"PushEvent","repo":{"name":"r1"},"payload":{"commits":["a1","b2"]},"created_at":"2024-01-10T12:00:00Z"},
            {"type":"IssuesEvent","repo":{"name":"r1"},"payload":{"action":"opened"},"created_at":"2024-01-10T12:01:00Z"},
            {"type":"WatchEvent","repo":{"name":"r2"},"payload":{"action":"started"},"created_at":"2024-01-10T12:02:00Z"}
        ]"#;
        let stats = events(feed).aggregate();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats["r1"], RepoStats::new(2, 1, 0, 0, 0, 0));
        assert_eq!(stats["r2"], RepoStats::new(0, 0, 0, 0, 0, 1));
    }

    #[test]
    fn repeated_events_accumulate_on_the_same_repo() {
        let feed = r#"[
            {"type":"PushEvent","repo":{"name":"r1"},"payload":{"commits":["a1"]},"created_at":"2024-01-10T12:00:00Z"},
            {"type":"PushEvent","repo":{"name":"r1"},"payload":{"commits":["b2","c3"]},"created_at":"2024-01-10T12:01:00Z"},
            {"type":"PullRequestEvent","repo":{"name":"r1"},"payload":{"action":"opened"},"created_at":"2024-01-10T12:02:00Z"},
            {"type":"PullRequestEvent","repo":{"name":"r1"},"payload":{"action":"closed"},"created_at":"2024-01-10T12:03:00Z"},
            {"type":"IssuesEvent","repo":{"name":"r1"},"payload":{"action":"closed"},"created_at":"2024-01-10T12:04:00Z"}
        ]"#;
        let stats = events(feed).aggregate();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats["r1"], RepoStats::new(3, 0, 1, 1, 1, 0));
    }

    #[test]
    fn unknown_types_and_actions_change_nothing() {
        let feed = r#"[
            {"type":"ForkEvent","repo":{"name":"r1"},"payload":{},"created_at":"2024-01-10T12:00:00Z"},
            {"type":"IssuesEvent","repo":{"name":"r1"},"payload":{"action":"reopened"},"created_at":"2024-01-10T12:01:00Z"},
            {"type":"PullRequestEvent","repo":{"name":"r1"},"payload":{"action":"synchronize"},"created_at":"2024-01-10T12:02:00Z"},
            {"type":"WatchEvent","repo":{"name":"r1"},"payload":{"action":"stopped"},"created_at":"2024-01-10T12:03:00Z"}
        ]"#;
        let stats = events(feed).aggregate();
        assert_eq!(stats["r1"], RepoStats::default());
    }

    #[test]
    fn push_without_commit_payload_adds_zero() {
        let feed = r#"[
            {"type":"PushEvent","repo":{"name":"r1"},"payload":{},"created_at":"2024-01-10T12:00:00Z"}
        ]"#;
        let stats = events(feed).aggregate();
        assert_eq!(stats["r1"].commits, 0);
    }

    #[test]
    fn repeated_watch_started_events_keep_counting() {
        let feed = r#"[
            {"type":"WatchEvent","repo":{"name":"r1"},"payload":{"action":"started"},"created_at":"2024-01-10T12:00:00Z"},
            {"type":"WatchEvent","repo":{"name":"r1"},"payload":{"action":"started"},"created_at":"2024-01-10T12:01:00Z"}
        ]"#;
        let stats = events(feed).aggregate();
        assert_eq!(stats["r1"].stars, 2);
    }

    #[test]
    fn empty_feed_yields_empty_stats() {
        let stats = events("[]").aggregate();
        assert!(stats.is_empty());
    }
}
