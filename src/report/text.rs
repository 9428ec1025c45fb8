use crate::analyze::ActivityStats;
use itertools::Itertools;
use std::cmp::Reverse;

pub trait ActivityReport {
    fn report_lines(&self) -> Vec<String>;
}

impl ActivityReport for ActivityStats {
    fn report_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        push_section(&mut lines, "Commits", self.commit_lines());
        push_section(&mut lines, "Issues", self.issue_lines());
        push_section(&mut lines, "Pull Requests", self.pull_request_lines());
        push_section(&mut lines, "Stars", self.star_lines());
        lines
    }
}

trait SectionExt {
    fn commit_lines(&self) -> Vec<String>;
    fn issue_lines(&self) -> Vec<String>;
    fn pull_request_lines(&self) -> Vec<String>;
    fn star_lines(&self) -> Vec<String>;
}

impl SectionExt for ActivityStats {
    fn commit_lines(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, stats)| stats.commits > 0)
            .sorted_by_key(|(_, stats)| Reverse(stats.commits))
            .map(|(name, stats)| {
                format!(
                    "- Pushed {} commit{} to {}",
                    stats.commits,
                    plural(stats.commits),
                    name
                )
            })
            .collect()
    }

    fn issue_lines(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, stats)| stats.issues_opened > 0 || stats.issues_closed > 0)
            .sorted_by_key(|(_, stats)| Reverse(stats.issues_opened + stats.issues_closed))
            .flat_map(|(name, stats)| {
                let mut messages = Vec::new();
                if stats.issues_opened > 0 {
                    messages.push(format!(
                        "- Opened {} issue{} in {}",
                        stats.issues_opened,
                        plural(stats.issues_opened),
                        name
                    ));
                }
                if stats.issues_closed > 0 {
                    messages.push(format!(
                        "- Closed {} issue{} in {}",
                        stats.issues_closed,
                        plural(stats.issues_closed),
                        name
                    ));
                }
                messages
            })
            .collect()
    }

    fn pull_request_lines(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, stats)| stats.prs_opened > 0 || stats.prs_closed > 0)
            .sorted_by_key(|(_, stats)| Reverse(stats.prs_opened + stats.prs_closed))
            .flat_map(|(name, stats)| {
                let mut messages = Vec::new();
                if stats.prs_opened > 0 {
                    messages.push(format!(
                        "- Created {} pull request{} in {}",
                        stats.prs_opened,
                        plural(stats.prs_opened),
                        name
                    ));
                }
                if stats.prs_closed > 0 {
                    messages.push(format!(
                        "- Closed {} pull request{} in {}",
                        stats.prs_closed,
                        plural(stats.prs_closed),
                        name
                    ));
                }
                messages
            })
            .collect()
    }

    // A repeated watch counter still renders as one line; the count
    // only drives the sort.
    fn star_lines(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, stats)| stats.stars > 0)
            .sorted_by_key(|(_, stats)| Reverse(stats.stars))
            .map(|(name, _)| format!("- Starred {name}"))
            .collect()
    }
}

fn push_section(lines: &mut Vec<String>, header: &str, section: Vec<String>) {
    if section.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(format!("{header}:"));
    lines.extend(section);
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
