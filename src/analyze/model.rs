use crate::model::EventKind;
use indexmap::IndexMap;

pub type ActivityStats = IndexMap<String, RepoStats>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RepoStats {
    pub commits: usize,
    pub issues_opened: usize,
    pub issues_closed: usize,
    pub prs_opened: usize,
    pub prs_closed: usize,
    pub stars: usize,
}

impl RepoStats {
    pub fn new(
        commits: usize,
        issues_opened: usize,
        issues_closed: usize,
        prs_opened: usize,
        prs_closed: usize,
        stars: usize,
    ) -> Self {
        Self {
            commits,
            issues_opened,
            issues_closed,
            prs_opened,
            prs_closed,
            stars,
        }
    }

    pub fn default() -> Self {
        Self::new(0, 0, 0, 0, 0, 0)
    }

    // Counters only ever grow; events outside the recognized
    // type/action table leave the record untouched.
    pub fn record(&mut self, kind: &EventKind) {
        match kind {
            EventKind::Push { commits } => self.commits += commits,
            EventKind::Issues { action } => match action.as_str() {
                "opened" => self.issues_opened += 1,
                "closed" => self.issues_closed += 1,
                _ => {}
            },
            EventKind::PullRequest { action } => match action.as_str() {
                "opened" => self.prs_opened += 1,
                "closed" => self.prs_closed += 1,
                _ => {}
            },
            EventKind::Watch { action } => {
                if action == "started" {
                    self.stars += 1;
                }
            }
            EventKind::Other => {}
        }
    }
}
