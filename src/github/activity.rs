use crate::model::{Event, Result};

const GITHUB_API_URL: &str = "https://api.github.com";

pub trait ActivityFetcher {
    async fn fetch_activity(&self, username: &str) -> Result<Vec<Event>>;
}

impl ActivityFetcher for reqwest::Client {
    async fn fetch_activity(&self, username: &str) -> Result<Vec<Event>> {
        let url = format!("{GITHUB_API_URL}/users/{username}/events/public");
        let response = self.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(format!("Failed to fetch GitHub activity: {}", response.status()).into());
        }
        let body = response.text().await?;
        Event::parse(&body)
    }
}
