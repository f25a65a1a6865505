// src/core/net.rs
// Blocking HTTP helpers shared by the store client and the WebDriver client.

use std::time::Duration;

use crate::config::consts::{HTTP_TIMEOUT_SECS, HTTP_USER_AGENT};
use crate::error::Result;

pub fn agent() -> ureq::Agent {
    agent_with(HTTP_USER_AGENT, Duration::from_secs(HTTP_TIMEOUT_SECS))
}

pub fn agent_with(user_agent: &str, timeout: Duration) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
}

/// GET with query pairs, body as text. Non-2xx becomes `ScrapeError::Api`.
pub fn get_text(agent: &ureq::Agent, url: &str, query: &[(&str, &str)]) -> Result<String> {
    let mut req = agent.get(url);
    for (k, v) in query {
        req = req.query(k, v);
    }
    Ok(req.call()?.into_string()?)
}
