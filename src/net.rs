// src/net.rs

use std::error::Error;

use reqwest::blocking::Client;

use crate::params::USER_AGENT;

/// Shared blocking client. reqwest's 30-second client default is disabled:
/// the page fetch runs with no deadline at all, and downloads set their own
/// per-request one instead.
pub fn client() -> Result<Client, Box<dyn Error + Send + Sync>> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(None)
        .build()?)
}

/// Fetch one page and return the body as text. Non-2xx is an error.
/// Any failure here is fatal to the run.
pub fn fetch_page(client: &Client, url: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
    let resp = client.get(url).send()?.error_for_status()?;
    Ok(resp.text()?)
}
