// src/core/net.rs

// Blocking HTTP over reqwest. Non-success statuses are errors; callers
// decide severity.

use std::error::Error;
use std::time::Duration;

use reqwest::blocking::Client;

pub const USER_AGENT: &str = "Mozilla/5.0";

pub fn make_client(timeout: Duration) -> Result<Client, Box<dyn Error>> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

pub fn get_text(client: &Client, url: &str) -> Result<String, Box<dyn Error>> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {status} {url}").into());
    }
    Ok(resp.text()?)
}

pub fn get_bytes(client: &Client, url: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {status} {url}").into());
    }
    Ok(resp.bytes()?.to_vec())
}
