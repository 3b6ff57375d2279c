use anyhow::{anyhow, Result};
use corpus::Transport;
use reqwest::blocking::Client;
use std::cell::Cell;
use std::thread::sleep;
use std::time::{Duration, Instant};

/// Blocking E-utilities transport. Requests are spaced by at least `delay`; no retries.
pub struct HttpTransport {
    client: Client,
    delay: Duration,
    last_request: Cell<Option<Instant>>,
}

impl HttpTransport {
    pub fn new(timeout_secs: u64, delay_ms: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("erp-scanner/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client, delay: Duration::from_millis(delay_ms), last_request: Cell::new(None) })
    }

    fn wait_turn(&self) {
        if let Some(prev) = self.last_request.get() {
            let since = prev.elapsed();
            if since < self.delay { sleep(self.delay - since); }
        }
        self.last_request.set(Some(Instant::now()));
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        self.wait_turn();
        tracing::debug!(url, "GET");
        let resp = self.client.get(url).send()?;
        if !resp.status().is_success() {
            return Err(anyhow!("GET {url} returned {}", resp.status()));
        }
        Ok(resp.bytes()?.to_vec())
    }
}
