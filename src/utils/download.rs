use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use std::io::Read;
use std::time::Duration;
use tracing::debug;

use crate::error::InstallError;
use crate::platform::PlatformArch;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);
/// Upper bound on how much `Content-Length` is trusted for preallocation.
const MAX_PREALLOC: u64 = 64 << 20;

/// Something that can turn a download URL into the binary's bytes.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, InstallError>;
}

/// Substitutes every `{{ .Version }}`, `{{ .Platform }}`, `{{ .Arch }}` and
/// `{{ .Ext }}` placeholder in `template`.
pub fn render_url(template: &str, target: &PlatformArch, version: &str) -> String {
    template
        .replace("{{ .Version }}", version)
        .replace("{{ .Platform }}", target.platform.as_str())
        .replace("{{ .Arch }}", target.arch.as_str())
        .replace("{{ .Ext }}", target.ext())
}

/// Buffer size to reserve for a body of `content_length` bytes.
fn prealloc_hint(content_length: u64) -> usize {
    content_length.min(MAX_PREALLOC) as usize
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, InstallError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| InstallError::Fetch {
                url: String::new(),
                reason: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, InstallError> {
        let fail = |reason: String| InstallError::Fetch {
            url: url.to_string(),
            reason,
        };

        let mut resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| fail(e.to_string()))?;

        let status = resp.status();
        debug!(%url, %status, "download response");
        if !status.is_success() {
            return Err(fail(format!("server responded with {}", status)));
        }

        let total_size = resp.content_length().unwrap_or(0);
        let pb = ProgressBar::new(total_size);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
        {
            pb.set_style(style.progress_chars("#>-"));
        }

        let mut body = Vec::with_capacity(prealloc_hint(total_size));
        pb.wrap_read(&mut resp)
            .read_to_end(&mut body)
            .map_err(|e| fail(e.to_string()))?;
        pb.finish_and_clear();

        if body.is_empty() {
            return Err(fail("empty response body".to_string()));
        }

        debug!(bytes = body.len(), "download complete");
        Ok(body)
    }
}
