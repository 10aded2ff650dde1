// src/config/options.rs
use std::time::Duration;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub browser: BrowserOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            fetch: FetchOptions::default(),
            browser: BrowserOptions::default(),
        }
    }
}

impl AppOptions {
    /// Defaults with process environment overrides applied.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(url) = non_empty(ENV_RENDER_URL) {
            opts.browser.render_endpoint = Some(url.trim_end_matches('/').to_string());
        }
        opts.browser.render_token = non_empty(ENV_RENDER_TOKEN);

        if let Some(ms) = non_empty(ENV_SETTLE_MS).and_then(|v| v.parse::<u64>().ok()) {
            opts.fetch.settle = Duration::from_millis(ms);
        }
        opts
    }
}

/// Per-call knobs handed to every provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Upper bound on sub-items (tweets) extracted from a feed.
    pub count: usize,
    /// Fixed wait after navigation so late-rendered content can land.
    pub settle: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_TWEET_COUNT,
            settle: Duration::from_millis(SETTLE_DELAY_MS),
        }
    }
}

impl FetchOptions {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }
}

/// How browser sessions reach pages.
///
/// With `render_endpoint` set, pages are rendered by a Browserless-style
/// `/content` endpoint (a real headless browser). Without it they are fetched
/// directly, which is enough for server-rendered markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserOptions {
    pub render_endpoint: Option<String>,
    pub render_token: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            render_endpoint: None,
            render_token: None,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (s!(*k), s!(*v))).collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let opts = AppOptions::from_lookup(|_| None);
        assert_eq!(opts, AppOptions::default());
        assert_eq!(opts.fetch.count, 5);
        assert_eq!(opts.fetch.settle, Duration::from_secs(5));
    }

    #[test]
    fn env_overrides_render_endpoint_and_settle() {
        let opts = AppOptions::from_lookup(lookup(&[
            (ENV_RENDER_URL, "http://localhost:3000/"),
            (ENV_RENDER_TOKEN, "abc"),
            (ENV_SETTLE_MS, "250"),
        ]));
        assert_eq!(opts.browser.render_endpoint.as_deref(), Some("http://localhost:3000"));
        assert_eq!(opts.browser.render_token.as_deref(), Some("abc"));
        assert_eq!(opts.fetch.settle, Duration::from_millis(250));
    }

    #[test]
    fn blank_or_garbage_env_is_ignored() {
        let opts = AppOptions::from_lookup(lookup(&[
            (ENV_RENDER_URL, "   "),
            (ENV_SETTLE_MS, "soon"),
        ]));
        assert_eq!(opts, AppOptions::default());
    }
}
