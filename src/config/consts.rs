// src/config/consts.rs

// Field values
pub const SENTINEL: &str = "N/A";

// Providers
pub const SETTLE_DELAY_MS: u64 = 5_000; // fixed wait after navigation, not a retry
pub const DEFAULT_TWEET_COUNT: usize = 5;
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";

// Net config
pub const TWITTER_BASE: &str = "https://twitter.com/";
pub const INSTAGRAM_PROFILE_API: &str =
    "https://i.instagram.com/api/v1/users/web_profile_info/?username=";
pub const INSTAGRAM_APP_ID: &str = "936619743392459";

// Presentation
pub const THUMBNAIL_SIZE: u32 = 100;

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";

// Environment overrides
pub const ENV_RENDER_URL: &str = "SOCIAL_FETCH_BROWSERLESS_URL";
pub const ENV_RENDER_TOKEN: &str = "SOCIAL_FETCH_BROWSERLESS_TOKEN";
pub const ENV_SETTLE_MS: &str = "SOCIAL_FETCH_SETTLE_MS";

// GUI
pub const LAUNCHER_W: f32 = 400.0;
pub const LAUNCHER_H: f32 = 300.0;
pub const SESSION_W: f32 = 400.0;
pub const SESSION_H: f32 = 400.0;
pub const DEFAULT_SESSION_TEXT: &str = "1";
