// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Handle as typed → bare handle.
/// Accepts `jack`, `@jack`, and pasted profile links like `https://x.com/jack/`.
pub fn bare_handle(input: &str) -> String {
    let mut s = input.trim();
    if let Some(idx) = s.find("://") {
        s = &s[idx + 3..];
        // drop host
        s = s.split_once('/').map(|(_, rest)| rest).unwrap_or("");
    }
    let s = s.split(['?', '#']).next().unwrap_or("");
    let s = s.trim_matches('/');
    let s = s.split('/').next().unwrap_or("");
    s.trim_start_matches('@').to_string()
}

/// Facebook identifiers are full profile URLs; a bare name gets the site prefix.
pub fn facebook_url(input: &str) -> String {
    let s = input.trim();
    if s.starts_with("http://") || s.starts_with("https://") {
        s!(s)
    } else {
        format!("https://www.facebook.com/{}", s.trim_start_matches('/'))
    }
}
