//! API key resolution

/// Environment variable consulted when no key is passed explicitly
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Keys starting with this prefix are template values, not real credentials
pub const PLACEHOLDER_PREFIX: &str = "sk-your-";

/// Resolve the key from an explicit value, then `OPENAI_API_KEY`, then settings.
pub fn resolve_api_key(explicit: Option<String>, settings_key: Option<&str>) -> Option<String> {
    resolve_api_key_from(explicit, std::env::var(API_KEY_ENV).ok(), settings_key)
}

/// First non-blank candidate wins. A placeholder winner means no key at all;
/// lower-priority sources are not consulted in that case.
pub fn resolve_api_key_from(
    explicit: Option<String>,
    env_key: Option<String>,
    settings_key: Option<&str>,
) -> Option<String> {
    let candidate = [explicit, env_key, settings_key.map(str::to_string)]
        .into_iter()
        .flatten()
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())?;

    if is_placeholder(&candidate) {
        None
    } else {
        Some(candidate)
    }
}

#[must_use]
pub fn is_placeholder(key: &str) -> bool {
    key.starts_with(PLACEHOLDER_PREFIX)
}
