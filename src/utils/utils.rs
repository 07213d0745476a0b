use std::env;

/// Returns the value of the environment variable `key`.
/// Falls back to `fallback` (or an empty string) when the variable is unset or blank.
pub fn get_env(key: &str, fallback: Option<&str>) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => fallback.unwrap_or("").to_string(),
    }
}
