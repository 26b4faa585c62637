//! Environment variable helpers with warn-level logging for bad values.

/// Parse an environment variable, falling back to `default`.
///
/// An unset variable falls back silently (the expected case); a set but
/// unparseable value logs a warning before falling back, instead of being
/// silently swallowed.
pub fn env_parse_or<T: std::str::FromStr + std::fmt::Display>(var: &str, default: T) -> T {
    match std::env::var(var) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(var, value = %raw, default = %default, "invalid env var value, using default");
                default
            },
        },
        Err(_) => default,
    }
}

/// Read a string environment variable, treating empty as unset.
#[must_use]
pub fn env_nonempty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_falls_back_on_garbage() {
        let var = "TOUCHBASE_TEST_PARSE_GARBAGE";
        unsafe { std::env::set_var(var, "not-a-number") };
        let port: u16 = env_parse_or(var, 5001);
        assert_eq!(port, 5001);
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn parse_uses_valid_value() {
        let var = "TOUCHBASE_TEST_PARSE_VALID";
        unsafe { std::env::set_var(var, "8080") };
        let port: u16 = env_parse_or(var, 5001);
        assert_eq!(port, 8080);
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn nonempty_filters_blank_values() {
        let var = "TOUCHBASE_TEST_NONEMPTY";
        unsafe { std::env::set_var(var, "   ") };
        assert_eq!(env_nonempty(var), None);
        unsafe { std::env::set_var(var, "token") };
        assert_eq!(env_nonempty(var).as_deref(), Some("token"));
        unsafe { std::env::remove_var(var) };
    }
}
