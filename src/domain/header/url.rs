/// Returns the given address with the `https://` scheme guaranteed.
///
/// A bare host gets the scheme prepended; an `http://` prefix is rewritten
/// (first occurrence only); anything already secure passes through unchanged.
pub fn ensure_https(url: &str) -> String {
    if url.starts_with("https://") {
        return url.to_string();
    }
    if url.starts_with("http://") {
        return url.replacen("http://", "https://", 1);
    }
    format!("https://{url}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_gets_scheme() {
        assert_eq!(
            ensure_https("dashboard.example.com"),
            "https://dashboard.example.com"
        );
    }

    #[test]
    fn test_insecure_scheme_rewritten() {
        assert_eq!(ensure_https("http://x.com"), "https://x.com");
    }

    #[test]
    fn test_secure_scheme_unchanged() {
        assert_eq!(ensure_https("https://x.com"), "https://x.com");
    }

    #[test]
    fn test_idempotent() {
        let once = ensure_https("portal.example.com");
        assert_eq!(ensure_https(&once), once);
    }

    #[test]
    fn test_only_first_occurrence_rewritten() {
        assert_eq!(
            ensure_https("http://x.com/redirect?to=http://y.com"),
            "https://x.com/redirect?to=http://y.com"
        );
    }

    #[test]
    fn test_path_and_port_preserved() {
        assert_eq!(
            ensure_https("portal.example.com:8443/app"),
            "https://portal.example.com:8443/app"
        );
    }
}
