//! Deployment configuration baked in at compile time.

/// Base path for the router (e.g., `/app` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_from(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Webhook that receives waitlist submissions, from `DESKAWAY_WAITLIST_WEBHOOK`.
#[must_use]
pub fn waitlist_webhook() -> Option<String> {
    webhook_from(option_env!("DESKAWAY_WAITLIST_WEBHOOK").unwrap_or(""))
}

fn router_base_from(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

fn webhook_from(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (raw.starts_with("https://") || raw.starts_with("http://")).then(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::{router_base_from, webhook_from};

    #[test]
    fn router_base_trims_public_url() {
        assert_eq!(router_base_from("/app/"), Some("/app".to_string()));
        assert_eq!(router_base_from("  "), None);
    }

    #[test]
    fn webhook_requires_http_scheme() {
        assert_eq!(
            webhook_from(" https://hooks.example.com/waitlist "),
            Some("https://hooks.example.com/waitlist".to_string())
        );
        assert_eq!(webhook_from(""), None);
        assert_eq!(webhook_from("ftp://example.com"), None);
    }
}
