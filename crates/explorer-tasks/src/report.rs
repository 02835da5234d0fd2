//! Report-ready email formatting.

/// Subject line for a finished report.
pub fn ready_subject(title: &str) -> String {
    format!("[SQL Explorer] Report \"{title}\" is ready")
}

/// Plain-text body carrying the presigned download link.
pub fn ready_body(url: &str) -> String {
    format!("Download results:\n{url}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_carries_title() {
        assert_eq!(
            ready_subject("Monthly revenue"),
            "[SQL Explorer] Report \"Monthly revenue\" is ready"
        );
    }

    #[test]
    fn test_body_carries_url() {
        let body = ready_body("https://example.com/r.csv?sig=abc");
        assert!(body.starts_with("Download results:"));
        assert!(body.contains("https://example.com/r.csv?sig=abc"));
    }
}
