//! Tests for tracing subscriber setup

#[cfg(test)]
mod tests {
    use rug_triangles::io::logging::{filter, init};

    // Tests the fallback filter follows the quiet flag when RUST_LOG is unset
    // Verified by ignoring the quiet flag
    #[test]
    fn test_filter_fallback() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(filter(false).to_string(), "rug_triangles=warn");
        assert_eq!(filter(true).to_string(), "rug_triangles=error");
    }

    // Tests repeated initialisation keeps the first subscriber without panicking
    // Verified by switching try_init to init
    #[test]
    fn test_init_is_idempotent() {
        init(true);
        init(false);
        tracing::info!("logging initialised twice");
    }
}
