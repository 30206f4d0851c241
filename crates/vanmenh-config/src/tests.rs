#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_default_server_binds_localhost() {
        let server = ServerConfig::default();
        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.port, 3001);
    }

    #[test]
    fn test_default_llm_points_at_groq() {
        let llm = LlmConfig::default();
        assert!(llm.base_url.contains("api.groq.com"));
        assert!(llm.request_timeout_secs > 0);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let cfg = Config::load_from(std::path::Path::new("/nonexistent/vanmenh.toml")).unwrap();
        assert_eq!(cfg.server.port, 3001);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let cfg: Config = toml::from_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert!(cfg.llm.base_url.contains("groq"));
    }
}
