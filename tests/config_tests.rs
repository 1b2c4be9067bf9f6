#[cfg(test)]
mod config_tests {
    use bzrwrapper::config::{Config, ENV_BZR, ENV_TIMEOUT};
    use bzrwrapper::BzrError;
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::TempDir;

    fn clear_env() {
        std::env::remove_var(ENV_BZR);
        std::env::remove_var(ENV_TIMEOUT);
    }

    #[test]
    #[serial]
    fn test_defaults_without_file() {
        clear_env();
        let dir = TempDir::new().unwrap();

        let config = Config::load(Some(dir.path().join("missing.toml").as_path())).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.bzr_path, PathBuf::from("bzr"));
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.forward);
    }

    #[test]
    #[serial]
    fn test_partial_file_keeps_defaults() {
        clear_env();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timeout_secs = 5\nforward = false\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();

        assert_eq!(config.timeout_secs, 5);
        assert!(!config.forward);
        assert_eq!(config.bzr_path, PathBuf::from("bzr"));
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "bzr_path = \"/usr/bin/bzr\"\ntimeout_secs = 5\n").unwrap();

        std::env::set_var(ENV_BZR, "/opt/brz");
        std::env::set_var(ENV_TIMEOUT, "12");
        let config = Config::load(Some(path.as_path()));
        clear_env();

        let config = config.unwrap();
        assert_eq!(config.bzr_path, PathBuf::from("/opt/brz"));
        assert_eq!(config.timeout_secs, 12);
    }

    #[test]
    #[serial]
    fn test_bad_env_timeout() {
        clear_env();
        std::env::set_var(ENV_TIMEOUT, "soon");
        let result = Config::default().with_env_overrides();
        clear_env();

        assert!(matches!(result, Err(BzrError::ConfigError(_))));
    }

    #[test]
    #[serial]
    fn test_zero_timeout_in_file_is_rejected() {
        clear_env();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timeout_secs = 0\n").unwrap();

        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, BzrError::ConfigError(ref message) if message.contains("timeout_secs")));
    }

    #[test]
    #[serial]
    fn test_zero_timeout_in_env_is_rejected() {
        clear_env();
        std::env::set_var(ENV_TIMEOUT, "0");
        let result = Config::default().with_env_overrides();
        clear_env();

        assert!(matches!(result, Err(BzrError::ConfigError(_))));
    }

    #[test]
    #[serial]
    fn test_invalid_toml() {
        clear_env();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timeout_secs = \"thirty\"\n").unwrap();

        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, BzrError::ConfigError(ref message) if message.contains("config.toml")));
    }
}
