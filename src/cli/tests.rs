//! Additional tests for the CLI argument surface.
//!
//! This module covers the pieces of the CLI that sit above the individual
//! commands:
//!
//! - **Argument Parsing**: CLI flags and options parse correctly and
//!   conflicting combinations are rejected
//! - **Configuration Building**: parsed arguments convert to
//!   [`CliConfig`](crate::cli::CliConfig) with the right log filter
//! - **Environment Handling**: [`CliConfig::apply_to_env`] sets exactly the
//!   variables it documents
//! - **Command Execution**: a full parse-to-output run against a temporary
//!   catalog
//!
//! Tests that touch environment variables are serialized with
//! [`serial_test::serial`] so they cannot race each other.

#[cfg(test)]
mod cli_tests {
    use crate::cli::Cli;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parsing() {
        // --help causes a special error
        let cli = Cli::try_parse_from(["depmatrix", "--help"]);
        assert!(cli.is_err());

        let cli = Cli::try_parse_from(["depmatrix", "list"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["depmatrix", "--verbose", "list"]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_quiet_flag() {
        let cli = Cli::try_parse_from(["depmatrix", "--quiet", "list"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_cli_verbose_quiet_conflict() {
        let cli = Cli::try_parse_from(["depmatrix", "--verbose", "--quiet", "list"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_no_progress_flag() {
        let cli = Cli::try_parse_from(["depmatrix", "--no-progress", "list"]).unwrap();
        assert!(cli.no_progress);
    }

    #[test]
    fn test_cli_config_option() {
        let cli =
            Cli::try_parse_from(["depmatrix", "--config", "/path/to/config.toml", "list"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.toml")));
    }

    #[test]
    fn test_cli_catalog_option() {
        let cli = Cli::try_parse_from(["depmatrix", "--catalog", "catalog.json", "list"]).unwrap();
        assert_eq!(cli.catalog, Some("catalog.json".to_string()));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        // global = true lets flags appear on either side of the subcommand
        let cli = Cli::try_parse_from(["depmatrix", "list", "--verbose"]).unwrap();
        assert!(cli.verbose);

        let cli =
            Cli::try_parse_from(["depmatrix", "generate", "--all", "--catalog", "c.json"])
                .unwrap();
        assert_eq!(cli.catalog, Some("c.json".to_string()));
    }

    #[test]
    fn test_cli_all_commands() {
        let commands = vec![
            vec!["depmatrix", "generate", "--select", "firebase-bom"],
            vec!["depmatrix", "generate", "--category", "networking", "--format", "gradle"],
            vec!["depmatrix", "generate", "--all", "--output", "libs.versions.toml"],
            vec!["depmatrix", "list"],
            vec!["depmatrix", "list", "--search", "firebase", "--format", "json"],
            vec!["depmatrix", "list", "--plugins", "--category", "google-firebase"],
        ];

        for cmd in commands {
            let result = Cli::try_parse_from(&cmd);
            assert!(result.is_ok(), "Failed to parse: {cmd:?}");
        }
    }

    #[test]
    fn test_generate_requires_a_selection() {
        let cli = Cli::try_parse_from(["depmatrix", "generate"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_generate_rejects_unknown_format() {
        let cli = Cli::try_parse_from(["depmatrix", "generate", "--all", "--format", "yaml"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_list_rejects_conflicting_kind_filters() {
        let cli = Cli::try_parse_from(["depmatrix", "list", "--libraries", "--plugins"]);
        assert!(cli.is_err());
    }
}

#[cfg(test)]
mod config_tests {
    use crate::cli::{Cli, CliConfig};
    use clap::Parser;

    #[test]
    fn test_cli_config_new_is_empty() {
        let config = CliConfig::new();
        assert_eq!(config.log_level, None);
        assert!(!config.no_progress);
        assert_eq!(config.config_path, None);
    }

    #[test]
    fn test_build_config_log_levels() {
        // Verbose maps to a debug filter
        let cli = Cli::try_parse_from(["depmatrix", "--verbose", "list"]).unwrap();
        assert_eq!(cli.build_config().log_level, Some("debug".to_string()));

        // Quiet silences diagnostics entirely
        let cli = Cli::try_parse_from(["depmatrix", "--quiet", "list"]).unwrap();
        assert_eq!(cli.build_config().log_level, Some("off".to_string()));

        // Default leaves any ambient RUST_LOG alone
        let cli = Cli::try_parse_from(["depmatrix", "list"]).unwrap();
        assert_eq!(cli.build_config().log_level, None);
    }

    #[test]
    fn test_build_config_passthrough() {
        let cli = Cli::try_parse_from([
            "depmatrix",
            "--no-progress",
            "--config",
            "/custom/path.toml",
            "list",
        ])
        .unwrap();
        let config = cli.build_config();
        assert!(config.no_progress);
        assert_eq!(config.config_path, Some("/custom/path.toml".to_string()));
    }
}

#[cfg(test)]
mod env_tests {
    use crate::cli::CliConfig;
    use crate::constants::{ENV_CONFIG, ENV_NO_PROGRESS};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_apply_to_env_sets_variables() {
        let config = CliConfig {
            log_level: Some("debug".to_string()),
            no_progress: true,
            config_path: Some("/test/path.toml".to_string()),
        };
        config.apply_to_env();

        assert_eq!(std::env::var("RUST_LOG").unwrap(), "debug");
        assert_eq!(std::env::var(ENV_NO_PROGRESS).unwrap(), "1");
        assert_eq!(std::env::var(ENV_CONFIG).unwrap(), "/test/path.toml");

        unsafe {
            std::env::remove_var("RUST_LOG");
            std::env::remove_var(ENV_NO_PROGRESS);
            std::env::remove_var(ENV_CONFIG);
        }
    }

    #[test]
    #[serial]
    fn test_apply_to_env_defaults_touch_nothing() {
        unsafe {
            std::env::remove_var(ENV_NO_PROGRESS);
            std::env::remove_var(ENV_CONFIG);
        }

        CliConfig::new().apply_to_env();

        assert!(std::env::var(ENV_NO_PROGRESS).is_err());
        assert!(std::env::var(ENV_CONFIG).is_err());
    }
}

#[cfg(test)]
mod cli_execution_tests {
    use crate::cli::{Cli, CliConfig};
    use clap::Parser;

    const CATALOG: &str = r#"{
        "categories": [{"id": "networking", "name": "Networking"}],
        "artifacts": [
            {
                "id": "okhttp",
                "name": "OkHttp",
                "category": "networking",
                "version": "5.3.0",
                "coordinates": {"group": "com.squareup.okhttp3", "artifact": "okhttp"},
                "type": "library"
            }
        ]
    }"#;

    #[tokio::test]
    async fn test_cli_execute_generate_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("catalog.json");
        let out_path = dir.path().join("libs.versions.toml");
        tokio::fs::write(&catalog_path, CATALOG).await.unwrap();

        let cli = Cli::try_parse_from([
            "depmatrix",
            "--catalog",
            catalog_path.to_str().unwrap(),
            "generate",
            "--select",
            "okhttp",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .unwrap();

        // Default config sets no environment variables
        cli.execute_with_config(CliConfig::new()).await.unwrap();

        let written = tokio::fs::read_to_string(&out_path).await.unwrap();
        assert!(written.starts_with("[versions]\n"));
        assert!(written.contains("okhttp = { group = \"com.squareup.okhttp3\""));
    }
}
