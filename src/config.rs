use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "file-operation-server", version)]
#[command(about = "A lightweight server for basic file management operations.")]
pub struct Config {
    /// Server listening address
    #[arg(long, env = "ADDR", default_value = "0.0.0.0:9757")]
    pub addr: String,

    /// Base directory for relative request paths
    #[arg(long, env = "WORKSPACE_PATH", default_value = ".")]
    pub workspace_path: PathBuf,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn load() -> Self {
        Config::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "file-operation-server",
            "--addr=127.0.0.1:8080",
            "--workspace-path=/srv/files",
            "--log-level=debug",
        ])
        .unwrap();

        assert_eq!(config.addr, "127.0.0.1:8080");
        assert_eq!(config.workspace_path, PathBuf::from("/srv/files"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_rejects_unknown_flag() {
        let res = Config::try_parse_from(["file-operation-server", "--token=abc"]);
        assert!(res.is_err());
    }
}
