//! Command-line and environment configuration.

use clap::Parser;
use notepad_core::{default_log_level, LogLevel};
use std::path::{Path, PathBuf};

/// Interactive notepad reading commands from standard input.
#[derive(Debug, Parser)]
#[command(name = "notepad", version)]
pub struct Cli {
    /// Directory for rolling log files; logging is off when unset.
    #[arg(long, env = "NOTEPAD_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error.
    #[arg(long, env = "NOTEPAD_LOG_LEVEL", value_name = "LEVEL", value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,

    /// Notepad file to load before the first prompt.
    #[arg(long, value_name = "FILE")]
    pub load: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn effective_log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_else(default_log_level)
    }
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    value.parse().map_err(|err| format!("{err}"))
}

/// Resolves a possibly relative directory against `base`.
pub fn absolute_dir(dir: &Path, base: &Path) -> PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        base.join(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::{absolute_dir, Cli};
    use clap::Parser;
    use notepad_core::LogLevel;
    use std::path::{Path, PathBuf};

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "notepad",
            "--log-dir",
            "/var/log/notepad",
            "--log-level",
            "WARN",
            "--load",
            "notes.json",
            "--no-color",
        ])
        .expect("flags should parse");

        assert_eq!(cli.log_dir, Some(PathBuf::from("/var/log/notepad")));
        assert_eq!(cli.effective_log_level(), LogLevel::Warn);
        assert_eq!(cli.load, Some(PathBuf::from("notes.json")));
        assert!(cli.no_color);
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = Cli::try_parse_from(["notepad", "--log-level", "chatty"])
            .expect_err("unknown level must fail");
        assert!(err.to_string().contains("unsupported log level"));
    }

    #[test]
    fn relative_log_dir_is_joined_to_base() {
        assert_eq!(
            absolute_dir(Path::new("logs"), Path::new("/home/me")),
            PathBuf::from("/home/me/logs")
        );
        assert_eq!(
            absolute_dir(Path::new("/tmp/logs"), Path::new("/home/me")),
            PathBuf::from("/tmp/logs")
        );
    }
}
