use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tl", about = concat!("[✓] ticklist v", env!("CARGO_PKG_VERSION"), " - a small to-do list"), version)]
pub struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (overrides [log] file)
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Start with this task in the list (repeatable)
    #[arg(short = 't', long = "task", value_name = "TITLE")]
    pub tasks: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_args() {
        let cli = Cli::try_parse_from(["tl"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.log_file.is_none());
        assert!(cli.tasks.is_empty());
    }

    #[test]
    fn repeated_tasks_keep_order() {
        let cli = Cli::try_parse_from([
            "tl",
            "--task",
            "Buy milk",
            "-t",
            "Walk dog",
            "--config",
            "/tmp/tl.toml",
            "--log-file",
            "/tmp/tl.log",
        ])
        .unwrap();
        assert_eq!(cli.tasks, vec!["Buy milk".to_string(), "Walk dog".to_string()]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/tl.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/tl.log")));
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["tl", "--json"]).is_err());
    }
}
