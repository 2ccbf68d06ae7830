//! CLI argument definitions using clap
//!
//! Commands:
//! - quill serve [--listen <host:port>] [--store-url <url>]

use clap::{Parser, Subcommand};

/// quill - a small blog post CRUD service
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Listen address, host:port (overrides QUILL_LISTEN)
        #[arg(long)]
        listen: Option<String>,

        /// Store target, `mem:` or `file:<path>` (overrides QUILL_STORE_URL)
        #[arg(long)]
        store_url: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_args_parse() {
        let cli = Cli::try_parse_from([
            "quill",
            "serve",
            "--listen",
            "127.0.0.1:9000",
            "--store-url",
            "file:/tmp/posts.json",
        ])
        .unwrap();
        let Command::Serve { listen, store_url } = cli.command;
        assert_eq!(listen.as_deref(), Some("127.0.0.1:9000"));
        assert_eq!(store_url.as_deref(), Some("file:/tmp/posts.json"));
    }

    #[test]
    fn test_serve_flags_are_optional() {
        let cli = Cli::try_parse_from(["quill", "serve"]).unwrap();
        let Command::Serve { listen, store_url } = cli.command;
        assert!(listen.is_none());
        assert!(store_url.is_none());
    }
}
