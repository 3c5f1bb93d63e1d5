//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ecoinlink")]
#[command(about = "Build and preview the ECOinLink platform site")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ./ecoinlink.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write index.html and 404.html for static hosting
    Build {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,

        /// Public base path, overrides the config file
        #[arg(long)]
        base_path: Option<String>,
    },

    /// Print the HTML for a location
    Render {
        /// Location to render (`/carlink`, `#/exlink`, ...)
        #[arg(default_value = "/")]
        path: String,

        /// Render as if scrolled to this vertical offset
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        scroll_y: f64,

        /// Render with the mobile menu open
        #[arg(long)]
        menu_open: bool,

        /// Only the page content, without the document shell
        #[arg(long)]
        content_only: bool,

        /// Public base path, overrides the config file
        #[arg(long)]
        base_path: Option<String>,
    },

    /// List the route table
    Routes {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List platforms, features and statistics
    Catalogue {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Run an event script through the page shell
    Simulate {
        /// Script file; reads stdin when omitted
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Starting location
        #[arg(long, default_value = "/")]
        start: String,

        /// Print the final rendered document instead of frames
        #[arg(long)]
        html: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_accepts_flags() {
        let cli = Cli::try_parse_from([
            "ecoinlink",
            "render",
            "/carlink",
            "--scroll-y",
            "21",
            "--menu-open",
        ])
        .expect("valid args");
        match cli.command {
            Command::Render {
                path,
                scroll_y,
                menu_open,
                content_only,
                ..
            } => {
                assert_eq!(path, "/carlink");
                assert_eq!(scroll_y, 21.0);
                assert!(menu_open);
                assert!(!content_only);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["ecoinlink", "routes", "--log-level", "debug"])
            .expect("valid args");
        assert_eq!(cli.log_level, "debug");
    }
}
