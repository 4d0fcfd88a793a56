use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tubefetch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(help_template = "NAME:
   {name} - Terminal front end for a video download backend

USAGE:
   tubefetch [url] [global options]

VERSION:
   {version}

DESCRIPTION:
   {name} asks the backend which qualities a video offers, lets you pick one,
   and saves the finished file to your download directory.

   Controls:
     • Type or paste a URL and press Enter
     • Use ↑/↓ or j/k to pick a quality
     • Press d or Enter to download
     • Press x to clear the form
     • Press q to quit

GLOBAL OPTIONS:
{options}
")]
pub struct Cli {
    /// Video URL to fetch on startup
    pub url: Option<String>,

    /// Backend origin, overrides `api_base_url` from the config file
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Directory to save downloads into
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Write a log file even if logging is disabled in the config
    #[arg(long = "log")]
    pub log: bool,

    /// print the version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    pub show_version: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_url_and_overrides() {
        let cli = Cli::try_parse_from([
            "tubefetch",
            "https://youtu.be/abc",
            "--api-url",
            "http://10.0.0.5:8000",
            "-o",
            "/tmp/videos",
            "--log",
        ])
        .unwrap();
        assert_eq!(cli.url.as_deref(), Some("https://youtu.be/abc"));
        assert_eq!(cli.api_url.as_deref(), Some("http://10.0.0.5:8000"));
        assert_eq!(cli.output, Some(PathBuf::from("/tmp/videos")));
        assert!(cli.log);
    }

    #[test]
    fn everything_is_optional() {
        let cli = Cli::try_parse_from(["tubefetch"]).unwrap();
        assert!(cli.url.is_none());
        assert!(cli.api_url.is_none());
        assert!(!cli.log);
    }
}
