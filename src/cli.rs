use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Terminal client for Sentinel security assessments
///
/// Opens a location: `/` shows the landing page, `/name` through
/// `/complete` run the intake wizard and `/assessments/<id>?role=<role>`
/// renders an assessment.
#[derive(Parser, Debug)]
#[command(name = "sentinel")]
#[command(version)]
#[command(about = "Run the Sentinel intake wizard and view security assessments", long_about = None)]
pub struct Args {
    /// Location to open, e.g. /name, "/risk?name=Acme&role=security" or /assessments/abc123
    #[arg(value_name = "LOCATION")]
    pub location: Option<String>,

    /// Base URL of the assessment API (default: http://localhost:5000)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Role used for results when the location has none
    #[arg(short, long, value_name = "ROLE")]
    pub role: Option<String>,

    /// Output format of the dashboard: text or html
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write the dashboard to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to a config file (default: ./sentinel.config.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored terminal output
    #[arg(long)]
    pub no_color: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Enable debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The location to open; `/` when none was given.
    pub fn location_or_default(&self) -> &str {
        self.location.as_deref().unwrap_or("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["sentinel"]).unwrap();
        assert_eq!(args.location_or_default(), "/");
        assert!(args.format.is_none());
        assert!(!args.no_color);
        assert!(!args.verbose);
    }

    #[test]
    fn test_all_options() {
        let args = Args::try_parse_from([
            "sentinel",
            "/assessments/abc123",
            "--api-url",
            "https://sentinel.example.com",
            "-r",
            "security",
            "-f",
            "html",
            "-o",
            "out.html",
            "--no-color",
            "--timeout",
            "30",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.location_or_default(), "/assessments/abc123");
        assert_eq!(args.api_url.as_deref(), Some("https://sentinel.example.com"));
        assert_eq!(args.role.as_deref(), Some("security"));
        assert_eq!(args.format, Some(OutputFormat::Html));
        assert_eq!(args.output, Some(PathBuf::from("out.html")));
        assert!(args.no_color);
        assert_eq!(args.timeout, Some(30));
        assert!(args.verbose);
    }

    #[test]
    fn test_invalid_format_rejected() {
        let err = Args::try_parse_from(["sentinel", "-f", "pdf"]).unwrap_err();
        assert!(err.to_string().contains("Invalid format: pdf"));
    }
}
