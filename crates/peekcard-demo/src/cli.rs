#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args by hand and honors `PEEKCARD_DEMO_*` environment overrides.

use std::env;
use std::process;

use peekcard_style::{Color, ColorProfile};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
peekcard demo: browse a deck of cards in a peeking carousel

USAGE:
    peekcard-demo [OPTIONS]

OPTIONS:
    --title=TEXT         Header title (default: 'Reading list')
    --start=N            Start on card N, 1-indexed (default: 1)
    --accent=COLOR       Active border color: #rrggbb, 0-255, or a name
    --profile=PROFILE    Color depth: auto (default), truecolor, 256, 16, mono
    --help, -h           Show this help message
    --version, -V        Show version

KEYBINDINGS:
    Left / h             Previous card
    Right / l            Next card
    Enter / Down / j     Toggle the saved mark on the active card
    Esc / q / Ctrl+C     Quit

ENVIRONMENT VARIABLES:
    PEEKCARD_DEMO_TITLE      Override --title
    PEEKCARD_DEMO_PROFILE    Override --profile
    NO_COLOR                 Disable color when --profile=auto
";

/// Parsed options.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    /// Header title.
    pub title: String,
    /// Zero-based starting card.
    pub start: usize,
    /// Active border color override.
    pub accent: Option<Color>,
    /// Color depth.
    pub profile: ColorProfile,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            title: "Reading list".to_string(),
            start: 0,
            accent: None,
            profile: ColorProfile::detect(),
        }
    }
}

impl Opts {
    /// Parse `std::env::args`, exiting on `--help`, `--version` or bad input.
    pub fn parse() -> Self {
        match Self::parse_from(env::args().skip(1)) {
            Ok(ParseOutcome::Run(mut opts)) => {
                opts.apply_env();
                opts
            }
            Ok(ParseOutcome::Help) => {
                print!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(ParseOutcome::Version) => {
                println!("peekcard-demo {VERSION}");
                process::exit(0);
            }
            Err(msg) => {
                eprintln!("error: {msg}\n\nRun with --help for usage.");
                process::exit(2);
            }
        }
    }

    /// Parse an argument list without touching the process.
    pub fn parse_from<I, S>(args: I) -> Result<ParseOutcome, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut opts = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--help" | "-h" => return Ok(ParseOutcome::Help),
                "--version" | "-V" => return Ok(ParseOutcome::Version),
                _ => {}
            }
            let Some((key, value)) = arg.split_once('=') else {
                return Err(format!("unknown argument '{arg}'"));
            };
            match key {
                "--title" => opts.title = value.to_string(),
                "--start" => {
                    let n: usize = value
                        .parse()
                        .map_err(|_| format!("--start expects a number, got '{value}'"))?;
                    opts.start = n.saturating_sub(1);
                }
                "--accent" => {
                    let color = value
                        .parse::<Color>()
                        .map_err(|e| format!("--accent: {e}"))?;
                    opts.accent = Some(color);
                }
                "--profile" => opts.profile = parse_profile(value)?,
                _ => return Err(format!("unknown option '{key}'")),
            }
        }
        Ok(ParseOutcome::Run(opts))
    }

    fn apply_env(&mut self) {
        if let Ok(title) = env::var("PEEKCARD_DEMO_TITLE") {
            self.title = title;
        }
        if let Ok(profile) = env::var("PEEKCARD_DEMO_PROFILE") {
            if let Ok(profile) = parse_profile(&profile) {
                self.profile = profile;
            }
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// Run the demo with these options.
    Run(Opts),
    /// Print help and exit.
    Help,
    /// Print the version and exit.
    Version,
}

fn parse_profile(value: &str) -> Result<ColorProfile, String> {
    match value.to_ascii_lowercase().as_str() {
        "auto" => Ok(ColorProfile::detect()),
        "truecolor" | "24bit" => Ok(ColorProfile::TrueColor),
        "256" | "ansi256" => Ok(ColorProfile::Ansi256),
        "16" | "ansi16" => Ok(ColorProfile::Ansi16),
        "mono" | "none" => Ok(ColorProfile::Mono),
        other => Err(format!("unknown color profile '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Opts {
        match Opts::parse_from(args) {
            Ok(ParseOutcome::Run(opts)) => opts,
            other => panic!("expected options, got {other:?}"),
        }
    }

    #[test]
    fn defaults() {
        let opts = run(&[]);
        assert_eq!(opts.title, "Reading list");
        assert_eq!(opts.start, 0);
        assert_eq!(opts.accent, None);
    }

    #[test]
    fn all_options() {
        let opts = run(&["--title=Books", "--start=3", "--accent=#00ff00", "--profile=mono"]);
        assert_eq!(opts.title, "Books");
        assert_eq!(opts.start, 2);
        assert_eq!(opts.accent, Some(Color::rgb(0, 255, 0)));
        assert_eq!(opts.profile, ColorProfile::Mono);
    }

    #[test]
    fn start_zero_means_first() {
        assert_eq!(run(&["--start=0"]).start, 0);
    }

    #[test]
    fn help_and_version() {
        assert_eq!(Opts::parse_from(["-h"]), Ok(ParseOutcome::Help));
        assert_eq!(Opts::parse_from(["--version"]), Ok(ParseOutcome::Version));
    }

    #[test]
    fn bad_input_is_reported() {
        assert!(Opts::parse_from(["--start=x"]).is_err());
        assert!(Opts::parse_from(["--accent=#12"]).is_err());
        assert!(Opts::parse_from(["--profile=sepia"]).is_err());
        assert!(Opts::parse_from(["--bogus=1"]).is_err());
        assert!(Opts::parse_from(["positional"]).is_err());
    }
}
