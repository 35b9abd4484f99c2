//! Simulation configuration and command-line parsing.

use crate::level::Level;

pub const USAGE: &str = "Rescue Run Headless Simulator\n\
\n\
Usage: simulator [OPTIONS]\n\
\n\
Options:\n\
\x20 --level N       Level to start on, 1-3 (default: 1)\n\
\x20 --frames N      Frame limit per run (default: 216000 = 1 hour)\n\
\x20 --seed N        RNG seed (default: 42)\n\
\x20 --runs N        Number of runs with incrementing seeds (default: 1)\n\
\x20 --verbose       Per-frame event logging to stderr\n\
\x20 --json          Print the report as JSON\n\
\x20 --quiet         Only the final summary line\n\
\x20 --help, -h      Show this help";

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Level the autopilot picks on the level-select screen
    pub level: Level,
    /// Frames per run before it counts as timed out
    pub max_frames: u64,
    /// Seed for the first run; later runs add their run index
    pub seed: u64,
    pub runs: u32,
    pub verbose: bool,
    pub json: bool,
    pub quiet: bool,
    pub help: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            level: Level::One,
            max_frames: 216_000,
            seed: 42,
            runs: 1,
            verbose: false,
            json: false,
            quiet: false,
            help: false,
        }
    }
}

impl SimConfig {
    /// Parses arguments, not including the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--level" => {
                    let number: u32 = parse_value("--level", args.next())?;
                    config.level = Level::from_number(number)
                        .ok_or_else(|| format!("--level must be 1, 2 or 3 (got {number})"))?;
                }
                "--frames" => config.max_frames = parse_value("--frames", args.next())?,
                "--seed" => config.seed = parse_value("--seed", args.next())?,
                "--runs" => config.runs = parse_value("--runs", args.next())?,
                "--verbose" => config.verbose = true,
                "--json" => config.json = true,
                "--quiet" => config.quiet = true,
                "--help" | "-h" => config.help = true,
                other => return Err(format!("Unknown argument: {other}")),
            }
        }
        Ok(config)
    }
}

fn parse_value<T: std::str::FromStr, S: AsRef<str>>(
    flag: &str,
    value: Option<S>,
) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{flag} requires a number"))?;
    value
        .as_ref()
        .parse()
        .map_err(|_| format!("{flag} requires a number (got {})", value.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimConfig::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_all_flags() {
        let config = SimConfig::from_args([
            "--level", "3", "--frames", "500", "--seed", "9", "--runs", "4", "--verbose",
            "--json", "--quiet",
        ])
        .unwrap();
        assert_eq!(config.level, Level::Three);
        assert_eq!(config.max_frames, 500);
        assert_eq!(config.seed, 9);
        assert_eq!(config.runs, 4);
        assert!(config.verbose && config.json && config.quiet);
        assert!(!config.help);
    }

    #[test]
    fn test_errors() {
        assert!(SimConfig::from_args(["--level", "4"]).is_err());
        assert!(SimConfig::from_args(["--frames"]).is_err());
        assert!(SimConfig::from_args(["--seed", "abc"]).is_err());
        assert!(SimConfig::from_args(["--bogus"]).is_err());
    }

    #[test]
    fn test_help() {
        assert!(SimConfig::from_args(["-h"]).unwrap().help);
    }
}
