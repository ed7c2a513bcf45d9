//! Command line surface.

use std::path::PathBuf;

use clap::Parser;
use seedstream_core::config::{GeneratorConfig, LineEnding};

/// Generate cipher keystreams from a list of seeds for randomness testing.
///
/// Output: `number of seeds: <first line of the seed file>` followed by
/// 2^(length_exponent-3) bytes of keystream per seed, concatenated.
#[derive(Debug, Parser)]
#[command(name = "seedstream", version, about)]
pub struct Cli {
    /// Cipher name, OpenSSL spelling (e.g. aes-256-ctr, chacha20)
    #[arg(required_unless_present = "list_ciphers")]
    pub cipher: Option<String>,

    /// Seed file: a count line, then one seed per line
    #[arg(required_unless_present = "list_ciphers")]
    pub seed_file: Option<PathBuf>,

    /// Output bits per seed as a power of two (minimum 4)
    #[arg(required_unless_present = "list_ciphers", allow_negative_numbers = true)]
    pub length_exponent: Option<i64>,

    /// Skip this many seeds after the count line
    #[arg(long, default_value_t = 0)]
    pub skip: u64,

    /// Strip line terminators before hashing seeds
    #[arg(long)]
    pub strip_newlines: bool,

    /// Print supported cipher names and exit
    #[arg(long)]
    pub list_ciphers: bool,

    /// Print run telemetry as JSON on stderr when done
    #[arg(long)]
    pub stats: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Build the generator config; `None` in `--list-ciphers` mode.
    pub fn generator_config(&self) -> Option<GeneratorConfig> {
        let cipher = self.cipher.as_ref()?;
        let exponent = self.length_exponent?;
        let line_ending = if self.strip_newlines { LineEnding::Strip } else { LineEnding::Keep };
        Some(
            GeneratorConfig::new(cipher.clone(), exponent)
                .with_skip(self.skip)
                .with_line_ending(line_ending),
        )
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn positional_arguments() {
        let cli = Cli::try_parse_from(["seedstream", "aes-256-ctr", "seeds.txt", "20"]).unwrap();
        assert_eq!(cli.cipher.as_deref(), Some("aes-256-ctr"));
        assert_eq!(cli.seed_file, Some(PathBuf::from("seeds.txt")));
        assert_eq!(cli.length_exponent, Some(20));

        let config = cli.generator_config().unwrap();
        assert_eq!(config.len_exponent, 20);
        assert_eq!(config.skip, 0);
        assert_eq!(config.line_ending, LineEnding::Keep);
    }

    #[test]
    fn missing_argument_is_a_usage_error() {
        let err = Cli::try_parse_from(["seedstream", "aes-256-ctr", "seeds.txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn extra_argument_is_a_usage_error() {
        let err = Cli::try_parse_from(["seedstream", "rc4", "seeds.txt", "8", "9"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn non_numeric_exponent_is_rejected() {
        let err = Cli::try_parse_from(["seedstream", "rc4", "seeds.txt", "eight"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn negative_exponent_parses_and_fails_validation_later() {
        let cli = Cli::try_parse_from(["seedstream", "rc4", "seeds.txt", "-2"]).unwrap();
        assert!(cli.generator_config().unwrap().validate().is_err());
    }

    #[test]
    fn list_ciphers_needs_no_positionals() {
        let cli = Cli::try_parse_from(["seedstream", "--list-ciphers"]).unwrap();
        assert!(cli.list_ciphers);
        assert!(cli.generator_config().is_none());
    }

    #[test]
    fn flags_reach_the_config() {
        let cli = Cli::try_parse_from([
            "seedstream", "-vv", "--skip", "3", "--strip-newlines", "--stats", "bf-ofb", "s", "10",
        ])
        .unwrap();
        assert_eq!(cli.log_level(), "debug");
        assert!(cli.stats);
        let config = cli.generator_config().unwrap();
        assert_eq!(config.skip, 3);
        assert_eq!(config.line_ending, LineEnding::Strip);
    }
}
