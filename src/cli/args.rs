//! Command-line arguments.

use clap::{Parser, Subcommand};

use passgauge::pass::{MAX_LENGTH, MIN_LENGTH};
use passgauge::strength::Locale;

#[derive(Parser, Debug)]
#[command(
    name = "passgauge",
    version,
    about = "Generate passwords and estimate how long they take to crack",
    long_about = "Generate passwords and estimate how long they take to crack.\n\n\
                  Run without arguments on a terminal for the interactive view."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Password length
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u16).range((MIN_LENGTH as i64)..=(MAX_LENGTH as i64))
    )]
    pub length: Option<u16>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Exclude look-alike characters (i l 1 L o 0 O)
    #[arg(short = 'x', long)]
    pub exclude_similar: bool,

    /// Number of passwords to generate
    #[arg(short, long, default_value_t = 1)]
    pub number: usize,

    /// Copy to the clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Do not record generated passwords in the history
    #[arg(long)]
    pub no_history: bool,

    /// Persist length, classes and language as the new defaults
    #[arg(long)]
    pub save: bool,

    /// Label language (en, ru)
    #[arg(long, global = true, env = "PASSGAUGE_LANG", value_name = "LANG")]
    pub lang: Option<Locale>,

    /// Emit JSON lines instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress warnings and the strength report
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Estimate the strength of an existing password
    Check {
        /// Password to check; read from stdin when omitted
        password: Option<String>,
    },

    /// Show recently generated passwords
    History {
        /// Forget all recorded passwords
        #[arg(long)]
        clear: bool,

        /// Copy entry N (1 = newest) to the clipboard
        #[arg(long, value_name = "N", conflicts_with = "clear")]
        copy: Option<usize>,
    },

    /// Interactive generator
    Tui,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("passgauge").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.command, None);
        assert_eq!(args.length, None);
        assert_eq!(args.number, 1);
        assert!(!args.exclude_similar);
    }

    #[test]
    fn length_is_bounded() {
        assert_eq!(parse(&["-l", "4"]).unwrap().length, Some(4));
        assert_eq!(parse(&["--length", "128"]).unwrap().length, Some(128));
        assert!(parse(&["-l", "3"]).is_err());
        assert!(parse(&["-l", "129"]).is_err());
    }

    #[test]
    fn class_flags_and_language() {
        let args = parse(&["--no-symbols", "-x", "--lang", "ru"]).unwrap();
        assert!(args.no_symbols);
        assert!(args.exclude_similar);
        assert_eq!(args.lang, Some(Locale::Ru));
        assert!(parse(&["--lang", "fr"]).is_err());
    }

    #[test]
    fn subcommands() {
        let args = parse(&["check", "hunter2", "--json"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Check {
                password: Some("hunter2".into())
            })
        );
        assert!(args.json);

        let args = parse(&["history", "--clear"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::History {
                clear: true,
                copy: None
            })
        );

        let args = parse(&["history", "--copy", "3"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::History {
                clear: false,
                copy: Some(3)
            })
        );
        assert!(parse(&["history", "--copy", "1", "--clear"]).is_err());
    }
}
