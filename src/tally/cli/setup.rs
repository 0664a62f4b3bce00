use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tally", bin_name = "tally", version)]
#[command(about = "Count things: named counters with steps and a running total", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding saved counters and config.json (overrides TALLY_HOME)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose diagnostics on stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Create a new counter
    #[command(alias = "n", display_order = 1)]
    Add {
        /// Step for this counter (defaults to the configured default)
        #[arg(long, short = 'b', allow_negative_numbers = true)]
        by: Option<i64>,

        /// Name words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// List counters and the total
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Print only the total
    #[command(display_order = 3)]
    Total,

    /// Step counters up by their increment
    #[command(alias = "inc", display_order = 10)]
    Up {
        /// Counters by position, name or #id (e.g. 1 apples #3fa9c2)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Step counters down by their increment
    #[command(alias = "dec", display_order = 11)]
    Down {
        /// Counters by position, name or #id (e.g. 1 apples #3fa9c2)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Set counters back to zero
    #[command(display_order = 12)]
    Reset {
        /// Counters by position, name or #id (e.g. 1 apples #3fa9c2)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Delete counters permanently
    #[command(alias = "rm", display_order = 13)]
    Delete {
        /// Counters by position, name or #id (e.g. 1 apples #3fa9c2)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Interactive session: type commands, see the list after each one
    #[command(display_order = 20)]
    Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tally").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn naked_run_has_no_command() {
        assert_eq!(parse(&[]).command, None);
    }

    #[test]
    fn add_joins_words_and_takes_step() {
        let cli = parse(&["add", "Green", "Apples", "--by", "5"]);
        assert_eq!(
            cli.command,
            Some(Commands::Add {
                by: Some(5),
                name: vec!["Green".into(), "Apples".into()],
            })
        );
    }

    #[test]
    fn add_accepts_negative_step_for_the_store_to_reject() {
        let cli = parse(&["n", "-b", "-5", "Apples"]);
        assert!(matches!(cli.command, Some(Commands::Add { by: Some(-5), .. })));
    }

    #[test]
    fn aliases_resolve() {
        assert!(matches!(parse(&["inc", "1"]).command, Some(Commands::Up { .. })));
        assert!(matches!(parse(&["dec", "1"]).command, Some(Commands::Down { .. })));
        assert!(matches!(parse(&["rm", "1"]).command, Some(Commands::Delete { .. })));
        assert_eq!(parse(&["ls"]).command, Some(Commands::List));
    }

    #[test]
    fn selectors_are_required() {
        assert!(Cli::try_parse_from(["tally", "up"]).is_err());
        assert!(Cli::try_parse_from(["tally", "add"]).is_err());
    }

    #[test]
    fn global_options_anywhere() {
        let cli = parse(&["list", "--data-dir", "/tmp/x", "-v"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(cli.verbose);
    }
}
