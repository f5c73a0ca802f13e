use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "routes", version, about = "Keep a list of transit routes in a JSON file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new route
    Add {
        #[command(flatten)]
        file: FileArgs,

        /// The route's destination
        #[arg(short, long)]
        destination: String,

        /// The route's number
        #[arg(short, long, allow_negative_numbers = true)]
        number: Option<i64>,

        /// Departure time (HH:MM)
        #[arg(short, long)]
        time: String,
    },

    /// Display all routes
    Display {
        #[command(flatten)]
        file: FileArgs,
    },

    /// Display the routes departing after the given time
    Select {
        #[command(flatten)]
        file: FileArgs,

        /// Departure time (HH:MM), only later routes are selected
        #[arg(short, long)]
        time: String,
    },
}

#[derive(Debug, Args)]
pub struct FileArgs {
    /// The data file name
    pub filename: PathBuf,

    /// Resolve the file name against the home directory
    #[arg(long)]
    pub home: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_all_flags() {
        let cli = Cli::try_parse_from([
            "routes", "add", "r.json", "-d", "Paris", "-n", "7", "-t", "09:00", "--home",
        ])
        .unwrap();

        let Command::Add {
            file,
            destination,
            number,
            time,
        } = cli.command
        else {
            panic!("expected add");
        };
        assert_eq!(file.filename, PathBuf::from("r.json"));
        assert!(file.home);
        assert_eq!(destination, "Paris");
        assert_eq!(number, Some(7));
        assert_eq!(time, "09:00");
    }

    #[test]
    fn number_is_optional_and_may_be_negative() {
        let cli = Cli::try_parse_from(["routes", "add", "r.json", "-d", "X", "-t", "1:00"]).unwrap();
        assert!(matches!(cli.command, Command::Add { number: None, .. }));

        let cli =
            Cli::try_parse_from(["routes", "add", "r.json", "-d", "X", "-n", "-3", "-t", "1:00"])
                .unwrap();
        assert!(matches!(cli.command, Command::Add { number: Some(-3), .. }));
    }

    #[test]
    fn time_text_is_not_validated_by_the_parser() {
        let cli = Cli::try_parse_from(["routes", "select", "r.json", "--time", "9:99"]).unwrap();
        assert!(matches!(cli.command, Command::Select { time, .. } if time == "9:99"));
    }

    #[test]
    fn rejects_missing_required_flags() {
        assert!(Cli::try_parse_from(["routes", "add", "r.json", "-t", "09:00"]).is_err());
        assert!(Cli::try_parse_from(["routes", "select", "r.json"]).is_err());
        assert!(Cli::try_parse_from(["routes", "display"]).is_err());
        assert!(Cli::try_parse_from(["routes", "remove", "r.json"]).is_err());
    }
}
