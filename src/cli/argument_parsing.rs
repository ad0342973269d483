use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(about = "Compute the payment schedule of a rent")]
pub struct ScheduleOptions {
    #[arg(short = 'V', long)]
    pub vault: Option<PathBuf>,

    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[arg(short = 'n', long = "max-occurrences")]
    pub max_occurrences: Option<u32>,
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::{OutputFormat, ScheduleOptions};

    #[test]
    fn parse__defaults() {
        let options = ScheduleOptions::try_parse_from(["rent_schedule"]).unwrap();
        assert_eq!(options.vault, None);
        assert_eq!(options.format, OutputFormat::Table);
        assert_eq!(options.max_occurrences, None);
    }

    #[test]
    fn parse__all_options() {
        let options = ScheduleOptions::try_parse_from([
            "rent_schedule",
            "-V",
            "/tmp/vault",
            "--format",
            "json",
            "-n",
            "24",
        ])
        .unwrap();
        assert_eq!(options.vault, Some(PathBuf::from("/tmp/vault")));
        assert_eq!(options.format, OutputFormat::Json);
        assert_eq!(options.max_occurrences, Some(24));
    }

    #[test]
    fn parse__unknown_format() {
        assert!(ScheduleOptions::try_parse_from(["rent_schedule", "-f", "csv"]).is_err());
    }
}
