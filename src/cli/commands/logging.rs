use clap::{Arg, Command, builder::ValueParser};

pub const ARG_VERBOSITY: &str = "verbosity";

/// Accepts either a count (0-5) or a named level. Named levels map onto
/// the same scale the repeatable `-v` flag produces.
#[must_use]
pub fn log_level_parser() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Log verbosity, repeat (-vv) or name a level: ERROR, WARN, INFO, DEBUG, TRACE")
            .env("COURIER_LOG_LEVEL")
            .global(true)
            .action(clap::ArgAction::Count)
            .value_parser(log_level_parser()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_levels_and_counts_share_a_scale() {
        let parser = log_level_parser();
        let command = Command::new("courier").arg(
            Arg::new("level")
                .long("level")
                .value_parser(parser),
        );

        for (name, expected) in [
            ("error", 0u8),
            ("WARN", 1),
            ("info", 2),
            ("debug", 3),
            ("trace", 4),
            ("5", 5),
        ] {
            let matches = command
                .clone()
                .get_matches_from(vec!["courier", "--level", name]);
            assert_eq!(matches.get_one::<u8>("level").copied(), Some(expected));
        }

        let result = command
            .clone()
            .try_get_matches_from(vec!["courier", "--level", "verbose"]);
        assert!(result.is_err());

        let result = command.try_get_matches_from(vec!["courier", "--level", "6"]);
        assert!(result.is_err());
    }
}
