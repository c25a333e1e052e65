// src/cli/mod.rs
use clap::Parser;

use crate::core::policy::MAX_PASSWORD_LENGTH;

pub mod handlers;

/// Generate a random password with at least 20 characters. It contains
/// uppercase, lowercase, digits and punctuation, never starts with
/// `!()[]{}*.#$` and never runs more than three characters of one class.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Password length, up to 256 (values below 20 are raised to 20)
    #[arg(long, short, value_parser = parse_length)]
    pub length: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not copy the password to the clipboard
    #[arg(long)]
    pub no_copy: bool,
}

fn parse_length(s: &str) -> Result<usize, String> {
    let length: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid length", s))?;
    if length > MAX_PASSWORD_LENGTH {
        return Err(format!("length must be at most {}", MAX_PASSWORD_LENGTH));
    }
    Ok(length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_arguments_is_the_default_run() {
        let args = Args::try_parse_from(["rust_passgen"]).unwrap();
        assert_eq!(args.length, None);
        assert!(!args.json);
        assert!(!args.no_copy);
    }

    #[test]
    fn flags_parse() {
        let args = Args::try_parse_from(["rust_passgen", "-l", "32", "--json", "--no-copy"]).unwrap();
        assert_eq!(args.length, Some(32));
        assert!(args.json);
        assert!(args.no_copy);
    }

    #[test]
    fn length_above_maximum_is_a_usage_error() {
        let huge = usize::MAX.to_string();
        let err = Args::try_parse_from(["rust_passgen", "--length", huge.as_str()]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

        let args = Args::try_parse_from(["rust_passgen", "--length", "256"]).unwrap();
        assert_eq!(args.length, Some(MAX_PASSWORD_LENGTH));

        assert!(Args::try_parse_from(["rust_passgen", "--length", "257"]).is_err());
        assert!(Args::try_parse_from(["rust_passgen", "--length", "many"]).is_err());
    }
}
