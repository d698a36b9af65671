// SPDX-License-Identifier: MIT
//
// Command-line surface for the shade binary.

use clap::{ArgAction, Parser, ValueEnum};

/// Generate a 10-step OKLCH color scale from one base color.
#[derive(Debug, Clone, Parser)]
#[clap(name = "shade", version, author)]
pub struct CliArguments {
    /// Base color as #rgb or #rrggbb (the leading # is optional)
    #[arg(env = "SHADE_COLOR")]
    pub color: String,

    /// How to print the palette
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, env = "SHADE_FORMAT")]
    pub format: OutputFormat,

    /// Use this name instead of the nearest dictionary name
    #[arg(long)]
    pub name: Option<String>,

    /// Sets the level of logging verbosity:
    /// -v = warning & error, -vv = info, -vvv = debug, -vvvv = trace
    #[clap(short, long, action = ArgAction::Count)]
    pub verbosity: u8,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One row per step: label, hex, and OKLCH notation
    Table,
    /// CSS custom-property declarations
    Css,
    /// CSS declarations wrapped in an `@theme` block
    Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_table() {
        let args = CliArguments::try_parse_from(["shade", "#6366f1"]).unwrap();
        assert_eq!(args.color, "#6366f1");
        assert_eq!(args.format, OutputFormat::Table);
        assert_eq!(args.name, None);
        assert_eq!(args.verbosity, 0);
    }

    #[test]
    fn parses_flags() {
        let args = CliArguments::try_parse_from([
            "shade", "6366f1", "--format", "theme", "--name", "Brand", "-vv",
        ])
        .unwrap();
        assert_eq!(args.format, OutputFormat::Theme);
        assert_eq!(args.name.as_deref(), Some("Brand"));
        assert_eq!(args.verbosity, 2);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(CliArguments::try_parse_from(["shade", "#fff", "--format", "json"]).is_err());
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        CliArguments::command().debug_assert();
    }
}
