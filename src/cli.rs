//! CLI argument definitions using clap derive
//!
//! Every option can also come from the environment (or a `.env` file).

use crate::output::{OutputFormat, DEFAULT_WIDTH, MAX_WIDTH};
use clap::builder::{FalseyValueParser, RangedU64ValueParser};
use clap::Parser;

/// Analyze an IPv4 or IPv6 address with optional CIDR prefix
///
/// Prints network, netmask, broadcast (or IPv6 scope), usable host range,
/// host count and whether the address is private.
#[derive(Parser, Debug)]
#[command(name = "ip-analyzer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Address with optional prefix, e.g. 192.168.0.1/24. Prompts when omitted.
    pub input: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "table", env = "IP_ANALYZER_FORMAT")]
    pub format: OutputFormat,

    /// Table width in columns
    #[arg(
        long,
        default_value_t = DEFAULT_WIDTH,
        env = "IP_ANALYZER_WIDTH",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_WIDTH as u64)
    )]
    pub width: usize,

    /// Disable colored output. Any NO_COLOR value except false/0/no/off counts.
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Path to the log4rs configuration file
    #[arg(long, default_value = "log4rs.yml", env = "IP_ANALYZER_LOG_CONFIG")]
    pub log_config: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["ip-analyzer", "10.0.0.1/8"]).unwrap();
        assert_eq!(cli.input.as_deref(), Some("10.0.0.1/8"));
        assert_eq!(cli.width, DEFAULT_WIDTH);
        assert_eq!(cli.log_config, "log4rs.yml");
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::try_parse_from(["ip-analyzer", "--format", "json", "--no-color"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.no_color);
        assert_eq!(cli.input, None);
        assert!(Cli::try_parse_from(["ip-analyzer", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_width_range() {
        let cli = Cli::try_parse_from(["ip-analyzer", "--width", "120"]).unwrap();
        assert_eq!(cli.width, 120);
        assert!(Cli::try_parse_from(["ip-analyzer", "--width", "0"]).is_err());
        let too_wide = (MAX_WIDTH + 1).to_string();
        assert!(Cli::try_parse_from(["ip-analyzer", "--width", too_wide.as_str()]).is_err());
    }

    #[test]
    fn test_no_color_env_numeric() {
        // only this test touches NO_COLOR
        std::env::set_var("NO_COLOR", "1");
        let on = Cli::try_parse_from(["ip-analyzer", "10.0.0.1/8"]);
        std::env::set_var("NO_COLOR", "0");
        let off = Cli::try_parse_from(["ip-analyzer", "10.0.0.1/8"]);
        std::env::remove_var("NO_COLOR");

        let on = on.unwrap();
        assert!(on.no_color);
        assert_eq!(on.input.as_deref(), Some("10.0.0.1/8"));
        assert!(!off.unwrap().no_color);
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
