//! Clap derive structures for the `omada` CLI.
//!
//! Defines the command tree, global flags, and shared value enums.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use omada_api::{LedSetting, RadioBand};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// omada -- manage TP-Link Omada controllers from the command line
#[derive(Debug, Parser)]
#[command(
    name = "omada",
    version,
    about = "Manage TP-Link Omada networks from the command line",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Path to the YAML config file
    #[arg(long, short = 'c', env = "OMADA_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Site key (overrides the config file)
    #[arg(long, short = 's', global = true)]
    pub site: Option<String>,

    /// Output format
    #[arg(long, short = 'o', default_value = "table", global = true)]
    pub output: OutputFormat,

    /// Accept self-signed TLS certificates (same as `verify: false`)
    #[arg(long, short = 'k', global = true)]
    pub insecure: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Value Enums ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LedArg {
    On,
    Off,
    /// Follow the site-wide LED setting
    Default,
}

impl From<LedArg> for LedSetting {
    fn from(arg: LedArg) -> Self {
        match arg {
            LedArg::On => Self::On,
            LedArg::Off => Self::Off,
            LedArg::Default => Self::SiteDefault,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BandArg {
    /// 2.4 GHz radio
    #[value(name = "2g")]
    TwoG,
    /// 5 GHz radio
    #[value(name = "5g")]
    FiveG,
}

impl From<BandArg> for RadioBand {
    fn from(arg: BandArg) -> Self {
        match arg {
            BandArg::TwoG => Self::Band2g,
            BandArg::FiveG => Self::Band5g,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn enabled(self) -> bool {
        matches!(self, Self::On)
    }
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List and configure devices
    #[command(alias = "dev", alias = "d")]
    Devices(DevicesArgs),

    /// Switch radios (and LEDs) on or off on every access point of the site
    Radios(RadiosArgs),

    /// List sites and site settings
    Sites(SitesArgs),

    /// List deployment scenarios
    Scenarios,

    /// List controller admin accounts
    Admins,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Devices ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DevicesArgs {
    #[command(subcommand)]
    pub command: DevicesCommand,
}

#[derive(Debug, Subcommand)]
pub enum DevicesCommand {
    /// List devices of the site
    #[command(alias = "ls")]
    List,

    /// Show the full record of an access point
    Get {
        /// Access point MAC (AA-BB-CC-DD-EE-FF)
        mac: String,
    },

    /// Set the LED mode of an access point
    Led {
        /// Access point MAC
        mac: String,
        #[arg(value_enum)]
        state: LedArg,
    },

    /// Enable or disable one radio of an access point
    Radio {
        /// Access point MAC
        mac: String,
        #[arg(value_enum)]
        band: BandArg,
        #[arg(value_enum)]
        state: Toggle,
    },
}

// ── Radios ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RadiosArgs {
    /// Disable radios (and LEDs) instead of enabling them
    #[arg(long, short = 'd')]
    pub disable: bool,

    /// Leave LEDs untouched
    #[arg(long = "no-leds")]
    pub no_leds: bool,

    /// Radio bands to switch
    #[arg(long = "band", value_enum, default_values_t = [BandArg::TwoG])]
    pub bands: Vec<BandArg>,
}

// ── Sites ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SitesArgs {
    #[command(subcommand)]
    pub command: SitesCommand,
}

#[derive(Debug, Subcommand)]
pub enum SitesCommand {
    /// List sites
    #[command(alias = "ls")]
    List,

    /// Show all settings of a site (defaults to the configured site)
    Settings {
        site: Option<String>,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}
