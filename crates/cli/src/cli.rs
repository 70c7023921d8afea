use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use pdnsgrep_domain::config::OutputFormat;
use pdnsgrep_domain::{CliOverrides, ObjectTypeFilter, SortField};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pdnsgrep")]
#[command(version)]
#[command(about = "Search blazingly fast through PowerDNS entries")]
#[command(after_help = "Example: pdnsgrep \"*firewall*\" ns1 --type A")]
pub struct Cli {
    /// Search terms; bare host names match anywhere in a record name
    #[arg(value_name = "SEARCH", required_unless_present = "show_completion")]
    pub terms: Vec<String>,

    /// Enable debug logging
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Path to a config file (default: ~/.pdnsgrep.toml)
    #[arg(short = 'c', long, env = "PDNSGREP_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// PowerDNS API token
    #[arg(long, env = "PDNSGREP_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// PowerDNS API URL
    #[arg(short = 'u', long, env = "PDNSGREP_URL")]
    pub url: Option<String>,

    /// Output format (table|csv|raw|json)
    #[arg(short = 'o', long, env = "PDNSGREP_OUTPUT", value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Delimiter when csv export is used
    #[arg(long, env = "PDNSGREP_DELIMITER")]
    pub delimiter: Option<String>,

    /// Do not show header in output
    #[arg(long)]
    pub no_header: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Search only for zones
    #[arg(long, conflicts_with_all = ["record", "comment"])]
    pub zone: bool,

    /// Search only for records
    #[arg(long, conflicts_with = "comment")]
    pub record: bool,

    /// Search only for comments
    #[arg(long)]
    pub comment: bool,

    /// Filter type of record (A, AAAA, TXT, ...)
    #[arg(short = 't', long = "type", env = "PDNSGREP_TYPE", value_name = "TYPE")]
    pub record_type: Option<String>,

    /// Sort results (name|zone|ttl|type)
    #[arg(long, env = "PDNSGREP_SORT", value_name = "FIELD")]
    pub sort: Option<SortField>,

    /// Show counts per type and zone instead of the records
    #[arg(long)]
    pub stats: bool,

    /// Timeout in seconds for API requests
    #[arg(long, env = "PDNSGREP_TIMEOUT", value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Repeat the search and redraw whenever the results change
    #[arg(short = 'w', long)]
    pub watch: bool,

    /// Seconds between searches in watch mode
    #[arg(long, env = "PDNSGREP_INTERVAL", value_name = "SECONDS")]
    pub interval: Option<u64>,

    /// Print a completion script for the given shell and exit
    #[arg(long, value_name = "SHELL")]
    pub show_completion: Option<Shell>,
}

impl Cli {
    pub fn write_completion<W: Write>(shell: Shell, out: &mut W) {
        let mut command = Cli::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, out);
    }

    pub fn object_type(&self) -> Option<ObjectTypeFilter> {
        if self.zone {
            Some(ObjectTypeFilter::Zone)
        } else if self.comment {
            Some(ObjectTypeFilter::Comment)
        } else if self.record {
            Some(ObjectTypeFilter::Record)
        } else {
            None
        }
    }

    fn log_level(&self) -> Option<String> {
        if self.debug {
            Some("debug".to_string())
        } else if self.verbose {
            Some("info".to_string())
        } else {
            None
        }
    }

    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            url: self.url.clone(),
            token: self.token.clone(),
            timeout_secs: self.timeout,
            object_type: self.object_type(),
            record_type: self.record_type.clone(),
            sort_by: self.sort,
            output: self.output,
            delimiter: self.delimiter.clone(),
            no_header: self.no_header,
            no_color: self.no_color,
            stats: self.stats,
            watch_interval_secs: self.interval,
            log_level: self.log_level(),
        }
    }
}
