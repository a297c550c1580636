use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quickinit")]
#[command(author = "Alberto Cavalcante")]
#[command(version)]
#[command(about = "Quick developer machine setup from a YAML document", long_about = None)]
pub struct Cli {
    /// Setup document (YAML)
    #[arg(
        value_name = "CONFIG",
        required_unless_present_any = ["list", "list_templates", "generate", "completions"]
    )]
    pub config: Option<PathBuf>,

    /// Show command output (-vv for debug logging)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Show commands and files without executing or writing anything
    #[arg(short, long)]
    pub dry_run: bool,

    /// Show available installer drivers
    #[arg(short, long)]
    pub list: bool,

    /// List available sample templates
    #[arg(short = 't', long)]
    pub list_templates: bool,

    /// Print a sample template (e.g. windows_full)
    #[arg(short, long, value_name = "NAME")]
    pub generate: Option<String>,

    /// Generate shell completions
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
