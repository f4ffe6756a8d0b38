use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tailwind-remap - Maps HTML class attributes to Tailwind utility classes
/// by analyzing a compiled CSS file
#[derive(Parser, Debug)]
#[command(name = "tailwind-remap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze an HTML file against a compiled CSS file
    Analyze(AnalyzeArgs),
}

/// Arguments for the analyze command
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// HTML file to analyze
    #[arg(value_name = "FILE", help = "HTML file to analyze (*.html)")]
    pub file: PathBuf,

    /// Compiled CSS file to analyze
    #[arg(
        long = "css-file",
        value_name = "PATH",
        default_value = "dist/styles.css",
        help = "CSS file to analyze"
    )]
    pub css_file: PathBuf,

    /// Rewrite the HTML file in place instead of printing the mapping
    #[arg(
        long = "write",
        default_value_t = false,
        help = "Write the rewritten document back to FILE"
    )]
    pub write: bool,

    /// Tailwind theme configuration used to customize the conversion
    #[arg(
        long = "tailwind-file",
        value_name = "PATH",
        help = "Tailwind config file location (JSON or YAML)"
    )]
    pub tailwind_file: Option<PathBuf>,

    /// Class tokens or glob patterns to exclude from matching
    #[arg(
        long = "class-blacklist",
        value_name = "PATTERN",
        num_args = 0..,
        help = "Class list to ignore (exact tokens or glob patterns)"
    )]
    pub class_blacklist: Vec<String>,

    /// Verbose output
    #[arg(
        short = 'v',
        long = "verbose",
        default_value_t = false,
        help = "Enable verbose output"
    )]
    pub verbose: bool,
}

impl AnalyzeArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.file.as_os_str().is_empty() {
            return Err("An HTML file must be provided".to_string());
        }

        if self.css_file.as_os_str().is_empty() {
            return Err("A CSS file must be provided".to_string());
        }

        if self
            .class_blacklist
            .iter()
            .any(|pattern| pattern.is_empty())
        {
            return Err("Blacklist patterns must not be empty".to_string());
        }

        Ok(())
    }
}
