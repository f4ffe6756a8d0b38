pub mod args;
pub mod collector;
pub mod config;
pub mod convert;
pub mod errors;
pub mod matcher;
pub mod reporter;
pub mod resolver;
pub mod rewriter;

pub use args::{AnalyzeArgs, Cli, Commands};
pub use config::TailwindConfig;
pub use convert::{ConvertedRule, TailwindConverter};
pub use errors::{RemapError, Result};
pub use matcher::Blacklist;

use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// Result of one analyze run
#[derive(Debug)]
pub struct AnalysisReport {
    /// Class group -> resolved Tailwind classes, in document order
    pub resolved: IndexMap<String, Vec<String>>,

    /// Whether the HTML file was rewritten in place
    pub written: bool,
}

/// Main analyze entry point: reads the input files, runs the resolution
/// pipeline, then either rewrites the HTML file in place or prints the
/// mapping to stdout.
pub fn analyze(args: &AnalyzeArgs) -> Result<AnalysisReport> {
    args.validate().map_err(RemapError::InvalidInput)?;

    // Existence checks gate each read; a missing input short-circuits the
    // whole run with no partial output.
    ensure_exists(&args.css_file)?;
    ensure_exists(&args.file)?;
    if let Some(tailwind_file) = &args.tailwind_file {
        ensure_exists(tailwind_file)?;
    }

    let css_content = fs::read_to_string(&args.css_file)?;
    let html_content = fs::read_to_string(&args.file)?;
    let config = load_config(args.tailwind_file.as_deref());

    if args.verbose {
        eprintln!("Analyzing {} against {}", args.file.display(), args.css_file.display());
        eprintln!("Blacklist patterns: {:?}", args.class_blacklist);
    }

    let resolved = run_analysis(&css_content, &html_content, &args.class_blacklist, &config)?;

    if args.verbose {
        let matched = resolved.values().filter(|classes| !classes.is_empty()).count();
        eprintln!(
            "Collected {} class groups, {} with a Tailwind equivalent",
            resolved.len(),
            matched
        );
    }

    let mut written = false;
    if args.write {
        let new_content = rewriter::rewrite_document(&html_content, &resolved);
        match fs::write(&args.file, new_content) {
            Ok(()) => {
                println!("[✅] Wrote file {}", args.file.display());
                written = true;
            }
            Err(e) => {
                // Reported, not fatal: the write is the final stage.
                eprintln!(
                    "Could not write file {} because error: {}",
                    args.file.display(),
                    e
                );
            }
        }
    } else {
        reporter::print_report(&resolved);
    }

    Ok(AnalysisReport { resolved, written })
}

/// Run the resolution pipeline over in-memory inputs.
///
/// CSS rules + blacklist feed the selector matcher; the HTML document feeds
/// the class collector; the group resolver joins the two. No IO happens here.
pub fn run_analysis(
    css: &str,
    html: &str,
    blacklist_patterns: &[String],
    config: &TailwindConfig,
) -> Result<IndexMap<String, Vec<String>>> {
    let converter = TailwindConverter::new(config);
    let rules = converter.convert_css(css)?;

    let groups = collector::collect_class_groups(html);
    let blacklist = Blacklist::new(blacklist_patterns)?;
    let token_map = matcher::build_token_map(&rules, &groups, &blacklist);

    Ok(resolver::resolve_groups(&groups, &token_map))
}

/// Load the Tailwind config, falling back to defaults when the file fails to
/// parse. Load failures are reported but never abort the run.
fn load_config(path: Option<&Path>) -> TailwindConfig {
    let Some(path) = path else {
        return TailwindConfig::default();
    };

    match TailwindConfig::from_file(path) {
        Ok(config) => {
            println!("[✅] Loaded tailwind config file: {}", path.display());
            config
        }
        Err(e) => {
            eprintln!("Could not analyze tailwind config: {}", e);
            TailwindConfig::default()
        }
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(RemapError::MissingInput(path.to_path_buf()));
    }
    Ok(())
}
