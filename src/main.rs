use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use seo_analyzer::config::{self, Config};
use seo_analyzer::document;
use seo_analyzer::editor::SnippetPreview;
use seo_analyzer::output;
use seo_analyzer::scoring::CHECK_SPECS;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Args, Debug, Clone, Copy)]
struct KeywordArgs {
    /// Score the keywords field (overrides config)
    #[arg(long, conflicts_with = "no_keywords")]
    keywords: bool,

    /// Skip the keywords check (overrides config)
    #[arg(long)]
    no_keywords: bool,
}

impl KeywordArgs {
    fn keywords_override(&self) -> Option<bool> {
        if self.keywords {
            Some(true)
        } else if self.no_keywords {
            Some(false)
        } else {
            None
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a page document (YAML or JSON; `-` reads stdin)
    Analyze {
        /// Document with either flat fields (title, description, ...) or a `fields:` block
        file: PathBuf,

        /// Print the result as JSON instead of a report
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        keywords: KeywordArgs,

        /// Page the content is published on; decides internal vs external links
        #[arg(long)]
        page_url: Option<String>,

        /// Also write the JSON result to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List every check with its weight
    Checks {
        #[command(flatten)]
        keywords: KeywordArgs,
    },
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "seo-analyzer")]
#[command(about = "On-page SEO scoring for editorial content", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/seo-analyzer/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn load_validated_config(path: Option<PathBuf>) -> Config {
    let config = match config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    config
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config_path = cli.config.map(PathBuf::from);

    match cli.command {
        Commands::Init => {
            if let Err(e) = config::run_init_wizard(config_path) {
                eprintln!("Init failed: {:#}", e);
                std::process::exit(EXIT_FAILURE);
            }
        }
        Commands::Checks { keywords } => {
            let config = load_validated_config(config_path);
            let keywords_enabled = keywords
                .keywords_override()
                .or(config.keywords_enabled)
                .unwrap_or(false);
            println!(
                "{}",
                output::format_checks_table(
                    CHECK_SPECS.iter(),
                    keywords_enabled,
                    output::should_use_colors()
                )
            );
        }
        Commands::Analyze {
            file,
            json,
            keywords,
            page_url,
            output: output_path,
        } => {
            let start_time = Instant::now();
            let config = load_validated_config(config_path);

            let analyzer = match config::build_analyzer(
                &config,
                keywords.keywords_override(),
                page_url.as_deref(),
            ) {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };

            let doc = match document::load_document(&file) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("Input error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let result = analyzer.analyze(&doc.to_input());
            let preview = doc.editor().and_then(|editor| {
                editor
                    .snippet
                    .as_ref()
                    .map(|defaults| SnippetPreview::resolve(defaults, &editor.fields))
            });
            let report = output::Report::new(&result, preview.as_ref());

            if json {
                match output::format_json(&report) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        eprintln!("Failed to render JSON: {:#}", e);
                        std::process::exit(EXIT_FAILURE);
                    }
                }
            } else {
                println!(
                    "{}",
                    output::format_report(&report, output::should_use_colors())
                );
            }

            if let Some(path) = output_path {
                if let Err(e) = output::write_report_file(&path, &report) {
                    eprintln!("Output error: {:#}", e);
                    std::process::exit(EXIT_FAILURE);
                }
                log::info!("Report written to {}", path.display());
            }

            log::debug!("Analyzed {} in {:?}", file.display(), start_time.elapsed());
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
