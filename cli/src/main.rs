//! taxpub CLI - TaxPub/JATS metadata extraction tool

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;

use taxpub::{
    extract, load_async_with_options, load_with_options, Document, ExtractOptions, JsonFormat,
    ParseOptions, Source,
};

#[derive(Parser)]
#[command(name = "taxpub")]
#[command(version)]
#[command(about = "Extract metadata from TaxPub/JATS article XML", long_about = None)]
struct Cli {
    /// Input XML file or http(s) URL
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Recover from malformed markup instead of failing
    #[arg(long, global = true, env = "TAXPUB_LENIENT")]
    lenient: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the full article record as JSON
    Json {
        /// Input XML file or http(s) URL
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Run extractors on a single thread
        #[arg(long)]
        sequential: bool,
    },

    /// Show a summary of the article
    Info {
        /// Input XML file or http(s) URL
        #[arg(value_name = "INPUT")]
        input: String,
    },

    /// List authors and affiliations
    Authors {
        /// Input XML file or http(s) URL
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// List cited references
    #[command(alias = "refs")]
    References {
        /// Input XML file or http(s) URL
        #[arg(value_name = "INPUT")]
        input: String,

        /// Print one formatted citation per line instead of JSON
        #[arg(long)]
        citations: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// List taxonomic names
    Taxa {
        /// Input XML file or http(s) URL
        #[arg(value_name = "INPUT")]
        input: String,

        /// Print one scientific name per line instead of JSON
        #[arg(long)]
        names: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// List Darwin Core occurrence records
    Occurrences {
        /// Input XML file or http(s) URL
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// List figures
    Figures {
        /// Input XML file or http(s) URL
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Extract every XML file in a directory to JSON
    Batch {
        /// Directory containing XML files
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let options = if cli.lenient {
        ParseOptions::new().lenient()
    } else {
        ParseOptions::new()
    };

    let result = match cli.command {
        Some(Commands::Json {
            input,
            output,
            compact,
            sequential,
        }) => cmd_json(&input, &options, output.as_deref(), compact, sequential),
        Some(Commands::Info { input }) => cmd_info(&input, &options),
        Some(Commands::Authors { input, compact }) => {
            load_input(&input, &options).and_then(|doc| print_json(&extract::authors(&doc)?, compact))
        }
        Some(Commands::References {
            input,
            citations,
            compact,
        }) => cmd_references(&input, &options, citations, compact),
        Some(Commands::Taxa {
            input,
            names,
            compact,
        }) => cmd_taxa(&input, &options, names, compact),
        Some(Commands::Occurrences { input, compact }) => load_input(&input, &options)
            .and_then(|doc| print_json(&extract::occurrences(&doc)?, compact)),
        Some(Commands::Figures { input, compact }) => {
            load_input(&input, &options).and_then(|doc| print_json(&extract::figures(&doc)?, compact))
        }
        Some(Commands::Batch {
            input,
            output,
            compact,
        }) => cmd_batch(&input, output.as_deref(), &options, compact),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: print the article as JSON if input is provided
            if let Some(input) = cli.input {
                cmd_json(&input, &options, None, false, false)
            } else {
                println!("{}", "Usage: taxpub <INPUT>".yellow());
                println!("       taxpub --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

type CmdResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Load a file path or URL; remote sources go through a tokio runtime.
fn load_input(input: &str, options: &ParseOptions) -> CmdResult<Document> {
    let source = Source::parse(input)?;
    log::debug!("Loading {}", source);
    let doc = if source.is_remote() {
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(load_async_with_options(&source, options.clone()))?
    } else {
        load_with_options(&source, options.clone())?
    };
    Ok(doc)
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> CmdResult {
    println!("{}", taxpub::render::to_json(value, json_format(compact))?);
    Ok(())
}

fn cmd_json(
    input: &str,
    options: &ParseOptions,
    output: Option<&Path>,
    compact: bool,
    sequential: bool,
) -> CmdResult {
    let doc = load_input(input, options)?;
    let extract_options = ExtractOptions::new().with_parallel(!sequential);
    let article = extract::article(&doc, &extract_options)?;
    let json = taxpub::render::to_json(&article, json_format(compact))?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &str, options: &ParseOptions) -> CmdResult {
    let doc = load_input(input, options)?;
    let article = extract::article(&doc, &ExtractOptions::default())?;

    println!("{}", "Article Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Source".bold(), input);
    if !article.title.is_empty() {
        println!("{}: {}", "Title".bold(), article.title);
    }
    if !article.doi.is_empty() {
        println!("{}: {}", "DOI".bold(), article.doi);
    }
    if !article.article_type.is_empty() {
        println!("{}: {}", "Type".bold(), article.article_type);
    }
    if !article.keywords.is_empty() {
        println!("{}: {}", "Keywords".bold(), article.keywords.join(", "));
    }

    if !article.authors.is_empty() {
        println!();
        println!("{}", "Authors".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for author in &article.authors {
            println!("{}", author.fullname.bold());
            for affiliation in &author.affiliations {
                println!("  {} {}", "└─".dimmed(), affiliation);
            }
        }
        if !article.corresponding_author.is_empty() {
            println!("{}: {}", "Corresponding".bold(), article.corresponding_author);
        }
    }

    if article.is_proceedings() {
        let conference = &article.conference;
        println!();
        println!("{}", "Conference".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        println!("{}: {} ({})", "Name".bold(), conference.name, conference.acronym);
        println!("{}: {}", "Date".bold(), conference.date);
        println!("{}: {}", "Location".bold(), conference.location);
        if !conference.session.is_empty() {
            println!("{}: {}", "Session".bold(), conference.session);
        }
        if !conference.presenter.is_empty() {
            println!("{}: {}", "Presenter".bold(), conference.presenter);
        }
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Taxa".bold(), article.taxa.len());
    println!("{}: {}", "Occurrences".bold(), article.occurrences.len());
    println!("{}: {}", "Figures".bold(), article.figures.len());
    println!("{}: {}", "References".bold(), article.references.len());

    Ok(())
}

fn cmd_references(
    input: &str,
    options: &ParseOptions,
    citations: bool,
    compact: bool,
) -> CmdResult {
    let doc = load_input(input, options)?;
    let references = extract::references(&doc)?;

    if citations {
        for reference in &references {
            println!("{}", reference.full_citation);
        }
        Ok(())
    } else {
        print_json(&references, compact)
    }
}

fn cmd_taxa(input: &str, options: &ParseOptions, names: bool, compact: bool) -> CmdResult {
    let doc = load_input(input, options)?;

    if names {
        for name in extract::scientific_names(&doc)? {
            println!("{}", name);
        }
        Ok(())
    } else {
        print_json(&extract::taxa(&doc)?, compact)
    }
}

fn cmd_batch(
    input: &Path,
    output: Option<&Path>,
    options: &ParseOptions,
    compact: bool,
) -> CmdResult {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let name = input.file_name().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_json", name))
    });
    fs::create_dir_all(&output_dir)?;

    let mut files: Vec<PathBuf> = fs::read_dir(input)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
        })
        .collect();
    files.sort();
    log::debug!("Found {} XML files in {}", files.len(), input.display());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let failures = AtomicUsize::new(0);
    // Files are already processed in parallel, so each extraction stays sequential.
    let extract_options = ExtractOptions::new().sequential();
    let format = json_format(compact);

    files.par_iter().for_each(|path| {
        log::debug!("Extracting {}", path.display());
        let result = taxpub::parse_file_with_options(path, options.clone())
            .and_then(|doc| extract::article(&doc, &extract_options))
            .and_then(|article| taxpub::render::to_json(&article, format))
            .map_err(Box::<dyn std::error::Error>::from)
            .and_then(|json| {
                let stem = path.file_stem().unwrap_or_default().to_string_lossy();
                let target = output_dir.join(format!("{}.json", stem));
                fs::write(target, json).map_err(Into::into)
            });

        if let Err(e) = result {
            failures.fetch_add(1, Ordering::Relaxed);
            pb.println(format!("{} {}: {}", "Failed".red(), path.display(), e));
        }
        pb.inc(1);
    });

    pb.finish_with_message("Done!");

    let failed = failures.into_inner();
    println!(
        "\n{} {} of {} files extracted to {}",
        "Done!".green().bold(),
        files.len() - failed,
        files.len(),
        output_dir.display()
    );

    if failed > 0 {
        return Err(format!("{} files failed", failed).into());
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "taxpub".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("TaxPub/JATS metadata extraction tool");
    println!();
    println!("License: MIT");
}
