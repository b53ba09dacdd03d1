// ABOUTME: postpress command-line tool: restructure, minify, enhance.
// ABOUTME: Thin clap wrapper over postpress-markup with file I/O and error reporting.

mod prompt;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use dom_query::Document;

use postpress_markup::{
    build_json_ld, collect_record, extract_existing, files, minify, restructure, seo,
    AcceptDefaults, MinifyOptions, PageMeta, RestructureOptions,
};

#[derive(Parser)]
#[command(name = "postpress")]
#[command(about = "Post-process static blog HTML pages", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrap the content div into main/article with heading sections
    Restructure(RestructureArgs),
    /// Minify an HTML file
    Minify(MinifyArgs),
    /// Add JSON-LD and meta/Open Graph/Twitter tags to the head
    Enhance(EnhanceArgs),
}

#[derive(Args)]
struct RestructureArgs {
    /// Input HTML file
    input: PathBuf,

    /// Output path (defaults to <stem>.min.html next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Content wrapper id, tried first
    #[arg(long, default_value = "quarto-content")]
    wrapper_id: String,

    /// Content wrapper class, tried when the id does not match
    #[arg(long, default_value = "page-columns")]
    wrapper_class: String,

    /// Heading level used as section boundaries
    #[arg(long, default_value_t = 2)]
    heading_level: u8,

    /// Headline for the JSON-LD block (defaults to the page title)
    #[arg(long)]
    headline: Option<String>,

    /// Description for the JSON-LD block
    #[arg(long)]
    description: Option<String>,

    /// Author name for the JSON-LD block
    #[arg(long)]
    author: Option<String>,

    /// Publication date for the JSON-LD block
    #[arg(long)]
    date_published: Option<String>,

    /// Canonical page URL, written as mainEntityOfPage
    #[arg(long, default_value = "")]
    page_url: String,
}

#[derive(Args)]
struct MinifyArgs {
    /// Input HTML file
    input: PathBuf,

    /// Output path (defaults to <stem>.min.html next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep HTML comments
    #[arg(long)]
    keep_comments: bool,

    /// Keep inter-tag and run whitespace
    #[arg(long)]
    keep_empty_space: bool,

    /// Keep values on boolean attributes (checked="checked")
    #[arg(long)]
    keep_boolean_values: bool,

    /// Drop quotes from attribute values where HTML allows it
    #[arg(long)]
    unquote_attributes: bool,
}

#[derive(Args)]
struct EnhanceArgs {
    /// Input HTML file
    input: PathBuf,

    /// Output path (defaults to overwriting the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print what would be written without touching the file
    #[arg(long)]
    dry_run: bool,

    /// Accept every default instead of prompting
    #[arg(long)]
    defaults: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Restructure(args) => run_restructure(args),
        Command::Minify(args) => run_minify(args),
        Command::Enhance(args) => run_enhance(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run_restructure(args: RestructureArgs) -> anyhow::Result<()> {
    let html = files::read_html(&args.input)?;
    let doc = Document::from(html.as_str());
    let existing = extract_existing(&doc);

    let meta = PageMeta {
        headline: args.headline.unwrap_or(existing.title),
        description: args.description.unwrap_or(existing.description),
        author_name: args.author.unwrap_or(existing.author),
        date_published: args.date_published.unwrap_or(existing.date_published),
        page_url: args.page_url,
    };
    let opts = RestructureOptions {
        wrapper_id: args.wrapper_id,
        wrapper_class: args.wrapper_class,
        heading_level: args.heading_level,
    };
    restructure(&doc, &opts, &meta)?;

    let output = args
        .output
        .unwrap_or_else(|| files::minified_path(&args.input));
    files::write_html(&output, &doc.html())?;
    eprintln!("saved: {}", output.display());
    Ok(())
}

fn run_minify(args: MinifyArgs) -> anyhow::Result<()> {
    let html = files::read_html(&args.input)?;
    let opts = MinifyOptions {
        remove_comments: !args.keep_comments,
        remove_empty_space: !args.keep_empty_space,
        remove_all_empty_space: !args.keep_empty_space,
        reduce_boolean_attributes: !args.keep_boolean_values,
        remove_optional_attribute_quotes: args.unquote_attributes,
    };
    let minified = minify(&html, &opts);

    let output = args
        .output
        .unwrap_or_else(|| files::minified_path(&args.input));
    files::write_html(&output, &minified)?;
    eprintln!(
        "minified: {} bytes -> {} bytes ({})",
        html.len(),
        minified.len(),
        output.display()
    );
    Ok(())
}

fn run_enhance(args: EnhanceArgs) -> anyhow::Result<()> {
    let html = files::read_html(&args.input)?;
    let doc = Document::from(html.as_str());
    let existing = extract_existing(&doc);

    let record = if args.defaults {
        collect_record(&existing, &mut AcceptDefaults)
    } else {
        collect_record(&existing, &mut prompt::StdinPrompter::new())
    }
    .context("collecting metadata")?;

    let json = serde_json::to_string_pretty(&build_json_ld(&record))?;

    if args.dry_run {
        println!("JSON-LD that would be added:");
        println!("{}", json);
        println!();
        println!("Meta tags that would be added/updated:");
        println!("  description: {}", record.meta_description());
        println!("  author: {}", record.author_name);
        println!("  keywords: {}", record.keywords);
        return Ok(());
    }

    if !seo::apply(&doc, &record) {
        eprintln!("warning: no <head> element found; nothing to enhance");
    }

    let output = args.output.unwrap_or(args.input);
    files::write_html(&output, &doc.html())?;
    eprintln!("enhanced: {}", output.display());
    Ok(())
}
