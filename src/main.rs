// Tue Feb 10 2026 - Alex

use addon_header_generator::{config::Config, pipeline::HeaderPipeline, ui::Banner, utils};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Header and addon-script generator for the scripting distribution", long_about = None)]
struct Args {
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    global_only: bool,

    #[arg(long, default_value = "info")]
    log_level: String,

    #[arg(long)]
    no_progress: bool,

    #[arg(long)]
    no_banner: bool,
}

fn main() {
    let args = Args::parse();

    if !args.no_banner {
        Banner::print();
    }

    setup_logging(&args.log_level);

    let config = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{} Failed to load config: {}", "[!]".red(), e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    if let Err(e) = config.validate() {
        eprintln!("{} Invalid configuration: {}", "[!]".red(), e);
        std::process::exit(1);
    }

    println!(
        "{} Declaration artifact: {}",
        "[*]".blue(),
        config.declaration_artifact.display()
    );
    println!("{} Source roots: {}", "[*]".blue(), config.source_roots.len());
    println!(
        "{} Scripts root: {}",
        "[*]".blue(),
        config.scripts_root.display()
    );
    if args.global_only {
        println!("{} Reduced pass: skipping third-party headers", "[*]".blue());
    }
    println!();

    let progress = if !args.no_progress {
        let pb = ProgressBar::new(100);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}% {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message("Initializing...");
        Some(pb)
    } else {
        None
    };

    if let Some(ref pb) = progress {
        pb.set_message("Generating headers...");
        pb.set_position(10);
    }

    let pipeline = HeaderPipeline::new(config);
    let (result, elapsed) = utils::measure_time(|| pipeline.run(args.global_only));
    let report = match result {
        Ok(report) => report,
        Err(e) => {
            if let Some(pb) = progress {
                pb.finish_and_clear();
            }
            eprintln!("{} Header generation failed: {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    if let Some(ref pb) = progress {
        pb.set_position(100);
        pb.finish_and_clear();
    }

    if !report.missing_enums.is_empty() {
        println!(
            "{} Could not find the following enums:",
            "[!]".yellow()
        );
        for line in &report.missing_enums {
            println!("  - {}", line.trim());
        }
        println!();
    }

    println!(
        "{} Synchronized {} module endpoint(s)",
        "[+]".green(),
        report.endpoints_synced
    );
    println!(
        "{} Header generation complete in {}",
        "[+]".green(),
        utils::format_duration(elapsed)
    );
}

fn setup_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}
