//! config-check: portfolio document validator and panel previewer.
//!
//! Usage:
//!   config-check check --input portfolio.json
//!   config-check render --input portfolio.json --zone 3

use std::path::PathBuf;
use std::process;

use promenade_content::panels::{self, PANEL_COUNT};
use promenade_content::PortfolioConfig;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "check" => cmd_check(&args[2..]),
        "render" => cmd_render(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "config-check: PROMENADE portfolio document tool\n\
         \n\
         Commands:\n\
         \n\
         check     Validate a portfolio document and print section counts\n\
         \n\
           --input <path>     Portfolio JSON file (default: portfolio.json)\n\
         \n\
         render    Render one zone's panel HTML to stdout\n\
         \n\
           --input <path>     Portfolio JSON file (default: portfolio.json)\n\
           --zone <N>         Zone index 0-6\n\
         \n\
         Examples:\n\
         \n\
           config-check check --input portfolio.json\n\
           config-check render --input portfolio.json --zone 4\n"
    );
}

fn parse_input(args: &[String]) -> PathBuf {
    for i in 0..args.len() {
        if args[i] == "--input" && i + 1 < args.len() {
            return PathBuf::from(&args[i + 1]);
        }
    }
    PathBuf::from("portfolio.json")
}

fn parse_zone(args: &[String]) -> Option<usize> {
    for i in 0..args.len() {
        if args[i] == "--zone" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn load_or_exit(path: &PathBuf) -> PortfolioConfig {
    match PortfolioConfig::load_from_file(path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}

// --- Check command ---

fn cmd_check(args: &[String]) {
    let path = parse_input(args);
    let config = load_or_exit(&path);

    // Every panel must render, not just parse.
    for index in 0..PANEL_COUNT {
        if let Err(err) = panels::render_panel(&config, index) {
            eprintln!("Error: panel {index} failed to render: {err}");
            process::exit(1);
        }
    }

    let skill_count: usize = config.skills.iter().map(|c| c.items.len()).sum();

    println!("{} — {}", config.personal.name, config.personal.title);
    println!("  bio paragraphs:  {}", config.personal.bio.len());
    println!("  stats:           {}", config.personal.stats.len());
    println!("  certifications:  {}", config.certifications.len());
    println!("  experience:      {}", config.experience.len());
    println!("  projects:        {}", config.projects.len());
    println!(
        "  skills:          {} in {} categories",
        skill_count,
        config.skills.len()
    );
    println!("  education:       {}", config.education.len());
    println!("  contact links:   {}", config.contact.links.len());
    println!("OK: all {PANEL_COUNT} panels render");
}

// --- Render command ---

fn cmd_render(args: &[String]) {
    let path = parse_input(args);
    let zone = match parse_zone(args) {
        Some(zone) => zone,
        None => {
            eprintln!("Error: --zone <N> is required");
            process::exit(1);
        }
    };

    let config = load_or_exit(&path);
    match panels::render_panel(&config, zone) {
        Ok(html) => println!("{html}"),
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}
