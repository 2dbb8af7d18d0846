use std::io::{self, BufRead, Write};
use std::{env, fs, process};

use destination_recommender::{Catalog, Recommendation, Recommender, Result};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("usage: destination-recommender [--catalog <path>] [query words...]");
    println!();
    println!("Ranks destinations from a catalog against a free-text query.");
    println!("With no query arguments, reads queries interactively from stdin.");
    println!("With no --catalog, uses the bundled sample catalog.");
    println!();
    println!("  --catalog <path>   JSON object of id -> destination record");
    println!("  --suggest <tag>    list destinations for a category tag instead");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut catalog_path: Option<String> = None;
    let mut suggest_tag: Option<String> = None;
    let mut query_parts: Vec<String> = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--catalog" => catalog_path = args.next(),
            "--suggest" => suggest_tag = args.next(),
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => query_parts.push(arg),
        }
    }

    let catalog = match catalog_path {
        Some(path) => match load_catalog(&path) {
            Ok(catalog) => catalog,
            Err(err) => {
                eprintln!("error: {err}");
                process::exit(1);
            }
        },
        None => Catalog::sample(),
    };
    let recommender = Recommender::new(catalog);

    if let Some(tag) = suggest_tag {
        print_hits(&recommender.suggestions(&tag));
        return;
    }
    if !query_parts.is_empty() {
        print_hits(&recommender.recommend(&query_parts.join(" ")));
        return;
    }

    // interactive loop: one query per line, empty line to quit
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("query> ");
        if io::stdout().flush().is_err() {
            break;
        }
        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        let query = line.trim();
        if query.is_empty() {
            break;
        }
        print_hits(&recommender.recommend(query));
    }
}

fn load_catalog(path: &str) -> Result<Catalog> {
    let raw = fs::read_to_string(path)?;
    Catalog::from_json_str(&raw)
}

fn print_hits(hits: &[Recommendation]) {
    if hits.is_empty() {
        println!("no matches");
        return;
    }
    for (rank, hit) in hits.iter().enumerate() {
        println!(
            "{:>2}. {} [{}]  match {:.1}%  eco {}/10",
            rank + 1,
            hit.name,
            hit.id,
            hit.match_score,
            hit.eco_score
        );
        if !hit.description.is_empty() {
            println!("    {}", hit.description);
        }
    }
}
