//! Interactive storyline recommender.
//!
//! Usage: `recommend [movies.csv] [top-n]`
//!
//! Loads the scraped dataset, builds the TF-IDF index once, then reads one
//! storyline per line from stdin and prints the ranked matches. An empty
//! line or EOF exits. Prompts go to stderr so piped output stays clean.

use std::env;
use std::io::{self, BufRead, Write};

use storymatch::{dataset, Engine, Error, Options};

fn main() {
    let mut args = env::args().skip(1);
    let csv_path = args.next().unwrap_or_else(|| "movies.csv".to_string());
    let top_n = args
        .next()
        .and_then(|n| n.parse::<usize>().ok())
        .unwrap_or(5);

    let engine = match build_engine(&csv_path, top_n) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("error: {e}");
            if matches!(e, Error::Io(_)) {
                eprintln!("hint: run scrape_movies first to generate {csv_path}");
            }
            std::process::exit(1);
        }
    };
    eprintln!(
        "Loaded {} movies ({} index terms) from {csv_path}",
        engine.len(),
        engine.vocab_len()
    );

    let stdin = io::stdin();
    loop {
        eprint!("storyline> ");
        let _ = io::stderr().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("error reading input: {e}");
                std::process::exit(1);
            }
        }

        let query = line.trim();
        if query.is_empty() {
            break;
        }

        match engine.recommend(query) {
            Ok(results) => print_results(&results),
            Err(e) => eprintln!("error: {e}"),
        }
    }
}

fn build_engine(csv_path: &str, top_n: usize) -> Result<Engine, Error> {
    let movies = dataset::load_csv(csv_path)?;
    let options = Options {
        top_n,
        ..Options::default()
    };
    Engine::build(movies, options)
}

fn print_results(results: &[storymatch::Recommendation]) {
    if results.is_empty() {
        println!("No similar movies found. Try a different storyline.");
        return;
    }
    for (i, rec) in results.iter().enumerate() {
        println!("{}. {} (score {:.3})", i + 1, rec.title, rec.score);
        println!("   {}", rec.storyline);
    }
}
