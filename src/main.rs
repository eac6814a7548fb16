use std::{io, path::PathBuf, time::Instant};

use clap::Parser;
use little_search_engine::{
    config::Config,
    error::{Error, Result},
    search::{SearchEngine, SearchResult},
};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON config file, overridden by any flag given below
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File listing the documents to index
    #[arg(long, conflicts_with = "docs_dir")]
    docs: Option<PathBuf>,

    /// Directory whose files are all indexed
    #[arg(long)]
    docs_dir: Option<PathBuf>,

    /// File of noise words to leave out of the index
    #[arg(long)]
    noise_words: Option<PathBuf>,

    /// Maximum number of documents per query
    #[arg(short, long)]
    limit: Option<usize>,

    /// Print results as JSON
    #[arg(long, default_value = "false")]
    json: bool,

    /// Log every indexed document
    #[arg(short, long, default_value = "false")]
    verbose: bool,

    /// Run a single query, e.g. `deep or world`, instead of reading stdin
    query: Vec<String>,
}

impl Args {
    fn into_config(self) -> Result<Config> {
        let mut config = match (&self.config, &self.noise_words) {
            (Some(path), _) => Config::from_path(path)?,
            (None, Some(noise_words)) => Config::new(noise_words),
            (None, None) => {
                return Err(Error::Generic(
                    "Either --config or --noise-words is required".to_string(),
                ))
            }
        };

        if let Some(noise_words) = self.noise_words {
            config.noise_words = noise_words;
        }
        if self.docs.is_some() || self.docs_dir.is_some() {
            config.docs = self.docs;
            config.docs_dir = self.docs_dir;
        }
        if let Some(limit) = self.limit {
            config.limit = limit;
        }

        Ok(config)
    }
}

fn print_results(query: &str, results: Option<&[SearchResult]>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&results.unwrap_or_default())?);
        return Ok(());
    }

    let Some(results) = results else {
        println!("No results for '{query}'");
        return Ok(());
    };

    println!("Results for '{query}':");
    for (rank, result) in results.iter().enumerate() {
        println!("{:>2}. {} ({})", rank + 1, result.document, result.frequency);
    }

    Ok(())
}

fn run(args: Args) -> Result<()> {
    let json = args.json;
    let query = args.query.join(" ");
    let config = args.into_config()?;

    let start = Instant::now();
    let index = config.build_index()?;
    tracing::info!(elapsed = ?start.elapsed(), "Index ready");

    let search = SearchEngine::new(&index).with_limit(config.limit);

    if !query.is_empty() {
        let results = search.search(&query)?;
        return print_results(&query, results.as_deref(), json);
    }

    let mut buffer = String::new();

    println!("Enter Search Query:");

    loop {
        buffer.clear();
        if io::stdin().read_line(&mut buffer)? == 0 {
            break;
        }

        let query = buffer.trim();
        if query == "exit" {
            break;
        }
        if query.is_empty() {
            continue;
        }

        let start = Instant::now();
        match search.search(query) {
            Ok(results) => print_results(query, results.as_deref(), json)?,
            Err(e) => eprintln!("{e}"),
        }
        println!("Time taken: {:?}", start.elapsed());
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(args) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
