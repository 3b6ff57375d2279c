use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use corpus::persist::{load_corpora, load_meta, save_corpora, save_meta, save_summary, MetaFile, ResultPaths};
use corpus::term::{load_terms, DEFAULT_EUTILS_BASE};
use corpus::{CollectionConfig, CorpusCollection, EutilsConfig, TermSummary};
use time::format_description::well_known::Rfc3339;
use tracing_subscriber::{fmt, EnvFilter};

mod http;

use http::HttpTransport;

#[derive(Parser)]
#[command(name = "scanner")]
#[command(about = "Collect PubMed abstract words for ERP terms and summarize them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and fetch articles for every term, then build word frequencies
    Scrape {
        /// Terms file: one `label` or `label | exclusion` per line
        #[arg(long)]
        terms: String,
        /// Output directory for the collection and meta files
        #[arg(long, default_value = "./results")]
        output: String,
        /// E-utilities base URL
        #[arg(long, default_value = DEFAULT_EUTILS_BASE)]
        base_url: String,
        /// Maximum ids returned per search (server default when unset)
        #[arg(long)]
        retmax: Option<u32>,
        /// NCBI API key
        #[arg(long, env = "NCBI_API_KEY")]
        api_key: Option<String>,
        /// Number of top words to print per term
        #[arg(long, default_value_t = 20)]
        top: usize,
        /// Pause between requests in milliseconds
        #[arg(long, default_value_t = 400)]
        delay_ms: u64,
        /// Request timeout seconds
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,
    },
    /// Write one summary JSON per term from a stored collection
    Summarize {
        /// Directory written by `scrape`
        #[arg(long, default_value = "./results")]
        input: String,
        /// Number of top words kept per summary
        #[arg(long, default_value_t = 20)]
        top: usize,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scrape { terms, output, base_url, retmax, api_key, top, delay_ms, timeout_secs } => {
            let terms = load_terms(&terms)?;
            let eutils = EutilsConfig { base_url, retmax, api_key, ..EutilsConfig::default() };
            let transport = HttpTransport::new(timeout_secs, delay_ms)?;
            scrape(CollectionConfig { terms, eutils }, &transport, &output, top)
        }
        Commands::Summarize { input, top } => summarize(&input, top),
    }
}

fn scrape(config: CollectionConfig, transport: &HttpTransport, output: &str, top: usize) -> Result<()> {
    url::Url::parse(&config.eutils.base_url).map_err(|e| anyhow!("bad base url {}: {e}", config.eutils.base_url))?;
    tracing::info!(terms = config.terms.len(), output, "scrape starting");

    let mut collection = CorpusCollection::new(config);
    let report = collection.scrape_all(transport);
    collection.combine_all();
    collection.compute_all_frequencies();

    for c in collection.corpora() {
        match corpus::collection::top_words_line(c, top) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::error!(label = c.label(), error = %e, "cannot report top words"),
        }
    }

    let paths = ResultPaths::new(output);
    let meta = MetaFile {
        num_terms: collection.corpora().len(),
        num_articles: collection.corpora().iter().map(|c| c.article_count()).sum(),
        created_at: time_now(),
        version: 1,
        config: collection.config().clone(),
    };
    save_corpora(&paths, collection.corpora())?;
    save_meta(&paths, &meta)?;

    tracing::info!(scraped = report.scraped, failed = report.failures.len(), output, "scrape complete");
    for f in &report.failures {
        eprintln!("failed: {} ({})", f.label, f.error);
    }
    Ok(())
}

fn summarize(input: &str, top: usize) -> Result<()> {
    let paths = ResultPaths::new(input);
    let meta = load_meta(&paths)?;
    let corpora = load_corpora(&paths)?;
    if corpora.len() != meta.num_terms {
        return Err(anyhow!("meta lists {} terms but collection holds {}", meta.num_terms, corpora.len()));
    }
    for c in &corpora {
        let summary = TermSummary::from_corpus(c, top);
        let file = save_summary(&paths, &summary)?;
        tracing::info!(
            label = summary.label.as_str(),
            articles = summary.n_articles,
            first_year = ?summary.first_year,
            last_year = ?summary.last_year,
            file = %file.display(),
            "summary written"
        );
    }
    Ok(())
}

fn time_now() -> String {
    time::OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}
