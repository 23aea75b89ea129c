//! Interactive outfit recommender over a flat-file clothing catalog.
//!
//! Startup loads the whole catalog into memory, warning about any skipped
//! records, then hands stdin and stdout to the session loop. The catalog file
//! comes from `--catalog`, then the `OUTFIT_CATALOG` environment variable,
//! then `items.csv` in the current directory.

use anyhow::{Context, Result};
use outfitter::{CatalogStore, RandomPicker, resolve_catalog_path, run_session};
use std::env;
use std::io;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse()?;
    let catalog_path = resolve_catalog_path(cli.catalog);
    let store = CatalogStore::new(&catalog_path);
    let load = store
        .load()
        .with_context(|| format!("loading catalog from {}", catalog_path.display()))?;
    for fault in &load.skipped {
        eprintln!("warning: skipping catalog record ({fault})");
    }

    let mut catalog = load.catalog;
    let mut picker = match cli.seed {
        Some(seed) => RandomPicker::seeded(seed),
        None => RandomPicker::from_entropy(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();
    run_session(&mut input, &mut output, &store, &mut catalog, &mut picker)
}

struct Cli {
    catalog: Option<PathBuf>,
    seed: Option<u64>,
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args = env::args_os();
        let _program = args.next();

        let mut catalog = None;
        let mut seed = None;
        while let Some(arg) = args.next() {
            let flag = arg.to_str().context("Invalid UTF-8 in argument")?;
            match flag {
                "--catalog" | "-c" => {
                    let value = args.next().context("--catalog requires a file path")?;
                    catalog = Some(PathBuf::from(value));
                }
                "--seed" | "-s" => {
                    let value = args.next().context("--seed requires a value")?;
                    let text = value.to_str().context("Invalid UTF-8 in --seed value")?;
                    let parsed = text
                        .parse::<u64>()
                        .with_context(|| format!("Invalid --seed value '{text}'"))?;
                    seed = Some(parsed);
                }
                "--help" | "-h" => usage(0),
                _ => usage(1),
            }
        }

        Ok(Self { catalog, seed })
    }
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: outfit [--catalog PATH] [--seed N]\n\nOptions:\n  --catalog, -c PATH   Catalog CSV file (default: $OUTFIT_CATALOG, then ./items.csv).\n  --seed, -s N         Seed the random picker for repeatable selections.\n\nActions at the prompt:\n  find   Ask for today's temperature, style, and weather, then print an outfit.\n  add    Record a new clothing item in the catalog.\n  quit   End the session."
    );
    std::process::exit(code);
}
