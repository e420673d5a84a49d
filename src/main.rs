//! Label Press CLI
//!
//! Usage:
//!   label-press --catalog data.json --list
//!   label-press --catalog data.json TBL-001 --copies 3
//!   label-press --catalog data.json --category Furniture --sub-category Tables TBL-001

use std::path::PathBuf;
use std::process;

use clap::Parser;

use label_press::{generate_labels, Catalog, ProductRecord};

#[derive(Parser)]
#[command(name = "label-press")]
#[command(about = "Generate printable product label PDFs from a catalog")]
struct Cli {
    /// Product reference to render labels for
    reference: Option<String>,

    /// Catalog file (nested category/sub-category/reference JSON)
    #[arg(short, long)]
    catalog: PathBuf,

    /// Category the reference lives in (searched across all when omitted)
    #[arg(long)]
    category: Option<String>,

    /// Sub-category the reference lives in
    #[arg(long)]
    sub_category: Option<String>,

    /// Number of label pages to produce
    #[arg(short = 'n', long, default_value_t = 1)]
    copies: u32,

    /// Output file (defaults to labels_<reference>.pdf)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List the catalog tree and exit
    #[arg(short, long)]
    list: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let catalog = match Catalog::from_file(&cli.catalog) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading catalog '{}': {}", cli.catalog.display(), e);
            process::exit(1);
        }
    };

    if catalog.is_empty() {
        eprintln!(
            "Warning: catalog '{}' contains no categories",
            cli.catalog.display()
        );
    }

    if cli.list {
        print_tree(&catalog);
        return;
    }

    let reference = match &cli.reference {
        Some(r) => r,
        None => {
            eprintln!("Error: no reference given (use --list to browse the catalog)");
            process::exit(1);
        }
    };

    let record = match resolve(&catalog, &cli, reference) {
        Some(record) => record,
        None => {
            eprintln!("Error: reference '{}' not found in catalog", reference);
            process::exit(1);
        }
    };

    let pdf = match generate_labels(&record, cli.copies) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error generating labels for '{}': {}", reference, e);
            process::exit(1);
        }
    };

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("labels_{}.pdf", reference)));
    if let Err(e) = std::fs::write(&output, &pdf) {
        eprintln!("Error writing '{}': {}", output.display(), e);
        process::exit(1);
    }
    println!(
        "Wrote {} page(s) for '{}' to {}",
        cli.copies,
        reference,
        output.display()
    );
}

fn resolve(catalog: &Catalog, cli: &Cli, reference: &str) -> Option<ProductRecord> {
    match (&cli.category, &cli.sub_category) {
        (Some(category), Some(sub)) => catalog.resolve(category, sub, reference),
        (Some(category), None) => catalog
            .sub_categories(category)
            .iter()
            .find_map(|sub| catalog.resolve(category, sub, reference)),
        _ => catalog.find_reference(reference),
    }
}

fn print_tree(catalog: &Catalog) {
    for category in catalog.categories() {
        println!("{}", category);
        for sub in catalog.sub_categories(category) {
            println!("  {}", sub);
            for reference in catalog.references(category, sub) {
                println!("    {}", reference);
            }
        }
    }
}
