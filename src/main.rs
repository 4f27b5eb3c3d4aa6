use log::debug;
use std::env;

use recipe_catalog::{Catalog, CatalogConfig, SearchField};

const USAGE: &str =
    "Usage: recipe-catalog [SOURCE] [--category NAME] [--search TERM] [--all-fields] [--export]";

#[derive(Debug, Default)]
struct Args {
    source: Option<String>,
    category: Option<String>,
    search: Option<String>,
    all_fields: bool,
    export: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--category" => {
                parsed.category = Some(args.next().ok_or("--category needs a value")?);
            }
            "--search" => {
                parsed.search = Some(args.next().ok_or("--search needs a value")?);
            }
            "--all-fields" => parsed.all_fields = true,
            "--export" => parsed.export = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option {}\n{}", flag, USAGE));
            }
            other if parsed.source.is_none() => parsed.source = Some(other.to_string()),
            _ => return Err(USAGE.to_string()),
        }
    }

    Ok(parsed)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = parse_args(env::args().skip(1))?;
    debug!("{:?}", args);

    let config = CatalogConfig::load()?;
    let mut builder = Catalog::builder();
    if let Some(source) = &args.source {
        builder = if source.starts_with("http://") || source.starts_with("https://") {
            builder.url(source.as_str())
        } else {
            builder.path(source.as_str())
        };
    }
    builder = builder.from_config(&config);
    if args.all_fields {
        builder = builder.search_fields(SearchField::ALL);
    }

    let mut catalog = builder.build().await?;
    if let Some(term) = args.search {
        catalog.set_search_term(term);
    }

    if args.export {
        println!("{}", catalog.export_recipes()?);
        return Ok(());
    }

    for m in catalog.recipes().matches(args.category.as_deref()) {
        let title = match m.highlight.as_ref().filter(|h| h.field == SearchField::Title) {
            Some(h) => match h.split(&m.recipe.title) {
                Some((before, matched, after)) => format!("{}*{}*{}", before, matched, after),
                None => m.recipe.title.clone(),
            },
            None => m.recipe.title.clone(),
        };

        if m.recipe.category.is_empty() {
            println!("{:>4}  {}", m.index, title);
        } else {
            println!("{:>4}  {} [{}]", m.index, title, m.recipe.category);
        }
    }

    Ok(())
}
