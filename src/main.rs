use log::error;
use recipe_scraper::config::load_config;
use recipe_scraper::{RecipeScraper, RenderedRecipe, ScrapeError};
use std::env;
use std::process::ExitCode;

const USAGE: &str = "Usage: recipe-scraper <url> [--json] [--no-time] [--no-yield]";

struct Args {
    url: String,
    json: bool,
    include_time: bool,
    include_yield: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut url = None;
    let mut json = false;
    let mut include_time = true;
    let mut include_yield = true;

    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            "--no-time" => include_time = false,
            "--no-yield" => include_yield = false,
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag if flag.starts_with("--") => return Err(format!("Unknown flag: {flag}\n{USAGE}")),
            _ if url.is_none() => url = Some(arg.clone()),
            _ => return Err(format!("Unexpected argument: {arg}\n{USAGE}")),
        }
    }

    Ok(Args {
        url: url.ok_or_else(|| format!("Please provide a URL as an argument\n{USAGE}"))?,
        json,
        include_time,
        include_yield,
    })
}

async fn run(args: &Args) -> Result<RenderedRecipe, ScrapeError> {
    let config = load_config()?;
    RecipeScraper::builder()
        .url(args.url.as_str())
        .config(config)
        .include_time(args.include_time)
        .include_yield(args.include_yield)
        .build()
        .await
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args).await {
        Ok(recipe) if args.json => match serde_json::to_string_pretty(&recipe) {
            Ok(body) => {
                println!("{body}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Failed to serialize recipe: {}", e);
                ExitCode::FAILURE
            }
        },
        Ok(recipe) => {
            println!("# {}\n\n{}", recipe.title, recipe.markdown);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error scraping recipe: {}", e);
            if args.json {
                println!("{}", serde_json::json!({ "error": e.to_string() }));
            } else {
                eprintln!("Scraping failed: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
