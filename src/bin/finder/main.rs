use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use restaurant_finder::{client::DEFAULT_BASE_URL, input, presenter};
use restaurant_finder::{ClientConfigBuilder, RestaurantClient};

/// Show the top restaurants around a postal code.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Postal code to look up, only its first word is used. Prompted on stdin when omitted.
    postal_code: Option<String>,

    /// Base url of the restaurant discovery API
    #[arg(long, env = "RESTAURANT_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds, the HTTP client default is used when unset
    #[arg(long, env = "RESTAURANT_API_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// -v for info logs, -vv for debug logs
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_ansi(true)
        .with_file(false)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("fail to setup logging");

    if let Err(e) = run(args).await {
        tracing::error!("failed to retrieve restaurants: {e:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let postal_code = match args.postal_code {
        Some(code) => match input::first_token(&code) {
            Some(token) => token.to_string(),
            None => anyhow::bail!("postal code argument is blank"),
        },
        None => input::read_postal_code(std::io::stdin().lock(), std::io::stdout())?,
    };

    let mut config = ClientConfigBuilder::default();
    config.base_url(args.base_url);
    if let Some(secs) = args.timeout_secs {
        config.timeout(Duration::from_secs(secs));
    }
    let client = RestaurantClient::new(config.build()?)?;

    tracing::info!(%postal_code, "looking up restaurants");
    let restaurants = client.fetch_restaurants(&postal_code).await?;

    presenter::display_top(&restaurants).context("fail to print restaurants")?;
    Ok(())
}
