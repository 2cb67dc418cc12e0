//! Command-line tool for building, validating and inspecting durable links.
//!
//! # Usage
//!
//! ```bash
//! # Encode a long link
//! cargo run -- build --link https://example.com/page --domain-prefix https://xyz.example
//!
//! # Encode, shorten via the in-memory store and resolve it back
//! cargo run -- build --link https://example.com/page --domain-prefix https://xyz.example \
//!     --utm-source newsletter --path-length short --shorten
//!
//! # Check an incoming link against the allow-list
//! cargo run -- validate https://xyz.example/AbC1
//!
//! # Print the metadata carried by a long link
//! cargo run -- inspect "https://xyz.example/?link=https%3A%2F%2Fexample.com&pathLength=SHORT"
//! ```
//!
//! # Environment Variables
//!
//! See [`durable_links::config`]. `--domain-prefix` stands in for
//! `DURABLE_LINKS_DOMAIN_PREFIX` when building.

use durable_links::config::{self, Config};
use durable_links::prelude::*;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Build, validate and inspect durable links.
#[derive(Parser)]
#[command(name = "durable-links")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a durable link, optionally shortening it
    Build(BuildArgs),

    /// Check whether a URL is a durable short link for the allowed hosts
    Validate {
        /// Incoming URL to check
        url: Url,
    },

    /// Print the metadata carried by a long link
    Inspect {
        /// Long link as returned by an exchange
        long_link: String,
    },
}

#[derive(Args)]
struct BuildArgs {
    /// Target link opened by the app
    #[arg(long)]
    link: Url,

    /// https prefix the link is hosted under (defaults to DURABLE_LINKS_DOMAIN_PREFIX)
    #[arg(long)]
    domain_prefix: Option<String>,

    #[arg(long, default_value_t = PathLength::Unguessable)]
    path_length: PathLength,

    #[arg(long)]
    ios_bundle_id: Option<String>,

    #[arg(long)]
    ios_fallback_url: Option<Url>,

    #[arg(long)]
    ios_app_store_id: Option<String>,

    #[arg(long)]
    ios_minimum_app_version: Option<String>,

    /// Custom URL scheme when it differs from the bundle ID (ius)
    #[arg(long)]
    ios_custom_scheme: Option<String>,

    #[arg(long)]
    ipad_fallback_url: Option<Url>,

    #[arg(long)]
    ipad_bundle_id: Option<String>,

    #[arg(long)]
    android_package: Option<String>,

    #[arg(long)]
    android_fallback_url: Option<Url>,

    #[arg(long)]
    android_minimum_version: Option<i64>,

    /// Fallback for other platforms (ofl)
    #[arg(long)]
    fallback_url: Option<Url>,

    #[arg(long)]
    utm_source: Option<String>,

    #[arg(long)]
    utm_medium: Option<String>,

    #[arg(long)]
    utm_campaign: Option<String>,

    #[arg(long)]
    utm_term: Option<String>,

    #[arg(long)]
    utm_content: Option<String>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    image_url: Option<Url>,

    /// iTunes Connect affiliate token (at)
    #[arg(long)]
    itunes_affiliate_token: Option<String>,

    /// iTunes Connect campaign token (ct)
    #[arg(long)]
    itunes_campaign_token: Option<String>,

    /// iTunes Connect provider token (pt)
    #[arg(long)]
    itunes_provider_token: Option<String>,

    /// Shorten with the in-memory store and resolve the short link back
    #[arg(long)]
    shorten: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build(args) => handle_build(args).await?,
        Commands::Validate { url } => handle_validate(&url)?,
        Commands::Inspect { long_link } => handle_inspect(&long_link)?,
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Loads configuration, with `--domain-prefix` overriding `DURABLE_LINKS_DOMAIN_PREFIX`.
fn load_config(domain_prefix: Option<&str>) -> Result<Config> {
    let config = config::load_with_domain_prefix(domain_prefix)?;

    init_tracing(&config);
    config.print_summary();
    Ok(config)
}

async fn handle_build(args: BuildArgs) -> Result<()> {
    let config = load_config(args.domain_prefix.as_deref())?;
    let prefix = config.domain_uri_prefix.clone().context(
        "A domain prefix is required: pass --domain-prefix or set DURABLE_LINKS_DOMAIN_PREFIX",
    )?;

    let components = build_components(&args, &prefix)?;
    let long_url = components
        .url()
        .context("Link components do not form a valid URL")?;

    println!("{} {}", "Long link:".bold(), long_url.as_str().cyan());

    if !args.shorten {
        return Ok(());
    }

    let store = InMemoryDelegate::new(&prefix)?;
    let links = DurableLinksSetup::global()
        .configure(config, Some(Arc::new(SpawnedDelegate::new(store))))?;

    let response = links.shorten(&components).await?;
    println!("{} {}", "Short link:".bold(), response.short_url.green());
    for warning in &response.warnings {
        println!("{} {}", "Warning:".yellow(), warning);
    }

    let short_url = Url::parse(&response.short_url).context("Short link is not a valid URL")?;
    let resolved = links.handle_durable_link(&short_url).await?;
    print_durable_link(&resolved);

    Ok(())
}

fn build_components(args: &BuildArgs, prefix: &str) -> Result<LinkComponents> {
    let mut components = LinkComponents::new(args.link.clone(), prefix)?
        .with_options(OptionsParameters::new(args.path_length));

    components.ios_parameters = IosParameters {
        bundle_id: args.ios_bundle_id.clone(),
        fallback_url: args.ios_fallback_url.clone(),
        app_store_id: args.ios_app_store_id.clone(),
        minimum_app_version: args.ios_minimum_app_version.clone(),
        custom_scheme: args.ios_custom_scheme.clone(),
        ipad_fallback_url: args.ipad_fallback_url.clone(),
        ipad_bundle_id: args.ipad_bundle_id.clone(),
    };

    let android = AndroidParameters {
        package_name: args.android_package.clone(),
        fallback_url: args.android_fallback_url.clone(),
        minimum_version: args.android_minimum_version,
    };
    if android != AndroidParameters::default() {
        components = components.with_android(android);
    }

    if let Some(ref fallback) = args.fallback_url {
        components = components.with_other_platform(OtherPlatformParameters::new(fallback.clone()));
    }

    let analytics = AnalyticsParameters {
        source: args.utm_source.clone(),
        medium: args.utm_medium.clone(),
        campaign: args.utm_campaign.clone(),
        term: args.utm_term.clone(),
        content: args.utm_content.clone(),
    };
    if analytics != AnalyticsParameters::default() {
        components = components.with_analytics(analytics);
    }

    let social = SocialMetaTagParameters {
        title: args.title.clone(),
        description_text: args.description.clone(),
        image_url: args.image_url.clone(),
    };
    if social != SocialMetaTagParameters::default() {
        components = components.with_social_meta_tags(social);
    }

    let itunes = ItunesConnectAnalyticsParameters {
        affiliate_token: args.itunes_affiliate_token.clone(),
        campaign_token: args.itunes_campaign_token.clone(),
        provider_token: args.itunes_provider_token.clone(),
    };
    if itunes != ItunesConnectAnalyticsParameters::default() {
        components = components.with_itunes_connect(itunes);
    }

    Ok(components)
}

fn handle_validate(url: &Url) -> Result<()> {
    let config = load_config(None)?;
    let links = DurableLinksSetup::global().configure(config, None)?;
    check_durable_link(&links, url)
}

fn check_durable_link(links: &DurableLinks, url: &Url) -> Result<()> {
    if links.is_valid_durable_link(url) {
        println!("{} {}", "✓".green(), url);
        Ok(())
    } else {
        println!("{} {}", "✗".red(), url);
        println!(
            "  Allowed hosts: {}",
            links.validator().allowed_hosts().join(", ")
        );
        anyhow::bail!("{} is not a durable link for the allowed hosts", url);
    }
}

fn handle_inspect(long_link: &str) -> Result<()> {
    let link = DurableLink::parse(long_link).context("Long link is not a valid URL")?;
    print_durable_link(&link);
    Ok(())
}

fn print_durable_link(link: &DurableLink) {
    println!("{}", "Durable link".bold());
    println!("  URL:          {}", link.url());

    match link.deep_link() {
        Some(deep_link) => println!("  Deep link:    {}", deep_link.as_str().cyan()),
        None => println!("  Deep link:    {}", "none".dimmed()),
    }

    if let Some(version) = link.minimum_app_version() {
        println!("  Min version:  {}", version);
    }

    if let Some(path_length) = link.path_length() {
        println!("  Path length:  {}", path_length);
    }

    for (key, value) in link.utm_parameters() {
        println!("  {:<13} {}", format!("{}:", key), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use durable_links::domain::link_encoder::query_map;

    fn build_args(extra: &[&str]) -> BuildArgs {
        let mut argv = vec![
            "durable-links",
            "build",
            "--link",
            "https://example.com/page",
        ];
        argv.extend_from_slice(extra);

        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Build(args) => args,
            _ => panic!("expected build command"),
        }
    }

    #[test]
    fn test_build_flags_cover_every_group() {
        let args = build_args(&[
            "--path-length",
            "short",
            "--ios-bundle-id",
            "com.example.ios",
            "--ios-custom-scheme",
            "exampleapp",
            "--ipad-fallback-url",
            "https://example.com/ipad",
            "--ipad-bundle-id",
            "com.example.ipad",
            "--itunes-affiliate-token",
            "aff",
            "--itunes-campaign-token",
            "camp",
            "--itunes-provider-token",
            "prov",
            "--utm-source",
            "newsletter",
        ]);
        let components = build_components(&args, "https://xyz.example").unwrap();
        let map = query_map(&components);

        assert_eq!(map["ius"], "exampleapp");
        assert_eq!(map["ipfl"], "https://example.com/ipad");
        assert_eq!(map["ipbi"], "com.example.ipad");
        assert_eq!(map["at"], "aff");
        assert_eq!(map["ct"], "camp");
        assert_eq!(map["pt"], "prov");
        assert_eq!(map["utm_source"], "newsletter");
        assert_eq!(map["pathLength"], "SHORT");
    }

    #[test]
    fn test_build_without_flags_emits_link_only() {
        let components = build_components(&build_args(&[]), "https://xyz.example").unwrap();
        let map = query_map(&components);

        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["link", "pathLength"]);
    }

    #[test]
    fn test_check_rejected_link_is_error() {
        let links = DurableLinks::new(&Config::new(vec!["xyz.example".to_string()]), None);

        let allowed = Url::parse("https://xyz.example/AbC1").unwrap();
        assert!(check_durable_link(&links, &allowed).is_ok());

        let foreign = Url::parse("https://evil.example/AbC1").unwrap();
        let err = check_durable_link(&links, &foreign).unwrap_err();
        assert_eq!(
            err.to_string(),
            "https://evil.example/AbC1 is not a durable link for the allowed hosts"
        );
    }
}
