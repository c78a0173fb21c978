use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ssr_manifest::deploy::{DEFAULT_EDGE_BUNDLE_DIR, DEFAULT_SSR_BUNDLE_DIR, DeployContext};
use ssr_manifest::manifest::store::{list_public_files, to_json_string};
use ssr_manifest::manifest::{ManifestAssembler, read_manifest, read_pages_manifest, write_manifest};
use ssr_manifest::{MatchOrder, OriginClassifier, Router, RouterOptions};

#[derive(Debug, Parser)]
#[command(name = "ssr-manifest", version, about = "Build and query SSR route manifests")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify a build's routes and public files into a manifest.
    Assemble {
        /// Application root containing `.next/serverless` and `public`.
        #[arg(long, default_value = ".")]
        source: PathBuf,
        /// Write here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Keep dynamic routes in build order instead of most-specific first.
        #[arg(long)]
        defined_first: bool,
    },
    /// Resolve a request URI to the page invocation a rendering function runs.
    Resolve {
        #[arg(long)]
        manifest: PathBuf,
        uri: String,
    },
    /// Decide which origin the edge forwards a request URI to.
    Classify {
        #[arg(long)]
        manifest: PathBuf,
        uri: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ssr_manifest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match Cli::parse().command {
        Command::Assemble {
            source,
            out,
            defined_first,
        } => {
            let ctx = DeployContext::new(source, DEFAULT_SSR_BUNDLE_DIR, DEFAULT_EDGE_BUNDLE_DIR);
            let pages = read_pages_manifest(&ctx.pages_manifest())?;
            let public_files = list_public_files(&ctx.public_dir())?;
            let options = RouterOptions::builder()
                .match_order(if defined_first {
                    MatchOrder::DefinedFirst
                } else {
                    MatchOrder::SpecificFirst
                })
                .build()?;
            let manifest =
                ManifestAssembler::new(options).assemble(&pages, public_files.as_slice())?;
            match out {
                Some(path) => {
                    write_manifest(&path, &manifest)?;
                    tracing::info!(
                        path = %path.display(),
                        routes = manifest.route_count(),
                        "manifest written"
                    );
                }
                None => print!("{}", to_json_string(&manifest)?),
            }
        }
        Command::Resolve { manifest, uri } => {
            let router = Router::load(&manifest, RouterOptions::default())
                .with_context(|| format!("failed to load {}", manifest.display()))?;
            let invocation = router.resolve(&uri)?;
            println!("{}", serde_json::to_string_pretty(&invocation)?);
        }
        Command::Classify { manifest, uri } => {
            let loaded = read_manifest(&manifest)?;
            let classifier = OriginClassifier::from_manifest(&loaded)?;
            println!("{}", serde_json::to_string_pretty(&classifier.classify(&uri))?);
        }
    }
    Ok(())
}
