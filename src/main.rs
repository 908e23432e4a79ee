use clap::Parser;
use tracing_subscriber::EnvFilter;

use update_check::config::CheckConfig;
use update_check::version::checker::UpdateChecker;
use update_check::version::installed::default_sources;
use update_check::version::registries::pypi::PypiRegistry;

#[derive(Parser)]
#[command(name = "update-check")]
#[command(version, about = "Check whether the installed version is the latest published release")]
struct Cli {
    /// Package to check on the registry (defaults to this crate's name)
    #[arg(long)]
    package: Option<String>,

    /// Registry base URL
    #[arg(long)]
    registry_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = CheckConfig::default();
    if let Some(package) = cli.package {
        config.package = package;
    }
    if let Some(registry_url) = cli.registry_url {
        config.registry_url = registry_url;
    }

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(config));

    Ok(())
}

async fn run(config: CheckConfig) {
    let checker = UpdateChecker::build(
        PypiRegistry::new(config.registry_url),
        default_sources(),
        config.package.as_str(),
    );

    let check = checker.check_if_latest().await;

    println!("{} {}", config.package, check.current_version);
    if let (false, Some(latest)) = (check.is_latest, &check.latest_version) {
        println!(
            "A new release of {} is available: {} -> {}",
            config.package, check.current_version, latest
        );
    }
}
