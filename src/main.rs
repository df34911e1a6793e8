use clap::Parser;

use credseed::catalogue::Catalogue;
use credseed::config::Config;
use credseed::driver;
use credseed::issuers::Issuer;
use credseed::names::RandomNameSource;
use credseed::pdf::Renderer;
use credseed::schema::BaseSchema;

/// Generates mock credential records and PDF certificates for the fixed
/// learner/course catalogue of each supported issuer.
#[derive(Parser, Debug)]
#[command(name = "credseed", version, about)]
struct Cli {
    /// Issuer to generate certificates for; all issuers when omitted.
    #[arg(value_enum)]
    issuer: Option<Issuer>,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "credseed=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    if config.catalogue_file.is_some() && cli.issuer.is_none() {
        return Err("CATALOGUE_FILE requires selecting a single issuer".into());
    }

    let schema = BaseSchema::load(&config.schema_file)?;
    let renderer = Renderer::new()?;
    let mut names = match config.name_seed {
        Some(seed) => RandomNameSource::seeded(seed),
        None => RandomNameSource::new(),
    };

    let issuers: Vec<Issuer> = match cli.issuer {
        Some(issuer) => vec![issuer],
        None => Issuer::all().to_vec(),
    };

    let mut total = 0;
    for issuer in issuers {
        let catalogue = match &config.catalogue_file {
            Some(path) => Catalogue::load(path)?,
            None => Catalogue::builtin(issuer),
        };
        let generated =
            driver::run_batch(issuer, &catalogue, &schema, &renderer, &config, &mut names)?;
        total += generated.len();
    }

    tracing::info!("Total certificates created: {}", total);
    Ok(())
}
