use std::io;

use clap::Parser;
use eyre::Result;

use hepa_form::cli::Cli;
use hepa_form::form::Form;
use hepa_form::session;
use hepa_scorer::service::PredictionService;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so they never interleave with the form on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let service = PredictionService::from_model_dir(&cli.model_dir, cli.log_policy)?;
    tracing::info!(
        model_dir = %cli.model_dir.display(),
        log_policy = %cli.log_policy,
        show_features = cli.show_features,
        "form ready"
    );

    let stdin = io::stdin();
    let mut form = Form::new(stdin.lock(), io::stdout());
    session::run(&mut form, &service, cli.show_features)?;

    Ok(())
}
