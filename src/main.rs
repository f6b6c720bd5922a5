use clap::{CommandFactory, Parser};
use clap_complete::generate;
use clarity_mock::cli::{Cli, Commands, Verbosity};
use clarity_mock::config::Config;
use clarity_mock::ui::formatter::Formatter;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn initialize_tracing(verbosity: Verbosity) {
    let log_level = verbosity.to_log_level();
    let fallback_filter = format!("clarity_mock={}", log_level);

    let use_json = std::env::var("CLARITY_MOCK_JSON").is_ok();

    if use_json {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| fallback_filter.clone().into()),
            )
            .with(json_layer)
            .init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| fallback_filter.into()),
            )
            .with(fmt_layer)
            .init();
    }
}

fn main() -> miette::Result<()> {
    Formatter::configure_colors_from_env();

    let cli = Cli::parse();
    let verbosity = cli.verbosity();
    Formatter::set_verbosity(verbosity.level());

    initialize_tracing(verbosity);

    let config = Config::load_or_default();

    let result = match cli.command {
        Commands::Call(args) => clarity_mock::cli::commands::call(args, &config),
        Commands::Validate(args) => clarity_mock::cli::commands::validate(args, &config),
        Commands::Scenario(args) => clarity_mock::scenario::run_scenario(args),
        Commands::Completions(args) => {
            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "clarity-mock", &mut io::stdout());
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("{}", Formatter::error(format!("Error: {err}")));
        return Err(err);
    }
    Ok(())
}
