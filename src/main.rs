use clap::Parser;
use soil_classifier::utils::logger;
use soil_classifier::{ClassifierEngine, CliConfig, SoilError};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_json);

    tracing::debug!("CLI config: {:?}", config);

    let source = match config.source() {
        Ok(source) => source,
        Err(e) => fail(e),
    };

    let mut engine = ClassifierEngine::new(source, config.format);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = engine.run(&mut out) {
        fail(e);
    }
}

fn fail(e: SoilError) -> ! {
    tracing::error!("Classification failed: {}", e);
    tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
