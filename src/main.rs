use anyhow::Context;
use clap::Parser;
use score_analyzer::utils::{logger, validation::Validate};
use score_analyzer::CliConfig;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match score_analyzer::run(&settings, &mut out) {
        Ok(outcome) => {
            tracing::info!(
                "✅ Analysis complete: {} scores, average {:.2}",
                outcome.report.count,
                outcome.report.average
            );
            for file in &outcome.written_files {
                tracing::info!("📁 Output saved to: {}/{}", settings.output_path, file);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Analysis failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            out.flush().ok();
            std::process::exit(e.severity().exit_code());
        }
    }

    out.flush().context("flushing stdout")?;
    Ok(())
}
