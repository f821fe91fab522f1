use cement_calc::utils::logger;
use cement_calc::{CalcError, CliConfig, InteractiveShell, LinePrompter, OutputFormat};
use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 設定檔要先載入，日誌等級可能來自設定檔；空的 --config 在讀檔前就被擋下
    let profile = match config.load_profile() {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("❌ Failed to load well profile: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    };

    let format = config
        .format
        .or_else(|| profile.as_ref().and_then(|p| p.output_format()))
        .unwrap_or_default();
    let profile_level = profile.as_ref().and_then(|p| p.log_level());

    match format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose, profile_level),
        OutputFormat::Json => logger::init_json_logger(config.verbose, profile_level),
    }

    tracing::debug!("CLI config: {:?}", config);

    let mut presets = config.presets();
    if let Some(profile) = &profile {
        presets = presets.or(profile.presets());
    }

    let stdin = std::io::stdin();
    let prompter = LinePrompter::new(stdin.lock(), std::io::stdout());
    let mut shell = InteractiveShell::new(prompter)
        .with_presets(presets)
        .with_format(format);

    match shell.run() {
        Ok(breakdown) => {
            tracing::info!("slurry volume: {:.4} bbl", breakdown.total_volume_bbl);
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn exit_with(e: &CalcError) -> ! {
    tracing::error!(
        "calculation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code())
}
