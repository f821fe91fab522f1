use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` 優先；其次 `--verbose`；最後才使用設定檔的 `logging.level`。
fn build_filter(verbose: bool, profile_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("cement_calc=debug,info")
        } else if let Some(level) = profile_level {
            EnvFilter::new(format!("cement_calc={}", level))
        } else {
            EnvFilter::new("cement_calc=warn")
        }
    })
}

/// 初始化 CLI 日誌。輸出到 stderr，避免與提示及結果混在 stdout。
pub fn init_cli_logger(verbose: bool, profile_level: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, profile_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// `--format json` 時日誌也用 JSON，方便與結果一起交給其他工具
pub fn init_json_logger(verbose: bool, profile_level: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, profile_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
