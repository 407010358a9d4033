use env_logger::Env;

/// 初始化日志；`RUST_LOG` 优先，否则详细模式为 info，默认 warn
pub fn init(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
