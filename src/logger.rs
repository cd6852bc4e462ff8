//! tracing 日志初始化

use tracing_subscriber::EnvFilter;

/// 初始化全局日志
///
/// 优先读取 `RUST_LOG`，否则默认 `info`。重复调用不会报错（测试中会多次调用）。
pub fn init() {
    init_with_verbose(false);
}

/// 初始化全局日志，`verbose` 为 true 时默认级别为 `debug`
pub fn init_with_verbose(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
