use std::io::Stderr;
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化日誌；RUST_LOG 優先，否則依 verbose 決定層級
pub fn init_logger(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let registry = tracing_subscriber::registry().with(filter);

    // stdout 留給指令輸出
    if json {
        registry.with(base_layer().json()).init();
    } else {
        registry.with(base_layer().compact()).init();
    }
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "hero_tour=debug,info"
    } else {
        "hero_tour=info"
    }
}

fn base_layer<S>() -> fmt::Layer<S, DefaultFields, Format, fn() -> Stderr> {
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr as fn() -> Stderr)
}
