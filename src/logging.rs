//! Logger setup for the binary and tests.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Modules whose chatter is capped at `warn` unless `RUST_LOG` says otherwise.
const NOISY_MODULES: &[&str] = &["bevy", "wgpu", "naga"];

/// Initializes the global logger.
///
/// When `verbose` is `true`, script debug output such as state transitions is
/// printed. Otherwise only info level and above are shown. `RUST_LOG`
/// overrides both.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::new();
    for module in NOISY_MODULES {
        builder.filter_module(module, LevelFilter::Warn);
    }
    builder.parse_env(env);

    // `try_init` only fails if a logger was already set. Ignore that case so
    // tests can call `init` multiple times without panicking.
    let _ = builder.try_init();
}
