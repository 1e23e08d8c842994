use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Install the stderr subscriber once per process.
///
/// `RUST_LOG` wins when set; otherwise `verbose` chooses between debug and
/// info for this crate.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.get_or_init(|| {
        let default_level = if verbose { "sortbench=debug" } else { "sortbench=info" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        // A test harness may already have installed a global subscriber
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init();
    });
}
