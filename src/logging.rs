use tracing::Level;

/// Install the global tracing subscriber
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}
