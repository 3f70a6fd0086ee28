// installs the process-wide tracing subscriber; the engine itself only emits
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // plain output, callers redirect stderr to files or collectors.
        .with_ansi(false)
        .without_time()
        .json()
        .with_writer(std::io::stderr)
        .init();
}
