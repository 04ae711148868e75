use env_logger::{Builder, Env};
use log::error;

fn init_logger() {
    // Level comes from RUST_LOG, defaulting to info.
    // Example: RUST_LOG=debug ./tm2snip <src> <dst>
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = tm2snip::cli::run() {
        error!("{:?}", e);
        std::process::exit(1);
    }
}
