//! Stderr-only logging setup. UCI reserves stdout for protocol output, so
//! diagnostics (malformed FEN, rejected options, skipped moves) go to
//! stderr via the `log` facade instead.

#[cfg(feature = "logging")]
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();
}

#[cfg(not(feature = "logging"))]
pub fn init() {}
