use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs the `env_logger` backend once. `RUST_LOG` overrides the default levels.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("chained_hash_table", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // Tests and embedding binaries may have installed a logger already.
        let _ = builder.try_init();
    });
}

#[cfg(test)]
mod tests {
    use log::{debug, info};

    use super::*;

    #[test]
    fn initialize_is_repeatable() {
        initialize_logger();
        initialize_logger();
        debug!("debug after init");
        info!("info after init");
    }
}
