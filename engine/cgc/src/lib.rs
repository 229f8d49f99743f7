//! Command-line tools for the enum registry and card data.
//!
//! # Tracing
//!
//! - `RUST_LOG=cg_enums=debug`: log each lookup table as it is built.
//! - `RUST_LOG=cg_enums=trace`: also log every lookup miss.
//! - `RUST_LOG=cg_cards=debug`: log card data loading.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
