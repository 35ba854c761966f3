//! Configuration module for the minipas compiler
//!
//! Compile-time limits live in [`constants`]; user preferences that may be
//! adjusted per run live in [`runtime`].

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::RuntimeConfig;

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the configuration profile the binary was built with
    pub fn profile() -> &'static str {
        if cfg!(debug_assertions) {
            "development"
        } else {
            "production"
        }
    }

    /// Returns configuration source information
    pub fn source_info() -> String {
        format!(
            "{} profile, minipas_compiler {}",
            profile(),
            env!("CARGO_PKG_VERSION")
        )
    }
}
