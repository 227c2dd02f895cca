//! `newscred config` – show where settings come from.

use anyhow::Result;
use newscred_core::config::{self, ConfigError, NewsCredConfig};
use newscred_core::endpoint::Endpoint;
use std::fmt::Write;
use std::path::Path;

/// Prints the config path and mode first, then the endpoint or the reason it
/// could not be resolved. A resolution failure is still returned as an error.
pub fn run_config(cfg: &NewsCredConfig, endpoint: Result<Endpoint, ConfigError>) -> Result<()> {
    let path = config::config_path()?;
    print!("{}", describe(cfg, &path, &endpoint));
    endpoint?;
    Ok(())
}

fn describe(cfg: &NewsCredConfig, path: &Path, endpoint: &Result<Endpoint, ConfigError>) -> String {
    let timeout = |secs: Option<u64>| {
        secs.map(|s| format!("{s}s"))
            .unwrap_or_else(|| "-".to_string())
    };
    let mut out = String::new();
    let _ = writeln!(out, "{:<16} {}", "config file", path.display());
    let _ = writeln!(out, "{:<16} {}", "mode", format!("{:?}", cfg.mode).to_lowercase());
    match endpoint {
        Ok(ep) => {
            let _ = writeln!(out, "{:<16} {}", "api base", ep.base());
            let _ = writeln!(out, "{:<16} {}", "analyze route", ep.analyze_url());
        }
        Err(e) => {
            let _ = writeln!(out, "{:<16} unresolved ({e})", "api base");
        }
    }
    let _ = writeln!(out, "{:<16} {}", "timeout", timeout(cfg.timeout_secs));
    let _ = writeln!(out, "{:<16} {}", "connect timeout", timeout(cfg.connect_timeout_secs));
    out
}
