//! Command-line flags for the `kassa` binary.

use clap::Parser;
use std::path::{Path, PathBuf};

/// kassa: turns a file of free-text order lines into a receipt.
///
/// Each line is matched against the product catalog by name. Lines containing
/// "remove" or "delete" drop the named item; lines that match nothing are
/// listed as not found.
///
/// Flags override values from the settings file and KASSA_* environment
/// variables.
#[derive(Debug, Parser, Clone, Default)]
#[command(name = "kassa", version)]
pub struct Args {
    /// Settings file (TOML). When omitted, ./kassa.toml is used if present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// File with one order per line.
    #[arg(long)]
    orders: Option<PathBuf>,

    /// Where to write the receipt.
    #[arg(long)]
    receipt: Option<PathBuf>,

    /// JSON array of products to use instead of the built-in catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

impl Args {
    pub fn new(
        config: Option<PathBuf>,
        orders: Option<PathBuf>,
        receipt: Option<PathBuf>,
        catalog: Option<PathBuf>,
    ) -> Self {
        Self {
            config,
            orders,
            receipt,
            catalog,
        }
    }

    pub fn config(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    pub fn orders(&self) -> Option<&Path> {
        self.orders.as_deref()
    }

    pub fn receipt(&self) -> Option<&Path> {
        self.receipt.as_deref()
    }

    pub fn catalog(&self) -> Option<&Path> {
        self.catalog.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from([
            "kassa",
            "--orders",
            "in.txt",
            "--receipt",
            "out.txt",
            "--catalog",
            "goods.json",
        ]);
        assert_eq!(args.orders(), Some(Path::new("in.txt")));
        assert_eq!(args.receipt(), Some(Path::new("out.txt")));
        assert_eq!(args.catalog(), Some(Path::new("goods.json")));
        assert!(args.config().is_none());
    }

    #[test]
    fn test_no_flags() {
        let args = Args::parse_from(["kassa"]);
        assert!(args.orders().is_none());
        assert!(args.receipt().is_none());
    }
}
