//! Command-line interface configuration.

use argh::FromArgs;
use std::{net::SocketAddr, str::FromStr};

/// Configuration and admin login endpoints for the prize wheel
#[derive(Debug, FromArgs)]
pub struct Cli {
    /// server bind address (default: '127.0.0.1:8000')
    #[argh(option, default = "SocketAddr::from(([127, 0, 0, 1], 8000))")]
    pub bind: SocketAddr,

    /// path prefix for the endpoints (default: '/.netlify/functions')
    #[argh(option, long = "api-path", default = "String::from(\"/.netlify/functions\")")]
    pub api_path: String,

    /// record store backend: 'airtable' or 'memory' (default: 'airtable')
    #[argh(option, default = "StoreKind::Airtable")]
    pub store: StoreKind,

    /// airtable API endpoint (default: 'https://api.airtable.com/v0')
    #[argh(
        option,
        long = "airtable-url",
        default = "String::from(\"https://api.airtable.com/v0\")"
    )]
    pub airtable_url: String,

    /// airtable base id (falls back to AIRTABLE_BASE_ID)
    #[argh(option, long = "base-id")]
    pub base_id: Option<String>,

    /// configuration table name (default: 'Configuraciones')
    #[argh(option, default = "String::from(\"Configuraciones\")")]
    pub table: String,
}

/// Record store backends selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Airtable,
    Memory,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "airtable" => Ok(Self::Airtable),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown store '{}', expected 'airtable' or 'memory'", other)),
        }
    }
}
