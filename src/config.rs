//! Environment-sourced configuration.

use std::env;

use crate::cli::{Cli, StoreKind};

pub const ADMIN_USER_VAR: &str = "ADMIN_USER";
pub const ADMIN_PASS_VAR: &str = "ADMIN_PASS";
pub const API_KEY_VAR: &str = "AIRTABLE_API_KEY";
pub const BASE_ID_VAR: &str = "AIRTABLE_BASE_ID";

/// Expected administrator credentials. Either half may be unset, which the
/// login endpoint reports as a deployment error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads both values through `lookup`; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.is_empty());
        Self {
            username: read(ADMIN_USER_VAR),
            password: read(ADMIN_PASS_VAR),
        }
    }

    /// Both halves, if both are configured.
    pub fn pair(&self) -> Option<(&str, &str)> {
        Some((self.username.as_deref()?, self.password.as_deref()?))
    }
}

/// Where the configuration table lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSettings {
    Memory,
    Airtable {
        endpoint: String,
        base_id: String,
        table: String,
        api_key: String,
    },
}

impl StoreSettings {
    /// Resolves store settings from CLI flags, falling back to the environment
    /// for the base id and always taking the API key from it.
    pub fn resolve(cli: &Cli, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        match cli.store {
            StoreKind::Memory => Ok(Self::Memory),
            StoreKind::Airtable => {
                let read = |key: &str| lookup(key).filter(|value| !value.is_empty());
                let base_id = cli
                    .base_id
                    .clone()
                    .or_else(|| read(BASE_ID_VAR))
                    .ok_or_else(|| format!("missing --base-id or {}", BASE_ID_VAR))?;
                let api_key = read(API_KEY_VAR).ok_or_else(|| format!("missing {}", API_KEY_VAR))?;
                Ok(Self::Airtable {
                    endpoint: cli.airtable_url.clone(),
                    base_id,
                    table: cli.table.clone(),
                    api_key,
                })
            }
        }
    }
}
