use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Clone, Deserialize)]
pub struct PoolCfg {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SwapCfg {
    pub recipient: String,
    #[serde(default = "default_deadline_grace_secs")]
    pub deadline_grace_secs: i64,
}

fn default_deadline_grace_secs() -> i64 {
    30
}

/// Spending-authorization policy toward the ledger and the router.
///
/// `Infinite` grants a standing u128::MAX allowance once at construction and
/// never renews it; `PerCall` grants the exact amount before each spending
/// call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalMode {
    Infinite,
    PerCall,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApprovalCfg {
    #[serde(default = "default_approval_mode")]
    pub mode: ApprovalMode,
}

fn default_approval_mode() -> ApprovalMode {
    ApprovalMode::Infinite
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdapterConfig {
    pub pool: PoolCfg,
    pub swap: SwapCfg,
    pub approvals: ApprovalCfg,
}

impl AdapterConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = fs::read_to_string(path.as_ref())?;
        let cfg: Self = toml::from_str(&s).context("parse adapter config")?;
        Ok(cfg)
    }
}
