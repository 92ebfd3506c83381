use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Ethereum,
    Polygon,
    Arbitrum,
}

impl Network {
    pub fn all() -> Vec<Network> {
        vec![Network::Ethereum, Network::Polygon, Network::Arbitrum]
    }

    /// Tag used in the persisted form and on the command line.
    pub fn tag(&self) -> &'static str {
        match self {
            Network::Ethereum => "ethereum",
            Network::Polygon => "polygon",
            Network::Arbitrum => "arbitrum",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Ethereum => write!(f, "Ethereum"),
            Network::Polygon => write!(f, "Polygon"),
            Network::Arbitrum => write!(f, "Arbitrum"),
        }
    }
}

impl FromStr for Network {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ethereum" => Ok(Network::Ethereum),
            "polygon" => Ok(Network::Polygon),
            "arbitrum" => Ok(Network::Arbitrum),
            _ => bail!("unknown network {}", s),
        }
    }
}

/// A saved contract reference.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ContractRecord {
    pub name: String,
    pub address: String,
    pub network: Network,
}

impl ContractRecord {
    pub fn new(name: &str, address: &str, network: Network) -> Self {
        ContractRecord {
            name: name.to_owned(),
            address: address.to_owned(),
            network,
        }
    }
}
