//! Platform routing values for the League of Legends APIs.
//!
//! Every platform is served from its own host:
//! `https://{platform}.api.riotgames.com`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ApiError;

/// Platform region a request is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Brazil
    BR1,
    /// Europe Nordic & East
    EUN1,
    /// Europe West
    #[default]
    EUW1,
    /// Japan
    JP1,
    /// Korea
    KR,
    /// Latin America North
    LA1,
    /// Latin America South
    LA2,
    /// North America
    NA1,
    /// Oceania
    OC1,
    /// Turkey
    TR1,
    /// Russia
    RU,
    /// Public beta environment
    PBE1,
}

impl Region {
    pub const ALL: [Self; 12] = [
        Self::BR1,
        Self::EUN1,
        Self::EUW1,
        Self::JP1,
        Self::KR,
        Self::LA1,
        Self::LA2,
        Self::NA1,
        Self::OC1,
        Self::TR1,
        Self::RU,
        Self::PBE1,
    ];

    /// Platform id as used in hostnames (`euw1`, `kr`, ...).
    pub fn platform_id(&self) -> &'static str {
        match self {
            Self::BR1 => "br1",
            Self::EUN1 => "eun1",
            Self::EUW1 => "euw1",
            Self::JP1 => "jp1",
            Self::KR => "kr",
            Self::LA1 => "la1",
            Self::LA2 => "la2",
            Self::NA1 => "na1",
            Self::OC1 => "oc1",
            Self::TR1 => "tr1",
            Self::RU => "ru",
            Self::PBE1 => "pbe1",
        }
    }

    pub fn host(&self) -> String {
        format!("{}.api.riotgames.com", self.platform_id())
    }

    /// HTTPS base URL for this region.
    ///
    /// Used by [`ClientConfig::endpoint_base()`](crate::ClientConfig::endpoint_base)
    /// unless a base URL override is configured.
    pub fn base_url(&self) -> String {
        format!("https://{}", self.host())
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.platform_id())
    }
}

impl FromStr for Region {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let region = match s.trim().to_ascii_lowercase().as_str() {
            "br1" | "br" => Self::BR1,
            "eun1" | "eune" => Self::EUN1,
            "euw1" | "euw" => Self::EUW1,
            "jp1" | "jp" => Self::JP1,
            "kr" => Self::KR,
            "la1" | "lan" => Self::LA1,
            "la2" | "las" => Self::LA2,
            "na1" | "na" => Self::NA1,
            "oc1" | "oce" => Self::OC1,
            "tr1" | "tr" => Self::TR1,
            "ru" => Self::RU,
            "pbe1" | "pbe" => Self::PBE1,
            _ => return Err(ApiError::InvalidRegion(s.to_string())),
        };
        Ok(region)
    }
}
