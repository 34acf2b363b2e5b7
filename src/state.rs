use std::collections::BTreeMap;

use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Who may close an auction by declaring its winner.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClosePolicy {
    /// Only the organization currently owning the asset.
    OwnerOnly,
    /// Any registered organization.
    AnyOrganization,
}

impl ClosePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClosePolicy::OwnerOnly => "owner_only",
            ClosePolicy::AnyOrganization => "any_organization",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Config {
    pub admin: Addr,
    pub close_policy: ClosePolicy,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuctionStatus {
    Active,
    Finished,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Asset {
    pub id: String,
    pub owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Full lifecycle record of one asset, stored as a single ledger entry
/// keyed by the asset id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Auction {
    pub asset: Asset,
    pub status: AuctionStatus,
    pub bids: BTreeMap<String, u64>,
    pub winner: String,
    #[serde(rename = "winningPrice")]
    pub winning_price: i64,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const MEMBERS: Map<&Addr, String> = Map::new("members");
pub const AUCTIONS: Map<&str, Auction> = Map::new("auctions");
pub const NEXT_ASSET_ID: Item<u64> = Item::new("next_asset_id");
