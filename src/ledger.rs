//! Reads and writes auction records on contract storage.
//!
//! Each auction lives under a single key equal to its asset id. Storage
//! failures are translated into [`ContractError`] variants naming that id.

use cosmwasm_std::{Order, StdError, StdResult, Storage};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::state::{Auction, AUCTIONS, NEXT_ASSET_ID};

pub fn load(storage: &dyn Storage, asset_id: &str) -> Result<Auction, ContractError> {
    AUCTIONS
        .may_load(storage, asset_id)
        .map_err(|err| decode_error(asset_id, err))?
        .ok_or_else(|| ContractError::NotFound { asset_id: asset_id.to_string() })
}

pub fn exists(storage: &dyn Storage, asset_id: &str) -> bool {
    AUCTIONS.has(storage, asset_id)
}

/// Writes `auction` under its own asset id, replacing any prior value.
pub fn store(storage: &mut dyn Storage, auction: &Auction) -> Result<(), ContractError> {
    let asset_id = auction.asset.id.as_str();
    AUCTIONS.save(storage, asset_id, auction).map_err(|err| match err {
        StdError::SerializeErr { msg, .. } => ContractError::Encode {
            asset_id: asset_id.to_string(),
            msg,
        },
        other => ContractError::Write {
            asset_id: asset_id.to_string(),
            msg: other.to_string(),
        },
    })
}

/// Hands out the next free numeric asset id and persists the counter.
///
/// Ids already taken by caller-supplied auctions are skipped.
pub fn next_asset_id(storage: &mut dyn Storage) -> Result<String, ContractError> {
    let mut next = NEXT_ASSET_ID.may_load(storage)?.unwrap_or_default();
    let asset_id = loop {
        let candidate = next.to_string();
        next = next
            .checked_add(1)
            .ok_or_else(|| StdError::generic_err("asset id counter exhausted"))?;
        if !exists(storage, &candidate) {
            break candidate;
        }
    };
    NEXT_ASSET_ID.save(storage, &next)?;
    Ok(asset_id)
}

/// Auctions in ascending asset id order, starting after `start_after`.
pub fn range(storage: &dyn Storage, start_after: Option<&str>, limit: usize) -> StdResult<Vec<Auction>> {
    let start = start_after.map(Bound::exclusive);
    AUCTIONS
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, auction)| auction))
        .collect()
}

fn decode_error(asset_id: &str, err: StdError) -> ContractError {
    match err {
        StdError::ParseErr { msg, .. } => ContractError::Decode {
            asset_id: asset_id.to_string(),
            msg,
        },
        other => other.into(),
    }
}
