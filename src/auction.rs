//! Transition logic of a first-price auction.
//!
//! Everything here works on an in-memory [`Auction`] and never touches
//! storage. A transition either returns an error and leaves the record
//! untouched, or applies its change completely.

use std::collections::BTreeMap;

use cosmwasm_std::StdError;

use crate::error::ContractError;
use crate::state::{Asset, Auction, AuctionStatus, ClosePolicy};

/// Stored in `winning_price` until a winner is declared.
pub const NO_WINNING_PRICE: i64 = -1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinningBid {
    pub organization: String,
    pub amount: u64,
}

impl Auction {
    pub fn new(asset_id: impl Into<String>, owner: impl Into<String>, description: Option<String>) -> Self {
        Auction {
            asset: Asset {
                id: asset_id.into(),
                owner: owner.into(),
                description,
            },
            status: AuctionStatus::Active,
            bids: BTreeMap::new(),
            winner: String::new(),
            winning_price: NO_WINNING_PRICE,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == AuctionStatus::Finished
    }

    /// Records a bid of `amount` for `organization`.
    ///
    /// Checks run in a fixed order and the first failing one is reported:
    /// closed auction, non-positive amount, repeated bidder.
    pub fn submit_bid(&mut self, organization: &str, amount: i64) -> Result<u64, ContractError> {
        if self.is_finished() {
            return Err(ContractError::AuctionClosed { asset_id: self.asset.id.clone() });
        }

        let value = u64::try_from(amount)
            .ok()
            .filter(|value| *value > 0)
            .ok_or_else(|| ContractError::InvalidBid {
                asset_id: self.asset.id.clone(),
                amount,
            })?;

        if self.bids.contains_key(organization) {
            return Err(ContractError::DuplicateBid {
                asset_id: self.asset.id.clone(),
                organization: organization.to_string(),
            });
        }

        self.bids.insert(organization.to_string(), value);
        Ok(value)
    }

    /// Highest bid, ties going to the lowest organization identifier.
    pub fn highest_bid(&self) -> Option<(&str, u64)> {
        // bids iterate in ascending key order, so only a strictly greater
        // amount may replace the current leader
        self.bids
            .iter()
            .fold(None, |leader, (organization, &amount)| match leader {
                Some((_, top)) if top >= amount => leader,
                _ => Some((organization.as_str(), amount)),
            })
    }

    /// Closes the auction in favour of the highest bidder and hands the asset
    /// over to them.
    pub fn declare_winner(&mut self, caller: &str, policy: ClosePolicy) -> Result<WinningBid, ContractError> {
        if self.is_finished() {
            return Err(ContractError::AuctionClosed { asset_id: self.asset.id.clone() });
        }

        if policy == ClosePolicy::OwnerOnly && caller != self.asset.owner {
            return Err(ContractError::Unauthorized {
                asset_id: self.asset.id.clone(),
                organization: caller.to_string(),
            });
        }

        let (organization, amount) = self
            .highest_bid()
            .map(|(organization, amount)| (organization.to_string(), amount))
            .ok_or_else(|| ContractError::NoBids { asset_id: self.asset.id.clone() })?;
        let winning_price = i64::try_from(amount)
            .map_err(|_| StdError::generic_err(format!("winning price {} out of range", amount)))?;

        self.winner = organization.clone();
        self.winning_price = winning_price;
        self.status = AuctionStatus::Finished;
        self.asset.owner = organization.clone();

        Ok(WinningBid { organization, amount })
    }
}
