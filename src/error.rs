use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Cannot resolve organization for sender {sender}")]
    IdentityResolution { sender: String },

    #[error("Auction {asset_id} does not exist")]
    NotFound { asset_id: String },

    #[error("Auction {asset_id} cannot be decoded: {msg}")]
    Decode { asset_id: String, msg: String },

    #[error("Auction {asset_id} cannot be encoded: {msg}")]
    Encode { asset_id: String, msg: String },

    #[error("Auction {asset_id} cannot be written: {msg}")]
    Write { asset_id: String, msg: String },

    #[error("Auction {asset_id} already exists")]
    AlreadyExists { asset_id: String },

    #[error("Asset id must not be empty")]
    InvalidAssetId {},

    #[error("Auction {asset_id} is closed")]
    AuctionClosed { asset_id: String },

    #[error("Invalid bid on {asset_id}: amount {amount} must be positive")]
    InvalidBid { asset_id: String, amount: i64 },

    #[error("{organization} already submitted a bid on {asset_id}")]
    DuplicateBid { asset_id: String, organization: String },

    #[error("{organization} is not allowed to close auction {asset_id}")]
    Unauthorized { asset_id: String, organization: String },

    #[error("No bids on {asset_id}, auction remains open")]
    NoBids { asset_id: String },

    #[error("Only the admin can register members")]
    AdminOnly {},

    #[error("Organization must not be empty")]
    InvalidOrganization {},
}

impl From<ContractError> for StdError {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::Std(err) => err,
            other => StdError::generic_err(other.to_string()),
        }
    }
}
