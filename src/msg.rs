use cosmwasm_schema::{cw_serde, QueryResponses};

use crate::state::{Auction, ClosePolicy, Config};

#[cw_serde]
pub struct Member {
    pub address: String,
    pub organization: String,
}

#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to the instantiating sender.
    pub admin: Option<String>,
    pub close_policy: ClosePolicy,
    pub members: Vec<Member>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Opens an auction owned by the sender's organization. Without an
    /// `asset_id` the next numeric id is assigned.
    CreateAuction {
        asset_id: Option<String>,
        description: Option<String>,
    },
    SubmitBid {
        asset_id: String,
        amount: i64,
    },
    DeclareWinner {
        asset_id: String,
    },
    RegisterMember {
        address: String,
        organization: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(AuctionResponse)]
    Auction { asset_id: String },
    #[returns(AuctionsResponse)]
    Auctions {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(MemberResponse)]
    Member { address: String },
}

#[cw_serde]
pub struct CreateAuctionResponse {
    pub asset_id: String,
}

#[cw_serde]
pub struct ConfigResponse {
    pub config: Config,
}

#[cw_serde]
pub struct AuctionResponse {
    pub auction: Auction,
}

#[cw_serde]
pub struct AuctionsResponse {
    pub auctions: Vec<Auction>,
}

#[cw_serde]
pub struct MemberResponse {
    pub organization: Option<String>,
}
