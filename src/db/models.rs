use chrono::{DateTime, Utc};
use num_bigint::BigInt;

/// A fan token, keyed by its denomination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fantoken {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub authority: String,
    /// Empty when minting has been disabled.
    pub minter: String,
    pub supply: BigInt,
    pub max_supply: BigInt,
    pub block_height: u64,
    pub tx_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Fields known at issuance.
#[derive(Clone, Debug)]
pub struct NewFantoken {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub authority: String,
    pub minter: String,
    pub max_supply: BigInt,
    pub block_height: u64,
    pub tx_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Fantoken {
    pub fn create(fields: NewFantoken) -> Self {
        Fantoken {
            id: fields.id,
            name: fields.name,
            symbol: fields.symbol,
            uri: fields.uri,
            authority: fields.authority,
            minter: fields.minter,
            supply: BigInt::from(0u8),
            max_supply: fields.max_supply,
            block_height: fields.block_height,
            tx_hash: fields.tx_hash,
            created_at: fields.created_at,
        }
    }

    pub fn can_mint(&self) -> bool {
        !self.minter.is_empty()
    }
}
