use super::attributes::{Attribute, EventAttributes};
use super::msgs::TypeUrl;
use super::projection::ProjectionError;
use chrono::{DateTime, Utc};
use prost_types::Any;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockHeader {
    pub height: u64,
    pub time: DateTime<Utc>,
}

/// An event together with the message of the transaction that emitted it.
#[derive(Clone, Debug, PartialEq)]
pub struct CosmosEvent<M> {
    pub event: Event,
    pub msg: M,
    pub block: BlockHeader,
    pub tx_hash: String,
}

/// An event whose message is still protobuf encoded.
pub type RawEvent = CosmosEvent<Any>;

impl<M> CosmosEvent<M> {
    pub fn attributes(&self) -> EventAttributes {
        EventAttributes::parse(&self.event.attributes)
    }
}

impl RawEvent {
    pub fn msg_type(&self) -> &str {
        &self.msg.type_url
    }

    pub fn decode<M: TypeUrl>(&self) -> Result<CosmosEvent<M>, ProjectionError> {
        Ok(CosmosEvent {
            event: self.event.clone(),
            msg: M::from_any(&self.msg)?,
            block: self.block,
            tx_hash: self.tx_hash.clone(),
        })
    }
}
