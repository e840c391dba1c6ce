//! Transaction messages of the `bitsong.fantoken` module, as carried in a
//! transaction body's `google.protobuf.Any`.

use super::projection::ProjectionError;
use prost::Message;
use prost_types::Any;

pub const MSG_ISSUE: &str = "/bitsong.fantoken.MsgIssue";
pub const MSG_MINT: &str = "/bitsong.fantoken.MsgMint";
pub const MSG_BURN: &str = "/bitsong.fantoken.MsgBurn";
pub const MSG_SET_MINTER: &str = "/bitsong.fantoken.MsgSetMinter";
pub const MSG_SET_AUTHORITY: &str = "/bitsong.fantoken.MsgSetAuthority";
pub const MSG_SET_URI: &str = "/bitsong.fantoken.MsgSetUri";
pub const MSG_DISABLE_MINT: &str = "/bitsong.fantoken.MsgDisableMint";

/// `cosmos.base.v1beta1.Coin`
#[derive(Clone, PartialEq, Message)]
pub struct Coin {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub amount: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct MsgIssue {
    #[prost(string, tag = "1")]
    pub symbol: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub max_supply: String,
    #[prost(string, tag = "4")]
    pub authority: String,
    #[prost(string, tag = "5")]
    pub minter: String,
    #[prost(string, tag = "6")]
    pub uri: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct MsgMint {
    #[prost(string, tag = "1")]
    pub recipient: String,
    #[prost(message, optional, tag = "2")]
    pub coin: Option<Coin>,
    #[prost(string, tag = "3")]
    pub minter: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct MsgBurn {
    #[prost(message, optional, tag = "1")]
    pub coin: Option<Coin>,
    #[prost(string, tag = "2")]
    pub sender: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct MsgSetMinter {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub old_minter: String,
    #[prost(string, tag = "3")]
    pub new_minter: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct MsgSetAuthority {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub old_authority: String,
    #[prost(string, tag = "3")]
    pub new_authority: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct MsgSetUri {
    #[prost(string, tag = "1")]
    pub authority: String,
    #[prost(string, tag = "2")]
    pub denom: String,
    #[prost(string, tag = "3")]
    pub uri: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct MsgDisableMint {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub minter: String,
}

/// Associates a message with the type URL it travels under.
pub trait TypeUrl: Message + Default + Sized {
    const TYPE_URL: &'static str;

    fn from_any(any: &Any) -> Result<Self, ProjectionError> {
        Self::decode(any.value.as_slice()).map_err(|source| ProjectionError::MalformedMessage {
            type_url: any.type_url.clone(),
            source,
        })
    }

    fn to_any(&self) -> Any {
        Any {
            type_url: Self::TYPE_URL.to_string(),
            value: self.encode_to_vec(),
        }
    }
}

macro_rules! impl_type_url {
    ($msg:ty, $url:expr) => {
        impl TypeUrl for $msg {
            const TYPE_URL: &'static str = $url;
        }
    };
}

impl_type_url!(MsgIssue, MSG_ISSUE);
impl_type_url!(MsgMint, MSG_MINT);
impl_type_url!(MsgBurn, MSG_BURN);
impl_type_url!(MsgSetMinter, MSG_SET_MINTER);
impl_type_url!(MsgSetAuthority, MSG_SET_AUTHORITY);
impl_type_url!(MsgSetUri, MSG_SET_URI);
impl_type_url!(MsgDisableMint, MSG_DISABLE_MINT);
