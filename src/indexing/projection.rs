use num_bigint::BigInt;
use std::fmt;
use thiserror::Error;

/// What a handler changed. Its `Display` is the informational log line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Projection {
    Issued { denom: String },
    Minted { denom: String, amount: BigInt },
    Burned { denom: String, amount: BigInt },
    MinterSet { denom: String, minter: String },
    AuthoritySet { denom: String, authority: String },
    UriSet { denom: String },
    MintDisabled { denom: String },
}

impl Projection {
    pub fn denom(&self) -> &str {
        match self {
            Projection::Issued { denom }
            | Projection::Minted { denom, .. }
            | Projection::Burned { denom, .. }
            | Projection::MinterSet { denom, .. }
            | Projection::AuthoritySet { denom, .. }
            | Projection::UriSet { denom }
            | Projection::MintDisabled { denom } => denom,
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Projection::Issued { denom } => write!(f, "Fantoken {} issued", denom),
            Projection::Minted { denom, amount } => {
                write!(f, "Fantoken {} {} minted", amount, denom)
            }
            Projection::Burned { denom, amount } => {
                write!(f, "Fantoken {} {} burned", amount, denom)
            }
            Projection::MinterSet { denom, minter } => {
                write!(f, "Fantoken {} minter set to {}", denom, minter)
            }
            Projection::AuthoritySet { denom, authority } => {
                write!(f, "Fantoken {} authority set to {}", denom, authority)
            }
            Projection::UriSet { denom } => write!(f, "Fantoken {} metadata set", denom),
            Projection::MintDisabled { denom } => write!(f, "Fantoken {} mint disabled", denom),
        }
    }
}

/// Why a handler left the store untouched.
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("missing attribute `{0}`")]
    MissingAttribute(&'static str),
    #[error("invalid attribute `{key}`: {value}")]
    InvalidAttribute { key: &'static str, value: String },
    #[error("cannot decode {type_url}: {source}")]
    MalformedMessage {
        type_url: String,
        source: prost::DecodeError,
    },
    #[error("message carries no coin")]
    MissingCoin,
    #[error("invalid amount `{value}` for Fantoken {denom}")]
    InvalidAmount { denom: String, value: String },
    #[error("Fantoken {denom} not found")]
    NotFound { denom: String },
    #[error("store failure for Fantoken {denom}: {source:#}")]
    Store {
        denom: String,
        source: anyhow::Error,
    },
}

pub type HandlerResult = Result<Projection, ProjectionError>;
