use super::event::{CosmosEvent, RawEvent};
use super::msgs::{
    Coin, MsgBurn, MsgDisableMint, MsgIssue, MsgMint, MsgSetAuthority, MsgSetMinter, MsgSetUri,
};
use super::projection::{HandlerResult, Projection, ProjectionError};
use super::routes::{EventKind, RouteError, RouteTable, FANTOKEN_ROUTES};
use crate::db::models::{Fantoken, NewFantoken};
use crate::db::persister::FantokenStore;
use log::{debug, error, info};
use num_bigint::{BigInt, BigUint, Sign};
use std::str::FromStr;

/// Projects fantoken module events onto `Fantoken` rows, one event at a time.
///
/// Every handler performs at most one read and one write against the store.
/// Events are not deduplicated: delivering the same mint or burn twice
/// applies it twice.
pub struct Projector<S> {
    routes: RouteTable,
    store: S,
}

impl<S: FantokenStore> Projector<S> {
    pub fn new(routes: RouteTable, store: S) -> Self {
        Projector { routes, store }
    }

    pub fn with_fantoken_routes(store: S) -> Result<Self, RouteError> {
        Ok(Projector::new(RouteTable::new(&FANTOKEN_ROUTES)?, store))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Routes the event to its handler and logs the outcome. Failures never
    /// leave this function; `None` means the store was not touched.
    pub async fn project(&mut self, event: &RawEvent) -> Option<Projection> {
        let kind = match self.routes.resolve(&event.event.kind, event.msg_type()) {
            Some(kind) => kind,
            None => {
                debug!(
                    "No handler for {} <- {}",
                    event.event.kind,
                    event.msg_type()
                );
                return None;
            }
        };
        let outcome = self.dispatch(kind, event).await;
        report(kind, outcome)
    }

    async fn dispatch(&mut self, kind: EventKind, event: &RawEvent) -> HandlerResult {
        match kind {
            EventKind::Issue => self.handle_issue(&event.decode()?).await,
            EventKind::Mint => self.handle_mint(&event.decode()?).await,
            EventKind::Burn => self.handle_burn(&event.decode()?).await,
            EventKind::SetMinter => self.handle_set_minter(&event.decode()?).await,
            EventKind::SetAuthority => self.handle_set_authority(&event.decode()?).await,
            EventKind::SetUri => self.handle_set_uri(&event.decode()?).await,
            EventKind::DisableMint => self.handle_disable_mint(&event.decode()?).await,
        }
    }

    pub async fn handle_issue(&mut self, event: &CosmosEvent<MsgIssue>) -> HandlerResult {
        let denom = event.attributes().denom()?;
        let msg = &event.msg;
        // An unset max supply decodes to an empty string and counts as zero.
        let max_supply = if msg.max_supply.is_empty() {
            BigInt::from(0u8)
        } else {
            parse_amount(&denom, &msg.max_supply)?
        };
        let fantoken = Fantoken::create(NewFantoken {
            id: denom.clone(),
            name: msg.name.clone(),
            symbol: msg.symbol.clone(),
            uri: msg.uri.clone(),
            authority: msg.authority.clone(),
            minter: msg.minter.clone(),
            max_supply,
            block_height: event.block.height,
            tx_hash: event.tx_hash.clone(),
            created_at: event.block.time,
        });
        self.persist(&fantoken).await?;
        Ok(Projection::Issued { denom })
    }

    pub async fn handle_mint(&mut self, event: &CosmosEvent<MsgMint>) -> HandlerResult {
        let coin = event.msg.coin.as_ref().ok_or(ProjectionError::MissingCoin)?;
        let (mut fantoken, amount) = self.load_with_amount(coin).await?;
        fantoken.supply += &amount;
        self.persist(&fantoken).await?;
        Ok(Projection::Minted {
            denom: fantoken.id,
            amount,
        })
    }

    pub async fn handle_burn(&mut self, event: &CosmosEvent<MsgBurn>) -> HandlerResult {
        let coin = event.msg.coin.as_ref().ok_or(ProjectionError::MissingCoin)?;
        let (mut fantoken, amount) = self.load_with_amount(coin).await?;
        // No floor: a negative supply is recorded as the chain reports it.
        fantoken.supply -= &amount;
        self.persist(&fantoken).await?;
        Ok(Projection::Burned {
            denom: fantoken.id,
            amount,
        })
    }

    pub async fn handle_set_minter(&mut self, event: &CosmosEvent<MsgSetMinter>) -> HandlerResult {
        let denom = event.attributes().denom()?;
        let mut fantoken = self.load(&denom).await?;
        fantoken.minter = event.msg.new_minter.clone();
        self.persist(&fantoken).await?;
        Ok(Projection::MinterSet {
            denom,
            minter: fantoken.minter,
        })
    }

    pub async fn handle_set_authority(
        &mut self,
        event: &CosmosEvent<MsgSetAuthority>,
    ) -> HandlerResult {
        let denom = event.attributes().denom()?;
        let mut fantoken = self.load(&denom).await?;
        fantoken.authority = event.msg.new_authority.clone();
        self.persist(&fantoken).await?;
        Ok(Projection::AuthoritySet {
            denom,
            authority: fantoken.authority,
        })
    }

    /// Keyed by the message's denom; the event attributes are not consulted.
    pub async fn handle_set_uri(&mut self, event: &CosmosEvent<MsgSetUri>) -> HandlerResult {
        let denom = event.msg.denom.clone();
        let mut fantoken = self.load(&denom).await?;
        fantoken.uri = event.msg.uri.clone();
        self.persist(&fantoken).await?;
        Ok(Projection::UriSet { denom })
    }

    pub async fn handle_disable_mint(
        &mut self,
        event: &CosmosEvent<MsgDisableMint>,
    ) -> HandlerResult {
        let denom = event.attributes().denom()?;
        let mut fantoken = self.load(&denom).await?;
        fantoken.minter = String::new();
        self.persist(&fantoken).await?;
        Ok(Projection::MintDisabled { denom })
    }

    async fn load(&self, denom: &str) -> Result<Fantoken, ProjectionError> {
        match self.store.get(denom).await {
            Ok(Some(fantoken)) => Ok(fantoken),
            Ok(None) => Err(ProjectionError::NotFound {
                denom: denom.to_string(),
            }),
            Err(source) => Err(ProjectionError::Store {
                denom: denom.to_string(),
                source,
            }),
        }
    }

    async fn load_with_amount(&self, coin: &Coin) -> Result<(Fantoken, BigInt), ProjectionError> {
        let fantoken = self.load(&coin.denom).await?;
        let amount = parse_amount(&coin.denom, &coin.amount)?;
        Ok((fantoken, amount))
    }

    async fn persist(&mut self, fantoken: &Fantoken) -> Result<(), ProjectionError> {
        self.store
            .save(fantoken)
            .await
            .map_err(|source| ProjectionError::Store {
                denom: fantoken.id.clone(),
                source,
            })
    }
}

fn report(kind: EventKind, outcome: HandlerResult) -> Option<Projection> {
    match outcome {
        Ok(projection) => {
            debug!("{} applied to {}", kind, projection.denom());
            info!("{}", projection);
            Some(projection)
        }
        Err(e) => {
            error!("Error while processing {}: {}", kind.handler_name(), e);
            None
        }
    }
}

/// Chain amounts are unsigned integers of arbitrary size.
fn parse_amount(denom: &str, value: &str) -> Result<BigInt, ProjectionError> {
    BigUint::from_str(value)
        .map(|amount| BigInt::from_biguint(Sign::Plus, amount))
        .map_err(|_| ProjectionError::InvalidAmount {
            denom: denom.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::db::persister::MemoryPersister;
    use crate::indexing::attributes::Attribute;
    use crate::indexing::event::{BlockHeader, Event};
    use crate::indexing::msgs::TypeUrl;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use prost_types::Any;
    use tokio::test;

    const DENOM: &str = "ft1abc";

    pub fn block(height: u64) -> BlockHeader {
        BlockHeader {
            height,
            time: Utc.with_ymd_and_hms(2022, 10, 3, 12, 0, 0).unwrap(),
        }
    }

    pub fn raw_event(event_type: &str, attributes: Vec<Attribute>, msg: Any) -> RawEvent {
        CosmosEvent {
            event: Event {
                kind: event_type.to_string(),
                attributes,
            },
            msg,
            block: block(6777500),
            tx_hash: "A1B2C3".to_string(),
        }
    }

    fn quoted_denom(denom: &str) -> Vec<Attribute> {
        vec![Attribute::new("denom", &format!("\"{}\"", denom))]
    }

    pub fn issue_event(denom: &str) -> RawEvent {
        let msg = MsgIssue {
            symbol: "SNG".to_string(),
            name: "Song".to_string(),
            max_supply: "1000000".to_string(),
            authority: "addr1".to_string(),
            minter: "addr1".to_string(),
            uri: "ipfs://x".to_string(),
        };
        raw_event(
            "bitsong.fantoken.v1beta1.EventIssue",
            quoted_denom(denom),
            msg.to_any(),
        )
    }

    pub fn mint_event(denom: &str, amount: &str) -> RawEvent {
        let msg = MsgMint {
            recipient: "addr2".to_string(),
            coin: Some(Coin {
                denom: denom.to_string(),
                amount: amount.to_string(),
            }),
            minter: "addr1".to_string(),
        };
        raw_event(
            "bitsong.fantoken.v1beta1.EventMint",
            quoted_denom(denom),
            msg.to_any(),
        )
    }

    fn burn_event(denom: &str, amount: &str) -> RawEvent {
        let msg = MsgBurn {
            coin: Some(Coin {
                denom: denom.to_string(),
                amount: amount.to_string(),
            }),
            sender: "addr2".to_string(),
        };
        raw_event(
            "bitsong.fantoken.v1beta1.EventBurn",
            quoted_denom(denom),
            msg.to_any(),
        )
    }

    async fn issued() -> Projector<MemoryPersister> {
        let mut projector = Projector::with_fantoken_routes(MemoryPersister::new()).unwrap();
        projector.project(&issue_event(DENOM)).await.unwrap();
        projector
    }

    fn stored(projector: &Projector<MemoryPersister>) -> Fantoken {
        projector.store().fantoken(DENOM).cloned().unwrap()
    }

    #[test]
    async fn test_issue_creates_fantoken() {
        let projector = issued().await;
        assert_eq!(1, projector.store().len());
        let fantoken = stored(&projector);
        assert_eq!(DENOM, fantoken.id);
        assert_eq!("Song", fantoken.name);
        assert_eq!("SNG", fantoken.symbol);
        assert_eq!("ipfs://x", fantoken.uri);
        assert_eq!("addr1", fantoken.authority);
        assert_eq!("addr1", fantoken.minter);
        assert_eq!(BigInt::from(0u8), fantoken.supply);
        assert_eq!(BigInt::from(1_000_000u32), fantoken.max_supply);
        assert_eq!(6777500, fantoken.block_height);
        assert_eq!("A1B2C3", fantoken.tx_hash);
        assert_eq!(block(0).time, fantoken.created_at);
    }

    #[test]
    async fn test_issue_without_denom_is_dropped() {
        let mut projector = Projector::with_fantoken_routes(MemoryPersister::new()).unwrap();
        let mut event = issue_event(DENOM);
        event.event.attributes = vec![Attribute::new("authority", "\"addr1\"")];
        assert_eq!(None, projector.project(&event).await);

        let decoded = event.decode::<MsgIssue>().unwrap();
        assert!(matches!(
            projector.handle_issue(&decoded).await,
            Err(ProjectionError::MissingAttribute("denom"))
        ));
        assert!(projector.store().is_empty());
    }

    #[test]
    async fn test_issue_with_bad_max_supply_is_dropped() {
        let mut projector = Projector::with_fantoken_routes(MemoryPersister::new()).unwrap();
        let mut decoded = issue_event(DENOM).decode::<MsgIssue>().unwrap();
        decoded.msg.max_supply = "lots".to_string();
        assert!(matches!(
            projector.handle_issue(&decoded).await,
            Err(ProjectionError::InvalidAmount { .. })
        ));
        assert!(projector.store().is_empty());
    }

    #[test]
    async fn test_mint_and_burn() {
        let mut projector = issued().await;
        let minted = projector.project(&mint_event(DENOM, "500")).await;
        assert_eq!(
            Some(Projection::Minted {
                denom: DENOM.to_string(),
                amount: BigInt::from(500u32)
            }),
            minted
        );
        assert_eq!(BigInt::from(500u32), stored(&projector).supply);

        projector.project(&burn_event(DENOM, "200")).await.unwrap();
        assert_eq!(BigInt::from(300u32), stored(&projector).supply);
    }

    #[test]
    async fn test_supply_exceeds_u64() {
        let mut projector = issued().await;
        let huge = "340282366920938463463374607431768211456"; // 2^128
        projector.project(&mint_event(DENOM, huge)).await.unwrap();
        projector.project(&mint_event(DENOM, huge)).await.unwrap();
        assert_eq!(
            BigInt::from_str("680564733841876926926749214863536422912").unwrap(),
            stored(&projector).supply
        );
    }

    #[test]
    async fn test_burn_has_no_floor() {
        let mut projector = issued().await;
        projector.project(&mint_event(DENOM, "10")).await.unwrap();
        projector.project(&burn_event(DENOM, "25")).await.unwrap();
        assert_eq!(BigInt::from(-15), stored(&projector).supply);
    }

    #[test]
    async fn test_replay_double_applies() {
        let mut projector = issued().await;
        let mint = mint_event(DENOM, "500");
        projector.project(&mint).await.unwrap();
        projector.project(&mint).await.unwrap();
        assert_eq!(BigInt::from(1000u32), stored(&projector).supply);

        let burn = burn_event(DENOM, "100");
        projector.project(&burn).await.unwrap();
        projector.project(&burn).await.unwrap();
        assert_eq!(BigInt::from(800u32), stored(&projector).supply);
    }

    #[test]
    async fn test_mint_for_unknown_denom() {
        let mut projector = issued().await;
        let before = stored(&projector);
        assert_eq!(None, projector.project(&mint_event("ft9zzz", "500")).await);

        let decoded = mint_event("ft9zzz", "500").decode::<MsgMint>().unwrap();
        match projector.handle_mint(&decoded).await {
            Err(ProjectionError::NotFound { denom }) => assert_eq!("ft9zzz", denom),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert_eq!(1, projector.store().len());
        assert!(projector.store().fantoken("ft9zzz").is_none());
        assert_eq!(before, stored(&projector));
    }

    #[test]
    async fn test_mint_uses_coin_denom() {
        let mut projector = issued().await;
        // Attributes point elsewhere; the coin decides.
        let mut event = mint_event(DENOM, "7");
        event.event.attributes = quoted_denom("ft9zzz");
        projector.project(&event).await.unwrap();
        assert_eq!(BigInt::from(7u8), stored(&projector).supply);
    }

    #[test]
    async fn test_mint_anomalies() {
        let mut projector = issued().await;
        let mut decoded = mint_event(DENOM, "1").decode::<MsgMint>().unwrap();
        decoded.msg.coin = None;
        assert!(matches!(
            projector.handle_mint(&decoded).await,
            Err(ProjectionError::MissingCoin)
        ));

        assert_eq!(None, projector.project(&burn_event(DENOM, "-5")).await);
        assert_eq!(None, projector.project(&mint_event(DENOM, "1.5")).await);
        assert_eq!(BigInt::from(0u8), stored(&projector).supply);
    }

    #[test]
    async fn test_set_minter() {
        let mut projector = issued().await;
        let before = stored(&projector);
        let msg = MsgSetMinter {
            denom: DENOM.to_string(),
            old_minter: "addr1".to_string(),
            new_minter: "addr9".to_string(),
        };
        let event = raw_event(
            "bitsong.fantoken.v1beta1.EventSetMinter",
            quoted_denom(DENOM),
            msg.to_any(),
        );
        projector.project(&event).await.unwrap();
        let after = stored(&projector);
        assert_eq!(
            Fantoken {
                minter: "addr9".to_string(),
                ..before
            },
            after
        );
    }

    #[test]
    async fn test_set_authority() {
        let mut projector = issued().await;
        let before = stored(&projector);
        let msg = MsgSetAuthority {
            denom: DENOM.to_string(),
            old_authority: "addr1".to_string(),
            new_authority: "addr7".to_string(),
        };
        let event = raw_event(
            "bitsong.fantoken.v1beta1.EventSetAuthority",
            quoted_denom(DENOM),
            msg.to_any(),
        );
        assert_eq!(
            Some(Projection::AuthoritySet {
                denom: DENOM.to_string(),
                authority: "addr7".to_string()
            }),
            projector.project(&event).await
        );
        assert_eq!(
            Fantoken {
                authority: "addr7".to_string(),
                ..before
            },
            stored(&projector)
        );
    }

    #[test]
    async fn test_set_uri_uses_message_denom() {
        let mut projector = issued().await;
        let before = stored(&projector);
        let msg = MsgSetUri {
            authority: "addr1".to_string(),
            denom: DENOM.to_string(),
            uri: "ipfs://y".to_string(),
        };
        // No attributes at all: the handler must not need them.
        let event = raw_event("bitsong.fantoken.v1beta1.EventSetUri", vec![], msg.to_any());
        projector.project(&event).await.unwrap();
        assert_eq!(
            Fantoken {
                uri: "ipfs://y".to_string(),
                ..before
            },
            stored(&projector)
        );
    }

    #[test]
    async fn test_disable_mint() {
        let mut projector = issued().await;
        let before = stored(&projector);
        let msg = MsgDisableMint {
            denom: DENOM.to_string(),
            minter: "addr1".to_string(),
        };
        let event = raw_event(
            "bitsong.fantoken.v1beta1.EventDisableMint",
            quoted_denom(DENOM),
            msg.to_any(),
        );
        projector.project(&event).await.unwrap();
        let after = stored(&projector);
        assert!(!after.can_mint());
        assert_eq!(
            Fantoken {
                minter: String::new(),
                ..before
            },
            after
        );
    }

    fn set_minter_event(attribute_denom: &str, msg_denom: &str) -> RawEvent {
        let msg = MsgSetMinter {
            denom: msg_denom.to_string(),
            old_minter: "addr1".to_string(),
            new_minter: "addr9".to_string(),
        };
        raw_event(
            "bitsong.fantoken.v1beta1.EventSetMinter",
            quoted_denom(attribute_denom),
            msg.to_any(),
        )
    }

    fn set_authority_event(attribute_denom: &str, msg_denom: &str) -> RawEvent {
        let msg = MsgSetAuthority {
            denom: msg_denom.to_string(),
            old_authority: "addr1".to_string(),
            new_authority: "addr7".to_string(),
        };
        raw_event(
            "bitsong.fantoken.v1beta1.EventSetAuthority",
            quoted_denom(attribute_denom),
            msg.to_any(),
        )
    }

    fn disable_mint_event(attribute_denom: &str, msg_denom: &str) -> RawEvent {
        let msg = MsgDisableMint {
            denom: msg_denom.to_string(),
            minter: "addr1".to_string(),
        };
        raw_event(
            "bitsong.fantoken.v1beta1.EventDisableMint",
            quoted_denom(attribute_denom),
            msg.to_any(),
        )
    }

    #[test]
    async fn test_set_minter_uses_attribute_denom() {
        let mut projector = issued().await;
        projector
            .project(&set_minter_event(DENOM, "ft9zzz"))
            .await
            .unwrap();
        assert_eq!("addr9", stored(&projector).minter);

        let mut projector = issued().await;
        let before = stored(&projector);
        let decoded = set_minter_event("ft9zzz", DENOM)
            .decode::<MsgSetMinter>()
            .unwrap();
        match projector.handle_set_minter(&decoded).await {
            Err(ProjectionError::NotFound { denom }) => assert_eq!("ft9zzz", denom),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert_eq!(1, projector.store().len());
        assert_eq!(before, stored(&projector));
    }

    #[test]
    async fn test_set_authority_uses_attribute_denom() {
        let mut projector = issued().await;
        projector
            .project(&set_authority_event(DENOM, "ft9zzz"))
            .await
            .unwrap();
        assert_eq!("addr7", stored(&projector).authority);

        let mut projector = issued().await;
        let before = stored(&projector);
        let decoded = set_authority_event("ft9zzz", DENOM)
            .decode::<MsgSetAuthority>()
            .unwrap();
        match projector.handle_set_authority(&decoded).await {
            Err(ProjectionError::NotFound { denom }) => assert_eq!("ft9zzz", denom),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert_eq!(1, projector.store().len());
        assert_eq!(before, stored(&projector));
    }

    #[test]
    async fn test_disable_mint_uses_attribute_denom() {
        let mut projector = issued().await;
        projector
            .project(&disable_mint_event(DENOM, "ft9zzz"))
            .await
            .unwrap();
        assert!(!stored(&projector).can_mint());

        let mut projector = issued().await;
        let before = stored(&projector);
        let decoded = disable_mint_event("ft9zzz", DENOM)
            .decode::<MsgDisableMint>()
            .unwrap();
        match projector.handle_disable_mint(&decoded).await {
            Err(ProjectionError::NotFound { denom }) => assert_eq!("ft9zzz", denom),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert_eq!(1, projector.store().len());
        assert_eq!(before, stored(&projector));
    }

    #[test]
    async fn test_issue_with_empty_max_supply() {
        let mut projector = Projector::with_fantoken_routes(MemoryPersister::new()).unwrap();
        let mut decoded = issue_event(DENOM).decode::<MsgIssue>().unwrap();
        decoded.msg.max_supply = String::new();
        projector.handle_issue(&decoded).await.unwrap();
        let fantoken = stored(&projector);
        assert_eq!(BigInt::from(0u8), fantoken.max_supply);
        assert_eq!(BigInt::from(0u8), fantoken.supply);
    }

    #[test]
    async fn test_mutations_on_unknown_denom() {
        let mut projector = Projector::with_fantoken_routes(MemoryPersister::new()).unwrap();
        let disable = MsgDisableMint {
            denom: DENOM.to_string(),
            minter: "addr1".to_string(),
        };
        let event = raw_event(
            "bitsong.fantoken.v1beta1.EventDisableMint",
            quoted_denom(DENOM),
            disable.to_any(),
        );
        assert_eq!(None, projector.project(&event).await);

        let set_uri = MsgSetUri {
            authority: "addr1".to_string(),
            denom: DENOM.to_string(),
            uri: "ipfs://y".to_string(),
        };
        let event = raw_event("bitsong.fantoken.v1beta1.EventSetUri", vec![], set_uri.to_any());
        assert_eq!(None, projector.project(&event).await);
        assert!(projector.store().is_empty());
    }

    #[test]
    async fn test_unrouted_and_malformed_events() {
        let mut projector = issued().await;
        let unrouted = raw_event(
            "cosmos.bank.v1beta1.EventSend",
            quoted_denom(DENOM),
            mint_event(DENOM, "1").msg,
        );
        assert_eq!(None, projector.project(&unrouted).await);

        let mut malformed = mint_event(DENOM, "1");
        malformed.msg.value = vec![0x12, 0x40, 0x01];
        assert_eq!(None, projector.project(&malformed).await);
        assert_eq!(BigInt::from(0u8), stored(&projector).supply);
    }

    struct FailingPersister {
        inner: MemoryPersister,
        fail_reads: bool,
    }

    #[async_trait]
    impl FantokenStore for FailingPersister {
        async fn get(&self, denom: &str) -> anyhow::Result<Option<Fantoken>> {
            if self.fail_reads {
                return Err(anyhow!("read timed out"));
            }
            self.inner.get(denom).await
        }

        async fn save(&mut self, _fantoken: &Fantoken) -> anyhow::Result<()> {
            Err(anyhow!("connection reset"))
        }
    }

    #[test]
    async fn test_store_failures_are_contained() {
        let mut inner = MemoryPersister::new();
        let mut seeded = Projector::with_fantoken_routes(MemoryPersister::new()).unwrap();
        seeded.project(&issue_event(DENOM)).await.unwrap();
        inner.save(&stored(&seeded)).await.unwrap();

        let mut projector = Projector::with_fantoken_routes(FailingPersister {
            inner,
            fail_reads: false,
        })
        .unwrap();
        assert_eq!(None, projector.project(&mint_event(DENOM, "5")).await);
        let decoded = mint_event(DENOM, "5").decode::<MsgMint>().unwrap();
        match projector.handle_mint(&decoded).await {
            Err(ProjectionError::Store { denom, source }) => {
                assert_eq!(DENOM, denom);
                assert_eq!("connection reset", source.to_string());
            }
            other => panic!("expected Store, got {:?}", other),
        }
        assert_eq!(
            BigInt::from(0u8),
            projector.store().inner.fantoken(DENOM).unwrap().supply
        );

        let mut store = projector.into_store();
        store.fail_reads = true;
        let mut projector = Projector::with_fantoken_routes(store).unwrap();
        assert!(matches!(
            projector.handle_mint(&decoded).await,
            Err(ProjectionError::Store { .. })
        ));
    }
}
