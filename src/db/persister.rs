use super::models::Fantoken;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Entity store the projector reads from and writes to.
#[async_trait]
pub trait FantokenStore: Send + Sync {
    async fn get(&self, denom: &str) -> Result<Option<Fantoken>>;

    /// Inserts the fantoken, or replaces the stored row with the same id.
    async fn save(&mut self, fantoken: &Fantoken) -> Result<()>;
}

/// Keeps fantokens in process memory, ordered by denomination.
#[derive(Debug, Default)]
pub struct MemoryPersister {
    fantokens: BTreeMap<String, Fantoken>,
}

impl MemoryPersister {
    pub fn new() -> Self {
        MemoryPersister {
            fantokens: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.fantokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fantokens.is_empty()
    }

    pub fn fantoken(&self, denom: &str) -> Option<&Fantoken> {
        self.fantokens.get(denom)
    }

    pub fn fantokens(&self) -> impl Iterator<Item = &Fantoken> {
        self.fantokens.values()
    }
}

#[async_trait]
impl FantokenStore for MemoryPersister {
    async fn get(&self, denom: &str) -> Result<Option<Fantoken>> {
        Ok(self.fantokens.get(denom).cloned())
    }

    async fn save(&mut self, fantoken: &Fantoken) -> Result<()> {
        self.fantokens
            .insert(fantoken.id.clone(), fantoken.clone());
        Ok(())
    }
}
