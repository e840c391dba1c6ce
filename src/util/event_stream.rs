use crate::db::persister::FantokenStore;
use crate::indexing::event::{BlockHeader, CosmosEvent, Event, RawEvent};
use crate::indexing::projector::Projector;
use anyhow::Context;
use log::{debug, error, info, warn};
use prost_types::Any;
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// `google.protobuf.Any` with its bytes base64 encoded.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AnyRecord {
    pub type_url: String,
    pub value: String,
}

/// One line of a JSON-lines event export.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EventRecord {
    pub event: Event,
    pub msg: AnyRecord,
    pub block: BlockHeader,
    pub tx_hash: String,
}

impl EventRecord {
    pub fn from_raw_event(event: &RawEvent) -> Self {
        EventRecord {
            event: event.event.clone(),
            msg: AnyRecord {
                type_url: event.msg.type_url.clone(),
                value: base64::encode(&event.msg.value),
            },
            block: event.block,
            tx_hash: event.tx_hash.clone(),
        }
    }

    pub fn into_raw_event(self) -> anyhow::Result<RawEvent> {
        let value = base64::decode(&self.msg.value)
            .with_context(|| format!("message bytes of tx {}", self.tx_hash))?;
        Ok(CosmosEvent {
            event: self.event,
            msg: Any {
                type_url: self.msg.type_url,
                value,
            },
            block: self.block,
            tx_hash: self.tx_hash,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Events that changed the store.
    pub projected: usize,
    /// Events routed nowhere or refused by their handler.
    pub ignored: usize,
    /// Events below the start height.
    pub skipped: usize,
    /// Lines that could not be read as an event.
    pub malformed: usize,
}

fn parse_line(line: &str) -> anyhow::Result<RawEvent> {
    let record: EventRecord = serde_json::from_str(line)?;
    record.into_raw_event()
}

/// Feeds every event of a JSON-lines export to the projector, in file order.
/// Only a failure to read the input stops the replay.
pub async fn replay_events<S: FantokenStore, R: BufRead>(
    projector: &mut Projector<S>,
    reader: R,
    start_height: u64,
) -> anyhow::Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();
    let mut last_height = 0u64;
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading event line {}", index + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let event = match parse_line(&line) {
            Ok(event) => event,
            Err(e) => {
                error!("skipping malformed event on line {}: {:#}", index + 1, e);
                summary.malformed += 1;
                continue;
            }
        };
        let height = event.block.height;
        if height < start_height {
            debug!("skipping event at height {} < {}", height, start_height);
            summary.skipped += 1;
            continue;
        }
        if height < last_height {
            warn!(
                "event at height {} delivered after height {}",
                height, last_height
            );
        }
        last_height = height;
        match projector.project(&event).await {
            Some(_) => summary.projected += 1,
            None => summary.ignored += 1,
        }
    }
    info!(
        "replay finished: {} projected, {} ignored, {} skipped, {} malformed",
        summary.projected, summary.ignored, summary.skipped, summary.malformed
    );
    Ok(summary)
}
