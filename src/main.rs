use clap::Command;
use env_logger::Env;
use log::info;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use fantoken_indexer::config::IndexerConfig;
use fantoken_indexer::db::connection::establish_connection;
use fantoken_indexer::db::db_builder::create_tables;
use fantoken_indexer::db::db_persister::DatabasePersister;
use fantoken_indexer::db::persister::{FantokenStore, MemoryPersister};
use fantoken_indexer::indexing::projector::Projector;
use fantoken_indexer::util::event_stream::replay_events;

fn open_events(path: &str) -> anyhow::Result<Box<dyn BufRead>> {
    if path == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    Ok(Box::new(BufReader::new(File::open(path)?)))
}

async fn run<S: FantokenStore>(store: S, config: &IndexerConfig) -> anyhow::Result<S> {
    let mut projector = Projector::with_fantoken_routes(store)?;
    let events = open_events(&config.events_file)?;
    replay_events(&mut projector, events, config.start_block_height).await?;
    Ok(projector.into_store())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Command::new("Fantoken Indexer")
        .version("0.1.0")
        .about("Projects bitsong fantoken events onto fantoken records");
    let config = IndexerConfig::with_clap(app);

    let env = Env::default()
        .filter_or("INDEXER_LOG_LEVEL", "info")
        .write_style_or("INDEXER_LOG_STYLE", "always");

    env_logger::init_from_env(env);
    info!("{}", config);

    if config.postgres_backend {
        let db = establish_connection(&config.database_url).await?;
        if config.create_tables {
            create_tables(&db).await?;
        }
        run(DatabasePersister::new(db), &config).await?;
    } else {
        let store = run(MemoryPersister::new(), &config).await?;
        for fantoken in store.fantokens() {
            info!(
                "{} ({}) supply {} / {}, minter {:?}",
                fantoken.id, fantoken.symbol, fantoken.supply, fantoken.max_supply, fantoken.minter
            );
        }
    }
    Ok(())
}
