use clap::{Arg, ArgMatches, Command};
use std::env;
use std::fmt;

/// First block containing fantoken module events on bitsong-2b.
pub const FANTOKEN_GENESIS_BLOCK: u64 = 6777500;

pub struct IndexerConfig {
    pub chain_id: String,
    pub start_block_height: u64,
    pub database_url: String,
    pub postgres_backend: bool,
    pub create_tables: bool,
    /// `-` reads from stdin.
    pub events_file: String,
}

impl IndexerConfig {
    pub fn with_clap(app: Command) -> Self {
        let matches = app
            .arg(
                Arg::new("config")
                    .required(false)
                    .long("config")
                    .takes_value(true)
                    .help("Optionally sets a config file to use"),
            )
            .arg(
                Arg::new("database-url")
                    .required(false)
                    .long("database-url")
                    .takes_value(true)
                    .help("Postgres connection URL"),
            )
            .arg(
                Arg::new("events")
                    .required(false)
                    .long("events")
                    .takes_value(true)
                    .help("JSON-lines event export to replay, - for stdin"),
            )
            /*
            CHAIN_ID=bitsong-2b
            FANTOKEN_START_BLOCK_HEIGHT=6777500
            POSTGRES_PERSISTENCE=false
            CREATE_TABLES=true
            INDEXER_LOG_LEVEL=info
             */
            .get_matches();

        let input_file = matches.value_of("config").unwrap_or("");
        if !input_file.is_empty() {
            dotenvy::from_filename(input_file).ok();
        } else {
            dotenvy::dotenv().ok();
        }
        let mut config = Self::init();
        config.apply_matches(&matches);
        config
    }

    fn apply_matches(&mut self, matches: &ArgMatches) {
        if let Some(database_url) = matches.value_of("database-url") {
            self.database_url = database_url.to_string();
        }
        if let Some(events_file) = matches.value_of("events") {
            self.events_file = events_file.to_string();
        }
    }

    fn init() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let chain_id = lookup("CHAIN_ID").unwrap_or_else(|| "bitsong-2b".to_string());
        let start_block_height = lookup("FANTOKEN_START_BLOCK_HEIGHT")
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(FANTOKEN_GENESIS_BLOCK);
        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| "postgres://user@localhost:5432/fantokens".to_string());

        // Without postgres the projection only lives for the length of the run.
        let postgres_backend = lookup("POSTGRES_PERSISTENCE")
            .and_then(|value| value.parse::<bool>().ok())
            .unwrap_or(false);
        let create_tables = lookup("CREATE_TABLES")
            .and_then(|value| value.parse::<bool>().ok())
            .unwrap_or(true);
        let events_file = lookup("EVENTS_FILE").unwrap_or_else(|| "-".to_string());

        IndexerConfig {
            chain_id,
            start_block_height,
            database_url,
            postgres_backend,
            create_tables,
            events_file,
        }
    }
}

impl fmt::Display for IndexerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IndexerConfig: chain_id: {}\n\
        start_block_height: {}\n\
        postgres_backend: {}\n\
        create_tables: {}\n\
        events_file: {}\n",
            self.chain_id,
            self.start_block_height,
            self.postgres_backend,
            self.create_tables,
            self.events_file
        )
    }
}
