use super::db_builder::{FANTOKEN_COLUMNS, FANTOKEN_TABLE};
use super::models::Fantoken;
use super::persister::FantokenStore;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use num_bigint::BigInt;
use sea_orm::sea_query::{Alias, Expr, OnConflict, Query};
use sea_orm::{ConnectionTrait, DatabaseConnection, QueryResult, Value};
use std::str::FromStr;

/// Stores fantokens in the `fantoken` table.
#[derive(Debug)]
pub struct DatabasePersister {
    db: DatabaseConnection,
}

impl DatabasePersister {
    pub fn new(db: DatabaseConnection) -> Self {
        DatabasePersister { db }
    }

    pub fn into_inner(self) -> DatabaseConnection {
        self.db
    }
}

fn columns() -> Vec<Alias> {
    FANTOKEN_COLUMNS.iter().map(|name| Alias::new(*name)).collect()
}

fn values(fantoken: &Fantoken) -> Result<Vec<Value>> {
    Ok(vec![
        fantoken.id.as_str().into(),
        fantoken.name.as_str().into(),
        fantoken.symbol.as_str().into(),
        fantoken.uri.as_str().into(),
        fantoken.authority.as_str().into(),
        fantoken.minter.as_str().into(),
        fantoken.supply.to_string().into(),
        fantoken.max_supply.to_string().into(),
        i64::try_from(fantoken.block_height)?.into(),
        fantoken.tx_hash.as_str().into(),
        fantoken.created_at.into(),
    ])
}

fn parse_big(row: &QueryResult, column: &str) -> Result<BigInt> {
    let text: String = row.try_get("", column)?;
    BigInt::from_str(&text).map_err(|e| anyhow!("column {} holds `{}`: {}", column, text, e))
}

fn from_row(row: &QueryResult) -> Result<Fantoken> {
    let block_height: i64 = row.try_get("", "block_height")?;
    let created_at: DateTime<Utc> = row.try_get("", "created_at")?;
    Ok(Fantoken {
        id: row.try_get("", "id")?,
        name: row.try_get("", "name")?,
        symbol: row.try_get("", "symbol")?,
        uri: row.try_get("", "uri")?,
        authority: row.try_get("", "authority")?,
        minter: row.try_get("", "minter")?,
        supply: parse_big(row, "supply")?,
        max_supply: parse_big(row, "max_supply")?,
        block_height: u64::try_from(block_height)?,
        tx_hash: row.try_get("", "tx_hash")?,
        created_at,
    })
}

#[async_trait]
impl FantokenStore for DatabasePersister {
    async fn get(&self, denom: &str) -> Result<Option<Fantoken>> {
        let stmt = Query::select()
            .columns(columns())
            .from(Alias::new(FANTOKEN_TABLE))
            .and_where(Expr::col(Alias::new("id")).eq(denom))
            .to_owned();
        let builder = self.db.get_database_backend();
        match self.db.query_one(builder.build(&stmt)).await? {
            Some(row) => Ok(Some(from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn save(&mut self, fantoken: &Fantoken) -> Result<()> {
        debug!("saving fantoken {}", fantoken.id);
        // Everything but the primary key is rewritten on conflict.
        let updated: Vec<Alias> = FANTOKEN_COLUMNS[1..]
            .iter()
            .map(|name| Alias::new(*name))
            .collect();
        let mut stmt = Query::insert();
        stmt.into_table(Alias::new(FANTOKEN_TABLE))
            .columns(columns())
            .on_conflict(
                OnConflict::column(Alias::new("id"))
                    .update_columns(updated)
                    .to_owned(),
            );
        stmt.values_panic(values(fantoken)?);
        let builder = self.db.get_database_backend();
        self.db.execute(builder.build(&stmt)).await?;
        Ok(())
    }
}
