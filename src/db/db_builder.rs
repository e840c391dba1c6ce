use log::info;
use sea_orm::sea_query::{Alias, ColumnDef, Table, TableCreateStatement};
use sea_orm::{ConnectionTrait, DatabaseConnection};

pub const FANTOKEN_TABLE: &str = "fantoken";

/// Column order shared by the create statement, inserts and selects.
pub const FANTOKEN_COLUMNS: [&str; 11] = [
    "id",
    "name",
    "symbol",
    "uri",
    "authority",
    "minter",
    "supply",
    "max_supply",
    "block_height",
    "tx_hash",
    "created_at",
];

/// Supply columns hold decimal text so values past 64 bits survive.
pub fn fantoken_table() -> TableCreateStatement {
    Table::create()
        .table(Alias::new(FANTOKEN_TABLE))
        .if_not_exists()
        .col(
            ColumnDef::new(Alias::new("id"))
                .string()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(Alias::new("name")).string().not_null())
        .col(ColumnDef::new(Alias::new("symbol")).string().not_null())
        .col(ColumnDef::new(Alias::new("uri")).text().not_null())
        .col(ColumnDef::new(Alias::new("authority")).string().not_null())
        .col(ColumnDef::new(Alias::new("minter")).string().not_null())
        .col(ColumnDef::new(Alias::new("supply")).text().not_null())
        .col(ColumnDef::new(Alias::new("max_supply")).text().not_null())
        .col(
            ColumnDef::new(Alias::new("block_height"))
                .big_integer()
                .not_null(),
        )
        .col(ColumnDef::new(Alias::new("tx_hash")).string().not_null())
        .col(
            ColumnDef::new(Alias::new("created_at"))
                .timestamp_with_time_zone()
                .not_null(),
        )
        .to_owned()
}

pub async fn create_tables(db: &DatabaseConnection) -> anyhow::Result<()> {
    let builder = db.get_database_backend();
    db.execute(builder.build(&fantoken_table())).await?;
    info!("ensured table {}", FANTOKEN_TABLE);
    Ok(())
}
