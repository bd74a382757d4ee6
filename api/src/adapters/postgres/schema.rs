//! Schema bootstrap
//!
//! Creates the shop tables from the SeaORM entity definitions when they are
//! missing. Unique indexes on the uniqueness keys come from `#[sea_orm(unique)]`.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};

use crate::entity::{categories, products, users};

/// Create any missing tables
pub async fn sync_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table_if_missing(db, categories::Entity).await?;
    create_table_if_missing(db, products::Entity).await?;
    create_table_if_missing(db, users::Entity).await?;

    tracing::info!("Schema synchronised");
    Ok(())
}

async fn create_table_if_missing<E>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let mut statement = Schema::new(backend).create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    Ok(())
}
