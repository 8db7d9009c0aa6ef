//! SeaORM implementation of PokemonRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, SqlErr, TransactionTrait,
};
use serde_json::{Value, json};

use crate::domain::lookup::{is_valid_object_id, new_object_id};
use crate::domain::{
    CreatePokemonInput, DomainError, LookupKey, Pagination, Pokemon, PokemonRepository,
    UpdatePokemonInput, lookup_keys,
};
use crate::models::pokemon::{ActiveModel, Column, Entity as PokemonEntity, Model, Summary};

// The SQLite binder converts u64 to i64, so windows are capped there
const MAX_WINDOW: u64 = i64::MAX as u64;

/// SeaORM-based implementation of PokemonRepository
pub struct SeaOrmPokemonRepository {
    db: DatabaseConnection,
}

impl SeaOrmPokemonRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Walk the resolver chain for `search` and return the first stored hit
    async fn find_model(&self, search: &str) -> Result<Model, DomainError> {
        for key in lookup_keys(search) {
            let condition = match &key {
                LookupKey::No(no) => Column::No.eq(*no),
                LookupKey::Id(id) => Column::Id.eq(id.as_str()),
                LookupKey::Name(name) => Column::Name.eq(name.as_str()),
            };

            if let Some(model) = PokemonEntity::find()
                .filter(condition)
                .one(&self.db)
                .await?
            {
                tracing::debug!("Resolved {:?} via {:?}", search, key);
                return Ok(model);
            }
        }

        Err(DomainError::NotFound(search.to_string()))
    }
}

#[async_trait]
impl PokemonRepository for SeaOrmPokemonRepository {
    async fn create(&self, input: CreatePokemonInput) -> Result<Pokemon, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();
        let name = input.name.to_lowercase();

        let pokemon = ActiveModel {
            id: Set(new_object_id()),
            no: Set(input.no),
            name: Set(name.clone()),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };

        let result = pokemon
            .insert(&self.db)
            .await
            .map_err(|e| translate_write_error(e, &json!({ "no": input.no, "name": name })))?;

        tracing::info!("Created pokemon #{} {}", result.no, result.name);
        Ok(Pokemon::from(result))
    }

    async fn find_all(&self, pagination: Pagination) -> Result<Vec<Pokemon>, DomainError> {
        let rows = PokemonEntity::find()
            .select_only()
            .column(Column::Id)
            .column(Column::No)
            .column(Column::Name)
            .order_by_asc(Column::No)
            .limit(pagination.limit.min(MAX_WINDOW))
            .offset(pagination.offset.min(MAX_WINDOW))
            .into_model::<Summary>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Pokemon::from).collect())
    }

    async fn find_one(&self, search: &str) -> Result<Pokemon, DomainError> {
        self.find_model(search).await.map(Pokemon::from)
    }

    async fn update(
        &self,
        search: &str,
        patch: UpdatePokemonInput,
    ) -> Result<Pokemon, DomainError> {
        let current = self.find_model(search).await?;
        if patch.is_empty() {
            return Ok(Pokemon::from(current));
        }

        let name = patch.name.as_deref().map(str::to_lowercase);

        let mut update = PokemonEntity::update_many()
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().to_rfc3339()))
            .filter(Column::Id.eq(current.id.as_str()));

        if let Some(no) = patch.no {
            update = update.col_expr(Column::No, Expr::value(no));
        }
        if let Some(name) = &name {
            update = update.col_expr(Column::Name, Expr::value(name.clone()));
        }

        update
            .exec(&self.db)
            .await
            .map_err(|e| translate_write_error(e, &json!({ "no": patch.no, "name": name })))?;

        Ok(Pokemon {
            id: current.id,
            no: patch.no.unwrap_or(current.no),
            name: name.unwrap_or(current.name),
        })
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        if !is_valid_object_id(id) {
            return Err(DomainError::InvalidId(id.to_string()));
        }

        let result = PokemonEntity::delete_by_id(id.to_lowercase())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(id.to_string()));
        }

        tracing::info!("Deleted pokemon {}", id);
        Ok(())
    }

    async fn replace_all(&self, inputs: Vec<CreatePokemonInput>) -> Result<(u64, u64), DomainError> {
        let now = chrono::Utc::now().to_rfc3339();
        let inserted = inputs.len() as u64;

        let txn = self.db.begin().await?;

        let removed = PokemonEntity::delete_many().exec(&txn).await?.rows_affected;

        if !inputs.is_empty() {
            let models = inputs.into_iter().map(|input| ActiveModel {
                id: Set(new_object_id()),
                no: Set(input.no),
                name: Set(input.name.to_lowercase()),
                created_at: Set(now.clone()),
                updated_at: Set(now.clone()),
            });

            if let Err(e) = PokemonEntity::insert_many(models).exec(&txn).await {
                let err = translate_write_error(e, &Value::Null);
                txn.rollback().await?;
                return Err(err);
            }
        }

        txn.commit().await?;
        Ok((removed, inserted))
    }
}

/// Map a failed write to `Conflict` on a unique violation, `Storage` otherwise.
///
/// `attempted` holds the written fields so the conflicting value can be
/// reported alongside its key.
fn translate_write_error(err: DbErr, attempted: &Value) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            let key = conflicting_column(&detail);
            let value = attempted
                .get(&key)
                .filter(|v| !v.is_null())
                .map(Value::to_string)
                .unwrap_or_else(|| "null".to_string());

            tracing::warn!("Duplicate key on {}: {}", key, value);
            DomainError::Conflict { key, value }
        }
        _ => {
            tracing::error!("Write failed: {}", err);
            DomainError::Storage
        }
    }
}

/// Extract the column from a unique violation message
/// (`UNIQUE constraint failed: pokemon.name` -> `name`)
fn conflicting_column(detail: &str) -> String {
    detail
        .rsplit(':')
        .next()
        .and_then(|cols| cols.split(',').next())
        .map(|col| col.trim())
        .map(|col| col.rsplit('.').next().unwrap_or(col))
        .map(|col| col.trim_matches('"').to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicting_column_from_sqlite_message() {
        assert_eq!(conflicting_column("UNIQUE constraint failed: pokemon.name"), "name");
        assert_eq!(conflicting_column("UNIQUE constraint failed: pokemon.no"), "no");
    }

    #[test]
    fn non_unique_failures_are_opaque() {
        let err = translate_write_error(
            DbErr::Custom("database is locked".to_string()),
            &json!({ "no": 1, "name": "bulbasaur" }),
        );
        assert_eq!(err, DomainError::Storage);
    }
}
