use sea_orm::FromQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::Pokemon;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pokemon")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String, // ObjectId hex
    #[sea_orm(unique)]
    pub no: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Projection used by list queries (metadata columns left out)
#[derive(Debug, Clone, FromQueryResult)]
pub struct Summary {
    pub id: String,
    pub no: i32,
    pub name: String,
}

impl From<Model> for Pokemon {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            no: model.no,
            name: model.name,
        }
    }
}

impl From<Summary> for Pokemon {
    fn from(row: Summary) -> Self {
        Self {
            id: row.id,
            no: row.no,
            name: row.name,
        }
    }
}
