use restorm::RestResource;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Keys are chosen by the client.
#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tags")]
#[serde(rename_all = "PascalCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "ID")]
    pub id: i64,
    pub label: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl RestResource for Model {
    type Entity = Entity;
    type ActiveModel = ActiveModel;
    const ID_COLUMN: Column = Column::Id;
}

pub type Tag = Model;
