use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for the `task` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub status: bool,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Task {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            status: model.status,
            description: model.description,
        }
    }
}

// The store assigns the id.
impl From<crate::models::NewTask> for ActiveModel {
    fn from(input: crate::models::NewTask) -> Self {
        ActiveModel {
            id: NotSet,
            status: Set(input.status),
            description: Set(input.description),
        }
    }
}
