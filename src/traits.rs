use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityName, EntityTrait,
    FromQueryResult, PaginatorTrait, PrimaryKeyTrait, QueryFilter, QueryOrder, QuerySelect,
};
use serde::{Serialize, de::DeserializeOwned};

/// A Sea-ORM model that can be served as a REST collection.
///
/// Implement it on the entity's `Model`. The persistence operations have
/// default implementations, so an empty `impl` naming the associated types is
/// usually all that is needed:
///
/// ```rust,ignore
/// impl RestResource for user::Model {
///     type Entity = user::Entity;
///     type ActiveModel = user::ActiveModel;
///     const ID_COLUMN: user::Column = user::Column::Id;
/// }
/// ```
///
/// Identifiers are 64-bit integers on the wire; lookups compare them against
/// `ID_COLUMN`, so any integer primary key works.
#[async_trait]
pub trait RestResource:
    FromQueryResult + Serialize + DeserializeOwned + Default + Clone + Send + Sync + Sized + 'static
{
    type Entity: EntityTrait<Model = Self> + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + From<Self> + Send + 'static;

    const ID_COLUMN: <Self::Entity as EntityTrait>::Column;

    /// Name used in messages, headers and logs. Defaults to the table name.
    #[must_use]
    fn resource_name() -> String {
        Self::Entity::default().table_name().to_string()
    }

    /// Insert a new record and return it as stored.
    ///
    /// For auto-increment keys the incoming identifier is discarded so the
    /// database assigns one.
    async fn save(db: &DatabaseConnection, model: Self) -> Result<Self, DbErr> {
        let mut active = Self::ActiveModel::from(model).reset_all();
        if <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::auto_increment() {
            active.not_set(Self::ID_COLUMN);
        }

        let result = Self::Entity::insert(active).exec(db).await?;
        Self::Entity::find_by_id(result.last_insert_id)
            .one(db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("{} not found after insert", Self::resource_name()))
            })
    }

    async fn find_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        Self::Entity::find()
            .order_by_asc(Self::ID_COLUMN)
            .all(db)
            .await
    }

    async fn find_page(
        db: &DatabaseConnection,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Self>, DbErr> {
        Self::Entity::find()
            .order_by_asc(Self::ID_COLUMN)
            .offset(offset)
            .limit(limit)
            .all(db)
            .await
    }

    async fn count(db: &DatabaseConnection) -> Result<u64, DbErr> {
        PaginatorTrait::count(Self::Entity::find(), db).await
    }

    async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Self, DbErr> {
        Self::Entity::find()
            .filter(Self::ID_COLUMN.eq(id))
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("{} not found", Self::resource_name())))
    }

    /// Overwrite every non-key column of record `id` with the values in `model`.
    ///
    /// The key in `model` is ignored.
    async fn update_by_id(db: &DatabaseConnection, id: i64, model: Self) -> Result<(), DbErr> {
        let mut active = Self::ActiveModel::from(model).reset_all();
        active.not_set(Self::ID_COLUMN);

        let result = Self::Entity::update_many()
            .set(active)
            .filter(Self::ID_COLUMN.eq(id))
            .exec(db)
            .await?;
        match result.rows_affected {
            0 => Err(DbErr::RecordNotFound(format!(
                "{} not found",
                Self::resource_name()
            ))),
            _ => Ok(()),
        }
    }

    async fn delete_by_id(db: &DatabaseConnection, id: i64) -> Result<(), DbErr> {
        let result = Self::Entity::delete_many()
            .filter(Self::ID_COLUMN.eq(id))
            .exec(db)
            .await?;
        match result.rows_affected {
            0 => Err(DbErr::RecordNotFound(format!(
                "{} not found",
                Self::resource_name()
            ))),
            _ => Ok(()),
        }
    }
}
