//! Minimal REST collection served with Axum
//!
//! ```bash
//! cargo run --example minimal
//! ```
//!
//! Then try:
//! - `curl -X POST localhost:3000/users -d '{"Name":"test"}'`
//! - `curl localhost:3000/users`
//! - **OpenAPI**: <http://localhost:3000/openapi.json>

use axum::{Json, Router, routing::get};
use restorm::{Binder, RestResource};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, entity::prelude::*};
use serde::{Deserialize, Serialize};
use std::env;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
#[serde(rename_all = "PascalCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}
impl ActiveModelBehavior for ActiveModel {}

impl RestResource for Model {
    type Entity = Entity;
    type ActiveModel = ActiveModel;
    const ID_COLUMN: Column = Column::Id;
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,restorm=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();

    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
    let db: DatabaseConnection = Database::connect(&database_url).await?;

    db.execute_unprepared(
        r"CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        );",
    )
    .await?;

    let users = Binder::<Model>::new("users")?;
    let apidocs = users.openapi();
    let app = users
        .bind(Router::new(), &db)
        .route("/openapi.json", get(move || async move { Json(apidocs) }))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    tracing::info!("API: http://0.0.0.0:3000/users");
    axum::serve(listener, app).await?;
    Ok(())
}
