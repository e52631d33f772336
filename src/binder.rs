use crate::errors::BindError;
use crate::models::BindOptions;
use crate::openapi::collection_openapi;
use crate::path::CollectionPath;
use crate::routes::{CollectionState, create_one, delete_one, get_all, get_one, update_one};
use crate::traits::RestResource;
use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use std::marker::PhantomData;
use std::sync::Arc;
use utoipa::openapi::OpenApi;

/// Registers the CRUD routes of one model under one collection path.
///
/// ```rust,ignore
/// let app = Binder::<user::Model>::new("users")?
///     .with_options(BindOptions::default().update_mode(UpdateMode::Merge))
///     .bind(Router::new(), &db);
/// ```
#[derive(Debug, Clone)]
pub struct Binder<T> {
    path: CollectionPath,
    options: BindOptions,
    _model: PhantomData<fn() -> T>,
}

impl<T> Binder<T>
where
    T: RestResource,
{
    /// # Errors
    ///
    /// Returns [`BindError`] when `path` cannot be used as a collection root.
    pub fn new(path: &str) -> Result<Self, BindError> {
        Ok(Self {
            path: CollectionPath::parse(path)?,
            options: BindOptions::default(),
            _model: PhantomData,
        })
    }

    #[must_use]
    pub fn with_options(mut self, options: BindOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn path(&self) -> &CollectionPath {
        &self.path
    }

    #[must_use]
    pub fn resource_name(&self) -> String {
        self.options
            .resource_name
            .clone()
            .unwrap_or_else(T::resource_name)
    }

    /// Router holding only this collection's routes, with `db` as its state.
    pub fn router<S>(&self, db: &DatabaseConnection) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let state = CollectionState {
            db: db.clone(),
            resource: Arc::from(self.resource_name()),
            update_mode: self.options.update_mode,
        };
        let item_route = self.path.item_route();
        tracing::debug!(
            resource = %state.resource,
            collection = %self.path,
            item = %item_route,
            "binding CRUD routes"
        );

        Router::<CollectionState>::new()
            .route(self.path.as_str(), get(get_all::<T>).post(create_one::<T>))
            .route(
                &item_route,
                get(get_one::<T>)
                    .put(update_one::<T>)
                    .delete(delete_one::<T>),
            )
            .with_state(state)
    }

    /// Merge this collection's routes into `router`.
    ///
    /// # Panics
    ///
    /// Panics if `router` already serves one of the generated routes.
    pub fn bind<S>(&self, router: Router<S>, db: &DatabaseConnection) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.merge(self.router(db))
    }

    /// OpenAPI description of the five generated operations.
    #[must_use]
    pub fn openapi(&self) -> OpenApi {
        collection_openapi(&self.path, &self.resource_name())
    }
}

/// Bind the CRUD routes for `T` under `path`.
///
/// # Errors
///
/// Returns [`BindError`] when `path` cannot be used as a collection root.
pub fn try_bind<T, S>(
    router: Router<S>,
    path: &str,
    db: &DatabaseConnection,
) -> Result<Router<S>, BindError>
where
    T: RestResource,
    S: Clone + Send + Sync + 'static,
{
    Ok(Binder::<T>::new(path)?.bind(router, db))
}

/// Bind the CRUD routes for `T` under `path`.
///
/// # Panics
///
/// Panics on an unusable `path` or on routes that clash with ones already in
/// `router`. Both are wiring mistakes; use [`try_bind`] to handle the former.
pub fn bind<T, S>(router: Router<S>, path: &str, db: &DatabaseConnection) -> Router<S>
where
    T: RestResource,
    S: Clone + Send + Sync + 'static,
{
    match try_bind::<T, S>(router, path, db) {
        Ok(router) => router,
        Err(err) => panic!("{err}"),
    }
}
