use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters accepted by the list endpoint.
///
/// # Pagination
/// The `range` parameter is a JSON array with the inclusive start and end
/// indices, for example:
/// ```json
/// [0,9]
/// ```
/// Without it the whole collection is returned.
#[derive(Debug, Deserialize, IntoParams, Default)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Range for pagination in the format "[start, end]".
    ///
    /// Example: `[0,9]`
    #[param(example = "[0,9]")]
    pub range: Option<String>,
}

/// How `PUT {path}/{id}` applies the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// Overwrite every field; fields missing from the body become zero values.
    #[default]
    Replace,
    /// Load the stored record and overwrite only the fields present in the body.
    Merge,
}

/// Per-collection settings passed to [`crate::Binder::with_options`].
#[derive(Debug, Clone, Default)]
pub struct BindOptions {
    pub update_mode: UpdateMode,
    /// Overrides the resource name shown in messages, `Content-Range` and docs.
    pub resource_name: Option<String>,
}

impl BindOptions {
    #[must_use]
    pub fn update_mode(mut self, mode: UpdateMode) -> Self {
        self.update_mode = mode;
        self
    }

    #[must_use]
    pub fn resource_name(mut self, name: impl Into<String>) -> Self {
        self.resource_name = Some(name.into());
        self
    }
}
