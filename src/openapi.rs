//! OpenAPI description of a bound collection.
//!
//! Models are not required to implement `ToSchema`, so request and response
//! bodies are described as plain JSON objects. The error payload is described
//! precisely.

use crate::errors::{ErrorKind, ErrorPayload};
use crate::models::ListQuery;
use crate::path::CollectionPath;
use utoipa::openapi::content::ContentBuilder;
use utoipa::openapi::info::InfoBuilder;
use utoipa::openapi::path::{
    HttpMethod, Operation, OperationBuilder, ParameterBuilder, ParameterIn, PathItemBuilder,
    PathsBuilder,
};
use utoipa::openapi::request_body::{RequestBody, RequestBodyBuilder};
use utoipa::openapi::response::{Response, ResponseBuilder};
use utoipa::openapi::schema::{
    ArrayBuilder, ComponentsBuilder, KnownFormat, ObjectBuilder, Ref, Schema, SchemaFormat, Type,
};
use utoipa::openapi::{OpenApi, OpenApiBuilder, RefOr, Required};
use utoipa::{IntoParams, PartialSchema};

const JSON: &str = "application/json";

fn model_schema() -> RefOr<Schema> {
    RefOr::T(Schema::Object(
        ObjectBuilder::new().schema_type(Type::Object).build(),
    ))
}

fn json_response(description: &str, schema: RefOr<Schema>) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content(JSON, ContentBuilder::new().schema(Some(schema)).build())
        .build()
}

fn error_response(description: &str) -> Response {
    json_response(
        description,
        RefOr::Ref(Ref::from_schema_name("ErrorPayload")),
    )
}

fn model_body() -> RequestBody {
    RequestBodyBuilder::new()
        .content(JSON, ContentBuilder::new().schema(Some(model_schema())).build())
        .required(Some(Required::True))
        .build()
}

fn success_flag() -> RefOr<Schema> {
    RefOr::T(Schema::Object(
        ObjectBuilder::new().schema_type(Type::Boolean).build(),
    ))
}

fn item_operation(operation: OperationBuilder) -> Operation {
    let id = ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some("Integer identifier of the record"))
        .schema(Some(RefOr::T(Schema::Object(
            ObjectBuilder::new()
                .schema_type(Type::Integer)
                .format(Some(SchemaFormat::KnownFormat(KnownFormat::Int64)))
                .build(),
        ))))
        .build();

    operation
        .parameter(id)
        .response("400", error_response("Malformed identifier or body"))
        .response("404", error_response("Record not found"))
        .response("500", error_response("Persistence error"))
        .build()
}

/// Build the OpenAPI document for the collection bound at `path`.
#[must_use]
pub fn collection_openapi(path: &CollectionPath, resource: &str) -> OpenApi {
    let create = OperationBuilder::new()
        .operation_id(Some(format!("create_one_{resource}")))
        .summary(Some(format!("Create one {resource}")))
        .tag(resource)
        .request_body(Some(model_body()))
        .response("200", json_response("The saved record", model_schema()))
        .response("400", error_response("Malformed body"))
        .response("500", error_response("Persistence error"))
        .build();

    let mut list = OperationBuilder::new()
        .operation_id(Some(format!("get_all_{resource}")))
        .summary(Some(format!("Get all {resource}")))
        .tag(resource);
    for param in ListQuery::into_params(|| Some(ParameterIn::Query)) {
        list = list.parameter(param);
    }
    let list = list
        .response(
            "200",
            json_response(
                "All records, or one page when `range` is given",
                RefOr::T(Schema::Array(ArrayBuilder::new().items(model_schema()).build())),
            ),
        )
        .response("500", error_response("Persistence error"))
        .build();

    let get_one = item_operation(
        OperationBuilder::new()
            .operation_id(Some(format!("get_one_{resource}")))
            .summary(Some(format!("Get one {resource}")))
            .tag(resource)
            .response("200", json_response("The requested record", model_schema())),
    );

    let update = item_operation(
        OperationBuilder::new()
            .operation_id(Some(format!("update_one_{resource}")))
            .summary(Some(format!("Update one {resource}")))
            .tag(resource)
            .request_body(Some(model_body()))
            .response("200", json_response("Record updated", success_flag())),
    );

    let delete = item_operation(
        OperationBuilder::new()
            .operation_id(Some(format!("delete_one_{resource}")))
            .summary(Some(format!("Delete one {resource}")))
            .tag(resource)
            .response("200", json_response("Record deleted", success_flag())),
    );

    let paths = PathsBuilder::new()
        .path(
            path.as_str(),
            PathItemBuilder::new()
                .operation(HttpMethod::Post, create)
                .operation(HttpMethod::Get, list)
                .build(),
        )
        .path(
            path.item_route(),
            PathItemBuilder::new()
                .operation(HttpMethod::Get, get_one)
                .operation(HttpMethod::Put, update)
                .operation(HttpMethod::Delete, delete)
                .build(),
        )
        .build();

    let components = ComponentsBuilder::new()
        .schema("ErrorPayload", ErrorPayload::schema())
        .schema("ErrorKind", ErrorKind::schema())
        .build();

    OpenApiBuilder::new()
        .info(
            InfoBuilder::new()
                .title(resource)
                .version(env!("CARGO_PKG_VERSION"))
                .build(),
        )
        .paths(paths)
        .components(Some(components))
        .build()
}
