use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{
    ProductInput, ProductListResponse, ProductQuery, ProductResponse, UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product
    ),
    components(schemas(
        ProductInput,
        UpdateProduct,
        crate::models::ProductView,
        ProductResponse,
        ProductListResponse
    )),
    tags((name = "products", description = "Product catalog operations"))
)]
pub struct ApiDoc;

/// Routes for the products domain, to be nested under `/products`.
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{slug}",
            get(get_product).patch(update_product).delete(delete_product),
        )
        .with_state(Arc::new(service))
}

#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Products found", body = ProductListResponse),
        (status = 404, description = "No products matched the filters"),
        (status = 500, description = "Database error")
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<ProductQuery>,
) -> ProductResult<Json<ProductListResponse>> {
    let products = service.list_products(query).await?;
    Ok(Json(ProductListResponse::new(products, "Products found")))
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 409, description = "Product already exists"),
        (status = 500, description = "Validation or database error")
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Json(input): Json<ProductInput>,
) -> ProductResult<(StatusCode, Json<ProductResponse>)> {
    let product = service.create_product(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProductResponse::new(product, "Product created")),
    ))
}

#[utoipa::path(
    get,
    path = "/products/{slug}",
    tag = "products",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "No product with this slug"),
        (status = 500, description = "Database error")
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(slug): Path<String>,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.get_product(&slug).await?;
    Ok(Json(ProductResponse::new(product, "Product found")))
}

#[utoipa::path(
    patch,
    path = "/products/{slug}",
    tag = "products",
    params(("slug" = String, Path, description = "Product slug")),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 404, description = "No product with this slug"),
        (status = 500, description = "Database error")
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(slug): Path<String>,
    Json(update): Json<UpdateProduct>,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.update_product(&slug, update).await?;
    Ok(Json(ProductResponse::new(
        product,
        "Product updated",
    )))
}

#[utoipa::path(
    delete,
    path = "/products/{slug}",
    tag = "products",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Product deleted", body = ProductResponse),
        (status = 404, description = "No product with this slug"),
        (status = 500, description = "Database error")
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(slug): Path<String>,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.delete_product(&slug).await?;
    Ok(Json(ProductResponse::new(
        product,
        "Product deleted",
    )))
}
