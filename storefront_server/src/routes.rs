//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! Handlers are generic over the backend traits so that endpoint tests can substitute mock backends. Since each
//! worker thread processes its requests sequentially, handlers must never block the current thread; anything that
//! waits on the database is expressed as an async function.
use actix_web::{get, web, HttpResponse, Responder};
use log::*;
use storefront_engine::{
    db_types::NewPayment,
    order_objects::ProductQueryFilter,
    traits::{CatalogManagement, OrderManagement, ShopDatabase},
    CatalogApi, OrderFlowApi, OrderQueryApi,
};

use crate::{
    data_objects::{CreateOrderRequest, CreatePaymentRequest, JsonResponse, OrderCreatedResponse},
    errors::ServerError,
};

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Catalog  ----------------------------------------------------
/// Route handler for catalog browsing.
///
/// Optional `category`, `active` and `name` filters are taken straight from the query string; an unfiltered request
/// returns the whole catalog, ordered by name.
pub async fn products<B>(
    query: web::Query<ProductQueryFilter>,
    api: web::Data<CatalogApi<B>>,
) -> Result<HttpResponse, ServerError>
where
    B: CatalogManagement,
{
    trace!("💻️ Received product list request");
    let products = api.products(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(products))
}

//----------------------------------------------   Orders   ----------------------------------------------------
/// Route handler for the order list view.
pub async fn order_summaries<B>(api: web::Data<OrderQueryApi<B>>) -> Result<HttpResponse, ServerError>
where B: OrderManagement {
    trace!("💻️ Received order list request");
    let summaries = api.order_summaries().await?;
    Ok(HttpResponse::Ok().json(summaries))
}

/// Route handler for the order detail view: the order with its line items, payments, and outstanding balance.
pub async fn order_by_id<B>(
    path: web::Path<i64>,
    api: web::Data<OrderQueryApi<B>>,
) -> Result<HttpResponse, ServerError>
where
    B: OrderManagement,
{
    let order_id = path.into_inner();
    trace!("💻️ Received detail request for order #{order_id}");
    let detail = api
        .order_detail(order_id)
        .await?
        .ok_or_else(|| ServerError::NoRecordFound(format!("Order {order_id} not found")))?;
    Ok(HttpResponse::Ok().json(detail))
}

/// Route handler for order placement.
///
/// Responds `201 Created` with the order id, the snapshot total and the initial status. All validation failures
/// (unknown or inactive product, bad quantity, empty item list) come back as `400` with a reason.
pub async fn create_order<B>(
    body: web::Json<CreateOrderRequest>,
    api: web::Data<OrderFlowApi<B>>,
) -> Result<HttpResponse, ServerError>
where
    B: ShopDatabase,
{
    let request = body.into_inner();
    debug!("💻️ Received new order request for customer {}", request.customer_id);
    let placed = api.place_order(request.customer_id, &request.items).await?;
    Ok(HttpResponse::Created().json(OrderCreatedResponse::from(placed)))
}

//----------------------------------------------  Payments  ----------------------------------------------------
/// Route handler for payment registration.
///
/// Partial payments succeed and report the outstanding balance; the payment that covers the order total settles it.
/// Payments against settled or cancelled orders are rejected with `400` and leave the ledger untouched.
pub async fn register_payment<B>(
    body: web::Json<CreatePaymentRequest>,
    api: web::Data<OrderFlowApi<B>>,
) -> Result<HttpResponse, ServerError>
where
    B: ShopDatabase,
{
    let payment = NewPayment::try_from(body.into_inner())?;
    debug!("💻️ Received payment of {} against order #{}", payment.amount_cents, payment.order_id);
    let result = api.register_payment(payment).await?;
    let message = if result.is_settled() {
        format!("Order #{} is paid in full", result.order.id)
    } else {
        format!("Payment recorded. {} outstanding", result.remaining_cents())
    };
    Ok(HttpResponse::Ok().json(JsonResponse::success(message)))
}
