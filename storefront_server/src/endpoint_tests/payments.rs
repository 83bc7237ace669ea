use actix_web::{http::StatusCode, web, web::ServiceConfig};
use chrono::{TimeZone, Utc};
use storefront_common::Cents;
use storefront_engine::{
    db_types::{Order, OrderStatusType, Payment, PaymentMethod},
    events::EventProducers,
    traits::{SettlementResult, ShopDatabaseError},
    OrderFlowApi,
};

use super::helpers::post_request;
use crate::endpoint_tests::mocks::MockBackend;

#[actix_web::test]
async fn partial_payment_reports_the_outstanding_balance() {
    let _ = env_logger::try_init().ok();
    let payload = serde_json::json!({"order_id": 1, "method": "PIX", "amount_cents": 3000});
    let (status, body) = post_request("/payments", payload, configure_partial).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"success":true,"message":"Payment recorded. R$20.00 outstanding"}"#);
}

#[actix_web::test]
async fn settling_payment_reports_the_settlement() {
    let _ = env_logger::try_init().ok();
    let payload = serde_json::json!({"order_id": 1, "method": "CARD", "amount_cents": 2000});
    let (status, body) = post_request("/payments", payload, configure_settled).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"success":true,"message":"Order #1 is paid in full"}"#);
}

#[actix_web::test]
async fn settled_orders_reject_payments() {
    let _ = env_logger::try_init().ok();
    let payload = serde_json::json!({"order_id": 1, "method": "PIX", "amount_cents": 100});
    let (status, body) = post_request("/payments", payload, configure_already_settled).await.expect("Request failed");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Order 1 is already paid"}"#);
}

#[actix_web::test]
async fn unknown_orders_reject_payments() {
    let _ = env_logger::try_init().ok();
    let payload = serde_json::json!({"order_id": 55, "method": "PIX", "amount_cents": 100});
    let (status, body) = post_request("/payments", payload, configure_unknown_order).await.expect("Request failed");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Order 55 not found"}"#);
}

#[actix_web::test]
async fn non_positive_amounts_are_rejected() {
    let _ = env_logger::try_init().ok();
    let payload = serde_json::json!({"order_id": 1, "method": "PIX", "amount_cents": 0});
    let (status, body) = post_request("/payments", payload, configure_no_backend_call).await.expect("Request failed");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Payment amount must be greater than zero"}"#);
}

#[actix_web::test]
async fn blank_payment_methods_are_rejected() {
    let _ = env_logger::try_init().ok();
    let payload = serde_json::json!({"order_id": 1, "method": "  ", "amount_cents": 1000});
    let (status, body) = post_request("/payments", payload, configure_no_backend_call).await.expect("Request failed");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Could not read request body: Payment method cannot be empty"}"#);
}

fn order_with_status(status: OrderStatusType) -> Order {
    Order {
        id: 1,
        customer_id: 1,
        status,
        created_at: Utc.with_ymd_and_hms(2026, 3, 15, 10, 30, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2026, 3, 15, 10, 30, 0).unwrap(),
    }
}

fn settlement(status: OrderStatusType, method: &str, total: i64, paid: i64, amount: i64) -> SettlementResult {
    SettlementResult {
        payment: Payment {
            id: 1,
            order_id: 1,
            method: method.parse::<PaymentMethod>().unwrap(),
            amount_cents: Cents::from(amount),
            paid_at: Utc.with_ymd_and_hms(2026, 3, 16, 9, 0, 0).unwrap(),
        },
        order: order_with_status(status),
        total_cents: Cents::from(total),
        paid_cents: Cents::from(paid),
    }
}

fn payment_route(cfg: &mut ServiceConfig, backend: MockBackend) {
    let api = OrderFlowApi::new(backend, EventProducers::default());
    cfg.service(web::resource("/payments").route(web::post().to(crate::routes::register_payment::<MockBackend>)))
        .app_data(web::Data::new(api));
}

fn configure_partial(cfg: &mut ServiceConfig) {
    let mut backend = MockBackend::new();
    backend
        .expect_process_new_payment()
        .returning(|_| Ok(settlement(OrderStatusType::New, "PIX", 5000, 3000, 3000)));
    payment_route(cfg, backend);
}

fn configure_settled(cfg: &mut ServiceConfig) {
    let mut backend = MockBackend::new();
    backend
        .expect_process_new_payment()
        .returning(|_| Ok(settlement(OrderStatusType::Paid, "CARD", 5000, 5000, 2000)));
    payment_route(cfg, backend);
}

fn configure_already_settled(cfg: &mut ServiceConfig) {
    let mut backend = MockBackend::new();
    backend.expect_process_new_payment().returning(|_| Err(ShopDatabaseError::OrderAlreadySettled(1)));
    payment_route(cfg, backend);
}

fn configure_unknown_order(cfg: &mut ServiceConfig) {
    let mut backend = MockBackend::new();
    backend.expect_process_new_payment().returning(|p| Err(ShopDatabaseError::OrderNotFound(p.order_id)));
    payment_route(cfg, backend);
}

// Input validation fails before the backend is consulted, so no expectations are set here.
fn configure_no_backend_call(cfg: &mut ServiceConfig) {
    payment_route(cfg, MockBackend::new());
}
