use actix_web::{http::StatusCode, web, web::ServiceConfig};
use storefront_common::Cents;
use storefront_engine::{db_types::Product, CatalogApi};

use super::helpers::get_request;
use crate::endpoint_tests::mocks::MockCatalog;

#[actix_web::test]
async fn list_products() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/products", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, PRODUCTS_JSON);
}

#[actix_web::test]
async fn query_string_filters_reach_the_catalog() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        get_request("/products?category=Livros&active=true", configure_filtered).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

fn configure(cfg: &mut ServiceConfig) {
    let mut catalog = MockCatalog::new();
    catalog.expect_search_products().returning(|_| Ok(product_list()));
    let api = CatalogApi::new(catalog);
    cfg.service(web::resource("/products").route(web::get().to(crate::routes::products::<MockCatalog>)))
        .app_data(web::Data::new(api));
}

fn configure_filtered(cfg: &mut ServiceConfig) {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_search_products()
        .withf(|query| query.category.as_deref() == Some("Livros") && query.active == Some(true) && query.name.is_none())
        .returning(|_| Ok(vec![]));
    let api = CatalogApi::new(catalog);
    cfg.service(web::resource("/products").route(web::get().to(crate::routes::products::<MockCatalog>)))
        .app_data(web::Data::new(api));
}

// Mock response to `search_products` call
fn product_list() -> Vec<Product> {
    vec![
        Product {
            id: 3,
            name: "Mouse Sem Fio".to_string(),
            category: "Eletrônicos".to_string(),
            price_cents: Cents::from(8990),
            active: true,
        },
        Product {
            id: 9,
            name: "Ukulele Soprano".to_string(),
            category: "Instrumentos".to_string(),
            price_cents: Cents::from(24990),
            active: true,
        },
    ]
}

const PRODUCTS_JSON: &str = r#"[{"id":3,"name":"Mouse Sem Fio","category":"Eletrônicos","price_cents":8990,"active":true},{"id":9,"name":"Ukulele Soprano","category":"Instrumentos","price_cents":24990,"active":true}]"#;
