use std::{future::Future, path::Path, pin::Pin, time::Duration};

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use log::*;
use storefront_engine::{
    events::{EventHandlers, EventHooks, EventProducers},
    CatalogApi, OrderFlowApi, OrderQueryApi, SqliteDatabase,
};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    routes::{self, health},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    if let Some(dir) = config.database_url.strip_prefix("sqlite://").and_then(|p| Path::new(p).parent()) {
        std::fs::create_dir_all(dir).ok();
    }
    let db = SqliteDatabase::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    if config.auto_migrate {
        db.run_migrations().await.map_err(|e| ServerError::InitializeError(e.to_string()))?;
    }

    let mut hooks = EventHooks::default();
    hooks.on_order_paid(|event| {
        Box::pin(async move {
            info!("💸️ Order #{} has been paid in full", event.order.id);
        }) as Pin<Box<dyn Future<Output = ()> + Send>>
    });
    let handlers = EventHandlers::new(32, hooks);
    let producers = handlers.producers();
    handlers.start_handlers().await;

    let srv = create_server_instance(config, db, producers)?;
    Ok(srv.await?)
}

pub fn create_server_instance(
    config: ServerConfig,
    db: SqliteDatabase,
    producers: EventProducers,
) -> Result<Server, ServerError> {
    let srv = HttpServer::new(move || {
        let order_flow_api = OrderFlowApi::new(db.clone(), producers.clone());
        let order_query_api = OrderQueryApi::new(db.clone());
        let catalog_api = CatalogApi::new(db.clone());
        let api_scope = web::scope("/api")
            .service(web::resource("/products").route(web::get().to(routes::products::<SqliteDatabase>)))
            .service(
                web::resource("/orders")
                    .route(web::get().to(routes::order_summaries::<SqliteDatabase>))
                    .route(web::post().to(routes::create_order::<SqliteDatabase>)),
            )
            .service(web::resource("/orders/{id}").route(web::get().to(routes::order_by_id::<SqliteDatabase>)))
            .service(web::resource("/payments").route(web::post().to(routes::register_payment::<SqliteDatabase>)));
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("sfs::access_log"))
            .app_data(web::Data::new(order_flow_api))
            .app_data(web::Data::new(order_query_api))
            .app_data(web::Data::new(catalog_api))
            .service(health)
            .service(api_scope)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
