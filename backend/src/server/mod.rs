//! Server construction and route wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

#[cfg(debug_assertions)]
use utoipa::OpenApi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::auth::{login, sign_up};
use crate::inbound::http::error::{json_error_handler, path_error_handler, query_error_handler};
use crate::inbound::http::events::{
    create_event, get_event, list_place_events, modify_event, remove_event, search_events,
};
use crate::inbound::http::fallback::unmatched_route;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::places::{
    create_place, get_place, list_places, modify_place, remove_place,
};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{
    DbPool, DieselEventRepository, DieselEventSearch, DieselPlaceRepository,
};

/// Wire the domain services to their Diesel-backed adapters.
#[must_use]
pub fn build_http_state(pool: &DbPool) -> HttpState {
    HttpState::new(
        Arc::new(DieselPlaceRepository::new(pool.clone())),
        Arc::new(DieselEventRepository::new(pool.clone())),
        Arc::new(DieselEventSearch::new(pool.clone())),
    )
}

/// Assemble the application: extractor error handlers, the `/api` scope,
/// health probes, and the catch-all for unmatched routes.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(list_places)
        .service(create_place)
        .service(get_place)
        .service(modify_place)
        .service(remove_place)
        .service(list_place_events)
        .service(search_events)
        .service(create_event)
        .service(get_event)
        .service(modify_event)
        .service(remove_event)
        .service(sign_up)
        .service(login);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .service(api)
        .service(ready)
        .service(live)
        .default_service(web::route().to(unmatched_route));

    #[cfg(debug_assertions)]
    let app = app.route(
        "/api-docs/openapi.json",
        web::get().to(|| async { web::Json(ApiDoc::openapi()) }),
    );

    app
}

/// Construct an Actix HTTP server from the configuration.
///
/// The returned [`Server`] must be awaited to drive the listener. Readiness
/// is flipped once the socket is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config.db_pool));
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
