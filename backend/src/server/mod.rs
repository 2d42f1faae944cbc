//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, ServerSettings};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;

use cruzo_backend::Trace;
#[cfg(debug_assertions)]
use cruzo_backend::doc::ApiDoc;
use cruzo_backend::domain::site::SiteContent;
use cruzo_backend::inbound::http::configure;
use cruzo_backend::inbound::http::health::{HealthState, live, ready};
use cruzo_backend::inbound::http::state::HttpState;
use cruzo_backend::outbound::memory::MemStore;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(ready)
        .service(live)
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Build the shared store and handler state.
///
/// Every worker gets a clone of the same `web::Data`, so all of them see one
/// store.
fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let store = Arc::new(MemStore::new(Arc::new(DefaultClock)));
    let site = Arc::new(SiteContent::cruzo(config.contact.clone()));
    web::Data::new(HttpState::new(store.clone(), store, site))
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr())?
    .run();

    info!(bind_addr = %config.bind_addr(), "listening");
    health_state.mark_ready();
    Ok(server)
}
