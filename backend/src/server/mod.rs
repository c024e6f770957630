//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerSettings;
pub use state_builders::AppPorts;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use destinate::Trace;
#[cfg(debug_assertions)]
use destinate::doc::ApiDoc;
use destinate::inbound::http::api_scope;
use destinate::inbound::http::health::{HealthState, live, ready};
use destinate::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
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
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Seed demo data when the settings ask for it.
///
/// Seeding failures are logged and the server starts anyway.
pub async fn seed_if_enabled(settings: &ServerSettings, ports: &AppPorts) {
    if !settings.seed_sample_data {
        return;
    }
    match ports.seeder().seed().await {
        Ok(seeded) => info!(
            username = %seeded.user.username(),
            itinerary_id = %seeded.itinerary.id(),
            "sample data ready"
        ),
        Err(err) => warn!(error = %err, "sample data seeding failed"),
    }
}

/// Construct an Actix HTTP server over the given ports.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    ports: &AppPorts,
    settings: &ServerSettings,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(ports.http_state());
    let bind_addr = settings.bind_addr();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;

    fn data() -> (web::Data<HealthState>, web::Data<HttpState>) {
        let ports = AppPorts::in_memory().expect("ports");
        (
            web::Data::new(HealthState::new()),
            web::Data::new(ports.http_state()),
        )
    }

    #[rstest]
    #[case("/api/destinations/search", StatusCode::OK)]
    #[case("/api/itineraries", StatusCode::OK)]
    #[case("/health/live", StatusCode::OK)]
    #[case("/health/ready", StatusCode::SERVICE_UNAVAILABLE)]
    #[case("/nowhere", StatusCode::NOT_FOUND)]
    #[actix_web::test]
    async fn app_routes_requests(#[case] uri: &str, #[case] expected: StatusCode) {
        let (health, http) = data();
        let app = actix_test::init_service(build_app(health, http)).await;

        let request = actix_test::TestRequest::get().uri(uri).to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn responses_carry_a_trace_id() {
        let (health, http) = data();
        let app = actix_test::init_service(build_app(health, http)).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/destinations/tokyo")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert!(response.headers().contains_key("trace-id"));
    }
}
