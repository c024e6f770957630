//! Running-server harness shared by the HTTP behaviour suites.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. Dropping the `WorldFixture` stops the
//! server even if a step panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

use destinate::Trace;
use destinate::domain::{DestinationCatalogueService, ItineraryCommandService, ItineraryQueryService};
use destinate::inbound::http::api_scope;
use destinate::inbound::http::state::HttpState;
use destinate::outbound::catalogue::StaticDestinationRepository;
use destinate::outbound::memory::InMemoryItineraryRepository;

pub(crate) struct ApiWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: String,
    pub(crate) server: ServerHandle,
    pub(crate) bearer: Option<String>,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) last_trace_id: Option<String>,
    pub(crate) remembered_id: Option<String>,
}

pub(crate) type SharedWorld = Rc<RefCell<ApiWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        let ctx = self.world.borrow();
        let server = ctx.server.clone();
        ctx.local.block_on(&ctx.runtime, async move {
            server.stop(true).await;
        });
    }
}

/// Run `operation` on the world's runtime with the server base URL.
pub(crate) fn with_world_async<R, F>(world: &SharedWorld, operation: impl FnOnce(String) -> F) -> R
where
    F: std::future::Future<Output = R>,
{
    let ctx = world.borrow();
    let base_url = ctx.base_url.clone();
    ctx.local.block_on(&ctx.runtime, operation(base_url))
}

fn in_memory_state() -> HttpState {
    let catalogue =
        Arc::new(StaticDestinationRepository::new().expect("built-in catalogue is valid"));
    let itineraries = Arc::new(InMemoryItineraryRepository::new());
    HttpState::new(
        Arc::new(DestinationCatalogueService::new(catalogue)),
        Arc::new(ItineraryCommandService::new(
            Arc::clone(&itineraries),
            Arc::new(DefaultClock),
        )),
        Arc::new(ItineraryQueryService::new(itineraries)),
    )
}

async fn spawn_server(state: HttpState) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;
    let data = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(Trace)
            .service(api_scope())
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

/// Fresh server over empty itinerary storage.
pub(crate) fn world() -> WorldFixture {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();
    let (base_url, server) = local
        .block_on(&runtime, spawn_server(in_memory_state()))
        .expect("server should start");

    WorldFixture {
        world: Rc::new(RefCell::new(ApiWorld {
            runtime,
            local,
            base_url,
            server,
            bearer: None,
            last_status: None,
            last_body: None,
            last_trace_id: None,
            remembered_id: None,
        })),
    }
}
