// system-tests/tests/helpers/users_stub.rs
// ============================================================================
// Module: Users Service Stub
// Description: In-process stub of the users resource with fault injection.
// Purpose: Exercise the full contract cycle without the external service.
// Dependencies: axum, serde_json, tokio
// ============================================================================

//! ## Overview
//! The stub serves the three exercised routes of the users collection: seed
//! reads, create echoes with a generated id, and update echoes. Faults are
//! injected per route to provoke every failure class the verifier reports:
//! wrong statuses, mutated or dropped fields, and non-JSON bodies.

use std::net::TcpListener as StdTcpListener;
use std::thread;

use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::routing::post;
use serde_json::Value;
use serde_json::json;
use tokio::runtime::Builder;
use tokio::sync::oneshot;

// ============================================================================
// SECTION: Fault Injection
// ============================================================================

/// Per-route faults the stub can inject.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubFaults {
    /// Override the read status (default 200).
    pub read_status: Option<u16>,
    /// Override the create status (default 201).
    pub create_status: Option<u16>,
    /// Override the update status (default 200).
    pub update_status: Option<u16>,
    /// Serve the seed record with a mutated `name` value.
    pub mutate_read_name: bool,
    /// Serve the seed record without its `company` field.
    pub drop_read_company: bool,
    /// Serve the seed record without the `zipcode` address key.
    pub drop_read_zipcode: bool,
    /// Serve a non-JSON body on reads.
    pub plain_text_read: bool,
    /// Echo create payloads without injecting a generated id.
    pub omit_created_id: bool,
    /// Echo update payloads with a mutated `email` value.
    pub tamper_update_email: bool,
}

// ============================================================================
// SECTION: Stub Handle
// ============================================================================

/// Handle for the spawned users-service stub.
pub struct UsersStubHandle {
    /// Base URL of the stub, without a trailing slash.
    base_url: String,
    /// Graceful shutdown trigger.
    shutdown: Option<oneshot::Sender<()>>,
    /// Server thread join handle.
    join: Option<thread::JoinHandle<()>>,
}

impl UsersStubHandle {
    /// Returns the stub base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for UsersStubHandle {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

// ============================================================================
// SECTION: Spawning
// ============================================================================

/// Spawns a users-service stub with the given faults.
pub fn spawn_users_stub(faults: StubFaults) -> Result<UsersStubHandle, String> {
    let listener = StdTcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("users stub bind failed: {err}"))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("users stub listener nonblocking failed: {err}"))?;
    let addr = listener.local_addr().map_err(|err| format!("users stub local addr failed: {err}"))?;
    let base_url = format!("http://{addr}");

    let app = Router::new()
        .route("/users", post(create_user))
        .route("/users/:id", get(read_user).put(update_user))
        .with_state(faults);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = thread::spawn(move || {
        let runtime = match Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => runtime,
            Err(error) => {
                let _ = error;
                return;
            }
        };
        runtime.block_on(async move {
            let listener = match tokio::net::TcpListener::from_std(listener) {
                Ok(listener) => listener,
                Err(error) => {
                    let _ = error;
                    return;
                }
            };
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            let _ = server.await;
        });
    });
    Ok(UsersStubHandle {
        base_url,
        shutdown: Some(shutdown_tx),
        join: Some(join),
    })
}

// ============================================================================
// SECTION: Route Handlers
// ============================================================================

/// Serves the seed record with any configured read faults applied.
async fn read_user(State(faults): State<StubFaults>, Path(id): Path<u64>) -> Response {
    if id != 1 {
        return (StatusCode::NOT_FOUND, Json(json!({}))).into_response();
    }
    let status = status_or(faults.read_status, StatusCode::OK);
    if faults.plain_text_read {
        return (status, "service under maintenance").into_response();
    }
    let mut body = seed_user();
    if faults.mutate_read_name {
        body["name"] = json!("Ervin Howell");
    }
    if faults.drop_read_company
        && let Some(record) = body.as_object_mut()
    {
        record.remove("company");
    }
    if faults.drop_read_zipcode
        && let Some(address) = body["address"].as_object_mut()
    {
        address.remove("zipcode");
    }
    (status, Json(body)).into_response()
}

/// Echoes the create payload with a generated id unless faulted.
async fn create_user(State(faults): State<StubFaults>, Json(mut body): Json<Value>) -> Response {
    let status = status_or(faults.create_status, StatusCode::CREATED);
    if !faults.omit_created_id
        && let Some(record) = body.as_object_mut()
    {
        record.insert("id".to_string(), json!(11));
    }
    (status, Json(body)).into_response()
}

/// Echoes the update payload unless faulted.
async fn update_user(
    State(faults): State<StubFaults>,
    Path(_id): Path<u64>,
    Json(mut body): Json<Value>,
) -> Response {
    let status = status_or(faults.update_status, StatusCode::OK);
    if faults.tamper_update_email
        && let Some(record) = body.as_object_mut()
    {
        record.insert("email".to_string(), json!("tampered@example.com"));
    }
    (status, Json(body)).into_response()
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves a fault status override into a status code.
fn status_or(override_status: Option<u16>, default: StatusCode) -> StatusCode {
    override_status.and_then(|code| StatusCode::from_u16(code).ok()).unwrap_or(default)
}

/// Returns the seed user record as the demo service renders it.
pub fn seed_user() -> Value {
    json!({
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": {"lat": "-37.3159", "lng": "81.1496"}
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    })
}
