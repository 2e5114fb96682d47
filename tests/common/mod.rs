//! In-process stand-in for the remote customers service.

use std::collections::HashMap;
use std::sync::Mutex;

use actix_web::http::header::CONTENT_TYPE;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

#[derive(Default)]
struct Backend {
    customers: Vec<Value>,
    next_id: i64,
    content_types: Vec<Option<String>>,
    queries: Vec<String>,
}

impl Backend {
    fn record(&mut self, req: &HttpRequest) {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        self.content_types.push(content_type);
    }

    fn insert(&mut self, mut customer: Value) -> Value {
        self.next_id += 1;
        customer["id"] = json!(self.next_id);
        self.customers.push(customer.clone());
        customer
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.customers
            .iter()
            .position(|customer| customer["id"].to_string() == id)
    }
}

type SharedBackend = web::Data<Mutex<Backend>>;

fn not_found(id: &str) -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "message": format!("Customer with id '{id}' was not found.")
    }))
}

fn flatten(customer: &Value) -> Value {
    let address = &customer["address"];
    json!({
        "id": customer["id"],
        "firstname": customer["firstname"],
        "lastname": customer["lastname"],
        "email": customer["email"],
        "subscribed": customer["subscribed"],
        "address1": address["address1"],
        "address2": address["address2"],
        "city": address["city"],
        "province": address["province"],
        "country": address["country"],
        "zip": address["zip"],
    })
}

async fn create(state: SharedBackend, req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    let mut backend = state.lock().unwrap();
    backend.record(&req);
    let customer = body.into_inner();
    if customer.get("id").is_some() {
        return HttpResponse::BadRequest().json(json!({"message": "id must not be supplied"}));
    }
    if customer["firstname"].as_str().unwrap_or_default().is_empty() {
        return HttpResponse::BadRequest().json(json!({"message": "firstname is required"}));
    }
    HttpResponse::Created().json(backend.insert(customer))
}

async fn list(
    state: SharedBackend,
    req: HttpRequest,
    filters: web::Query<HashMap<String, String>>,
) -> HttpResponse {
    let mut backend = state.lock().unwrap();
    backend.record(&req);
    backend.queries.push(req.query_string().to_string());
    let rows = backend
        .customers
        .iter()
        .map(flatten)
        .filter(|row| {
            filters.iter().all(|(key, value)| match &row[key] {
                Value::String(text) => text == value,
                other => other.to_string() == *value,
            })
        })
        .collect::<Vec<_>>();
    HttpResponse::Ok().json(rows)
}

async fn read(state: SharedBackend, req: HttpRequest, id: web::Path<String>) -> HttpResponse {
    let mut backend = state.lock().unwrap();
    backend.record(&req);
    match backend.position(&id) {
        Some(index) => HttpResponse::Ok().json(&backend.customers[index]),
        None => not_found(&id),
    }
}

async fn update(
    state: SharedBackend,
    req: HttpRequest,
    id: web::Path<String>,
    body: web::Json<Value>,
) -> HttpResponse {
    let mut backend = state.lock().unwrap();
    backend.record(&req);
    let Some(index) = backend.position(&id) else {
        return not_found(&id);
    };
    let mut customer = body.into_inner();
    customer["id"] = backend.customers[index]["id"].clone();
    backend.customers[index] = customer.clone();
    HttpResponse::Ok().json(customer)
}

async fn unsubscribe(state: SharedBackend, req: HttpRequest, id: web::Path<String>) -> HttpResponse {
    let mut backend = state.lock().unwrap();
    backend.record(&req);
    let Some(index) = backend.position(&id) else {
        return not_found(&id);
    };
    backend.customers[index]["subscribed"] = json!(false);
    HttpResponse::Ok().json(&backend.customers[index])
}

async fn remove(state: SharedBackend, req: HttpRequest, id: web::Path<String>) -> HttpResponse {
    let mut backend = state.lock().unwrap();
    backend.record(&req);
    match backend.position(&id) {
        Some(index) => {
            backend.customers.remove(index);
            HttpResponse::NoContent().finish()
        }
        None => not_found(&id),
    }
}

/// Running test service with access to what it observed.
pub struct TestService {
    pub base_url: String,
    state: SharedBackend,
}

impl TestService {
    /// Binds an ephemeral port and spawns the server on the current runtime.
    pub fn start() -> Self {
        let state: SharedBackend = web::Data::new(Mutex::new(Backend::default()));
        let app_state = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(app_state.clone())
                .route("/customers", web::post().to(create))
                .route("/customers", web::get().to(list))
                .route("/customers/{id}/unsubscribe", web::put().to(unsubscribe))
                .route("/customers/{id}", web::get().to(read))
                .route("/customers/{id}", web::put().to(update))
                .route("/customers/{id}", web::delete().to(remove))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn seed(&self, firstname: &str, city: &str, subscribed: bool) {
        self.state.lock().unwrap().insert(json!({
            "firstname": firstname,
            "lastname": "Doe",
            "email": format!("{}@example.com", firstname.to_lowercase()),
            "subscribed": subscribed,
            "address": {
                "address1": "1 Main St",
                "address2": "",
                "city": city,
                "province": "",
                "country": "",
                "zip": ""
            }
        }));
    }

    pub fn queries(&self) -> Vec<String> {
        self.state.lock().unwrap().queries.clone()
    }

    pub fn content_types(&self) -> Vec<Option<String>> {
        self.state.lock().unwrap().content_types.clone()
    }
}
