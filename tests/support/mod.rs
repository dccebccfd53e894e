//! In-memory NSoT service used by the integration tests.
//!
//! The CRUD contract exercised by the client and CLI lives in an external
//! service. For tests, a stateful wiremock responder stands in for it,
//! implementing exactly the surface the tests need: (site, name) uniqueness,
//! default-site assignment, partial updates, and not-found for unknown
//! (id, site) pairs. Error bodies use the `{"error": {"code", "message"}}`
//! envelope.

use std::sync::Mutex;

use serde_json::json;
use wiremock::http::Method;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// The exact uniqueness-violation message produced by the server.
pub const UNIQUE_ERROR: &str = "The fields site, name must make a unique set.";

/// Site assigned when a create omits the site.
const DEFAULT_SITE: u64 = 1;

#[derive(Debug, Clone)]
struct Record {
    id: u64,
    name: String,
    description: String,
    site_id: u64,
}

impl Record {
    fn to_json(&self) -> serde_json::Value {
        json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "site_id": self.site_id,
        })
    }
}

#[derive(Debug, Default)]
struct ServiceState {
    next_id: u64,
    records: Vec<Record>,
}

/// Stateful responder implementing the protocol-types CRUD contract.
#[derive(Debug)]
pub struct ProtocolTypeService {
    state: Mutex<ServiceState>,
}

impl ProtocolTypeService {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ServiceState {
                next_id: 1,
                records: Vec::new(),
            }),
        }
    }

    fn error(code: u16, message: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(code).set_body_json(json!({
            "error": { "code": code, "message": message }
        }))
    }

    fn not_found() -> ResponseTemplate {
        Self::error(404, json!("No such protocol_type found!"))
    }

    fn handle_collection(&self, request: &Request) -> ResponseTemplate {
        if request.method == Method::GET {
            let mut name = None;
            let mut site_id = None;
            let mut id = None;
            for (key, value) in request.url.query_pairs() {
                match key.as_ref() {
                    "name" => name = Some(value.to_string()),
                    "site_id" => site_id = value.parse::<u64>().ok(),
                    "id" => id = value.parse::<u64>().ok(),
                    _ => {}
                }
            }

            let state = self.state.lock().unwrap();
            let matches: Vec<serde_json::Value> = state
                .records
                .iter()
                .filter(|r| name.as_ref().map_or(true, |n| &r.name == n))
                .filter(|r| site_id.map_or(true, |s| r.site_id == s))
                .filter(|r| id.map_or(true, |i| r.id == i))
                .map(Record::to_json)
                .collect();

            ResponseTemplate::new(200).set_body_json(serde_json::Value::Array(matches))
        } else if request.method == Method::POST {
            let Ok(body) = serde_json::from_slice::<serde_json::Value>(&request.body) else {
                return Self::error(400, json!("Invalid JSON body."));
            };
            let Some(name) = body.get("name").and_then(|v| v.as_str()) else {
                return Self::error(400, json!({"name": ["This field is required."]}));
            };
            let description = body
                .get("description")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            let site_id = body
                .get("site_id")
                .and_then(serde_json::Value::as_u64)
                .unwrap_or(DEFAULT_SITE);

            let mut state = self.state.lock().unwrap();
            if state
                .records
                .iter()
                .any(|r| r.site_id == site_id && r.name == name)
            {
                return Self::error(400, json!({"__all__": [UNIQUE_ERROR]}));
            }

            let record = Record {
                id: state.next_id,
                name: name.to_string(),
                description,
                site_id,
            };
            state.next_id += 1;
            let body = record.to_json();
            state.records.push(record);

            ResponseTemplate::new(201).set_body_json(body)
        } else {
            Self::error(405, json!("Method not allowed."))
        }
    }

    fn handle_member(&self, request: &Request, id: u64) -> ResponseTemplate {
        let site_id = request
            .url
            .query_pairs()
            .find(|(key, _)| key == "site_id")
            .and_then(|(_, value)| value.parse::<u64>().ok());

        if request.method == Method::GET {
            let state = self.state.lock().unwrap();
            state.records.iter().find(|r| r.id == id).map_or_else(
                Self::not_found,
                |record| ResponseTemplate::new(200).set_body_json(record.to_json()),
            )
        } else if request.method == Method::PATCH {
            let Some(site_id) = site_id else {
                return Self::error(400, json!({"site_id": ["This field is required."]}));
            };
            let Ok(body) = serde_json::from_slice::<serde_json::Value>(&request.body) else {
                return Self::error(400, json!("Invalid JSON body."));
            };

            let mut state = self.state.lock().unwrap();
            let Some(record) = state
                .records
                .iter_mut()
                .find(|r| r.id == id && r.site_id == site_id)
            else {
                return Self::not_found();
            };

            if let Some(name) = body.get("name").and_then(|v| v.as_str()) {
                record.name = name.to_string();
            }
            if let Some(description) = body.get("description").and_then(|v| v.as_str()) {
                record.description = description.to_string();
            }

            ResponseTemplate::new(200).set_body_json(record.to_json())
        } else if request.method == Method::DELETE {
            let Some(site_id) = site_id else {
                return Self::error(400, json!({"site_id": ["This field is required."]}));
            };

            let mut state = self.state.lock().unwrap();
            let before = state.records.len();
            state.records.retain(|r| !(r.id == id && r.site_id == site_id));
            if state.records.len() == before {
                return Self::not_found();
            }

            ResponseTemplate::new(204)
        } else {
            Self::error(405, json!("Method not allowed."))
        }
    }
}

impl Respond for ProtocolTypeService {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        // All endpoints require the identifying email header.
        if request.headers.get("X-NSoT-Email").is_none() {
            return Self::error(401, json!("Authentication credentials were not provided."));
        }

        // Reject trailing slashes outright so the tests catch any
        // append-slash regression in URL composition.
        if request.url.path().ends_with('/') {
            return Self::error(404, json!("Not found."));
        }

        let segments: Vec<&str> = request
            .url
            .path()
            .trim_start_matches('/')
            .split('/')
            .collect();

        match segments.as_slice() {
            ["protocol_types"] => self.handle_collection(request),
            ["protocol_types", id] => match id.parse::<u64>() {
                Ok(id) => self.handle_member(request, id),
                Err(_) => Self::not_found(),
            },
            ["sites"] if request.method == Method::GET => ResponseTemplate::new(200)
                .set_body_json(json!([
                    {"id": DEFAULT_SITE, "name": "Default Site", "description": ""}
                ])),
            ["sites", id] if request.method == Method::GET => match id.parse::<u64>() {
                Ok(DEFAULT_SITE) => ResponseTemplate::new(200).set_body_json(json!(
                    {"id": DEFAULT_SITE, "name": "Default Site", "description": ""}
                )),
                _ => Self::error(404, json!("No such site found!")),
            },
            _ => Self::error(404, json!("Not found.")),
        }
    }
}

/// Starts a mock NSoT service with empty protocol-types state.
pub async fn start_nsot_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ProtocolTypeService::new())
        .mount(&server)
        .await;
    server
}
