//! AWS Lambda handler exposing the reserving calculators over HTTP
//!
//! Routes POST requests by path to the four core operations plus a full
//! chain-ladder run. Validation failures come back as 400s with a
//! structured error body, internal numeric faults as 500s.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use chrono::NaiveDate;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use reserving_system::{
    bornhuetter_ferguson, compute_ibnr, project_ultimate, run_chain_ladder,
    average_development_factors, ErrorKind, ReservingError, Triangle,
};
use serde::{Deserialize, Serialize};

/// Raw triangle cells: one inner vector per origin row, `null` = unobserved.
#[derive(Debug, Deserialize)]
pub struct TriangleRequest {
    pub data: Vec<Vec<Option<f64>>>,
}

#[derive(Debug, Serialize)]
pub struct TriangleResponse {
    pub message: String,
    pub data: Vec<f64>,
}

/// Seed loss plus the ordered factors to compound it through.
#[derive(Debug, Deserialize)]
pub struct UltimateLossRequest {
    pub seed: f64,
    pub factors: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct UltimateLossResponse {
    pub message: String,
    pub data: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub struct IbnrRequest {
    pub paid_to_date: f64,
    pub ultimate: f64,
}

#[derive(Debug, Serialize)]
pub struct IbnrResponse {
    pub message: String,
    #[serde(rename = "IBNR")]
    pub ibnr: f64,
}

/// BF inputs, field names matching the calling frontend.
#[derive(Debug, Deserialize)]
pub struct BfRequest {
    #[serde(rename = "RL")]
    pub reported: f64,
    #[serde(rename = "Premium_Earned")]
    pub premium_earned: f64,
    #[serde(rename = "ELR")]
    pub elr: f64,
    #[serde(rename = "LDF")]
    pub ldf: f64,
    #[serde(rename = "EL", default)]
    pub expected_override: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct BfResponse {
    pub message: String,
    #[serde(rename = "BF")]
    pub bf: f64,
    pub inputs: BfInputsEcho,
}

#[derive(Debug, Serialize)]
pub struct BfInputsEcho {
    #[serde(rename = "RL")]
    pub reported: f64,
    #[serde(rename = "Premium_Earned")]
    pub premium_earned: f64,
    #[serde(rename = "ELR")]
    pub elr: f64,
    #[serde(rename = "LDF")]
    pub ldf: f64,
    #[serde(rename = "EL")]
    pub expected_loss: f64,
}

#[derive(Debug, Deserialize)]
pub struct ChainLadderRequest {
    pub data: Vec<Vec<Option<f64>>>,
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    let body = serde_json::json!({ "error": message }).to_string();
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(body))
        .unwrap()
}

fn json_response<T: Serialize>(body: &T) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Map a reserving error to a client or server error response.
fn reserving_error_response(err: &ReservingError) -> Response<Body> {
    let status = match err.kind() {
        ErrorKind::Validation => 400,
        ErrorKind::Computation => 500,
    };
    error_response(status, &err.to_string())
}

fn parse_body<'a, T: Deserialize<'a>>(body: &'a str) -> Result<T, Response<Body>> {
    serde_json::from_str(body).map_err(|e| error_response(400, &format!("Invalid JSON: {}", e)))
}

fn triangle_route(body: &str) -> Response<Body> {
    let request: TriangleRequest = match parse_body(body) {
        Ok(r) => r,
        Err(response) => return response,
    };

    let factors = Triangle::new(request.data).and_then(|t| average_development_factors(&t));
    match factors {
        Ok(data) => json_response(&TriangleResponse {
            message: "Triangle array processed successfully".to_string(),
            data,
        }),
        Err(e) => reserving_error_response(&e),
    }
}

fn ultimate_loss_route(body: &str) -> Response<Body> {
    let request: UltimateLossRequest = match parse_body(body) {
        Ok(r) => r,
        Err(response) => return response,
    };

    json_response(&UltimateLossResponse {
        message: "Ultimate loss array processed successfully".to_string(),
        data: project_ultimate(request.seed, &request.factors),
    })
}

fn ibnr_route(body: &str) -> Response<Body> {
    let request: IbnrRequest = match parse_body(body) {
        Ok(r) => r,
        Err(response) => return response,
    };

    json_response(&IbnrResponse {
        message: "IBNR calculated successfully".to_string(),
        ibnr: compute_ibnr(request.ultimate, request.paid_to_date),
    })
}

fn bf_route(body: &str) -> Response<Body> {
    let request: BfRequest = match parse_body(body) {
        Ok(r) => r,
        Err(response) => return response,
    };

    match bornhuetter_ferguson(
        request.reported,
        request.premium_earned,
        request.elr,
        request.ldf,
        request.expected_override,
    ) {
        Ok(estimate) => json_response(&BfResponse {
            message: "Simulation processed successfully".to_string(),
            bf: estimate.estimate,
            inputs: BfInputsEcho {
                reported: request.reported,
                premium_earned: request.premium_earned,
                elr: request.elr,
                ldf: request.ldf,
                expected_loss: estimate.expected_loss,
            },
        }),
        Err(e) => reserving_error_response(&e),
    }
}

fn chain_ladder_route(body: &str) -> Response<Body> {
    let request: ChainLadderRequest = match parse_body(body) {
        Ok(r) => r,
        Err(response) => return response,
    };

    let report = Triangle::new(request.data).and_then(|t| run_chain_ladder(&t, request.as_of));
    match report {
        Ok(report) => json_response(&report),
        Err(e) => reserving_error_response(&e),
    }
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    let body = event.body();
    let body_str = match body {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let response = match event.uri().path() {
        "/triangle" => triangle_route(&body_str),
        "/ultimate_loss" => ultimate_loss_route(&body_str),
        "/IBNR" => ibnr_route(&body_str),
        "/bf_simulation" => bf_route(&body_str),
        "/chain_ladder" => chain_ladder_route(&body_str),
        other => error_response(404, &format!("Unknown route: {}", other)),
    };

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
