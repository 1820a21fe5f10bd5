//! AWS Lambda handler for running a policy stress test
//!
//! Accepts a run-simulation request via API Gateway (proxy integration) and
//! returns the stress report as JSON. Parameters extracted upstream may be
//! supplied inline; anything missing falls back to the standard defaults.

use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use aws_lambda_events::http::{HeaderMap, HeaderValue};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use fiscal_stress::{ExtractedParameters, ScenarioRunner, SimulationRequest, StressError, StressReport};

/// Request body: the simulation request plus optional extracted parameters
#[derive(Debug, Deserialize)]
pub struct HandlerRequest {
    #[serde(flatten)]
    pub request: SimulationRequest,

    #[serde(default)]
    pub extracted: ExtractedParameters,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// JSON content type plus open CORS, sent on every response
fn response_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("POST, OPTIONS"));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("Content-Type"));
    headers
}

fn response(status: i64, body: String) -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code: status,
        headers: response_headers(),
        body: Some(Body::Text(body)),
        ..Default::default()
    }
}

fn error_response(status: i64, message: String) -> ApiGatewayProxyResponse {
    let body = serde_json::to_string(&ErrorBody { error: message.clone() })
        .unwrap_or_else(|_| format!(r#"{{"error":"{}"}}"#, message));
    response(status, body)
}

/// CORS preflight answer
fn preflight() -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code: 200,
        headers: response_headers(),
        ..Default::default()
    }
}

/// Request body as text, decoding base64 when API Gateway flags it
fn request_body(request: &ApiGatewayProxyRequest) -> Result<String, String> {
    let Some(body) = request.body.as_deref() else {
        return Ok("{}".to_string());
    };

    if !request.is_base64_encoded {
        return Ok(body.to_string());
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| format!("Invalid base64 body: {}", e))?;
    String::from_utf8(bytes).map_err(|e| format!("Body is not UTF-8: {}", e))
}

/// Parse, run and package one request; never fails, errors become 4xx/5xx
fn process(body: &str, runner: &ScenarioRunner) -> ApiGatewayProxyResponse {
    let request: HandlerRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => return error_response(400, format!("Invalid JSON: {}", e)),
    };

    let result = match runner.run_request(&request.request, &request.extracted) {
        Ok(r) => r,
        Err(StressError::InvalidInput(e)) => {
            warn!("Rejected policy {}: {}", request.request.policy_id, e);
            return error_response(400, format!("Invalid input: {}", e));
        }
        Err(e) => return error_response(500, e.to_string()),
    };

    info!(
        "Policy {}: score={} ({})",
        request.request.policy_id, result.fiscal_strain_score, result.risk_category
    );

    let report = StressReport::new(request.request.policy_id, result);
    match serde_json::to_string(&report) {
        Ok(json) => response(200, json),
        Err(e) => error_response(500, format!("Failed to serialize report: {}", e)),
    }
}

/// Route one API Gateway event
fn dispatch(request: &ApiGatewayProxyRequest, runner: &ScenarioRunner) -> ApiGatewayProxyResponse {
    if request.http_method.as_str() == "OPTIONS" {
        return preflight();
    }

    match request_body(request) {
        Ok(body) => process(&body, runner),
        Err(message) => error_response(400, message),
    }
}

/// Lambda handler function
async fn handler(event: LambdaEvent<ApiGatewayProxyRequest>) -> Result<ApiGatewayProxyResponse, Error> {
    let runner = ScenarioRunner::new();
    Ok(dispatch(&event.payload, &runner))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
