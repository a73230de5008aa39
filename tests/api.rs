use axum::http::StatusCode;
use axum::body::Body;
use http_body_util::BodyExt;
use tower::ServiceExt;
use serde_json::{json, Value};
use sensyva_audit::api::{build_router, create_app_state, AppState};
use sensyva_audit::config::{AuditConfig, RatesConfig};

fn create_test_state() -> AppState {
    create_app_state(AuditConfig::default())
}

fn app(state: &AppState) -> axum::Router {
    build_router(state.clone())
}

fn make_request(method: &str, uri: &str, body: Option<Value>) -> axum::http::Request<Body> {
    let builder = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    match body {
        Some(b) => builder.body(Body::from(serde_json::to_string(&b).unwrap())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn response_json(response: axum::http::Response<Body>) -> Value {
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        panic!("Empty response body. Status: {}, Headers: {:?}", parts.status, parts.headers);
    }
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("JSON parse error: {}. Body: {:?}", e, String::from_utf8_lossy(&bytes)))
}

fn reference_inputs() -> Value {
    json!({
        "annual_maintenance_budget": 50.0,
        "unplanned_downtime_hours": 800.0,
        "revenue_loss_per_hour": 2.0,
        "industry": "Energy"
    })
}

fn approx(v: &Value, expected: f64) -> bool {
    (v.as_f64().unwrap() - expected).abs() < 1e-9
}

#[tokio::test]
async fn test_health_endpoint() {
    let state = create_test_state();
    let req = make_request("GET", "/api/health", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "sensyva-audit");
}

#[tokio::test]
async fn test_list_industries() {
    let state = create_test_state();
    let req = make_request("GET", "/api/industries", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let industries = body["industries"].as_array().unwrap();
    assert_eq!(industries.len(), 5);
    assert_eq!(industries[0]["name"], "Manufacturing");
    assert_eq!(industries[4]["name"], "Other");
    assert!(industries[1]["savings_hook"].as_str().unwrap().contains("SCADA"));
}

#[tokio::test]
async fn test_calculate_impact_reference_scenario() {
    let state = create_test_state();
    let req = make_request("POST", "/api/impact", Some(reference_inputs()));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["industry"], "Energy");
    let report = &body["report"];
    assert!(approx(&report["maintenance_savings"], 32.5));
    assert!(approx(&report["downtime_cost"], 16.0));
    assert!(approx(&report["downtime_savings"], 11.2));
    assert!(approx(&report["total_savings"], 43.7));
    assert_eq!(report["maintenance_reduction_percentage"], 65);
    assert_eq!(report["downtime_reduction_percentage"], 70);
    assert_eq!(body["formatted"]["total_savings"], "₹43.70 Cr");
    assert_eq!(body["formatted"]["revenue_loss_per_hour"], "₹2.00 Lakhs");
    assert!(body["context"]["hero_stat"].as_str().unwrap().contains("turbine"));
}

#[tokio::test]
async fn test_calculate_impact_populates_cache() {
    let state = create_test_state();
    for _ in 0..3 {
        let req = make_request("POST", "/api/impact", Some(reference_inputs()));
        let response = app(&state).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    assert_eq!(state.cache.len(), 1);
}

#[tokio::test]
async fn test_calculate_impact_rejects_non_positive_input() {
    let state = create_test_state();
    let req = make_request("POST", "/api/impact", Some(json!({
        "annual_maintenance_budget": 0.0,
        "unplanned_downtime_hours": 800.0,
        "revenue_loss_per_hour": 2.0
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("Please enter values greater than zero"));
    assert_eq!(body["type"], "InvalidInputError");
}

#[tokio::test]
async fn test_calculate_impact_rejects_overflowing_input() {
    let state = create_test_state();
    let req = make_request("POST", "/api/impact", Some(json!({
        "annual_maintenance_budget": 1e300,
        "unplanned_downtime_hours": 1e300,
        "revenue_loss_per_hour": 1e300
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["type"], "InvalidInputError");
    assert!(body["error"].as_str().unwrap().contains("too large"));
}

#[tokio::test]
async fn test_calculate_impact_missing_field_uses_error_body() {
    let state = create_test_state();
    let req = make_request("POST", "/api/impact", Some(json!({
        "annual_maintenance_budget": 50.0,
        "unplanned_downtime_hours": 800.0
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["type"], "InvalidInputError");
    assert!(body["error"].as_str().unwrap().contains("revenue_loss_per_hour"));
}

#[tokio::test]
async fn test_calculate_impact_non_numeric_field_uses_error_body() {
    let state = create_test_state();
    let mut inputs = reference_inputs();
    inputs["unplanned_downtime_hours"] = json!("lots");
    let req = make_request("POST", "/api/impact", Some(inputs));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["type"], "InvalidInputError");
}

#[tokio::test]
async fn test_calculate_impact_requires_json_content_type() {
    let state = create_test_state();
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/impact")
        .body(Body::from(reference_inputs().to_string()))
        .unwrap();
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["type"], "InvalidInputError");
}

#[tokio::test]
async fn test_unknown_industry_falls_back_to_other() {
    let state = create_test_state();
    let mut inputs = reference_inputs();
    inputs["industry"] = json!("Pharmaceuticals");
    let req = make_request("POST", "/api/impact", Some(inputs));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["industry"], "Other");
}

#[tokio::test]
async fn test_configured_rates_apply() {
    let state = create_app_state(AuditConfig {
        rates: Some(RatesConfig {
            maintenance_reduction: Some(0.5),
            downtime_reduction: Some(0.5),
        }),
        ..Default::default()
    });
    let req = make_request("POST", "/api/impact", Some(reference_inputs()));
    let response = app(&state).oneshot(req).await.unwrap();
    let body = response_json(response).await;
    assert!(approx(&body["report"]["total_savings"], 33.0));
    assert_eq!(body["report"]["maintenance_reduction_percentage"], 50);
}

#[tokio::test]
async fn test_export_summary() {
    let state = create_test_state();
    let req = make_request("POST", "/api/impact/summary", Some(reference_inputs()));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let disposition = response.headers()["content-disposition"].to_str().unwrap().to_string();
    assert!(disposition.contains("sensyva-data-gap-audit-summary.txt"));
    assert!(response.headers()["content-type"].to_str().unwrap().starts_with("text/plain"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("Industry: Energy"));
    assert!(text.contains("Total Potential Annual Savings: ₹43.70 Cr"));
}

#[tokio::test]
async fn test_submit_lead() {
    let state = create_test_state();
    let req = make_request("POST", "/api/leads", Some(json!({
        "name": "Asha",
        "email": "asha@forge.example.com",
        "company": "Acme Forge",
        "region": "IST",
        "inputs": reference_inputs()
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert!(body["reference"].as_str().is_some());
    assert!(body["received_at"].as_str().is_some());
    assert!(body["message"].as_str().unwrap().contains("₹43.70 Cr"));
}

#[tokio::test]
async fn test_submit_lead_missing_fields() {
    let state = create_test_state();
    let req = make_request("POST", "/api/leads", Some(json!({
        "name": "Asha",
        "email": "",
        "company": "Acme Forge",
        "inputs": reference_inputs()
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["type"], "InvalidLeadError");
}

#[tokio::test]
async fn test_submit_lead_invalid_inputs() {
    let state = create_test_state();
    let req = make_request("POST", "/api/leads", Some(json!({
        "name": "Asha",
        "email": "asha@forge.example.com",
        "company": "Acme Forge",
        "inputs": {
            "annual_maintenance_budget": 10.0,
            "unplanned_downtime_hours": -5.0,
            "revenue_loss_per_hour": 1.0
        }
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submit_lead_malformed_body() {
    let state = create_test_state();
    let req = make_request("POST", "/api/leads", Some(json!({
        "name": "Asha",
        "email": "asha@forge.example.com",
        "company": "Acme Forge"
    })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["type"], "InvalidInputError");
}
