use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use hepa_api::app;
use hepa_api::state::AppState;
use hepa_core::models::patient::RawPatientRecord;
use hepa_core::schema::{column_index, FEATURE_COLUMNS};
use hepa_features::assemble::FeatureVector;
use hepa_features::derive::LogPolicy;
use hepa_features::pipeline::Pipeline;
use hepa_scorer::adapter::ScorerAdapter;
use hepa_scorer::error::ScoringError;
use hepa_scorer::forest::{DecisionForest, Node, Tree};
use hepa_scorer::service::PredictionService;
use hepa_scorer::Scorer;

struct Failing;

impl Scorer for Failing {
    fn predict_label(&self, _features: &FeatureVector) -> Result<String, ScoringError> {
        Err(ScoringError::Backend("artifact corrupted".to_string()))
    }
}

/// Lived below bilirubin 2.0, died at or above it.
fn forest() -> DecisionForest {
    let bilirubin = column_index("Bilirubin").unwrap();
    DecisionForest::new(
        vec!["D".to_string(), "L".to_string()],
        vec![Tree::new(vec![
            Node::split(bilirubin, 1.999, 1, 2),
            Node::leaf(1),
            Node::leaf(0),
        ])],
    )
}

fn router_with(scorer: Arc<dyn Scorer>) -> Router {
    let service = PredictionService::new(
        Pipeline::new(LogPolicy::ZeroOnNonPositive),
        ScorerAdapter::new(scorer),
    );
    app(AppState {
        service: Arc::new(service),
    })
}

fn router() -> Router {
    router_with(Arc::new(forest()))
}

fn body() -> Value {
    json!({
        "N_Days": 150, "Drug": "Placebo", "Age": 45, "Sex": "Female",
        "Ascites": 0, "Hepatomegaly": 0, "Spiders": 0, "Edema": 0,
        "Bilirubin": 1.8, "Cholesterol": 200, "Albumin": 3.5, "Copper": 80,
        "Alk_Phos": 120, "SGOT": 90, "Tryglicerides": 150,
        "Platelets": 250000, "Prothrombin": 10, "Stage": 2
    })
}

async fn post(router: Router, uri: &str, body: &Value) -> (StatusCode, String) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn index_reports_running() {
    let (status, body) = get(router(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "API running" }));
}

#[tokio::test]
async fn predict_returns_outcome() {
    let (status, text) = post(router(), "/predict", &body()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), json!({ "prediction": "Lived" }));

    let mut high = body();
    high["Bilirubin"] = json!(3.2);
    let (status, text) = post(router(), "/predict", &high).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), json!({ "prediction": "Died" }));
}

#[tokio::test]
async fn id_defaults_to_one() {
    let (_, text) = post(router(), "/features", &body()).await;
    let features: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(features["id"], json!(1.0));

    let mut with_id = body();
    with_id["id"] = json!(42);
    let (_, text) = post(router(), "/features", &with_id).await;
    let features: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(features["id"], json!(42.0));
}

#[tokio::test]
async fn missing_field_is_bad_request() {
    let mut partial = body();
    partial.as_object_mut().unwrap().remove("Albumin");
    let (status, text) = post(router(), "/predict", &partial).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let error: Value = serde_json::from_str(&text).unwrap();
    assert!(error["error"].as_str().unwrap().contains("Albumin"));
}

#[tokio::test]
async fn unknown_category_is_bad_request() {
    let mut unknown = body();
    unknown["Drug"] = json!("Unknown");
    let (status, text) = post(router(), "/predict", &unknown).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let error: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(error["error"], json!("unknown drug category: 'Unknown'"));
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/predict")
                .header("content-type", "application/json")
                .body(Body::from("{\"N_Days\": "))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn scorer_failure_is_internal_error() {
    let (status, text) = post(router_with(Arc::new(Failing)), "/predict", &body()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let error: Value = serde_json::from_str(&text).unwrap();
    assert!(error.get("error").is_some());
}

#[tokio::test]
async fn zero_log_policy_applies_over_http() {
    let mut zero = body();
    zero["Cholesterol"] = json!(0);
    let (status, text) = post(router(), "/features", &zero).await;
    assert_eq!(status, StatusCode::OK);
    let features: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(features["Cholesterol_log"], json!(0.0));
}

#[tokio::test]
async fn features_match_the_shared_pipeline_bit_for_bit() {
    let (status, text) = post(router(), "/features", &body()).await;
    assert_eq!(status, StatusCode::OK);

    // Keys arrive in training column order.
    let mut last = 0;
    for name in FEATURE_COLUMNS {
        let pos = text.find(&format!("\"{name}\":")).unwrap();
        assert!(pos >= last, "{name} out of order");
        last = pos;
    }

    let served: serde_json::Map<String, Value> = serde_json::from_str(&text).unwrap();
    let served = FeatureVector::from_columns(
        served
            .into_iter()
            .map(|(name, value)| (name, value.as_f64().unwrap())),
    )
    .unwrap();

    let raw: RawPatientRecord = serde_json::from_value(body()).unwrap();
    let local = Pipeline::new(LogPolicy::Strict).build_vector(&raw).unwrap();
    assert_eq!(served.to_bits(), local.to_bits());
}

#[tokio::test]
async fn schema_lists_columns_and_codes() {
    let (status, body) = get(router(), "/schema").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["columns"].as_array().unwrap().len(), FEATURE_COLUMNS.len());
    assert_eq!(body["log_policy"], json!("zero-on-non-positive"));

    let sex = &body["vocabularies"][1];
    assert_eq!(sex["field"], json!("sex"));
    assert_eq!(sex["values"][0], json!({ "code": 0, "value": "Female" }));
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let (status, body) = get(router(), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.get("error").is_some());
}
