use axum::extract::State;
use axum::Json;
use serde::Serialize;

use hepa_core::schema::FEATURE_COLUMNS;
use hepa_core::vocab::CategoricalField;
use hepa_features::derive::LogPolicy;

use crate::state::AppState;

#[derive(Serialize)]
pub struct CodedValue {
    code: u32,
    value: &'static str,
}

#[derive(Serialize)]
pub struct VocabularyDetail {
    field: CategoricalField,
    column: &'static str,
    values: Vec<CodedValue>,
}

#[derive(Serialize)]
pub struct SchemaResponse {
    columns: Vec<&'static str>,
    vocabularies: Vec<VocabularyDetail>,
    log_policy: LogPolicy,
}

pub async fn get_schema(State(state): State<AppState>) -> Json<SchemaResponse> {
    let vocabularies = CategoricalField::ALL
        .iter()
        .map(|field| VocabularyDetail {
            field: *field,
            column: field.column(),
            values: field
                .vocabulary()
                .iter()
                .enumerate()
                .map(|(code, value)| CodedValue {
                    code: code as u32,
                    value: *value,
                })
                .collect(),
        })
        .collect();

    Json(SchemaResponse {
        columns: FEATURE_COLUMNS.to_vec(),
        vocabularies,
        log_policy: state.service.pipeline().log_policy(),
    })
}
