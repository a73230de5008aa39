use axum::Json;
use serde_json::{json, Value};
use crate::api::models::IndustryEntry;
use crate::models::industry::Industry;

pub async fn list_industries() -> Json<Value> {
    let industries: Vec<IndustryEntry> = Industry::ALL
        .into_iter()
        .map(|name| IndustryEntry { name, context: name.context() })
        .collect();
    Json(json!({ "industries": industries }))
}
