use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub database: String,
}

/// Liveness plus a round trip to the store.
#[get("")]
pub async fn health(
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<Response> {
    db.ping().await?;

    Ok(ApiResponse::Ok(Response { database: "ok".to_string() }))
}
