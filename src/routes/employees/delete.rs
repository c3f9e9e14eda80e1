use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use actix_web::{delete, web};
use std::sync::Arc;
use tracing::info;

#[delete("/{id}")]
pub async fn delete(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<MessageRes> {
    let id = path.into_inner();
    db.delete_employee(id).await?;
    info!(employee_id = id, "Employee deleted");

    Ok(ApiResponse::Ok(MessageRes::new("Deleted successfully")))
}
