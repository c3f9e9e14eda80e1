use crate::db::database_service::DatabaseService;
use crate::types::employee::EmployeePatch;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use actix_web::{put, web};
use std::sync::Arc;

#[put("/{id}")]
pub async fn update(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
    body: web::Json<EmployeePatch>,
) -> ApiResult<MessageRes> {
    db.update_employee(path.into_inner(), body.into_inner()).await?;

    Ok(ApiResponse::Ok(MessageRes::new("Updated successfully")))
}
