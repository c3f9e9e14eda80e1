use crate::db::database_service::DatabaseService;
use crate::types::department::DepartmentPatch;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use actix_web::{put, web};
use std::sync::Arc;

#[put("/{id}")]
pub async fn update(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
    body: web::Json<DepartmentPatch>,
) -> ApiResult<MessageRes> {
    db.update_department(path.into_inner(), body.into_inner()).await?;

    Ok(ApiResponse::Ok(MessageRes::new("Updated successfully")))
}
