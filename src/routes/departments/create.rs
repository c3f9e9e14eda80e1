use crate::db::database_service::DatabaseService;
use crate::types::department::DepartmentCreate;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

#[post("")]
pub async fn create(
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<DepartmentCreate>,
) -> ApiResult<MessageRes> {
    let department = db.create_department(body.into_inner()).await?;
    info!(department_id = department.id, "Department created");

    Ok(ApiResponse::Ok(MessageRes::new("Department created successfully")))
}
