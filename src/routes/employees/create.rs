use crate::db::database_service::DatabaseService;
use crate::types::employee::EmployeeCreate;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

#[post("")]
pub async fn create(
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<EmployeeCreate>,
) -> ApiResult<MessageRes> {
    // Required columns are left to the store; a missing salary fails the insert.
    let employee = db.create_employee(body.into_inner()).await?;
    info!(employee_id = employee.id, "Employee created");

    Ok(ApiResponse::Ok(MessageRes::new("Employee created successfully")))
}
