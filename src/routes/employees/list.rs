use crate::db::database_service::DatabaseService;
use crate::types::employee::{EmployeeListRes, EmployeeView};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

#[get("")]
pub async fn list(
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<EmployeeListRes> {
    let employees = db.list_employees().await?;

    Ok(ApiResponse::Ok(EmployeeListRes {
        employees: employees.into_iter().map(EmployeeView::from).collect(),
    }))
}
