use crate::db::database_service::DatabaseService;
use crate::types::employee::EmployeeView;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

#[get("/{id}")]
pub async fn get(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<EmployeeView> {
    let employee = db.get_employee(path.into_inner()).await?;

    Ok(ApiResponse::Ok(employee.into()))
}
