use crate::db::database_service::DatabaseService;
use crate::types::department::{DepartmentListRes, DepartmentView};
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

#[get("")]
pub async fn list(
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<DepartmentListRes> {
    let departments = db.list_departments().await?;

    Ok(ApiResponse::Ok(DepartmentListRes {
        departments: departments.into_iter().map(DepartmentView::from).collect(),
    }))
}
