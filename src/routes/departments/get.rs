use crate::db::database_service::DatabaseService;
use crate::types::department::DepartmentView;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

#[get("/{id}")]
pub async fn get(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<DepartmentView> {
    let department = db.get_department(path.into_inner()).await?;

    Ok(ApiResponse::Ok(department.into()))
}
