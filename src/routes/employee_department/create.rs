use crate::db::database_service::DatabaseService;
use crate::types::employee_department::{EmployeeDepartmentCreate, EmployeeDepartmentRes};
use crate::types::error::AppError;
use actix_web::{post, web, HttpResponse};
use std::sync::Arc;
use tracing::{error, info};

/*
 Two writes behind one endpoint. Every failure, including an unreadable body,
 is reported as `{"error": ...}` with a 200 so clients that only branch on the
 `error` key keep working.
 */

async fn create_both(db: &DatabaseService, body: &[u8]) -> Result<(i32, i32), AppError> {
    let payload: EmployeeDepartmentCreate =
        serde_json::from_slice(body).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let (department, employee) = db.create_employee_with_department(payload).await?;
    Ok((department.id, employee.id))
}

#[post("")]
pub async fn create(
    db: web::Data<Arc<DatabaseService>>,
    body: web::Bytes,
) -> HttpResponse {
    match create_both(&db, &body).await {
        Ok((department_id, employee_id)) => {
            info!(department_id, employee_id, "Employee and department created");
            HttpResponse::Ok().json(EmployeeDepartmentRes::Created {
                message: "Employee and department both created successfully".to_string(),
            })
        }
        Err(e) => {
            error!("Employee-department create failed: {}", e);
            HttpResponse::Ok().json(EmployeeDepartmentRes::Failed { error: e.to_string() })
        }
    }
}
