use crate::db::database_service::DatabaseService;
use crate::db::{department::insert_department, employee::insert_employee};
use crate::types::{employee_department::EmployeeDepartmentCreate, error::AppError};
use entity::department::Model as DepartmentModel;
use entity::employee::Model as EmployeeModel;
use tracing::{debug, error};

impl DatabaseService {
    /// Creates a department, then an employee inside it.
    ///
    /// By default each step commits on its own, so a failing employee insert
    /// leaves the department behind. With `composite_atomic` both inserts
    /// share one transaction and fail together.
    pub async fn create_employee_with_department(
        &self,
        payload: EmployeeDepartmentCreate,
    ) -> Result<(DepartmentModel, EmployeeModel), AppError> {
        if self.composite_atomic {
            let txn = self.begin().await?;
            let department = insert_department(&txn, payload.department()).await?;
            let employee = match insert_employee(&txn, payload.employee(department.id)).await {
                Ok(employee) => employee,
                Err(err) => {
                    txn.rollback().await?;
                    error!("employee insert failed, department rolled back: {}", err);
                    return Err(err.into());
                }
            };
            txn.commit().await?;

            debug!(department_id = department.id, employee_id = employee.id, "employee and department committed together");
            return Ok((department, employee));
        }

        let department = self.create_department(payload.department()).await?;

        match self.create_employee(payload.employee(department.id)).await {
            Ok(employee) => Ok((department, employee)),
            Err(err) => {
                error!(
                    department_id = department.id,
                    "employee insert failed after department commit: {}", err
                );
                Err(err)
            }
        }
    }
}
