use crate::db::database_service::DatabaseService;
use crate::types::{
    employee::{EmployeeCreate, EmployeePatch},
    error::AppError,
};
use entity::employee::{Column, Entity as Employee, Model as EmployeeModel};
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::{debug, warn};

/// Inserts on whatever connection or transaction the caller holds and reads
/// the row back with its generated id.
pub(crate) async fn insert_employee<C: ConnectionTrait>(
    conn: &C,
    payload: EmployeeCreate,
) -> Result<EmployeeModel, DbErr> {
    let res = Employee::insert(payload.into_active_model()).exec(conn).await?;
    Employee::find_by_id(res.last_insert_id)
        .one(conn)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Inserted employee vanished".into()))
}

impl DatabaseService {
    pub async fn list_employees(&self) -> Result<Vec<EmployeeModel>, AppError> {
        Ok(Employee::find()
            .order_by_asc(Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_employee(&self, id: i32) -> Result<EmployeeModel, AppError> {
        Employee::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::NotFound("Employee"))
    }

    pub async fn create_employee(&self, payload: EmployeeCreate) -> Result<EmployeeModel, AppError> {
        let txn = self.begin().await?;
        let created = match insert_employee(&txn, payload).await {
            Ok(created) => created,
            Err(err) => {
                txn.rollback().await?;
                return Err(err.into());
            }
        };
        txn.commit().await?;

        debug!(employee_id = created.id, "employee created");
        Ok(created)
    }

    /// Overwrites only the columns present in `patch`.
    pub async fn update_employee(&self, id: i32, patch: EmployeePatch) -> Result<EmployeeModel, AppError> {
        let txn = self.begin().await?;

        let Some(current) = Employee::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            warn!(employee_id = id, "update on missing employee");
            return Err(AppError::NotFound("Employee"));
        };

        let changes = patch.changes();
        if changes.is_empty() {
            txn.rollback().await?;
            return Ok(current);
        }

        let mut update = Employee::update_many().filter(Column::Id.eq(id));
        for (column, value) in changes {
            update = update.col_expr(column, Expr::value(value));
        }
        if let Err(err) = update.exec(&txn).await {
            txn.rollback().await?;
            return Err(err.into());
        }

        let updated = Employee::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound("Employee"))?;
        txn.commit().await?;

        debug!(employee_id = id, "employee updated");
        Ok(updated)
    }

    pub async fn delete_employee(&self, id: i32) -> Result<(), AppError> {
        let txn = self.begin().await?;
        let res = Employee::delete_by_id(id).exec(&txn).await?;
        if res.rows_affected == 0 {
            txn.rollback().await?;
            warn!(employee_id = id, "delete on missing employee");
            return Err(AppError::NotFound("Employee"));
        }
        txn.commit().await?;

        debug!(employee_id = id, "employee deleted");
        Ok(())
    }
}
