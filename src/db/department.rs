use crate::db::database_service::DatabaseService;
use crate::types::{
    department::{DepartmentCreate, DepartmentPatch},
    error::AppError,
};
use entity::department::{Column, Entity as Department, Model as DepartmentModel};
use entity::employee::{self, Entity as Employee, Model as EmployeeModel};
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder,
};
use tracing::{debug, warn};

pub(crate) async fn insert_department<C: ConnectionTrait>(
    conn: &C,
    payload: DepartmentCreate,
) -> Result<DepartmentModel, DbErr> {
    let res = Department::insert(payload.into_active_model()).exec(conn).await?;
    Department::find_by_id(res.last_insert_id)
        .one(conn)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Inserted department vanished".into()))
}

impl DatabaseService {
    /// Every department with its employees, joined at read time.
    pub async fn list_departments(&self) -> Result<Vec<(DepartmentModel, Vec<EmployeeModel>)>, AppError> {
        Ok(Department::find()
            .find_with_related(Employee)
            .order_by_asc(Column::Id)
            .order_by_asc(employee::Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_department(&self, id: i32) -> Result<(DepartmentModel, Vec<EmployeeModel>), AppError> {
        let department = Department::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::NotFound("Department"))?;
        let employees = department
            .find_related(Employee)
            .order_by_asc(employee::Column::Id)
            .all(&self.database_connection)
            .await?;
        Ok((department, employees))
    }

    pub async fn create_department(&self, payload: DepartmentCreate) -> Result<DepartmentModel, AppError> {
        let txn = self.begin().await?;
        let created = match insert_department(&txn, payload).await {
            Ok(created) => created,
            Err(err) => {
                txn.rollback().await?;
                return Err(err.into());
            }
        };
        txn.commit().await?;

        debug!(department_id = created.id, "department created");
        Ok(created)
    }

    pub async fn update_department(&self, id: i32, patch: DepartmentPatch) -> Result<DepartmentModel, AppError> {
        let txn = self.begin().await?;

        let Some(current) = Department::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            warn!(department_id = id, "update on missing department");
            return Err(AppError::NotFound("Department"));
        };

        let changes = patch.changes();
        if changes.is_empty() {
            txn.rollback().await?;
            return Ok(current);
        }

        let mut update = Department::update_many().filter(Column::Id.eq(id));
        for (column, value) in changes {
            update = update.col_expr(column, Expr::value(value));
        }
        if let Err(err) = update.exec(&txn).await {
            txn.rollback().await?;
            return Err(err.into());
        }

        let updated = Department::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound("Department"))?;
        txn.commit().await?;

        debug!(department_id = id, "department updated");
        Ok(updated)
    }

    // No delete: departments are append-only through this service and
    // employees keep their department_id untouched.
}
