use sea_orm_migration::prelude::*;

use crate::m20240601_000001_create_department_table::Department;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
    EmployeeName,
    Age,
    Email,
    Designation,
    Salary,
    DepartmentId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // FK is declared inline: SQLite cannot add constraints through ALTER TABLE.
        m.create_table(
            Table::create()
                .table(Employee::Table)
                .if_not_exists()
                .col(ColumnDef::new(Employee::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Employee::EmployeeName).string_len(50).not_null())
                .col(ColumnDef::new(Employee::Age).integer().null())
                .col(ColumnDef::new(Employee::Email).string_len(120).null().unique_key())
                .col(ColumnDef::new(Employee::Designation).string_len(20).null())
                .col(ColumnDef::new(Employee::Salary).double().not_null())
                .col(ColumnDef::new(Employee::DepartmentId).integer().null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_employee_department")
                        .from(Employee::Table, Employee::DepartmentId)
                        .to(Department::Table, Department::Id)
                        .on_delete(ForeignKeyAction::NoAction)
                        .on_update(ForeignKeyAction::NoAction),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_employee_department_id")
                .table(Employee::Table)
                .col(Employee::DepartmentId)
                .if_not_exists()
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_index(Index::drop().name("idx_employee_department_id").table(Employee::Table).to_owned()).await?;
        m.drop_table(Table::drop().table(Employee::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
