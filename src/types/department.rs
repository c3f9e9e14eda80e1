use entity::department::{ActiveModel as DepartmentActive, Column, Model as DepartmentModel};
use entity::employee::Model as EmployeeModel;
use sea_orm::{ActiveValue::{NotSet, Set}, Value};
use serde::{Deserialize, Serialize};

use crate::types::{present, set_if_present};

/// Employee as listed under its department; the department id is implied.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DepartmentEmployeeView {
    pub id: i32,
    pub employee_name: String,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub designation: Option<String>,
    pub salary: f64,
}

impl From<EmployeeModel> for DepartmentEmployeeView {
    fn from(m: EmployeeModel) -> Self {
        Self {
            id: m.id,
            employee_name: m.employee_name,
            age: m.age,
            email: m.email,
            designation: m.designation,
            salary: m.salary,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DepartmentView {
    pub id: i32,
    pub employee_name: String,
    pub department_name: Option<String>,
    pub employees: Vec<DepartmentEmployeeView>,
}

impl From<(DepartmentModel, Vec<EmployeeModel>)> for DepartmentView {
    fn from((department, employees): (DepartmentModel, Vec<EmployeeModel>)) -> Self {
        Self {
            id: department.id,
            employee_name: department.employee_name,
            department_name: department.department_name,
            employees: employees.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DepartmentListRes {
    pub departments: Vec<DepartmentView>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct DepartmentCreate {
    pub employee_name: Option<String>,
    pub department_name: Option<String>,
}

impl DepartmentCreate {
    pub fn into_active_model(self) -> DepartmentActive {
        DepartmentActive {
            id: NotSet,
            employee_name: set_if_present(self.employee_name),
            department_name: Set(self.department_name),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct DepartmentPatch {
    #[serde(default, deserialize_with = "present")]
    pub employee_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub department_name: Option<Option<String>>,
}

impl DepartmentPatch {
    pub fn changes(self) -> Vec<(Column, Value)> {
        let mut out = Vec::new();
        if let Some(v) = self.employee_name { out.push((Column::EmployeeName, v.into())); }
        if let Some(v) = self.department_name { out.push((Column::DepartmentName, v.into())); }
        out
    }
}
