use entity::employee::{ActiveModel as EmployeeActive, Column, Model as EmployeeModel};
use sea_orm::{ActiveValue::{NotSet, Set}, Value};
use serde::{Deserialize, Serialize};

use crate::types::{numeric, present, present_numeric, set_if_present};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmployeeView {
    pub id: i32,
    pub employee_name: String,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub designation: Option<String>,
    pub salary: f64,
    pub department_id: Option<i32>,
}

impl From<EmployeeModel> for EmployeeView {
    fn from(m: EmployeeModel) -> Self {
        Self {
            id: m.id,
            employee_name: m.employee_name,
            age: m.age,
            email: m.email,
            designation: m.designation,
            salary: m.salary,
            department_id: m.department_id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EmployeeListRes {
    pub employees: Vec<EmployeeView>,
}

/// POST body. `employee_name` and `salary` are required by the schema but
/// not checked here.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct EmployeeCreate {
    pub employee_name: Option<String>,
    #[serde(default, deserialize_with = "numeric")]
    pub age: Option<i32>,
    pub email: Option<String>,
    pub designation: Option<String>,
    #[serde(default, deserialize_with = "numeric")]
    pub salary: Option<f64>,
    #[serde(default, deserialize_with = "numeric")]
    pub department_id: Option<i32>,
}

impl EmployeeCreate {
    pub fn into_active_model(self) -> EmployeeActive {
        EmployeeActive {
            id: NotSet,
            employee_name: set_if_present(self.employee_name),
            age: Set(self.age),
            email: Set(self.email),
            designation: Set(self.designation),
            salary: set_if_present(self.salary),
            department_id: Set(self.department_id),
        }
    }
}

/// PUT body. Absent fields keep their stored value; `null` overwrites.
#[derive(Deserialize, Debug, Default)]
pub struct EmployeePatch {
    #[serde(default, deserialize_with = "present")]
    pub employee_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_numeric")]
    pub age: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub designation: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_numeric")]
    pub salary: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present_numeric")]
    pub department_id: Option<Option<i32>>,
}

impl EmployeePatch {
    /// One column assignment per field present in the body.
    pub fn changes(self) -> Vec<(Column, Value)> {
        let mut out = Vec::new();
        if let Some(v) = self.employee_name { out.push((Column::EmployeeName, v.into())); }
        if let Some(v) = self.age { out.push((Column::Age, v.into())); }
        if let Some(v) = self.email { out.push((Column::Email, v.into())); }
        if let Some(v) = self.designation { out.push((Column::Designation, v.into())); }
        if let Some(v) = self.salary { out.push((Column::Salary, v.into())); }
        if let Some(v) = self.department_id { out.push((Column::DepartmentId, v.into())); }
        out
    }
}
