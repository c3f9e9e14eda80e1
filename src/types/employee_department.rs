use serde::{Deserialize, Serialize};

use crate::types::{department::DepartmentCreate, employee::EmployeeCreate, numeric};

/// One body carrying both the department and the employee placed in it.
/// `employee_name` feeds both rows.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct EmployeeDepartmentCreate {
    pub employee_name: Option<String>,
    pub department_name: Option<String>,
    #[serde(default, deserialize_with = "numeric")]
    pub age: Option<i32>,
    pub email: Option<String>,
    pub designation: Option<String>,
    #[serde(default, deserialize_with = "numeric")]
    pub salary: Option<f64>,
}

impl EmployeeDepartmentCreate {
    pub fn department(&self) -> DepartmentCreate {
        DepartmentCreate {
            employee_name: self.employee_name.clone(),
            department_name: self.department_name.clone(),
        }
    }

    pub fn employee(self, department_id: i32) -> EmployeeCreate {
        EmployeeCreate {
            employee_name: self.employee_name,
            age: self.age,
            email: self.email,
            designation: self.designation,
            salary: self.salary,
            department_id: Some(department_id),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum EmployeeDepartmentRes {
    Created { message: String },
    Failed { error: String },
}
