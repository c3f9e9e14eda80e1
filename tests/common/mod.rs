use std::sync::Arc;
use staff_registry::config::DatabaseConfig;
use staff_registry::db::database_service::DatabaseService;

pub mod client;

pub struct TestContext {
    pub db: Arc<DatabaseService>,
}

impl TestContext {
    /// Fresh, migrated in-memory database per test.
    pub async fn new() -> TestContext {
        Self::with_composite_atomic(false).await
    }

    pub async fn with_composite_atomic(atomic: bool) -> TestContext {
        let db = DatabaseService::new(&DatabaseConfig::in_memory())
            .await
            .expect("Failed to initialize DatabaseService")
            .with_composite_atomic(atomic);

        TestContext { db: Arc::new(db) }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use staff_registry::types::department::DepartmentCreate;
    use staff_registry::types::employee::EmployeeCreate;

    pub fn sample_employee() -> EmployeeCreate {
        EmployeeCreate {
            employee_name: Some("Test Employee".to_string()),
            age: Some(30),
            email: Some("test@example.com".to_string()),
            designation: Some("Engineer".to_string()),
            salary: Some(4200.0),
            department_id: None,
        }
    }

    pub fn sample_employee_in(department_id: i32, email: &str) -> EmployeeCreate {
        EmployeeCreate {
            email: Some(email.to_string()),
            department_id: Some(department_id),
            ..sample_employee()
        }
    }

    pub fn sample_department(name: &str) -> DepartmentCreate {
        DepartmentCreate {
            employee_name: Some("Dept Lead".to_string()),
            department_name: Some(name.to_string()),
        }
    }
}
