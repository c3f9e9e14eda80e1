use actix_web::{web, App};
use std::sync::Arc;
use staff_registry::db::database_service::DatabaseService;

use super::test_data;

pub struct TestClient {
    pub db: Arc<DatabaseService>,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(staff_registry::routes::configure_routes)
    }

    pub async fn create_test_department(&self, name: &str) -> i32 {
        self.db
            .create_department(test_data::sample_department(name))
            .await
            .expect("Failed to create department")
            .id
    }

    pub async fn create_test_employee(&self, department_id: Option<i32>, email: &str) -> i32 {
        let mut payload = test_data::sample_employee();
        payload.email = Some(email.to_string());
        payload.department_id = department_id;

        self.db
            .create_employee(payload)
            .await
            .expect("Failed to create employee")
            .id
    }
}
