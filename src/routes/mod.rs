use crate::types::error::AppError;
use actix_web::web;

pub mod departments;
pub mod employee_department;
pub mod employees;
pub mod health;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/employees")
            .service(employees::list::list)
            .service(employees::create::create)
            .service(employees::get::get)
            .service(employees::update::update)
            .service(employees::delete::delete)
    );
    cfg.service(
        web::scope("/departments")
            .service(departments::list::list)
            .service(departments::create::create)
            .service(departments::get::get)
            .service(departments::update::update)
    );
    cfg.service(
        web::scope("/employee-department")
            .service(employee_department::create::create)
    );
}
