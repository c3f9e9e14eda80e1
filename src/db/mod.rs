pub mod database_service;
pub mod department;
pub mod employee;
pub mod employee_department;
