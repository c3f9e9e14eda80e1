pub mod department;
pub mod employee;

/*
 A department owns zero or more employees through employee.department_id.
 The link is nullable, so an employee can exist without a department.
 Departments are never deleted through the API, which is why the FK carries
 no cascade rule.
 */
