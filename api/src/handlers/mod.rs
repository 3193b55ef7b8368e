//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod departments;
pub mod employees;

pub use departments::{
    create_department, delete_department, get_department, list_departments, update_department,
};
pub use employees::{
    adjust_salaries, create_employee, delete_employee, get_employee, list_employees,
    update_employee,
};
