//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crate::domain::entities::{
    Department, DepartmentId, Employee, EmployeeId, NewDepartment, NewEmployee,
};
use crate::domain::ports::{Clock, DepartmentRepository, EmployeeRepository};
use crate::error::DomainError;

// ============================================================================
// Manual Clock
// ============================================================================

/// Clock that only moves when a test tells it to
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }

    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.lock().unwrap() = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

// ============================================================================
// In-Memory Department Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryDepartmentRepository {
    departments: Arc<RwLock<HashMap<DepartmentId, Department>>>,
    fail_next_delete: AtomicBool,
}

impl InMemoryDepartmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a department for testing
    pub fn with_department(self, department: Department) -> Self {
        self.departments
            .write()
            .unwrap()
            .insert(department.id, department);
        self
    }

    /// Make the next `delete` call fail with a database error
    pub fn failing_next_delete(self) -> Self {
        self.fail_next_delete.store(true, Ordering::SeqCst);
        self
    }

    fn code_taken(
        departments: &HashMap<DepartmentId, Department>,
        code: &str,
        except: Option<&DepartmentId>,
    ) -> bool {
        departments
            .values()
            .any(|d| d.code == code && Some(&d.id) != except)
    }
}

#[async_trait]
impl DepartmentRepository for InMemoryDepartmentRepository {
    async fn find_by_id(&self, id: &DepartmentId) -> Result<Option<Department>, DomainError> {
        let departments = self.departments.read().unwrap();
        Ok(departments.get(id).cloned())
    }

    async fn exists(&self, id: &DepartmentId) -> Result<bool, DomainError> {
        let departments = self.departments.read().unwrap();
        Ok(departments.contains_key(id))
    }

    async fn find_all(&self) -> Result<Vec<Department>, DomainError> {
        let departments = self.departments.read().unwrap();
        let mut all: Vec<Department> = departments.values().cloned().collect();
        all.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(all)
    }

    async fn create(&self, new_department: &NewDepartment) -> Result<Department, DomainError> {
        let mut departments = self.departments.write().unwrap();
        if Self::code_taken(&departments, &new_department.code, None) {
            return Err(DomainError::AlreadyExists(format!(
                "Department code '{}' already exists",
                new_department.code
            )));
        }

        let department = Department {
            id: DepartmentId::new(),
            name: new_department.name.clone(),
            code: new_department.code.clone(),
        };
        departments.insert(department.id, department.clone());
        Ok(department)
    }

    async fn update(
        &self,
        id: &DepartmentId,
        changes: &NewDepartment,
    ) -> Result<Department, DomainError> {
        let mut departments = self.departments.write().unwrap();
        if Self::code_taken(&departments, &changes.code, Some(id)) {
            return Err(DomainError::AlreadyExists(format!(
                "Department code '{}' already exists",
                changes.code
            )));
        }

        let department = departments
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Department {} not found", id)))?;
        department.name = changes.name.clone();
        department.code = changes.code.clone();
        Ok(department.clone())
    }

    async fn delete(&self, id: &DepartmentId) -> Result<(), DomainError> {
        if self.fail_next_delete.swap(false, Ordering::SeqCst) {
            return Err(DomainError::Database("simulated delete failure".to_string()));
        }
        self.departments.write().unwrap().remove(id);
        Ok(())
    }
}

// ============================================================================
// In-Memory Employee Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    employees: Arc<RwLock<HashMap<EmployeeId, Employee>>>,
    failing_salary_updates: Arc<RwLock<HashSet<EmployeeId>>>,
    salary_updates: AtomicUsize,
    department_lookups: AtomicUsize,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an employee for testing
    pub fn with_employee(self, employee: Employee) -> Self {
        self.employees
            .write()
            .unwrap()
            .insert(employee.id, employee);
        self
    }

    /// Make every `update_salary` call for this employee fail
    pub fn failing_salary_update_for(self, id: EmployeeId) -> Self {
        self.failing_salary_updates.write().unwrap().insert(id);
        self
    }

    /// Number of successful `update_salary` calls so far
    pub fn salary_update_count(&self) -> usize {
        self.salary_updates.load(Ordering::SeqCst)
    }

    /// Number of `find_by_department` calls so far
    pub fn department_lookup_count(&self) -> usize {
        self.department_lookups.load(Ordering::SeqCst)
    }

    fn email_taken(
        employees: &HashMap<EmployeeId, Employee>,
        email: &str,
        except: Option<&EmployeeId>,
    ) -> bool {
        employees
            .values()
            .any(|e| e.email == email && Some(&e.id) != except)
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, DomainError> {
        let employees = self.employees.read().unwrap();
        Ok(employees.get(id).cloned())
    }

    async fn exists(&self, id: &EmployeeId) -> Result<bool, DomainError> {
        let employees = self.employees.read().unwrap();
        Ok(employees.contains_key(id))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let employees = self.employees.read().unwrap();
        let mut all: Vec<Employee> = employees.values().cloned().collect();
        all.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(all)
    }

    async fn find_by_department(
        &self,
        department_id: &DepartmentId,
    ) -> Result<Vec<Employee>, DomainError> {
        self.department_lookups.fetch_add(1, Ordering::SeqCst);
        let employees = self.employees.read().unwrap();
        let mut matching: Vec<Employee> = employees
            .values()
            .filter(|e| &e.department_id == department_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(matching)
    }

    async fn create(&self, new_employee: &NewEmployee) -> Result<Employee, DomainError> {
        let mut employees = self.employees.write().unwrap();
        if Self::email_taken(&employees, &new_employee.email, None) {
            return Err(DomainError::AlreadyExists(format!(
                "Employee email '{}' already exists",
                new_employee.email
            )));
        }

        let employee = Employee {
            id: EmployeeId::new(),
            name: new_employee.name.clone(),
            email: new_employee.email.clone(),
            salary: new_employee.salary,
            joining_date: new_employee.joining_date,
            department_id: new_employee.department_id,
        };
        employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn update(
        &self,
        id: &EmployeeId,
        changes: &NewEmployee,
    ) -> Result<Employee, DomainError> {
        let mut employees = self.employees.write().unwrap();
        if Self::email_taken(&employees, &changes.email, Some(id)) {
            return Err(DomainError::AlreadyExists(format!(
                "Employee email '{}' already exists",
                changes.email
            )));
        }

        let employee = employees
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Employee {} not found", id)))?;
        employee.name = changes.name.clone();
        employee.email = changes.email.clone();
        employee.salary = changes.salary;
        employee.joining_date = changes.joining_date;
        employee.department_id = changes.department_id;
        Ok(employee.clone())
    }

    async fn update_salary(&self, id: &EmployeeId, salary: Decimal) -> Result<(), DomainError> {
        if self.failing_salary_updates.read().unwrap().contains(id) {
            return Err(DomainError::Database(format!(
                "simulated salary update failure for {}",
                id
            )));
        }

        let mut employees = self.employees.write().unwrap();
        let employee = employees
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Employee {} not found", id)))?;
        employee.salary = salary;
        self.salary_updates.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), DomainError> {
        self.employees.write().unwrap().remove(id);
        Ok(())
    }

    async fn delete_many(&self, ids: &[EmployeeId]) -> Result<(), DomainError> {
        let mut employees = self.employees.write().unwrap();
        for id in ids {
            employees.remove(id);
        }
        Ok(())
    }
}
