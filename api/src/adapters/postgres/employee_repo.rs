//! PostgreSQL adapter for EmployeeRepository

use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::map_db_err;
use crate::domain::entities::{DepartmentId, Employee, EmployeeId, NewEmployee};
use crate::domain::ports::EmployeeRepository;
use crate::entity::employees;
use crate::error::DomainError;

/// PostgreSQL implementation of EmployeeRepository
pub struct PostgresEmployeeRepository {
    db: DatabaseConnection,
}

impl PostgresEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn not_updated(id: &EmployeeId) -> impl FnOnce(DbErr) -> DomainError + '_ {
    move |e| match e {
        DbErr::RecordNotUpdated => DomainError::NotFound(format!("Employee {} not found", id)),
        e => map_db_err(e),
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, DomainError> {
        let result = employees::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn exists(&self, id: &EmployeeId) -> Result<bool, DomainError> {
        let count = employees::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let results = employees::Entity::find()
            .order_by_asc(employees::Column::Name)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_department(
        &self,
        department_id: &DepartmentId,
    ) -> Result<Vec<Employee>, DomainError> {
        let results = employees::Entity::find()
            .filter(employees::Column::DepartmentId.eq(department_id.0))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, employee: &NewEmployee) -> Result<Employee, DomainError> {
        let model = employees::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(employee.name.clone()),
            email: Set(employee.email.clone()),
            salary: Set(employee.salary),
            joining_date: Set(employee.joining_date),
            department_id: Set(employee.department_id.0),
        };

        let result = model.insert(&self.db).await.map_err(map_db_err)?;

        Ok(result.into())
    }

    async fn update(
        &self,
        id: &EmployeeId,
        employee: &NewEmployee,
    ) -> Result<Employee, DomainError> {
        let result = employees::ActiveModel {
            id: Set(id.0),
            name: Set(employee.name.clone()),
            email: Set(employee.email.clone()),
            salary: Set(employee.salary),
            joining_date: Set(employee.joining_date),
            department_id: Set(employee.department_id.0),
        }
        .update(&self.db)
        .await
        .map_err(not_updated(id))?;

        Ok(result.into())
    }

    async fn update_salary(&self, id: &EmployeeId, salary: Decimal) -> Result<(), DomainError> {
        employees::ActiveModel {
            id: Set(id.0),
            salary: Set(salary),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(not_updated(id))?;

        Ok(())
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), DomainError> {
        employees::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn delete_many(&self, ids: &[EmployeeId]) -> Result<(), DomainError> {
        if ids.is_empty() {
            return Ok(());
        }

        employees::Entity::delete_many()
            .filter(employees::Column::Id.is_in(ids.iter().map(|id| id.0)))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<employees::Model> for Employee {
    fn from(model: employees::Model) -> Self {
        Employee {
            id: EmployeeId(model.id),
            name: model.name,
            email: model.email,
            salary: model.salary,
            joining_date: model.joining_date,
            department_id: DepartmentId(model.department_id),
        }
    }
}
