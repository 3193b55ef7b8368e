//! PostgreSQL adapter for DepartmentRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set};
use uuid::Uuid;

use super::map_db_err;
use crate::domain::entities::{Department, DepartmentId, NewDepartment};
use crate::domain::ports::DepartmentRepository;
use crate::entity::departments;
use crate::error::DomainError;

/// PostgreSQL implementation of DepartmentRepository
pub struct PostgresDepartmentRepository {
    db: DatabaseConnection,
}

impl PostgresDepartmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DepartmentRepository for PostgresDepartmentRepository {
    async fn find_by_id(&self, id: &DepartmentId) -> Result<Option<Department>, DomainError> {
        let result = departments::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn exists(&self, id: &DepartmentId) -> Result<bool, DomainError> {
        let count = departments::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn find_all(&self) -> Result<Vec<Department>, DomainError> {
        let results = departments::Entity::find()
            .order_by_asc(departments::Column::Code)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, department: &NewDepartment) -> Result<Department, DomainError> {
        let model = departments::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(department.name.clone()),
            code: Set(department.code.clone()),
        };

        let result = model.insert(&self.db).await.map_err(map_db_err)?;

        Ok(result.into())
    }

    async fn update(
        &self,
        id: &DepartmentId,
        department: &NewDepartment,
    ) -> Result<Department, DomainError> {
        let result = departments::ActiveModel {
            id: Set(id.0),
            name: Set(department.name.clone()),
            code: Set(department.code.clone()),
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            sea_orm::DbErr::RecordNotUpdated => {
                DomainError::NotFound(format!("Department {} not found", id))
            }
            e => map_db_err(e),
        })?;

        Ok(result.into())
    }

    async fn delete(&self, id: &DepartmentId) -> Result<(), DomainError> {
        departments::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<departments::Model> for Department {
    fn from(model: departments::Model) -> Self {
        Department {
            id: DepartmentId(model.id),
            name: model.name,
            code: model.code,
        }
    }
}
