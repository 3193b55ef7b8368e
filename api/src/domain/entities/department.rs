//! Department domain entity
//!
//! A department groups employees. Its code is globally unique.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Maximum length of a department code (matches the `departments.code` column)
pub const MAX_DEPARTMENT_CODE_LEN: usize = 10;

/// Unique identifier for a department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepartmentId(pub Uuid);

impl DepartmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DepartmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for DepartmentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An organizational department
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub code: String,
}

/// Data needed to create or rename a department
#[derive(Debug, Clone)]
pub struct NewDepartment {
    pub name: String,
    pub code: String,
}

impl NewDepartment {
    /// Check field-level constraints, collecting every violation
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("name: Department name is required".to_string());
        }
        if self.code.trim().is_empty() {
            errors.push("code: Department code is required".to_string());
        } else if self.code.chars().count() > MAX_DEPARTMENT_CODE_LEN {
            errors.push(format!(
                "code: Department code must be at most {} characters",
                MAX_DEPARTMENT_CODE_LEN
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(errors.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_department(name: &str, code: &str) -> NewDepartment {
        NewDepartment {
            name: name.to_string(),
            code: code.to_string(),
        }
    }

    #[test]
    fn valid_department_passes() {
        assert!(new_department("Engineering", "ENG").validate().is_ok());
    }

    #[test]
    fn blank_name_and_code_are_both_reported() {
        let err = new_department("  ", "").validate().unwrap_err();
        match err {
            DomainError::Validation(msg) => {
                assert!(msg.contains("name:"));
                assert!(msg.contains("code:"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn overlong_code_rejected() {
        let err = new_department("Engineering", "ENGINEERING").validate();
        assert!(matches!(err, Err(DomainError::Validation(_))));
    }

    #[test]
    fn department_id_display() {
        let id = DepartmentId(Uuid::nil());
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }
}
