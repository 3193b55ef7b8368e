//! SeaORM entities
//!
//! Table mappings used by the PostgreSQL adapters. Domain code never sees
//! these types; adapters convert them to `domain::entities`.

pub mod departments;
pub mod employees;
