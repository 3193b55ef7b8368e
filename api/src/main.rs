//! Org Chart API Server
//!
//! Department and employee management with a rate-limited, department-wide
//! salary adjustment. Uses hexagonal (ports & adapters) architecture for clean
//! separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{PostgresDepartmentRepository, PostgresEmployeeRepository, SystemClock};
use app::{DepartmentService, EmployeeService, IdempotencyGuard};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub department_service:
        Arc<DepartmentService<PostgresDepartmentRepository, PostgresEmployeeRepository>>,
    pub employee_service: Arc<
        EmployeeService<PostgresEmployeeRepository, PostgresDepartmentRepository, SystemClock>,
    >,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/departments",
            get(handlers::list_departments).post(handlers::create_department),
        )
        .route(
            "/departments/:id",
            get(handlers::get_department)
                .put(handlers::update_department)
                .delete(handlers::delete_department),
        )
        .route(
            "/employees",
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route("/employees/adjust-salary", post(handlers::adjust_salaries))
        .route(
            "/employees/:id",
            get(handlers::get_employee)
                .put(handlers::update_employee)
                .delete(handlers::delete_employee),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,orgchart_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Org Chart API...");

    let config = Config::from_env()?;

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database connected");

    // Create adapters
    let department_repo = Arc::new(PostgresDepartmentRepository::new(db.clone()));
    let employee_repo = Arc::new(PostgresEmployeeRepository::new(db));
    let clock = Arc::new(SystemClock);

    // One guard for the whole process so concurrent requests share the window
    let guard = Arc::new(IdempotencyGuard::with_cooldown(
        clock.clone(),
        config.adjustment_cooldown(),
    ));
    tracing::info!(
        cooldown_secs = config.adjustment_cooldown_secs,
        "Salary adjustment cooldown configured"
    );

    // Create application services
    let department_service = Arc::new(DepartmentService::new(
        department_repo.clone(),
        employee_repo.clone(),
    ));
    let employee_service = Arc::new(EmployeeService::new(
        employee_repo,
        department_repo,
        clock,
        guard,
    ));

    let state = AppState {
        department_service,
        employee_service,
    };

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
