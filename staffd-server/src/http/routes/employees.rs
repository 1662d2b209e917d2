//! Employee endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Email, Employee, NewEmployee};
use crate::service::EmployeeService;

/// Create/update employee request body
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl EmployeeRequest {
    fn into_new_employee(self) -> Result<NewEmployee, ApiError> {
        let email = Email::new(&self.email)?;
        Ok(NewEmployee {
            first_name: self.first_name,
            last_name: self.last_name,
            email,
        })
    }
}

/// POST /api/employees - create a new employee
async fn create_employee(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EmployeeRequest>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let new = req.into_new_employee()?;
    let employee = EmployeeService::new(&state.pool).create(new).await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/employees - list all employees
async fn list_employees(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = EmployeeService::new(&state.pool).list().await?;
    Ok(Json(employees))
}

/// GET /api/employees/{id} - fetch a single employee
async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, ApiError> {
    let employee = EmployeeService::new(&state.pool)
        .get_by_id(id)
        .await?
        .ok_or(ApiError::NotFound {
            resource: "employee",
            id: id.to_string(),
        })?;

    Ok(Json(employee))
}

/// PUT /api/employees/{id} - overwrite an existing employee
///
/// Existence is resolved here, not in the service: a missing id is a
/// 404 before the upsert runs. The id in the path wins over anything
/// in the body.
async fn update_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<EmployeeRequest>,
) -> Result<Json<Employee>, ApiError> {
    let service = EmployeeService::new(&state.pool);

    if service.get_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound {
            resource: "employee",
            id: id.to_string(),
        });
    }

    let new = req.into_new_employee()?;
    let updated = service
        .update(Employee {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email.into_string(),
        })
        .await?;

    Ok(Json(updated))
}

/// DELETE /api/employees/{id} - remove an employee
///
/// 200 with an empty body on success, 404 for an unknown id.
async fn delete_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    EmployeeService::new(&state.pool).delete(id).await?;
    Ok(StatusCode::OK)
}

/// Employee routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route(
            "/api/employees/{id}",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
}
