use std::sync::Arc;

use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
};
use canteen_auth::Authz;
use canteen_errors::{ApiResult, JsonBody, JsonPayload, PathParams, Problem};

use crate::domain::model::{NewWorker, WorkHours};
use crate::domain::service::Service;

use super::dto::{
    ChangeDayOffStateRequest, CreateDayOffRequest, CreateWorkerRequest, CredentialsDto,
    LoginRequest, MonthResponse, TokenResponse, UpdatePermissionsRequest, WorkerDetailsDto,
    WorkerListItemDto, WorkerListResponse,
};

#[utoipa::path(
    post,
    path = "/user/login",
    tag = "user",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Bearer token issued", body = TokenResponse),
        (status = 400, description = "Malformed body", body = Problem),
        (status = 401, description = "Wrong email or password", body = Problem)
    )
)]
pub async fn login(
    Extension(svc): Extension<Arc<Service>>,
    JsonPayload(req): JsonPayload<LoginRequest>,
) -> ApiResult<JsonBody<TokenResponse>> {
    let token = svc.login(&req.email, &req.password).await?;
    Ok(Json(TokenResponse { token }))
}

#[utoipa::path(
    get,
    path = "/worker",
    tag = "worker",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All workers", body = WorkerListResponse),
        (status = 401, description = "Missing or invalid token", body = Problem),
        (status = 403, description = "Caller is not an admin", body = Problem)
    )
)]
pub async fn list_workers(
    Extension(svc): Extension<Arc<Service>>,
) -> ApiResult<JsonBody<WorkerListResponse>> {
    let workers = svc.list_workers().await?;
    Ok(Json(WorkerListResponse {
        workers: workers.iter().map(WorkerListItemDto::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/worker",
    tag = "worker",
    security(("bearer" = [])),
    request_body = CreateWorkerRequest,
    responses(
        (status = 201, description = "Worker created", body = CredentialsDto),
        (status = 400, description = "Invalid name or work hours", body = Problem),
        (status = 401, description = "Missing or invalid token", body = Problem),
        (status = 403, description = "Caller is not an admin", body = Problem)
    )
)]
pub async fn create_worker(
    Extension(svc): Extension<Arc<Service>>,
    JsonPayload(req): JsonPayload<CreateWorkerRequest>,
) -> ApiResult<impl IntoResponse> {
    let new = NewWorker {
        first_name: req.first_name,
        last_name: req.last_name,
        work_hours: req
            .work_hours
            .map(|hours| hours.into_iter().map(WorkHours::from).collect()),
    };
    let credentials = svc.create_worker(new).await?;
    Ok((StatusCode::CREATED, Json(CredentialsDto::from(credentials))))
}

#[utoipa::path(
    get,
    path = "/worker/{workerId}",
    tag = "worker",
    security(("bearer" = [])),
    params(("workerId" = String, Path, description = "Worker id")),
    responses(
        (status = 200, description = "Worker details", body = WorkerDetailsDto),
        (status = 400, description = "Invalid id", body = Problem),
        (status = 404, description = "Unknown worker", body = Problem)
    )
)]
pub async fn get_worker_details(
    Extension(svc): Extension<Arc<Service>>,
    PathParams(worker_id): PathParams<String>,
) -> ApiResult<JsonBody<WorkerDetailsDto>> {
    let details = svc.worker_details(&worker_id).await?;
    Ok(Json(details.into()))
}

#[utoipa::path(
    get,
    path = "/worker/{workerId}/permissions",
    tag = "worker",
    security(("bearer" = [])),
    params(("workerId" = String, Path, description = "Worker id")),
    responses(
        (status = 200, description = "Permission names", body = Vec<String>),
        (status = 400, description = "Invalid id", body = Problem),
        (status = 404, description = "Unknown worker", body = Problem)
    )
)]
pub async fn get_permissions(
    Extension(svc): Extension<Arc<Service>>,
    PathParams(worker_id): PathParams<String>,
) -> ApiResult<JsonBody<Vec<String>>> {
    Ok(Json(svc.permissions(&worker_id).await?))
}

#[utoipa::path(
    put,
    path = "/worker/{workerId}/permissions",
    tag = "worker",
    security(("bearer" = [])),
    params(("workerId" = String, Path, description = "Worker id")),
    request_body = UpdatePermissionsRequest,
    responses(
        (status = 200, description = "Permissions replaced"),
        (status = 400, description = "Invalid id or missing permissions", body = Problem),
        (status = 404, description = "Unknown worker", body = Problem)
    )
)]
pub async fn update_permissions(
    Extension(svc): Extension<Arc<Service>>,
    PathParams(worker_id): PathParams<String>,
    JsonPayload(req): JsonPayload<UpdatePermissionsRequest>,
) -> ApiResult<StatusCode> {
    svc.update_permissions(&worker_id, req.permissions).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/worker/{workerId}/password/reset",
    tag = "worker",
    security(("bearer" = [])),
    params(("workerId" = String, Path, description = "Worker id")),
    responses(
        (status = 200, description = "New password generated", body = CredentialsDto),
        (status = 400, description = "Invalid id", body = Problem),
        (status = 404, description = "Unknown worker", body = Problem)
    )
)]
pub async fn reset_password(
    Extension(svc): Extension<Arc<Service>>,
    PathParams(worker_id): PathParams<String>,
) -> ApiResult<JsonBody<CredentialsDto>> {
    let credentials = svc.reset_password(&worker_id).await?;
    Ok(Json(credentials.into()))
}

#[utoipa::path(
    get,
    path = "/worker/month/{year}/{month}",
    tag = "worker",
    security(("bearer" = [])),
    params(
        ("year" = i32, Path, description = "Calendar year"),
        ("month" = u32, Path, description = "Month, 1 = January")
    ),
    responses(
        (status = 200, description = "Month calendar", body = MonthResponse),
        (status = 400, description = "Month out of range", body = Problem)
    )
)]
pub async fn get_month(
    Extension(svc): Extension<Arc<Service>>,
    PathParams((year, month)): PathParams<(i32, u32)>,
) -> ApiResult<JsonBody<MonthResponse>> {
    let calendar = svc.month(year, month).await?;
    Ok(Json(MonthResponse::from(&calendar)))
}

#[utoipa::path(
    post,
    path = "/worker/dayoff",
    tag = "worker",
    security(("bearer" = [])),
    request_body = CreateDayOffRequest,
    responses(
        (status = 200, description = "Requests filed"),
        (status = 400, description = "No dates or unparsable dates", body = Problem),
        (status = 401, description = "Missing or invalid token", body = Problem),
        (status = 404, description = "Caller is not a worker", body = Problem)
    )
)]
pub async fn create_day_off_request(
    Authz(ctx): Authz,
    Extension(svc): Extension<Arc<Service>>,
    JsonPayload(req): JsonPayload<CreateDayOffRequest>,
) -> ApiResult<StatusCode> {
    svc.request_days_off(&ctx, &req.dates).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    patch,
    path = "/worker/dayoff",
    tag = "worker",
    security(("bearer" = [])),
    request_body = ChangeDayOffStateRequest,
    responses(
        (status = 200, description = "Request resolved"),
        (status = 400, description = "Invalid id or state", body = Problem),
        (status = 404, description = "Unknown request or caller is not a worker", body = Problem)
    )
)]
pub async fn change_day_off_state(
    Authz(ctx): Authz,
    Extension(svc): Extension<Arc<Service>>,
    JsonPayload(req): JsonPayload<ChangeDayOffStateRequest>,
) -> ApiResult<StatusCode> {
    svc.change_day_off_state(&ctx, &req.id, &req.state).await?;
    Ok(StatusCode::OK)
}
