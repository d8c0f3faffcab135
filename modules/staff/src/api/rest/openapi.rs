use utoipa::OpenApi;

use super::{dto, handlers};

/// OpenAPI document of the staff routes. Guarded paths reference the
/// `bearer` security scheme, which the server registers once for all modules.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::login,
        handlers::list_workers,
        handlers::create_worker,
        handlers::get_worker_details,
        handlers::get_permissions,
        handlers::update_permissions,
        handlers::reset_password,
        handlers::get_month,
        handlers::create_day_off_request,
        handlers::change_day_off_state,
    ),
    components(schemas(
        dto::PersonDto,
        dto::TimeDto,
        dto::WorkHoursDto,
        dto::WorkerListItemDto,
        dto::WorkerListResponse,
        dto::WorkHoursRequest,
        dto::CreateWorkerRequest,
        dto::CredentialsDto,
        dto::DayOffStateDto,
        dto::WorkDayDto,
        dto::DayOffDetailsDto,
        dto::WorkerDetailsDto,
        dto::UpdatePermissionsRequest,
        dto::CalendarWorkerDto,
        dto::WorkerRefDto,
        dto::DayOffRequestDto,
        dto::DayDto,
        dto::MonthResponse,
        dto::CreateDayOffRequest,
        dto::ChangeDayOffStateRequest,
        dto::LoginRequest,
        dto::TokenResponse,
        canteen_errors::Problem,
        canteen_errors::ValidationViolation,
    )),
    tags(
        (name = "user", description = "Login"),
        (name = "worker", description = "Workers, schedules and day-off requests")
    )
)]
pub struct StaffApi;
