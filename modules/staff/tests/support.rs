#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use canteen_auth::{AuthState, JwtConfig, TokenService, password};
use canteen_db::DbConfig;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use staff::domain::work_hours::default_work_hours;
use staff::infra::storage::entity::{day_off, user, worker};
use staff::infra::storage::mapper::{permissions_json, work_hours_json};
use staff::{StaffConfig, StaffModule};
use tower::ServiceExt;
use uuid::Uuid;

pub const PASSWORD: &str = "password";

pub struct Fixture {
    pub app: Router,
    pub db: DatabaseConnection,
    pub standard_token: String,
    pub admin_token: String,
    pub admin_user_id: Uuid,
    /// Worker record of the admin user
    pub worker_id: Uuid,
    pub standard_user_id: Uuid,
}

pub async fn inmem_db() -> DatabaseConnection {
    let cfg = DbConfig {
        dsn: "sqlite::memory:".to_owned(),
        ..DbConfig::default()
    };
    let db = canteen_db::connect(&cfg).await.expect("connect sqlite");
    StaffModule::migrate(&db).await.expect("migrate staff");
    db
}

async fn seed_user(
    db: &DatabaseConnection,
    first: &str,
    last: &str,
    email: &str,
    admin: bool,
) -> Uuid {
    let id = Uuid::new_v4();
    user::ActiveModel {
        id: Set(id),
        email: Set(email.to_owned()),
        first_name: Set(first.to_owned()),
        last_name: Set(last.to_owned()),
        password_hash: Set(password::hash_password(PASSWORD).unwrap()),
        admin: Set(admin),
    }
    .insert(db)
    .await
    .unwrap();
    id
}

pub async fn seed_day_off(
    db: &DatabaseConnection,
    worker_id: Uuid,
    date: NaiveDate,
    state: &str,
) -> Uuid {
    let id = Uuid::new_v4();
    day_off::ActiveModel {
        id: Set(id),
        worker_id: Set(worker_id),
        date: Set(date),
        state: Set(state.to_owned()),
        resolved_by: Set(None),
        resolved_date: Set(None),
    }
    .insert(db)
    .await
    .unwrap();
    id
}

pub async fn fixture() -> Fixture {
    let db = inmem_db().await;

    let standard_user_id =
        seed_user(&db, "Amanda", "Fishsticks", "test_user@canteen.com", false).await;
    let admin_user_id =
        seed_user(&db, "Felix", "Fitzgerald", "test_admin@canteen.com", true).await;

    let worker_id = Uuid::new_v4();
    worker::ActiveModel {
        id: Set(worker_id),
        person_id: Set(admin_user_id),
        default_work_hours: Set(work_hours_json(&default_work_hours()).unwrap()),
        permissions: Set(permissions_json(&[])),
        employment_date: Set(NaiveDate::from_ymd_opt(2018, 10, 1).unwrap()),
    }
    .insert(&db)
    .await
    .unwrap();

    let tokens = Arc::new(TokenService::new(&JwtConfig {
        secret: "integration-secret".to_owned(),
        token_ttl_secs: 600,
    }));
    let standard_token = tokens
        .issue(standard_user_id, "test_user@canteen.com", false)
        .unwrap();
    let admin_token = tokens
        .issue(admin_user_id, "test_admin@canteen.com", true)
        .unwrap();

    let module = StaffModule::new(&db, StaffConfig::default(), tokens.clone());
    let app = module.router(AuthState::new(tokens));

    Fixture {
        app,
        db,
        standard_token,
        admin_token,
        admin_user_id,
        worker_id,
        standard_user_id,
    }
}

pub fn request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_owned()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.unwrap()
}

pub async fn json_body(resp: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
