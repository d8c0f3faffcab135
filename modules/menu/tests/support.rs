#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use canteen_auth::{
    AuthError, AuthState, JwtConfig, PermissionSource, SecurityContext, TokenService,
};
use canteen_db::DbConfig;
use chrono::Utc;
use menu::infra::storage::entity::{
    food, food_addition, menu as menu_entity, menu_food, order, order_item, order_item_addition,
};
use menu::{MenuModule, permissions};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tower::ServiceExt;
use uuid::Uuid;

pub const MENU_NAME: &str = "Breakfast Menu";
pub const FOOD_NAME: &str = "Omelette Sandwich";

/// Grants every menu permission to a fixed set of users.
struct Granted(HashSet<Uuid>);

#[async_trait]
impl PermissionSource for Granted {
    async fn has_permission(
        &self,
        ctx: &SecurityContext,
        permission: &str,
    ) -> Result<bool, AuthError> {
        Ok(self.0.contains(&ctx.user_id()) && permissions::ALL.contains(&permission))
    }
}

pub struct Fixture {
    pub app: Router,
    pub db: DatabaseConnection,
    pub standard_token: String,
    /// Admin holding every `P_MENU_*` permission
    pub admin_token: String,
    /// Admin without any permission
    pub bare_admin_token: String,
    pub menu_id: Uuid,
    pub food_id: Uuid,
    pub order_id: Uuid,
}

pub async fn inmem_db() -> DatabaseConnection {
    let cfg = DbConfig {
        dsn: "sqlite::memory:".to_owned(),
        ..DbConfig::default()
    };
    let db = canteen_db::connect(&cfg).await.expect("connect sqlite");
    MenuModule::migrate(&db).await.expect("migrate menu");
    db
}

async fn seed_catalog(db: &DatabaseConnection) -> (Uuid, Uuid, Uuid) {
    let food_id = Uuid::new_v4();
    food::ActiveModel {
        id: Set(food_id),
        name: Set(FOOD_NAME.to_owned()),
        price: Set(Decimal::new(1599, 2)),
        description: Set("Just a fancy sandwich".to_owned()),
    }
    .insert(db)
    .await
    .unwrap();

    let addition_id = Uuid::new_v4();
    food_addition::ActiveModel {
        id: Set(addition_id),
        food_id: Set(food_id),
        name: Set("Mayo".to_owned()),
        price: Set(Decimal::new(99, 2)),
        position: Set(0),
    }
    .insert(db)
    .await
    .unwrap();

    let menu_id = Uuid::new_v4();
    menu_entity::ActiveModel {
        id: Set(menu_id),
        name: Set(MENU_NAME.to_owned()),
    }
    .insert(db)
    .await
    .unwrap();
    menu_food::ActiveModel {
        menu_id: Set(menu_id),
        food_id: Set(food_id),
        position: Set(0),
    }
    .insert(db)
    .await
    .unwrap();

    (menu_id, food_id, addition_id)
}

async fn seed_order(
    db: &DatabaseConnection,
    user: Uuid,
    food_id: Uuid,
    addition_id: Uuid,
) -> Uuid {
    let order_id = Uuid::new_v4();
    order::ActiveModel {
        id: Set(order_id),
        user_id: Set(user),
        total_price: Set(Decimal::new(1698, 2)),
        comment: Set(None),
        current_state: Set("SAVED".to_owned()),
        created_date: Set(Utc::now()),
    }
    .insert(db)
    .await
    .unwrap();

    let item_id = Uuid::new_v4();
    order_item::ActiveModel {
        id: Set(item_id),
        order_id: Set(order_id),
        food_id: Set(food_id),
        quantity: Set(1),
        price: Set(Decimal::new(1698, 2)),
    }
    .insert(db)
    .await
    .unwrap();

    order_item_addition::ActiveModel {
        id: Set(Uuid::new_v4()),
        order_item_id: Set(item_id),
        food_addition_id: Set(addition_id),
        quantity: Set(1),
        price: Set(Decimal::new(99, 2)),
    }
    .insert(db)
    .await
    .unwrap();

    order_id
}

pub async fn fixture() -> Fixture {
    let db = inmem_db().await;
    let (menu_id, food_id, addition_id) = seed_catalog(&db).await;

    let standard_user = Uuid::new_v4();
    let admin = Uuid::new_v4();
    let bare_admin = Uuid::new_v4();
    let order_id = seed_order(&db, standard_user, food_id, addition_id).await;

    let tokens = Arc::new(TokenService::new(&JwtConfig {
        secret: "integration-secret".to_owned(),
        token_ttl_secs: 600,
    }));
    let standard_token = tokens
        .issue(standard_user, "test_user@canteen.com", false)
        .unwrap();
    let admin_token = tokens.issue(admin, "test_admin@canteen.com", true).unwrap();
    let bare_admin_token = tokens
        .issue(bare_admin, "test_unsaved@canteen.com", true)
        .unwrap();

    let granted: Arc<dyn PermissionSource> = Arc::new(Granted(HashSet::from([admin])));
    let app = MenuModule::new(&db).router(AuthState::new(tokens), granted);

    Fixture {
        app,
        db,
        standard_token,
        admin_token,
        bare_admin_token,
        menu_id,
        food_id,
        order_id,
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
