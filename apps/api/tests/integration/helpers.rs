use aquarium_api::{
    application::aquariums::use_case::AquariumService,
    config::Config,
    infrastructure::database::pool::create_pool,
    domain::{
        aquarium::{entity::Aquarium, errors::DomainError, repository::AquariumRepository},
        user::{entity::UserProfile, repository::UserRepository},
    },
    presentation::http::{
        middleware::auth::{AUTH_HEADER, AuthClaims},
        routes::create_router,
        state::AppState,
    },
};
use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::PgPool;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

/// Aquarium store backed by a vector, newest record last.
#[derive(Default)]
pub struct InMemoryAquariums {
    items: Mutex<Vec<Aquarium>>,
}

impl InMemoryAquariums {
    pub fn snapshot(&self, id: Uuid) -> Option<Aquarium> {
        self.items
            .lock()
            .expect("store poisoned")
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.items.lock().expect("store poisoned").len()
    }
}

#[async_trait]
impl AquariumRepository for InMemoryAquariums {
    async fn create(&self, aquarium: &Aquarium) -> Result<Aquarium, DomainError> {
        self.items
            .lock()
            .expect("store poisoned")
            .push(aquarium.clone());
        Ok(aquarium.clone())
    }

    async fn find_all(&self) -> Result<Vec<Aquarium>, DomainError> {
        let mut all = self.items.lock().expect("store poisoned").clone();
        all.reverse();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Aquarium>, DomainError> {
        Ok(self.snapshot(id))
    }

    async fn save(&self, aquarium: &Aquarium) -> Result<(), DomainError> {
        let mut items = self.items.lock().expect("store poisoned");
        let slot = items
            .iter_mut()
            .find(|a| a.id == aquarium.id)
            .ok_or_else(|| DomainError::NotFound("Aquarium not found".to_string()))?;
        *slot = aquarium.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.items
            .lock()
            .expect("store poisoned")
            .retain(|a| a.id != id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

pub struct InMemoryUsers {
    profiles: HashMap<Uuid, UserProfile>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_profile(&self, id: Uuid) -> Result<Option<UserProfile>, DomainError> {
        Ok(self.profiles.get(&id).cloned())
    }
}

pub struct TestUser {
    pub profile: UserProfile,
    pub token: String,
}

impl TestUser {
    fn new(name: &str) -> Self {
        let profile = UserProfile {
            id: Uuid::now_v7(),
            name: name.to_string(),
            avatar: Some(format!("https://avatars.test/{}.png", name.to_lowercase())),
        };
        let token = token_for(profile.id);
        Self { profile, token }
    }

    pub fn id(&self) -> Uuid {
        self.profile.id
    }
}

pub struct TestApp {
    pub app: Router,
    pub store: Arc<InMemoryAquariums>,
    /// U1 in the scenarios: creates aquariums
    pub owner: TestUser,
    /// U2: likes and comments
    pub fan: TestUser,
    /// Valid token, but no user record behind it
    pub ghost: TestUser,
}

pub fn build_config() -> Config {
    Config {
        database_url: "postgres://unused@localhost/aquariums".to_string(),
        database_max_connections: 1,
        host: "127.0.0.1".to_string(),
        port: 0,
        jwt_secret: TEST_JWT_SECRET.to_string(),
        cors_allowed_origins: Vec::new(),
        ignore_missing_migrations: true,
    }
}

pub fn token_for(user_id: Uuid) -> String {
    token_with_expiry(user_id, TEST_JWT_SECRET, 3600)
}

pub fn token_with_expiry(user_id: Uuid, secret: &str, offset_secs: i64) -> String {
    let claims = AuthClaims::new(
        user_id,
        (chrono::Utc::now().timestamp() + offset_secs) as usize,
    );
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("failed to sign token")
}

/// Migrated pool for repository tests, or `None` when `DATABASE_URL` is unset.
pub async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping database test");
        return None;
    };
    let db = create_pool(&database_url, 2)
        .await
        .expect("failed to create pool");
    let mut migrator = sqlx::migrate!("./migrations");
    migrator.set_ignore_missing(true);
    migrator.run(&db).await.expect("migrations failed");
    Some(db)
}

/// Insert a user row and return its profile.
pub async fn insert_user(db: &PgPool, name: &str) -> UserProfile {
    let profile = UserProfile {
        id: Uuid::now_v7(),
        name: name.to_string(),
        avatar: Some(format!("https://avatars.test/{}.png", name.to_lowercase())),
    };
    sqlx::query("INSERT INTO users (id, name, email, avatar) VALUES ($1, $2, $3, $4)")
        .bind(profile.id)
        .bind(&profile.name)
        .bind(format!("{}@aquariums.test", profile.id))
        .bind(&profile.avatar)
        .execute(db)
        .await
        .expect("failed to insert user");
    profile
}

pub async fn spawn_app() -> TestApp {
    let owner = TestUser::new("Owner");
    let fan = TestUser::new("Fan");
    let ghost = TestUser::new("Ghost");

    let profiles = [&owner, &fan]
        .into_iter()
        .map(|u| (u.id(), u.profile.clone()))
        .collect();
    let store = Arc::new(InMemoryAquariums::default());
    let service = AquariumService::new(store.clone(), Arc::new(InMemoryUsers { profiles }));

    TestApp {
        app: create_router(AppState::new(&build_config(), service)),
        store,
        owner,
        fan,
        ghost,
    }
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTH_HEADER, token);
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTH_HEADER, token);
    }
    builder.body(Body::empty()).expect("failed to build request")
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: StatusCode,
) -> axum::response::Response {
    let actual = res.status();

    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}

/// Create an aquarium through the API and return its JSON.
pub async fn create_aquarium(app: &Router, token: &str, name: &str) -> Value {
    let req = json_request(
        "POST",
        "/aquariums",
        Some(token),
        serde_json::json!({
            "name": name,
            "description": "Mixed reef with soft corals",
            "location": "Lisbon",
            "photo": "https://photos.test/reef.jpg"
        }),
    );
    let res = expect_status(send(app, req).await, StatusCode::OK).await;
    read_json(res).await
}
