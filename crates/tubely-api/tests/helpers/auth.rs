use tubely_api::auth::make_jwt;
use uuid::Uuid;

/// Secret shared by the test config and every token minted here.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-at-least-32-characters-long";

/// A user with a valid access token.
pub struct TestUser {
    pub user_id: Uuid,
    pub token: String,
}

impl TestUser {
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

pub fn create_test_user() -> TestUser {
    let user_id = Uuid::new_v4();
    let token = make_jwt(user_id, TEST_JWT_SECRET, chrono::Duration::hours(1))
        .expect("Failed to sign test token");
    TestUser { user_id, token }
}

pub fn expired_token(user_id: Uuid) -> String {
    make_jwt(user_id, TEST_JWT_SECRET, chrono::Duration::hours(-2))
        .expect("Failed to sign test token")
}
