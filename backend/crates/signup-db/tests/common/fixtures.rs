use signup_core::User;
use signup_db::UserRepository;

/// Creates an unsaved test User
pub fn create_test_user() -> User {
    User::new("Alice".to_string(), "a@x.com".to_string())
}

/// Inserts a user and returns it with store-assigned fields populated
pub async fn insert_test_user(repo: &UserRepository, name: &str, email: &str) -> User {
    let mut user = User::new(name.to_string(), email.to_string());
    repo.insert(&mut user)
        .await
        .expect("Failed to insert test user");
    user
}
