use uuid::Uuid;

use fitness_domain::user::UserResponse;
use fitness_users::error::UsersServiceError;
use fitness_users::usecase::user::{
    GetUserUseCase, RegisterInput, RegisterUserUseCase, ValidateUserUseCase,
};

use crate::helpers::InMemoryUserRepo;

fn register_input(email: &str, keycloak_id: &str) -> RegisterInput {
    RegisterInput {
        email: email.to_owned(),
        keycloak_id: keycloak_id.to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Runner".to_owned(),
    }
}

#[tokio::test]
async fn should_fetch_registered_user_by_returned_id() {
    let repo = InMemoryUserRepo::empty();
    let register = RegisterUserUseCase { repo: repo.clone() };
    let get = GetUserUseCase { repo };

    let created = register
        .execute(register_input("ada@example.com", "kc-ada"))
        .await
        .unwrap();
    let registered = UserResponse::from(created);
    let id: Uuid = registered.id.parse().unwrap();

    let fetched = UserResponse::from(get.execute(id).await.unwrap());
    assert_eq!(fetched, registered);
    assert_eq!(fetched.email, "ada@example.com");
    assert_eq!(fetched.first_name, "Ada");
    assert_eq!(fetched.last_name, "Runner");
}

#[tokio::test]
async fn should_reject_second_registration_with_same_email() {
    let repo = InMemoryUserRepo::empty();
    let register = RegisterUserUseCase { repo: repo.clone() };

    let first = register.execute(register_input("a@x.com", "")).await;
    assert!(first.is_ok(), "first registration failed: {first:?}");

    let second = register.execute(register_input("a@x.com", "")).await;
    assert!(
        matches!(second, Err(UsersServiceError::UserAlreadyExists)),
        "expected UserAlreadyExists, got {second:?}"
    );
    assert_eq!(repo.len(), 1, "duplicate must not be stored");
}

#[tokio::test]
async fn should_allow_many_users_without_keycloak_id() {
    let repo = InMemoryUserRepo::empty();
    let register = RegisterUserUseCase { repo: repo.clone() };

    register.execute(register_input("a@x.com", "")).await.unwrap();
    register.execute(register_input("b@x.com", "")).await.unwrap();
    assert_eq!(repo.len(), 2);
}

#[tokio::test]
async fn should_store_only_one_of_concurrent_registrations() {
    let repo = InMemoryUserRepo::empty();
    let register = RegisterUserUseCase { repo: repo.clone() };

    let (a, b) = tokio::join!(
        register.execute(register_input("race@x.com", "")),
        register.execute(register_input("race@x.com", "")),
    );
    let conflicts = [&a, &b]
        .iter()
        .filter(|r| matches!(r, Err(UsersServiceError::UserAlreadyExists)))
        .count();
    assert_eq!(conflicts, 1, "exactly one registration must lose: {a:?} / {b:?}");
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn should_validate_only_registered_keycloak_ids() {
    let repo = InMemoryUserRepo::empty();
    let register = RegisterUserUseCase { repo: repo.clone() };
    let validate = ValidateUserUseCase { repo };

    assert!(!validate.execute("kc-ada").await.unwrap());

    register
        .execute(register_input("ada@example.com", "kc-ada"))
        .await
        .unwrap();

    assert!(validate.execute("kc-ada").await.unwrap());
    assert!(!validate.execute("kc-someone-else").await.unwrap());
}

#[tokio::test]
async fn should_return_not_found_for_unknown_id() {
    let get = GetUserUseCase {
        repo: InMemoryUserRepo::empty(),
    };
    let result = get.execute(Uuid::now_v7()).await;
    assert!(
        matches!(result, Err(UsersServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}
