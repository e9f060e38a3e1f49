use super::helpers::{spawn_app, unique};
use blog_api::{
    application::user::dto::RegisterUserRequest,
    domain::{shared::errors::DomainError, user::credentials::CredentialsProvider},
};

#[tokio::test]
async fn registration_hashes_password_and_is_findable() {
    let Some(app) = spawn_app().await else { return };
    let username = unique("alice");
    let email = format!("{}@x.com", username);

    let stored = app
        .state
        .users
        .register(RegisterUserRequest {
            username: username.clone(),
            email: email.clone(),
            password: "pw".to_string(),
        })
        .await
        .expect("registration failed");

    assert_ne!(stored.password, "pw");
    assert!(bcrypt::verify("pw", &stored.password).unwrap());

    let by_name = app.state.users.find_by_username(&username).await.unwrap();
    assert_eq!(by_name, Some(stored.clone()));
    let by_email = app.state.users.find_by_email(&email).await.unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(stored.id));

    let credentials = app.state.users.load_credentials(&username).await.unwrap();
    assert_eq!(credentials.password_hash, stored.password);
    assert_eq!(credentials.authorities, vec!["USER".to_string()]);
}

#[tokio::test]
async fn duplicate_username_conflicts() {
    let Some(app) = spawn_app().await else { return };
    let username = unique("dup");
    let request = |email: &str| RegisterUserRequest {
        username: username.clone(),
        email: email.to_string(),
        password: "pw".to_string(),
    };

    app.state
        .users
        .register(request(&format!("{}-1@x.com", username)))
        .await
        .unwrap();
    let err = app
        .state
        .users
        .register(request(&format!("{}-2@x.com", username)))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
}

#[tokio::test]
async fn unknown_lookups_are_empty_or_not_found() {
    let Some(app) = spawn_app().await else { return };
    let ghost = unique("ghost");

    assert_eq!(app.state.users.find_by_username(&ghost).await, Ok(None));
    assert!(matches!(
        app.state.users.load_credentials(&ghost).await,
        Err(DomainError::NotFound(_))
    ));
}
