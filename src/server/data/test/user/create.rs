use super::*;

/// Tests inserting an account and reading its credentials back by email.
///
/// Expected: Ok(User) and matching credentials
#[tokio::test]
async fn creates_user_with_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            first_name: "Ada".to_string(),
            last_name: "Vet".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "hash".to_string(),
            phone_no: None,
        })
        .await?;

    assert!(repo.email_exists("ada@example.com").await?);

    let credentials = repo
        .find_credentials_by_email("ada@example.com")
        .await?
        .unwrap();
    assert_eq!(credentials.user, user);
    assert_eq!(credentials.password_hash, "hash");

    Ok(())
}

/// Tests that email lookups are exact.
///
/// Expected: Ok(None) for an unknown address
#[tokio::test]
async fn unknown_email_has_no_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo
        .find_credentials_by_email("nobody@example.com")
        .await?
        .is_none());
    assert!(!repo.email_exists("nobody@example.com").await?);

    Ok(())
}
