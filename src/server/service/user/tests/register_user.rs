use crate::server::{
    error::{validation::ValidationError, Error},
    service::user::UserService,
};

use super::*;

/// Expect Ok with the new user for a valid handle
#[tokio::test]
async fn registers_valid_handle() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let user_service = UserService::new(&test.state.db);
    let user = user_service.register_user("ace42").await.unwrap();

    assert_eq!(user.handle, "ace42");
    assert!(!user.verified && !user.trusted && !user.admin);
    let found = user_service.get_user_by_handle("ace42").await.unwrap();
    assert_eq!(found, Some(user));

    Ok(())
}

/// Expect ValidationError for uppercase, punctuation, whitespace, empty and overlong handles
#[tokio::test]
async fn rejects_invalid_handles() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let user_service = UserService::new(&test.state.db);
    let too_long = "a".repeat(33);
    for handle in ["Ace", "ace-42", "ace 42", "", too_long.as_str()] {
        let result = user_service.register_user(handle).await;

        assert!(
            matches!(
                result,
                Err(Error::ValidationError(ValidationError::InvalidHandle(_)))
            ),
            "{handle:?} should be rejected"
        );
    }

    Ok(())
}

/// Expect DuplicateName when the handle is already registered
#[tokio::test]
async fn fails_for_taken_handle() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    test.user().insert_user("golfer").await?;

    let user_service = UserService::new(&test.state.db);
    let result = user_service.register_user("golfer").await;

    assert!(matches!(result, Err(Error::DuplicateName { entity: "User", .. })));

    Ok(())
}

/// Expect exactly one of two concurrent registrations of the same handle to succeed
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_registrations_admit_one() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let first_service = UserService::new(&test.state.db);
    let second_service = UserService::new(&test.state.db);
    let (first, second) = tokio::join!(
        first_service.register_user("dup"),
        second_service.register_user("dup"),
    );

    let results = [first, second];
    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(results.iter().any(|result| matches!(
        result,
        Err(Error::DuplicateName { entity: "User", .. })
    )));
    assert!(first_service.get_user_by_handle("dup").await.unwrap().is_some());

    Ok(())
}
