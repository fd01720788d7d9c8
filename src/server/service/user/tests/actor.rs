use crate::server::{
    error::{auth::AuthError, Error},
    service::user::UserService,
};

use super::*;

/// Expect an actor for an existing user
#[tokio::test]
async fn returns_actor_for_existing_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user_model = test.user().insert_user("golfer").await?;

    let user_service = UserService::new(&test.state.db);
    let actor = user_service.actor(user_model.id).await.unwrap();

    assert_eq!(actor.user_id, user_model.id);

    Ok(())
}

/// Expect UnknownActor once the user has been deleted
#[tokio::test]
async fn fails_for_deleted_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user_model = test.user().insert_user("golfer").await?;

    let user_service = UserService::new(&test.state.db);
    assert!(user_service.delete_user(user_model.id).await.unwrap());
    assert!(!user_service.delete_user(user_model.id).await.unwrap());

    let result = user_service.actor(user_model.id).await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::UnknownActor(id))) if id == user_model.id
    ));

    Ok(())
}
