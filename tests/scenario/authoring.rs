use caddie::{
    model::{
        display::DisplayName,
        setup::{Objective, SetupFields},
    },
    server::{
        error::{auth::AuthError, validation::ValidationError, Error},
        model::situation::Situation,
    },
};
use caddie_test_utils::prelude::*;

use crate::test_utils::TestSetupExt;

/// Expect handles to be validated and unique
#[tokio::test]
async fn registers_unique_valid_handles() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = test.app();

    let user = app.users().register_user("golfer42").await.unwrap();
    assert_eq!(user.display_name(), "golfer42");

    for handle in ["Golfer", "golf.er", "golf er", " golfer"] {
        assert!(matches!(
            app.users().register_user(handle).await,
            Err(Error::ValidationError(ValidationError::InvalidHandle(_)))
        ));
    }
    assert!(matches!(
        app.users().register_user("golfer42").await,
        Err(Error::DuplicateName { .. })
    ));

    Ok(())
}

/// Expect deleting a user to revoke their actor and remove what they created
#[tokio::test]
async fn deleted_users_cannot_act() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = test.app();
    let s = test.geometry().insert_situation().await?;

    let user = app.users().register_user("golfer").await.unwrap();
    let actor = app.users().actor(user.id).await.unwrap();
    let setup = app
        .setups()
        .create_setup(
            actor,
            SetupFields::new("Ace", Situation::new(s.hole.id, 0, s.pin.id), Objective::Score),
        )
        .await
        .unwrap();

    assert!(app.users().delete_user(user.id).await.unwrap());

    assert!(matches!(
        app.users().actor(user.id).await,
        Err(Error::AuthError(AuthError::UnknownActor(_)))
    ));
    assert!(app.setups().get_setup(setup.id).await.unwrap().is_none());

    Ok(())
}

/// Expect two users to each own a setup of the same name, but not one user twice
#[tokio::test]
async fn setup_names_are_unique_per_creator() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = test.app();
    let s = test.geometry().insert_situation().await?;
    let situation = Situation::new(s.hole.id, 5, s.pin.id);

    let first = app.users().register_user("first").await.unwrap();
    let second = app.users().register_user("second").await.unwrap();
    let first = app.users().actor(first.id).await.unwrap();
    let second = app.users().actor(second.id).await.unwrap();

    let fields = SetupFields::new("Ace", situation, Objective::Score);
    app.setups().create_setup(first, fields.clone()).await.unwrap();
    app.setups().create_setup(second, fields.clone()).await.unwrap();

    assert!(matches!(
        app.setups().create_setup(first, fields).await,
        Err(Error::DuplicateName { entity: "Setup", .. })
    ));
    assert_eq!(
        app.setups()
            .list_setups_for_situation(situation)
            .await
            .unwrap()
            .len(),
        2
    );

    Ok(())
}
