use crate::server::{
    error::{auth::AuthError, Error},
    model::actor::Actor,
    service::group::GroupService,
};

use super::*;

/// Expect an empty group owned by the actor
#[tokio::test]
async fn creates_group() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("golfer").await?;

    let group_service = GroupService::new(&test.state.db);
    let group = group_service
        .create_group(Actor::from(&user), "Favourites")
        .await
        .unwrap();

    assert_eq!(group.creator_id, user.id);
    assert!(group.setup_ids.is_empty());
    assert_eq!(group_service.get_group(group.id).await.unwrap(), Some(group));

    Ok(())
}

/// Expect DuplicateName for a second group with the same name and creator
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("golfer").await?;

    let group_service = GroupService::new(&test.state.db);
    group_service
        .create_group(Actor::from(&user), "Favourites")
        .await
        .unwrap();
    let result = group_service
        .create_group(Actor::from(&user), "Favourites")
        .await;

    assert!(matches!(
        result,
        Err(Error::DuplicateName { entity: "Group", .. })
    ));

    Ok(())
}

/// Expect only the creator to rename a group
#[tokio::test]
async fn rename_is_creator_only() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("golfer").await?;
    let other = test.user().insert_user("caddie").await?;
    let group = test.setups().insert_group(user.id, "Favourites", &[]).await?;

    let group_service = GroupService::new(&test.state.db);

    assert!(matches!(
        group_service
            .rename_group(Actor::from(&other), group.id, "Mine")
            .await,
        Err(Error::AuthError(AuthError::NotCreator { .. }))
    ));
    let renamed = group_service
        .rename_group(Actor::from(&user), group.id, "Windy days")
        .await
        .unwrap();
    assert_eq!(renamed.name, "Windy days");

    Ok(())
}

/// Expect the creator's groups to be listed with their members
#[tokio::test]
async fn lists_groups_by_creator() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("golfer").await?;
    let other = test.user().insert_user("caddie").await?;
    let situation = test.geometry().insert_situation().await?;
    let setup = test
        .setups()
        .insert_setup(user.id, "Ace", &situation.hole, situation.pin.id, 5)
        .await?;
    test.setups()
        .insert_group(user.id, "Favourites", &[setup.id])
        .await?;
    test.setups().insert_group(other.id, "Theirs", &[]).await?;

    let group_service = GroupService::new(&test.state.db);
    let groups = group_service.list_groups_by_creator(user.id).await.unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].setup_ids, vec![setup.id]);

    Ok(())
}

/// Expect exactly one of two concurrent creates with the same name and creator to succeed
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_duplicate_creates_admit_one() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("golfer").await?;

    let first_service = GroupService::new(&test.state.db);
    let second_service = GroupService::new(&test.state.db);
    let (first, second) = tokio::join!(
        first_service.create_group(Actor::from(&user), "Same"),
        second_service.create_group(Actor::from(&user), "Same"),
    );

    let results = [first, second];
    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(results.iter().any(|result| matches!(
        result,
        Err(Error::DuplicateName { entity: "Group", .. })
    )));
    assert_eq!(first_service.list_groups_by_creator(user.id).await.unwrap().len(), 1);

    Ok(())
}
