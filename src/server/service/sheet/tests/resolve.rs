use crate::{
    model::setup::Objective,
    server::{
        error::{integrity::ReferentialIntegrityError, sheet::SheetError, Error},
        model::{actor::Actor, situation::Situation},
        service::sheet::SheetService,
    },
};

use super::*;

/// Expect the highest enabled matching layer to win and toggles to take effect immediately
#[tokio::test]
async fn resolves_last_enabled_matching_layer() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("golfer").await?;
    let s = test.geometry().insert_situation().await?;
    let a = test
        .setups()
        .insert_setup(user.id, "A", &s.hole, s.pin.id, 5)
        .await?;
    let b = test
        .setups()
        .insert_setup(user.id, "B", &s.hole, s.pin.id, 5)
        .await?;
    let g1 = test.setups().insert_group(user.id, "G1", &[a.id]).await?;
    let g2 = test.setups().insert_group(user.id, "G2", &[]).await?;
    let g3 = test.setups().insert_group(user.id, "G3", &[b.id]).await?;
    let (sheet, layers) = test
        .setups()
        .insert_sheet_with_layers(
            user.id,
            "Main",
            &[(g1.id, true), (g2.id, false), (g3.id, true)],
        )
        .await?;
    let situation = Situation::new(s.hole.id, 5, s.pin.id);

    let sheet_service = SheetService::new(&test.state.db);
    let resolved = sheet_service.resolve(sheet.id, situation).await.unwrap();
    assert_eq!(resolved.map(|setup| setup.id), Some(b.id));

    sheet_service
        .set_layer_enabled(Actor::from(&user), layers[2].id, false)
        .await
        .unwrap();
    let resolved = sheet_service.resolve(sheet.id, situation).await.unwrap();
    assert_eq!(resolved.map(|setup| setup.id), Some(a.id));

    Ok(())
}

/// Expect None when no enabled layer holds a setup for the situation
#[tokio::test]
async fn returns_none_without_match() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("golfer").await?;
    let s = test.geometry().insert_situation().await?;
    let calm = test
        .setups()
        .insert_setup(user.id, "Calm", &s.hole, s.pin.id, 0)
        .await?;
    let windy = test
        .setups()
        .insert_setup(user.id, "Windy", &s.hole, s.pin.id, 10)
        .await?;
    let g1 = test.setups().insert_group(user.id, "G1", &[calm.id]).await?;
    let g2 = test.setups().insert_group(user.id, "G2", &[windy.id]).await?;
    let (sheet, _) = test
        .setups()
        .insert_sheet_with_layers(user.id, "Main", &[(g1.id, true), (g2.id, false)])
        .await?;

    let sheet_service = SheetService::new(&test.state.db);
    let resolved = sheet_service
        .resolve(sheet.id, Situation::new(s.hole.id, 10, s.pin.id))
        .await
        .unwrap();

    assert!(resolved.is_none());

    Ok(())
}

/// Expect AmbiguousMatch when an enabled layer's group holds two setups for the situation
#[tokio::test]
async fn fails_for_ambiguous_group() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("golfer").await?;
    let s = test.geometry().insert_situation().await?;
    let a = test
        .setups()
        .insert_setup(user.id, "A", &s.hole, s.pin.id, 5)
        .await?;
    let b = test
        .setups()
        .insert_setup(user.id, "B", &s.hole, s.pin.id, 5)
        .await?;
    let group = test
        .setups()
        .insert_group(user.id, "Both", &[a.id, b.id])
        .await?;
    let (sheet, layers) = test
        .setups()
        .insert_sheet_with_layers(user.id, "Main", &[(group.id, true)])
        .await?;

    let sheet_service = SheetService::new(&test.state.db);
    let result = sheet_service
        .resolve(sheet.id, Situation::new(s.hole.id, 5, s.pin.id))
        .await;

    match result {
        Err(Error::SheetError(SheetError::AmbiguousMatch {
            layer_id,
            group_id,
            setup_ids,
        })) => {
            assert_eq!(layer_id, layers[0].id);
            assert_eq!(group_id, group.id);
            assert_eq!(setup_ids, vec![a.id, b.id]);
        }
        other => panic!("expected AmbiguousMatch, got {other:?}"),
    }

    // Other pins are unaffected by the ambiguity
    let other_pin = sheet_service
        .resolve(sheet.id, Situation::new(s.hole.id, 5, s.other_pin.id))
        .await
        .unwrap();
    assert!(other_pin.is_none());

    Ok(())
}

/// Expect layers of deleted groups to be skipped
#[tokio::test]
async fn skips_dangling_layers() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("golfer").await?;
    let s = test.geometry().insert_situation().await?;
    let a = test
        .setups()
        .insert_setup(user.id, "A", &s.hole, s.pin.id, 5)
        .await?;
    let b = test
        .setups()
        .insert_setup(user.id, "B", &s.hole, s.pin.id, 5)
        .await?;
    let g1 = test.setups().insert_group(user.id, "G1", &[a.id]).await?;
    let g2 = test.setups().insert_group(user.id, "G2", &[b.id]).await?;
    let (sheet, _) = test
        .setups()
        .insert_sheet_with_layers(user.id, "Main", &[(g1.id, true), (g2.id, true)])
        .await?;

    let group_service = crate::server::service::group::GroupService::new(&test.state.db);
    group_service
        .delete_group(Actor::from(&user), g2.id)
        .await
        .unwrap();

    let sheet_service = SheetService::new(&test.state.db);
    let resolved = sheet_service
        .resolve(sheet.id, Situation::new(s.hole.id, 5, s.pin.id))
        .await
        .unwrap();
    assert_eq!(resolved.map(|setup| setup.id), Some(a.id));

    let sheet = sheet_service.get_sheet(sheet.id).await.unwrap().unwrap();
    assert!(!sheet.layers[0].dangling);
    assert!(sheet.layers[1].dangling);

    Ok(())
}

/// Expect the full setup to be returned, including its objective
#[tokio::test]
async fn returns_full_setup() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("golfer").await?;
    let s = test.geometry().insert_situation().await?;
    let a = test
        .setups()
        .insert_setup(user.id, "A", &s.hole, s.pin.id, 0)
        .await?;
    let group = test.setups().insert_group(user.id, "G", &[a.id]).await?;
    let (sheet, _) = test
        .setups()
        .insert_sheet_with_layers(user.id, "Main", &[(group.id, true)])
        .await?;

    let sheet_service = SheetService::new(&test.state.db);
    let resolved = sheet_service
        .resolve(sheet.id, Situation::new(s.hole.id, 0, s.pin.id))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(resolved.name, "A");
    assert_eq!(resolved.objective, Objective::Score);
    assert_eq!(resolved.creator_id, user.id);

    Ok(())
}

/// Expect NotFound for a sheet that does not exist
#[tokio::test]
async fn fails_for_missing_sheet() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let sheet_service = SheetService::new(&test.state.db);
    let result = sheet_service.resolve(1, Situation::new(1, 0, 1)).await;

    assert!(matches!(
        result,
        Err(Error::IntegrityError(ReferentialIntegrityError::NotFound { entity: "Sheet", .. }))
    ));

    Ok(())
}
