use caddie::{
    model::setup::{Objective, SetupFields},
    server::{
        error::{sheet::SheetError, Error},
        model::{app::AppState, situation::Situation},
    },
};
use caddie_test_utils::prelude::*;

use crate::test_utils::TestSetupExt;

/// Builds geometry, setups, groups and a three layer sheet through the services, then checks
/// overriding, toggling, reordering and group deletion against resolution
#[tokio::test]
async fn layered_sheet_lifecycle() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = test.app();

    let user = app.users().register_user("golfer").await.unwrap();
    let actor = app.users().actor(user.id).await.unwrap();

    let game = app.geometry().create_game("Golf").await.unwrap();
    let hole = app.geometry().create_hole(game.id, "L1").await.unwrap();
    let pin = app.geometry().create_pin(hole.id, "A").await.unwrap();
    app.geometry()
        .create_course(game.id, "Lakeside", &[hole.id], &[0, 5, 10])
        .await
        .unwrap();
    let situation = Situation::new(hole.id, 5, pin.id);

    let a = app
        .setups()
        .create_setup(actor, SetupFields::new("A", situation, Objective::Score))
        .await
        .unwrap();
    let b = app
        .setups()
        .create_setup(actor, SetupFields::new("B", situation, Objective::Speed))
        .await
        .unwrap();

    let g1 = app.groups().create_group(actor, "G1").await.unwrap();
    let g2 = app.groups().create_group(actor, "G2").await.unwrap();
    let g3 = app.groups().create_group(actor, "G3").await.unwrap();
    app.groups().add_to_group(actor, g1.id, a.id).await.unwrap();
    app.groups().add_to_group(actor, g3.id, b.id).await.unwrap();

    let sheet = app.sheets().create_sheet(actor, "Main").await.unwrap();
    let l1 = app.sheets().add_layer(actor, sheet.id, g1.id, true).await.unwrap();
    let l2 = app.sheets().add_layer(actor, sheet.id, g2.id, false).await.unwrap();
    let l3 = app.sheets().add_layer(actor, sheet.id, g3.id, true).await.unwrap();

    // G3 overrides G1
    assert_eq!(resolved(&app, sheet.id, situation).await, Some(b.id));

    // Disabling G3 falls back to G1
    app.sheets().set_layer_enabled(actor, l3.id, false).await.unwrap();
    assert_eq!(resolved(&app, sheet.id, situation).await, Some(a.id));
    app.sheets().set_layer_enabled(actor, l3.id, true).await.unwrap();

    // Moving G1 to the top gives it priority
    app.sheets()
        .reorder_layers(actor, sheet.id, &[l3.id, l2.id, l1.id])
        .await
        .unwrap();
    assert_eq!(resolved(&app, sheet.id, situation).await, Some(a.id));

    // Deleting G1 leaves a dangling layer which resolution skips
    app.groups().delete_group(actor, g1.id).await.unwrap();
    assert_eq!(resolved(&app, sheet.id, situation).await, Some(b.id));

    // Situations without setups resolve to nothing
    let calm = Situation::new(hole.id, 0, pin.id);
    assert!(app.sheets().resolve(sheet.id, calm).await.unwrap().is_none());

    Ok(())
}

async fn resolved(app: &AppState, sheet_id: i32, situation: Situation) -> Option<i32> {
    app.sheets()
        .resolve(sheet_id, situation)
        .await
        .unwrap()
        .map(|setup| setup.id)
}

/// Expect resolving to be unaffected by reading and writing back the unchanged layer order
#[tokio::test]
async fn no_op_reorder_keeps_resolution() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = test.app();
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
    let actor = app.users().actor(user.id).await.unwrap();
    let situation = Situation::new(s.hole.id, 5, s.pin.id);

    let before = app.sheets().resolve(sheet.id, situation).await.unwrap();

    let stored = app.sheets().get_sheet(sheet.id).await.unwrap().unwrap();
    let order: Vec<i32> = stored.layers.iter().map(|layer| layer.id).collect();
    let rewritten = app
        .sheets()
        .reorder_layers(actor, sheet.id, &order)
        .await
        .unwrap();

    let after = app.sheets().resolve(sheet.id, situation).await.unwrap();

    assert_eq!(rewritten.layers, stored.layers);
    assert_eq!(before, after);
    assert_eq!(after.map(|setup| setup.id), Some(b.id));

    Ok(())
}

/// Expect a group holding two setups for the situation to make resolution fail
#[tokio::test]
async fn ambiguous_group_fails_resolution() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = test.app();
    let user = test.user().insert_user("golfer").await?;
    let s = test.geometry().insert_situation().await?;
    let a = test
        .setups()
        .insert_setup(user.id, "A", &s.hole, s.pin.id, 10)
        .await?;
    let b = test
        .setups()
        .insert_setup(user.id, "B", &s.hole, s.pin.id, 10)
        .await?;
    let group = test
        .setups()
        .insert_group(user.id, "Both", &[a.id, b.id])
        .await?;
    let (sheet, _) = test
        .setups()
        .insert_sheet_with_layers(user.id, "Main", &[(group.id, true)])
        .await?;

    let result = app
        .sheets()
        .resolve(sheet.id, Situation::new(s.hole.id, 10, s.pin.id))
        .await;

    assert!(matches!(
        result,
        Err(Error::SheetError(SheetError::AmbiguousMatch { .. }))
    ));

    Ok(())
}
