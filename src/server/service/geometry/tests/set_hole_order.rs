use crate::server::{
    error::{integrity::ReferentialIntegrityError, Error},
    model::policy::HoleOrderPolicy,
    service::geometry::GeometryService,
};

use super::*;

/// Expect the new order to replace the old one exactly
#[tokio::test]
async fn replaces_hole_order() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let situation = test.geometry().insert_situation().await?;
    let h2 = test
        .geometry()
        .insert_hole(situation.game.id, "L2")
        .await?;

    let geometry = GeometryService::new(&test.state.db, HoleOrderPolicy::default());
    let course = geometry
        .set_hole_order(situation.course.id, &[h2.id, situation.hole.id])
        .await
        .unwrap();

    assert_eq!(course.hole_order, vec![h2.id, situation.hole.id]);
    assert!(course.updated_at >= situation.course.updated_at);

    let course = geometry.set_hole_order(course.id, &[]).await.unwrap();
    assert!(course.hole_order.is_empty());

    Ok(())
}

/// Expect a rejected order to leave the stored order untouched
#[tokio::test]
async fn keeps_order_on_failure() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let situation = test.geometry().insert_situation().await?;
    let other_game = test.geometry().insert_game("Mini").await?;
    let foreign = test.geometry().insert_hole(other_game.id, "M1").await?;

    let geometry = GeometryService::new(&test.state.db, HoleOrderPolicy::default());
    let result = geometry
        .set_hole_order(situation.course.id, &[situation.hole.id, foreign.id])
        .await;

    assert!(matches!(
        result,
        Err(Error::IntegrityError(ReferentialIntegrityError::HoleNotInGame { .. }))
    ));
    assert_eq!(
        geometry.list_hole_order(situation.course.id).await.unwrap(),
        vec![situation.hole.id]
    );

    Ok(())
}

/// Expect NotFound for a course that does not exist
#[tokio::test]
async fn fails_for_missing_course() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let geometry = GeometryService::new(&test.state.db, HoleOrderPolicy::default());

    assert!(matches!(
        geometry.set_hole_order(1, &[]).await,
        Err(Error::IntegrityError(ReferentialIntegrityError::NotFound { entity: "Course", .. }))
    ));
    assert!(matches!(
        geometry.list_hole_order(1).await,
        Err(Error::IntegrityError(ReferentialIntegrityError::NotFound { entity: "Course", .. }))
    ));

    Ok(())
}
