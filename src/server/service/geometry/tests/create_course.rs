use crate::{
    model::display::DisplayName,
    server::{
        data::geometry::course::CourseRepository,
        error::{integrity::ReferentialIntegrityError, validation::ValidationError, Error},
        model::policy::HoleOrderPolicy,
        service::geometry::GeometryService,
    },
};

use super::*;

/// Expect the hole order verbatim and the wind speeds deduplicated in ascending order
#[tokio::test]
async fn creates_course() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let game = test.geometry().insert_game("Golf").await?;
    let h1 = test.geometry().insert_hole(game.id, "L1").await?;
    let h2 = test.geometry().insert_hole(game.id, "L2").await?;

    let geometry = GeometryService::new(&test.state.db, HoleOrderPolicy::default());
    let course = geometry
        .create_course(game.id, "Lakeside", &[h2.id, h1.id], &[10, 0, 5, 10])
        .await
        .unwrap();

    assert_eq!(course.hole_order, vec![h2.id, h1.id]);
    assert_eq!(course.wind_speeds, vec![0, 5, 10]);
    assert_eq!(course.display_name(), "Golf (Lakeside)");
    assert_eq!(
        geometry.list_hole_order(course.id).await.unwrap(),
        vec![h2.id, h1.id]
    );

    Ok(())
}

/// Expect HoleNotInGame when a hole belongs to another game
#[tokio::test]
async fn fails_for_hole_from_other_game() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let game = test.geometry().insert_game("Golf").await?;
    let other_game = test.geometry().insert_game("Mini").await?;
    let foreign = test.geometry().insert_hole(other_game.id, "M1").await?;

    let geometry = GeometryService::new(&test.state.db, HoleOrderPolicy::default());
    let result = geometry
        .create_course(game.id, "Lakeside", &[foreign.id], &[])
        .await;

    assert!(matches!(
        result,
        Err(Error::IntegrityError(ReferentialIntegrityError::HoleNotInGame { .. }))
    ));
    // Nothing is written when validation fails
    let courses = CourseRepository::new(&test.state.db)
        .get_by_game(game.id)
        .await?;
    assert!(courses.is_empty());

    Ok(())
}

/// Expect NotFound for a hole that does not exist
#[tokio::test]
async fn fails_for_missing_hole() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let game = test.geometry().insert_game("Golf").await?;

    let geometry = GeometryService::new(&test.state.db, HoleOrderPolicy::default());
    let result = geometry
        .create_course(game.id, "Lakeside", &[i32::MAX], &[])
        .await;

    assert!(matches!(
        result,
        Err(Error::IntegrityError(ReferentialIntegrityError::NotFound { entity: "Hole", .. }))
    ));

    Ok(())
}

/// Expect repeated holes to be rejected by default and accepted when the policy allows them
#[tokio::test]
async fn repeated_holes_follow_policy() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let game = test.geometry().insert_game("Golf").await?;
    let hole = test.geometry().insert_hole(game.id, "L1").await?;

    let strict = GeometryService::new(&test.state.db, HoleOrderPolicy::default());
    let result = strict
        .create_course(game.id, "Twice", &[hole.id, hole.id], &[])
        .await;
    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::RepeatedHole(id))) if id == hole.id
    ));

    let lenient = GeometryService::new(
        &test.state.db,
        HoleOrderPolicy {
            allow_repeated_holes: true,
        },
    );
    let course = lenient
        .create_course(game.id, "Twice", &[hole.id, hole.id], &[])
        .await
        .unwrap();
    assert_eq!(course.hole_order, vec![hole.id, hole.id]);

    Ok(())
}

/// Expect NegativeWindSpeed for wind speeds below zero
#[tokio::test]
async fn fails_for_negative_wind_speed() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let game = test.geometry().insert_game("Golf").await?;

    let geometry = GeometryService::new(&test.state.db, HoleOrderPolicy::default());
    let result = geometry.create_course(game.id, "Lakeside", &[], &[5, -1]).await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::NegativeWindSpeed(-1)))
    ));

    Ok(())
}
