//! Layer resolution.
//!
//! Picks the setup a sheet applies to a situation from a snapshot of the sheet's layers, the
//! groups that still exist, and group membership. Nothing here touches the database so the
//! outcome depends only on its inputs.

use std::collections::{HashMap, HashSet};

use crate::server::{
    error::sheet::SheetError,
    model::{
        db::{SetupModel, SetupSheetLayerModel},
        situation::Situation,
    },
};

/// Resolves `situation` against `layers`, given lowest priority first
///
/// Disabled layers and layers whose group is absent from `existing_groups` are skipped. Of
/// the remaining layers, the last one whose group holds a setup for `situation` decides the
/// result. `members` maps group IDs to member setups; members targeting other situations are
/// ignored.
///
/// # Returns
/// - `Ok(Some(setup))` - The setup from the highest priority matching layer
/// - `Ok(None)` - No layer matches
/// - `Err(SheetError::AmbiguousMatch)` - A considered layer's group holds more than one setup
///   for `situation`
pub fn resolve_layers<'m>(
    layers: &[SetupSheetLayerModel],
    existing_groups: &HashSet<i32>,
    members: &'m HashMap<i32, Vec<SetupModel>>,
    situation: Situation,
) -> Result<Option<&'m SetupModel>, SheetError> {
    let mut resolved = None;

    for layer in layers {
        if !layer.enabled || !existing_groups.contains(&layer.group_id) {
            continue;
        }

        let matching: Vec<&SetupModel> = members
            .get(&layer.group_id)
            .into_iter()
            .flatten()
            .filter(|setup| situation.matches(setup))
            .collect();

        match matching.as_slice() {
            [] => {}
            [setup] => resolved = Some(*setup),
            _ => {
                return Err(SheetError::AmbiguousMatch {
                    layer_id: layer.id,
                    group_id: layer.group_id,
                    setup_ids: matching.iter().map(|setup| setup.id).collect(),
                })
            }
        }
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use caddie_test_utils::prelude::*;

    use crate::server::{
        error::sheet::SheetError, model::situation::Situation,
        service::sheet::resolve::resolve_layers,
    };

    const HOLE: i32 = 1;
    const PIN: i32 = 1;

    fn situation() -> Situation {
        Situation::new(HOLE, 5, PIN)
    }

    /// Groups 1, 2 and 3 all exist; group 1 holds setup 10, group 3 holds setup 30, both for
    /// the situation, and group 2 holds setup 20 for another wind speed
    fn members() -> HashMap<i32, Vec<entity::setup::Model>> {
        HashMap::from([
            (1, vec![factory::mock_setup_model(10, HOLE, 5, PIN)]),
            (2, vec![factory::mock_setup_model(20, HOLE, 10, PIN)]),
            (3, vec![factory::mock_setup_model(30, HOLE, 5, PIN)]),
        ])
    }

    fn all_groups() -> HashSet<i32> {
        HashSet::from([1, 2, 3])
    }

    /// Expect the last enabled matching layer to win
    #[test]
    fn last_matching_layer_wins() {
        let members = members();
        let layers = vec![
            factory::mock_layer_model(1, 1, true, 0),
            factory::mock_layer_model(2, 2, false, 1),
            factory::mock_layer_model(3, 3, true, 2),
        ];

        let resolved = resolve_layers(&layers, &all_groups(), &members, situation()).unwrap();

        assert_eq!(resolved.map(|setup| setup.id), Some(30));
    }

    /// Expect a disabled top layer to fall through to the layer below
    #[test]
    fn disabled_layers_are_skipped() {
        let members = members();
        let layers = vec![
            factory::mock_layer_model(1, 1, true, 0),
            factory::mock_layer_model(2, 2, false, 1),
            factory::mock_layer_model(3, 3, false, 2),
        ];

        let resolved = resolve_layers(&layers, &all_groups(), &members, situation()).unwrap();

        assert_eq!(resolved.map(|setup| setup.id), Some(10));
    }

    /// Expect None when no layer holds a setup for the situation
    #[test]
    fn returns_none_without_match() {
        let members = members();
        let layers = vec![
            factory::mock_layer_model(1, 1, true, 0),
            factory::mock_layer_model(3, 3, true, 1),
        ];

        let resolved = resolve_layers(
            &layers,
            &all_groups(),
            &members,
            Situation::new(HOLE, 0, PIN),
        )
        .unwrap();

        assert!(resolved.is_none());
        assert!(resolve_layers(&[], &all_groups(), &members, situation())
            .unwrap()
            .is_none());
    }

    /// Expect layers of deleted groups to be skipped rather than fail
    #[test]
    fn dangling_layers_are_skipped() {
        let members = members();
        let layers = vec![
            factory::mock_layer_model(1, 1, true, 0),
            factory::mock_layer_model(3, 3, true, 1),
        ];

        let resolved =
            resolve_layers(&layers, &HashSet::from([1, 2]), &members, situation()).unwrap();

        assert_eq!(resolved.map(|setup| setup.id), Some(10));
    }

    /// Expect AmbiguousMatch when one group holds two setups for the situation
    #[test]
    fn fails_for_ambiguous_group() {
        let mut members = members();
        members
            .entry(1)
            .or_default()
            .push(factory::mock_setup_model(11, HOLE, 5, PIN));
        let layers = vec![
            factory::mock_layer_model(1, 1, true, 0),
            factory::mock_layer_model(3, 3, true, 1),
        ];

        let result = resolve_layers(&layers, &all_groups(), &members, situation());

        assert_eq!(
            result,
            Err(SheetError::AmbiguousMatch {
                layer_id: 1,
                group_id: 1,
                setup_ids: vec![10, 11],
            })
        );
    }

    /// Expect an ambiguous group on a disabled layer to be ignored
    #[test]
    fn ignores_ambiguity_on_disabled_layer() {
        let mut members = members();
        members
            .entry(1)
            .or_default()
            .push(factory::mock_setup_model(11, HOLE, 5, PIN));
        let layers = vec![
            factory::mock_layer_model(1, 1, false, 0),
            factory::mock_layer_model(3, 3, true, 1),
        ];

        let resolved = resolve_layers(&layers, &all_groups(), &members, situation()).unwrap();

        assert_eq!(resolved.map(|setup| setup.id), Some(30));
    }
}
