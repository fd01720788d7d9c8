//! Setup sheet service.
//!
//! A sheet stacks groups into ordered layers. Resolving a sheet against a situation walks the
//! layers bottom to top and returns the setup of the last matching layer. Layer changes are
//! made inside transactions so a resolution never sees a partially applied reorder.

pub mod resolve;

#[cfg(test)]
mod tests;

use std::collections::{HashMap, HashSet};

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        setup::SetupDto,
        sheet::{LayerDto, SetupSheetDto},
    },
    server::{
        data::setup::{group::GroupRepository, sheet::SheetRepository},
        error::{integrity::ReferentialIntegrityError, sheet::SheetError, Error},
        model::{
            actor::Actor,
            db::{SetupModel, SetupSheetLayerModel, SetupSheetModel},
            situation::Situation,
        },
        util::validate,
    },
};

use self::resolve::resolve_layers;

pub struct SheetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SheetService<'a> {
    /// Creates a new instance of [`SheetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a sheet without layers owned by `actor`
    ///
    /// # Returns
    /// - `Ok(SetupSheetDto)` - The created sheet
    /// - `Err(Error::ValidationError)` - Name is blank or too long
    /// - `Err(Error::DuplicateName)` - The actor already has a sheet with this name
    pub async fn create_sheet(&self, actor: Actor, name: &str) -> Result<SetupSheetDto, Error> {
        let name = validate::name(name)?;

        let sheet = SheetRepository::new(self.db)
            .create(actor.user_id, &name)
            .await
            .map_err(|e| Error::from_insert(e, "Sheet", &name))?;

        tracing::info!(sheet_id = %sheet.id, user_id = %actor.user_id, "Created sheet {}", sheet.name);

        Ok(into_dto(sheet, Vec::new()))
    }

    /// Get a sheet with its layers in priority order, lowest first
    pub async fn get_sheet(&self, sheet_id: i32) -> Result<Option<SetupSheetDto>, Error> {
        let Some(sheet) = SheetRepository::new(self.db).get(sheet_id).await? else {
            return Ok(None);
        };

        Ok(Some(load_sheet(self.db, sheet).await?))
    }

    /// Lists the sheets created by `creator_id` with their layers, ordered by ID
    pub async fn list_sheets_by_creator(
        &self,
        creator_id: i32,
    ) -> Result<Vec<SetupSheetDto>, Error> {
        let sheets = SheetRepository::new(self.db)
            .get_by_creator(creator_id)
            .await?;

        let mut sheet_dtos = Vec::with_capacity(sheets.len());
        for sheet in sheets {
            sheet_dtos.push(load_sheet(self.db, sheet).await?);
        }

        Ok(sheet_dtos)
    }

    pub async fn rename_sheet(
        &self,
        actor: Actor,
        sheet_id: i32,
        name: &str,
    ) -> Result<SetupSheetDto, Error> {
        let name = validate::name(name)?;

        let txn = self.db.begin().await?;

        owned_sheet(&txn, actor, sheet_id).await?;
        let sheet = SheetRepository::new(&txn)
            .rename(sheet_id, &name)
            .await
            .map_err(|e| Error::from_insert(e, "Sheet", &name))?
            .ok_or_else(|| ReferentialIntegrityError::not_found("Sheet", sheet_id))?;
        let sheet = load_sheet(&txn, sheet).await?;

        txn.commit().await?;

        tracing::info!(sheet_id = %sheet_id, user_id = %actor.user_id, "Renamed sheet to {}", sheet.name);

        Ok(sheet)
    }

    /// Deletes a sheet and all of its layers
    pub async fn delete_sheet(&self, actor: Actor, sheet_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        owned_sheet(&txn, actor, sheet_id).await?;
        SheetRepository::new(&txn).delete(sheet_id).await?;

        txn.commit().await?;

        tracing::info!(sheet_id = %sheet_id, user_id = %actor.user_id, "Deleted sheet");

        Ok(())
    }

    /// Appends a layer for `group_id` on top of the sheet
    ///
    /// The group must exist now; it may be deleted later, leaving the layer dangling.
    pub async fn add_layer(
        &self,
        actor: Actor,
        sheet_id: i32,
        group_id: i32,
        enabled: bool,
    ) -> Result<LayerDto, Error> {
        let txn = self.db.begin().await?;

        owned_sheet(&txn, actor, sheet_id).await?;
        if GroupRepository::new(&txn).get(group_id).await?.is_none() {
            return Err(ReferentialIntegrityError::not_found("Group", group_id).into());
        }

        let sheet_repo = SheetRepository::new(&txn);
        let layer = sheet_repo
            .append_layer(sheet_id, group_id, enabled)
            .await?;
        sheet_repo.touch(sheet_id).await?;

        txn.commit().await?;

        tracing::info!(
            sheet_id = %sheet_id,
            layer_id = %layer.id,
            group_id = %group_id,
            enabled,
            "Added layer to sheet"
        );

        Ok(LayerDto {
            id: layer.id,
            group_id: layer.group_id,
            enabled: layer.enabled,
            dangling: false,
        })
    }

    /// Removes a layer from the sheet owned by `actor`
    pub async fn remove_layer(&self, actor: Actor, layer_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let layer = owned_layer(&txn, actor, layer_id).await?;
        let sheet_repo = SheetRepository::new(&txn);
        sheet_repo.delete_layer(layer_id).await?;
        sheet_repo.touch(layer.sheet_id).await?;

        txn.commit().await?;

        tracing::info!(sheet_id = %layer.sheet_id, layer_id = %layer_id, "Removed layer from sheet");

        Ok(())
    }

    /// Reorders the sheet's layers so `layer_order[0]` has the lowest priority
    ///
    /// # Returns
    /// - `Ok(SetupSheetDto)` - The sheet with its layers in the new order
    /// - `Err(Error::SheetError)` - `layer_order` is not a permutation of the sheet's layer IDs,
    ///   nothing is changed
    pub async fn reorder_layers(
        &self,
        actor: Actor,
        sheet_id: i32,
        layer_order: &[i32],
    ) -> Result<SetupSheetDto, Error> {
        let txn = self.db.begin().await?;

        owned_sheet(&txn, actor, sheet_id).await?;
        let sheet_repo = SheetRepository::new(&txn);

        let current: Vec<i32> = sheet_repo
            .get_layers(sheet_id)
            .await?
            .into_iter()
            .map(|layer| layer.id)
            .collect();

        if !is_permutation(&current, layer_order) {
            return Err(SheetError::InvalidPermutation {
                sheet_id,
                current,
                requested: layer_order.to_vec(),
            }
            .into());
        }

        sheet_repo.set_layer_positions(sheet_id, layer_order).await?;
        sheet_repo.touch(sheet_id).await?;
        let sheet = sheet_repo
            .get(sheet_id)
            .await?
            .ok_or_else(|| ReferentialIntegrityError::not_found("Sheet", sheet_id))?;
        let sheet = load_sheet(&txn, sheet).await?;

        txn.commit().await?;

        tracing::info!(sheet_id = %sheet_id, layers = ?layer_order, "Reordered sheet layers");

        Ok(sheet)
    }

    /// Enables or disables a layer in place, keeping its position
    pub async fn set_layer_enabled(
        &self,
        actor: Actor,
        layer_id: i32,
        enabled: bool,
    ) -> Result<LayerDto, Error> {
        let txn = self.db.begin().await?;

        owned_layer(&txn, actor, layer_id).await?;
        let sheet_repo = SheetRepository::new(&txn);
        let layer = sheet_repo
            .set_layer_enabled(layer_id, enabled)
            .await?
            .ok_or_else(|| ReferentialIntegrityError::not_found("Layer", layer_id))?;
        sheet_repo.touch(layer.sheet_id).await?;
        let dangling = GroupRepository::new(&txn)
            .get_existing_ids(&[layer.group_id])
            .await?
            .is_empty();

        txn.commit().await?;

        tracing::info!(sheet_id = %layer.sheet_id, layer_id = %layer_id, enabled, "Toggled sheet layer");

        Ok(LayerDto {
            id: layer.id,
            group_id: layer.group_id,
            enabled: layer.enabled,
            dangling,
        })
    }

    /// Resolves the setup the sheet applies to `situation`
    ///
    /// Reads layers, groups and memberships in one transaction and recomputes the result on
    /// every call.
    ///
    /// # Returns
    /// - `Ok(Some(SetupDto))` - Setup from the highest priority enabled layer matching
    /// - `Ok(None)` - No enabled layer holds a setup for the situation
    /// - `Err(Error::SheetError)` - A considered layer's group holds several matching setups
    /// - `Err(Error::IntegrityError)` - Sheet does not exist
    pub async fn resolve(
        &self,
        sheet_id: i32,
        situation: Situation,
    ) -> Result<Option<SetupDto>, Error> {
        let txn = self.db.begin().await?;

        let sheet_repo = SheetRepository::new(&txn);
        if sheet_repo.get(sheet_id).await?.is_none() {
            return Err(ReferentialIntegrityError::not_found("Sheet", sheet_id).into());
        }
        let layers = sheet_repo.get_layers(sheet_id).await?;

        let group_repo = GroupRepository::new(&txn);
        let enabled_group_ids: Vec<i32> = layers
            .iter()
            .filter(|layer| layer.enabled)
            .map(|layer| layer.group_id)
            .collect();
        let existing_groups = group_repo.get_existing_ids(&enabled_group_ids).await?;
        let existing_ids: Vec<i32> = existing_groups.iter().copied().collect();

        let mut members: HashMap<i32, Vec<SetupModel>> = HashMap::new();
        for (group_id, setup) in group_repo
            .get_members_matching(&existing_ids, situation)
            .await?
        {
            members.entry(group_id).or_default().push(setup);
        }

        txn.commit().await?;

        match resolve_layers(&layers, &existing_groups, &members, situation) {
            Ok(resolved) => {
                tracing::debug!(
                    sheet_id = %sheet_id,
                    situation = ?situation,
                    setup_id = ?resolved.map(|setup| setup.id),
                    "Resolved sheet"
                );

                Ok(resolved.cloned().map(SetupDto::from))
            }
            Err(e) => {
                tracing::debug!(sheet_id = %sheet_id, situation = ?situation, "{}", e);

                Err(e.into())
            }
        }
    }
}

/// Returns true if `requested` holds each of `current`'s IDs exactly once
fn is_permutation(current: &[i32], requested: &[i32]) -> bool {
    if current.len() != requested.len() {
        return false;
    }

    let current: HashSet<i32> = current.iter().copied().collect();
    let mut seen = HashSet::with_capacity(requested.len());

    requested
        .iter()
        .all(|layer_id| current.contains(layer_id) && seen.insert(*layer_id))
}

/// Fetches a sheet and checks `actor` created it
async fn owned_sheet<C: ConnectionTrait>(
    db: &C,
    actor: Actor,
    sheet_id: i32,
) -> Result<SetupSheetModel, Error> {
    let sheet = SheetRepository::new(db)
        .get(sheet_id)
        .await?
        .ok_or_else(|| ReferentialIntegrityError::not_found("Sheet", sheet_id))?;
    actor.ensure_creator(sheet.creator_id, "Sheet", sheet.id)?;

    Ok(sheet)
}

/// Fetches a layer and checks `actor` created its sheet
async fn owned_layer<C: ConnectionTrait>(
    db: &C,
    actor: Actor,
    layer_id: i32,
) -> Result<SetupSheetLayerModel, Error> {
    let layer = SheetRepository::new(db)
        .get_layer(layer_id)
        .await?
        .ok_or_else(|| ReferentialIntegrityError::not_found("Layer", layer_id))?;
    owned_sheet(db, actor, layer.sheet_id).await?;

    Ok(layer)
}

/// Assembles a [`SetupSheetDto`], flagging layers whose group no longer exists
async fn load_sheet<C: ConnectionTrait>(
    db: &C,
    sheet: SetupSheetModel,
) -> Result<SetupSheetDto, Error> {
    let layers = SheetRepository::new(db).get_layers(sheet.id).await?;
    let group_ids: Vec<i32> = layers.iter().map(|layer| layer.group_id).collect();
    let existing = GroupRepository::new(db).get_existing_ids(&group_ids).await?;

    let layers = layers
        .into_iter()
        .map(|layer| LayerDto {
            id: layer.id,
            group_id: layer.group_id,
            enabled: layer.enabled,
            dangling: !existing.contains(&layer.group_id),
        })
        .collect();

    Ok(into_dto(sheet, layers))
}

fn into_dto(sheet: SetupSheetModel, layers: Vec<LayerDto>) -> SetupSheetDto {
    SetupSheetDto {
        id: sheet.id,
        creator_id: sheet.creator_id,
        name: sheet.name,
        layers,
        created_at: sheet.created_at,
        updated_at: sheet.updated_at,
    }
}
