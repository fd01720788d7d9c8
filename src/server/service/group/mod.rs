//! Setup group service.
//!
//! Groups are named sets of setups. Any setup may be added to a group regardless of who
//! created it; only the group's creator may change the group itself.

#[cfg(test)]
mod tests;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{setup::SetupDto, sheet::SetupGroupDto},
    server::{
        data::setup::{group::GroupRepository, setup::SetupRepository},
        error::{integrity::ReferentialIntegrityError, Error},
        model::{actor::Actor, db::SetupGroupModel},
        util::validate,
    },
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    /// Creates a new instance of [`GroupService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an empty group owned by `actor`
    ///
    /// # Returns
    /// - `Ok(SetupGroupDto)` - The created group
    /// - `Err(Error::ValidationError)` - Name is blank or too long
    /// - `Err(Error::DuplicateName)` - The actor already has a group with this name
    pub async fn create_group(&self, actor: Actor, name: &str) -> Result<SetupGroupDto, Error> {
        let name = validate::name(name)?;

        let group = GroupRepository::new(self.db)
            .create(actor.user_id, &name)
            .await
            .map_err(|e| Error::from_insert(e, "Group", &name))?;

        tracing::info!(group_id = %group.id, user_id = %actor.user_id, "Created group {}", group.name);

        Ok(into_dto(group, Vec::new()))
    }

    pub async fn get_group(&self, group_id: i32) -> Result<Option<SetupGroupDto>, Error> {
        let group_repo = GroupRepository::new(self.db);

        let Some(group) = group_repo.get(group_id).await? else {
            return Ok(None);
        };
        let setup_ids = group_repo.get_member_ids(group.id).await?;

        Ok(Some(into_dto(group, setup_ids)))
    }

    /// Lists the groups created by `creator_id` with their members, ordered by ID
    pub async fn list_groups_by_creator(
        &self,
        creator_id: i32,
    ) -> Result<Vec<SetupGroupDto>, Error> {
        let group_repo = GroupRepository::new(self.db);
        let groups = group_repo.get_by_creator(creator_id).await?;

        let mut group_dtos = Vec::with_capacity(groups.len());
        for group in groups {
            let setup_ids = group_repo.get_member_ids(group.id).await?;
            group_dtos.push(into_dto(group, setup_ids));
        }

        Ok(group_dtos)
    }

    pub async fn rename_group(
        &self,
        actor: Actor,
        group_id: i32,
        name: &str,
    ) -> Result<SetupGroupDto, Error> {
        let name = validate::name(name)?;

        let txn = self.db.begin().await?;

        let group_repo = GroupRepository::new(&txn);
        owned_group(&txn, actor, group_id).await?;

        let group = group_repo
            .rename(group_id, &name)
            .await
            .map_err(|e| Error::from_insert(e, "Group", &name))?
            .ok_or_else(|| ReferentialIntegrityError::not_found("Group", group_id))?;
        let setup_ids = group_repo.get_member_ids(group.id).await?;

        txn.commit().await?;

        tracing::info!(group_id = %group_id, user_id = %actor.user_id, "Renamed group to {}", group.name);

        Ok(into_dto(group, setup_ids))
    }

    /// Deletes a group and its memberships
    ///
    /// Never blocked by sheet layers referencing the group; those layers become dangling and
    /// are skipped by resolution.
    pub async fn delete_group(&self, actor: Actor, group_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        owned_group(&txn, actor, group_id).await?;
        GroupRepository::new(&txn).delete(group_id).await?;

        txn.commit().await?;

        tracing::info!(group_id = %group_id, user_id = %actor.user_id, "Deleted group");

        Ok(())
    }

    /// Lists the group's member setups ordered by ID
    pub async fn list_group_setups(&self, group_id: i32) -> Result<Vec<SetupDto>, Error> {
        let group_repo = GroupRepository::new(self.db);

        if group_repo.get(group_id).await?.is_none() {
            return Err(ReferentialIntegrityError::not_found("Group", group_id).into());
        }
        let setups = group_repo.get_members(group_id).await?;

        Ok(setups.into_iter().map(SetupDto::from).collect())
    }

    /// Adds any existing setup to a group owned by `actor`
    ///
    /// # Returns
    /// - `Ok(true)` - Setup was added
    /// - `Ok(false)` - Setup was already a member, nothing changed
    pub async fn add_to_group(
        &self,
        actor: Actor,
        group_id: i32,
        setup_id: i32,
    ) -> Result<bool, Error> {
        let txn = self.db.begin().await?;

        owned_group(&txn, actor, group_id).await?;
        if SetupRepository::new(&txn).get(setup_id).await?.is_none() {
            return Err(ReferentialIntegrityError::not_found("Setup", setup_id).into());
        }

        let added = GroupRepository::new(&txn)
            .add_member(group_id, setup_id)
            .await?;

        txn.commit().await?;

        if added {
            tracing::info!(group_id = %group_id, setup_id = %setup_id, "Added setup to group");
        }

        Ok(added)
    }

    /// Removes a setup from a group owned by `actor`
    ///
    /// # Returns
    /// - `Ok(true)` - Setup was removed
    /// - `Ok(false)` - Setup was not a member, nothing changed
    pub async fn remove_from_group(
        &self,
        actor: Actor,
        group_id: i32,
        setup_id: i32,
    ) -> Result<bool, Error> {
        let txn = self.db.begin().await?;

        owned_group(&txn, actor, group_id).await?;
        let removed = GroupRepository::new(&txn)
            .remove_member(group_id, setup_id)
            .await?;

        txn.commit().await?;

        if removed {
            tracing::info!(group_id = %group_id, setup_id = %setup_id, "Removed setup from group");
        }

        Ok(removed)
    }
}

/// Fetches a group and checks `actor` created it
async fn owned_group<C: ConnectionTrait>(
    db: &C,
    actor: Actor,
    group_id: i32,
) -> Result<SetupGroupModel, Error> {
    let group = GroupRepository::new(db)
        .get(group_id)
        .await?
        .ok_or_else(|| ReferentialIntegrityError::not_found("Group", group_id))?;
    actor.ensure_creator(group.creator_id, "Group", group.id)?;

    Ok(group)
}

fn into_dto(group: SetupGroupModel, setup_ids: Vec<i32>) -> SetupGroupDto {
    SetupGroupDto {
        id: group.id,
        creator_id: group.creator_id,
        name: group.name,
        setup_ids,
        created_at: group.created_at,
        updated_at: group.updated_at,
    }
}
