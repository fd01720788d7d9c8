use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::situation::Situation;

pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an empty group owned by `creator_id`
    ///
    /// Fails with a unique constraint violation if the creator already has a group with the
    /// same name.
    pub async fn create(
        &self,
        creator_id: i32,
        name: &str,
    ) -> Result<entity::setup_group::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let group = entity::setup_group::ActiveModel {
            creator_id: ActiveValue::Set(creator_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        group.insert(self.db).await
    }

    pub async fn get(&self, group_id: i32) -> Result<Option<entity::setup_group::Model>, DbErr> {
        entity::prelude::SetupGroup::find_by_id(group_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_creator(
        &self,
        creator_id: i32,
    ) -> Result<Vec<entity::setup_group::Model>, DbErr> {
        entity::prelude::SetupGroup::find()
            .filter(entity::setup_group::Column::CreatorId.eq(creator_id))
            .order_by_asc(entity::setup_group::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns the subset of `group_ids` that still exist
    pub async fn get_existing_ids(&self, group_ids: &[i32]) -> Result<HashSet<i32>, DbErr> {
        if group_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let ids: Vec<i32> = entity::prelude::SetupGroup::find()
            .select_only()
            .column(entity::setup_group::Column::Id)
            .filter(entity::setup_group::Column::Id.is_in(group_ids.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    /// Renames a group
    ///
    /// Returns `Ok(None)` if the group does not exist.
    pub async fn rename(
        &self,
        group_id: i32,
        name: &str,
    ) -> Result<Option<entity::setup_group::Model>, DbErr> {
        let Some(group) = self.get(group_id).await? else {
            return Ok(None);
        };

        let mut group_am = group.into_active_model();
        group_am.name = ActiveValue::Set(name.to_string());
        group_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(group_am.update(self.db).await?))
    }

    /// Deletes a group and its memberships
    ///
    /// Sheet layers referencing the group are left in place.
    pub async fn delete(&self, group_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::SetupGroup::delete_by_id(group_id)
            .exec(self.db)
            .await
    }

    /// Adds a setup to a group
    ///
    /// Returns `false` if the setup was already a member.
    pub async fn add_member(&self, group_id: i32, setup_id: i32) -> Result<bool, DbErr> {
        let member = entity::setup_group_member::ActiveModel {
            group_id: ActiveValue::Set(group_id),
            setup_id: ActiveValue::Set(setup_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        let rows = entity::prelude::SetupGroupMember::insert(member)
            .on_conflict(
                OnConflict::columns([
                    entity::setup_group_member::Column::GroupId,
                    entity::setup_group_member::Column::SetupId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(rows > 0)
    }

    /// Removes a setup from a group
    ///
    /// Returns `false` if the setup was not a member.
    pub async fn remove_member(&self, group_id: i32, setup_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::SetupGroupMember::delete_by_id((group_id, setup_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Get the group's member setups ordered by ID
    pub async fn get_members(&self, group_id: i32) -> Result<Vec<entity::setup::Model>, DbErr> {
        entity::prelude::Setup::find()
            .inner_join(entity::prelude::SetupGroupMember)
            .filter(entity::setup_group_member::Column::GroupId.eq(group_id))
            .order_by_asc(entity::setup::Column::Id)
            .all(self.db)
            .await
    }

    /// Get the member setup IDs of a group ordered by ID
    pub async fn get_member_ids(&self, group_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::SetupGroupMember::find()
            .select_only()
            .column(entity::setup_group_member::Column::SetupId)
            .filter(entity::setup_group_member::Column::GroupId.eq(group_id))
            .order_by_asc(entity::setup_group_member::Column::SetupId)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Get every `(group_id, setup)` pair where the setup is a member of one of `group_ids`
    /// and targets `situation`
    pub async fn get_members_matching(
        &self,
        group_ids: &[i32],
        situation: Situation,
    ) -> Result<Vec<(i32, entity::setup::Model)>, DbErr> {
        if group_ids.is_empty() {
            return Ok(Vec::new());
        }

        let members = entity::prelude::SetupGroupMember::find()
            .find_also_related(entity::setup::Entity)
            .filter(entity::setup_group_member::Column::GroupId.is_in(group_ids.iter().copied()))
            .filter(entity::setup::Column::HoleId.eq(situation.hole_id))
            .filter(entity::setup::Column::PinId.eq(situation.pin_id))
            .filter(entity::setup::Column::WindSpeed.eq(situation.wind_speed))
            .order_by_asc(entity::setup_group_member::Column::GroupId)
            .order_by_asc(entity::setup_group_member::Column::SetupId)
            .all(self.db)
            .await?;

        Ok(members
            .into_iter()
            .filter_map(|(member, setup)| setup.map(|setup| (member.group_id, setup)))
            .collect())
    }
}
