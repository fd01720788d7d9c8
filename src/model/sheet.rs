use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupGroupDto {
    pub id: i32,
    pub creator_id: i32,
    pub name: String,
    /// Member setup IDs, ascending. Membership is a set.
    pub setup_ids: Vec<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerDto {
    pub id: i32,
    pub group_id: i32,
    pub enabled: bool,
    /// The referenced group has been deleted; resolution skips this layer.
    pub dangling: bool,
}

/// A setup sheet with its layers in priority order, lowest priority first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupSheetDto {
    pub id: i32,
    pub creator_id: i32,
    pub name: String,
    pub layers: Vec<LayerDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use crate::model::sheet::{LayerDto, SetupSheetDto};

    /// Expect layers to serialize as an array in stored order
    #[test]
    fn serializes_layers_in_order() {
        let now = Utc::now().naive_utc();
        let layer = |id, group_id| LayerDto {
            id,
            group_id,
            enabled: true,
            dangling: false,
        };
        let dto = SetupSheetDto {
            id: 1,
            creator_id: 1,
            name: "Main".to_string(),
            layers: vec![layer(9, 3), layer(2, 1), layer(5, 2)],
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&dto).unwrap();
        let ids: Vec<_> = value["layers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|layer| layer["id"].clone())
            .collect();

        assert_eq!(ids, vec![json!(9), json!(2), json!(5)]);
    }
}
