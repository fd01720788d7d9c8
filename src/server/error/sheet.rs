use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SheetError {
    /// The requested layer order is not a permutation of the sheet's current layers.
    #[error("Layer order {requested:?} is not a permutation of the layers {current:?} of sheet ID {sheet_id:?}")]
    InvalidPermutation {
        sheet_id: i32,
        current: Vec<i32>,
        requested: Vec<i32>,
    },
    /// An enabled layer's group holds more than one setup for the same situation.
    #[error("Group ID {group_id:?} on layer ID {layer_id:?} holds several setups for the same situation: {setup_ids:?}")]
    AmbiguousMatch {
        layer_id: i32,
        group_id: i32,
        setup_ids: Vec<i32>,
    },
}
