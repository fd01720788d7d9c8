use thiserror::Error;

/// A reference that does not line up with the parent/child structure of the stored data.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReferentialIntegrityError {
    #[error("{entity} ID {id:?} does not exist")]
    NotFound { entity: &'static str, id: i32 },
    #[error("Hole ID {hole_id:?} does not belong to game ID {game_id:?}")]
    HoleNotInGame { hole_id: i32, game_id: i32 },
    #[error("Pin ID {pin_id:?} does not belong to hole ID {hole_id:?}")]
    PinNotOnHole { pin_id: i32, hole_id: i32 },
    #[error("Layer ID {layer_id:?} does not belong to sheet ID {sheet_id:?}")]
    LayerNotInSheet { layer_id: i32, sheet_id: i32 },
}

impl ReferentialIntegrityError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }
}
