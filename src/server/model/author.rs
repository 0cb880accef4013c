/// Author of game coverage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub verified: bool,
}

impl Author {
    pub fn from_entity(entity: entity::author::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            verified: entity.verified,
        }
    }
}
