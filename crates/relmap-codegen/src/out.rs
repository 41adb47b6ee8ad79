use relmap_core::Entity;

pub struct Output<'a> {
    /// Per-entity output
    pub entities: Vec<EntityOutput<'a>>,
}

/// Generated code for a single entity
pub struct EntityOutput<'a> {
    /// Entity the output is associated with
    pub entity: &'a Entity,

    /// File name relative to the target directory, e.g. `User.ts`
    pub file_name: String,

    /// Full source of the file
    pub body: String,
}
