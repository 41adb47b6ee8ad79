//! Renders resolved entities as TypeORM entity classes.

mod entity;

mod out;
pub use out::{EntityOutput, Output};

mod util;

use relmap_core::Entity;

/// Rendering options
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Decorate properties with `@nestjs/swagger` model property decorators
    pub swagger: bool,
}

/// Generate one TypeScript source file per entity
pub fn generate<'a>(entities: &'a [Entity], options: &Options) -> Output<'a> {
    let entities = entities
        .iter()
        .map(|entity| entity::generate(entity, options))
        .collect();

    Output { entities }
}
