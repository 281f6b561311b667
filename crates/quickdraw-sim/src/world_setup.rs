//! Entity spawn factories for setting up a round.

use hecs::World;

use quickdraw_core::components::Bandit;
use quickdraw_core::types::BanditDef;

use crate::target::Target;

/// Populate the world with one entity per roster entry. Ids follow roster order.
pub fn setup_round(world: &mut World, roster: &[BanditDef], bandit_lives: u32) {
    world.clear();
    for (id, def) in roster.iter().enumerate() {
        spawn_bandit(world, id as u32, def, bandit_lives);
    }
}

/// Spawn a single bandit entity, off screen with full lives.
pub fn spawn_bandit(world: &mut World, id: u32, def: &BanditDef, lives: u32) -> hecs::Entity {
    world.spawn((
        Bandit {
            name: def.name.clone(),
            sprite: def.sprite.clone(),
        },
        Target::new(id, lives),
    ))
}
