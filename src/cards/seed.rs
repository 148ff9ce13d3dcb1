//! Built-in base card set.
//!
//! Mirrors the catalog service's initial seed so demos, tests and
//! benchmarks have a realistic catalog without a database. IDs are
//! assigned 1.. in table order, matching an auto-increment insert.

use super::catalog::Catalog;
use super::definition::{Card, CardId, CardType, Rarity};

use CardType::{Building, Spell, Troop};
use Rarity::{Common, Epic, Legendary, Rare};

struct SeedCard {
    name: &'static str,
    card_type: CardType,
    cost: u8,
    rarity: Rarity,
    hit_points: u32,
    damage: u32,
    deploy_time: u32,
    speed: &'static str,
    range: &'static str,
    description: &'static str,
}

const fn seed(
    name: &'static str,
    card_type: CardType,
    cost: u8,
    rarity: Rarity,
    (hit_points, damage, deploy_time): (u32, u32, u32),
    speed: &'static str,
    range: &'static str,
    description: &'static str,
) -> SeedCard {
    SeedCard {
        name,
        card_type,
        cost,
        rarity,
        hit_points,
        damage,
        deploy_time,
        speed,
        range,
        description,
    }
}

#[rustfmt::skip]
const BASE_CARDS: [SeedCard; 55] = [
    seed("Skeletons", Troop, 1, Common, (20, 10, 1), "Fast", "Melee: Short", "Summons 4 Skeletons to fight for you. Skeletons are very weak but very fast."),
    seed("Electro Spirit", Troop, 1, Common, (23, 99, 1), "Very Fast", "Melee: Medium", "A fast-moving spirit that stuns enemies on impact. Spawns 9 spirits."),
    seed("Fire Spirit", Troop, 1, Common, (23, 207, 1), "Very Fast", "Melee: Short", "A fiery spirit that explodes on impact, dealing damage to all nearby enemies."),
    seed("Ice Spirit", Troop, 1, Common, (23, 0, 1), "Very Fast", "Melee: Short", "A frozen spirit that freezes enemies on impact."),
    seed("Heal Spirit", Troop, 1, Rare, (100, 0, 1), "Very Fast", "Melee: Medium", "A spirit that heals nearby troops. Heals 200 HP on spawn and 100 HP per hit."),
    seed("Goblins", Troop, 2, Common, (80, 75, 1), "Very Fast", "Melee: Short", "Three fast, unarmored troops with small swords."),
    seed("Spear Goblins", Troop, 2, Common, (80, 75, 1), "Very Fast", "Ranged", "Three fast, unarmored troops that throw spears from range."),
    seed("Bomber", Troop, 2, Common, (304, 225, 1), "Medium", "Ranged", "Lobs bombs at enemies. Deals splash damage."),
    seed("Bats", Troop, 2, Common, (81, 81, 1), "Very Fast", "Melee: Medium", "Five fast flying troops. Swarm attacks deal massive damage."),
    seed("Zap", Spell, 2, Common, (0, 150, 0), "Instant", "Ranged", "Zaps enemies, stunning them briefly and dealing damage."),
    seed("Giant Snowball", Spell, 2, Common, (0, 200, 0), "Instant", "Ranged", "Throws a giant snowball that damages and slows enemies."),
    seed("Archers", Troop, 3, Common, (304, 112, 1), "Medium", "Ranged", "Two ranged troops that attack from a distance. Arrows fly fast."),
    seed("Knight", Troop, 3, Common, (1200, 150, 1), "Medium", "Melee: Short", "A fast melee troop with balanced stats."),
    seed("Minions", Troop, 3, Common, (200, 100, 1), "Fast", "Ranged", "Three flying troops that attack from range."),
    seed("Cannon", Building, 3, Common, (600, 100, 0), "Slow", "Ranged", "A defensive building that shoots cannonballs at enemies."),
    seed("Goblin Gang", Troop, 3, Rare, (202, 120, 1), "Very Fast", "Mixed", "A mix of goblins and spear goblins."),
    seed("Skeleton Barrel", Troop, 3, Common, (300, 0, 1), "Medium", "Melee: Short", "A flying skeleton barrel that explodes into skeletons when destroyed."),
    seed("Firecracker", Troop, 3, Common, (304, 64, 1), "Medium", "Ranged", "A ranged troop that shoots firecrackers in a spread pattern."),
    seed("Royal Delivery", Spell, 3, Common, (0, 200, 0), "Instant", "Ranged", "Deploys a Royal Hog that charges forward and damages enemies."),
    seed("Arrows", Spell, 3, Common, (0, 200, 0), "Instant", "Ranged", "Shoots arrows that damage all enemies in an area."),
    seed("Dart Goblin", Troop, 3, Rare, (261, 156, 1), "Very Fast", "Ranged", "A fast ranged troop that throws darts."),
    seed("Musketeer", Troop, 4, Rare, (400, 200, 1), "Medium", "Ranged", "A powerful ranged troop with high damage."),
    seed("Mini P.E.K.K.A", Troop, 4, Rare, (600, 350, 1), "Fast", "Melee: Short", "A small but powerful melee troop with high damage."),
    seed("Hog Rider", Troop, 4, Rare, (800, 150, 1), "Fast", "Melee: Short", "A fast melee troop that charges at enemies."),
    seed("Valkyrie", Troop, 4, Rare, (1200, 200, 1), "Medium", "Melee: Medium", "A strong melee troop that deals splash damage."),
    seed("Giant", Troop, 5, Rare, (4090, 253, 1), "Slow", "Melee: Medium", "A very tanky troop with massive health but low damage."),
    seed("Balloon", Troop, 5, Epic, (1679, 640, 1), "Slow", "Melee: Short", "A flying troop that drops bombs. Deals massive damage on death."),
    seed("Wizard", Troop, 5, Rare, (600, 200, 1), "Medium", "Ranged", "A ranged troop that shoots fireballs dealing splash damage."),
    seed("Baby Dragon", Troop, 4, Epic, (1152, 161, 1), "Medium", "Ranged", "A flying dragon that deals splash damage."),
    seed("Fireball", Spell, 4, Rare, (0, 400, 0), "Instant", "Ranged", "Throws a fireball that damages all enemies in an area."),
    seed("Rage", Spell, 3, Epic, (0, 0, 0), "Instant", "Ranged", "Increases the movement and attack speed of troops in an area."),
    seed("Freeze", Spell, 4, Epic, (0, 0, 0), "Instant", "Ranged", "Freezes all enemies in an area, stunning them."),
    seed("Rocket", Spell, 6, Rare, (0, 600, 0), "Instant", "Ranged", "Launches a rocket that deals massive damage in a large area."),
    seed("Poison", Spell, 4, Epic, (0, 200, 0), "Instant", "Ranged", "Poisons an area, dealing damage over time to all enemies inside."),
    seed("Lightning", Spell, 6, Epic, (0, 500, 0), "Instant", "Ranged", "Strikes enemies with lightning, dealing massive damage."),
    seed("Tornado", Spell, 3, Epic, (0, 100, 0), "Instant", "Ranged", "Creates a tornado that pushes and damages enemies."),
    seed("Clone", Spell, 3, Epic, (0, 0, 0), "Instant", "Ranged", "Creates a copy of a troop in the spell area."),
    seed("Mirror", Spell, 1, Epic, (0, 0, 0), "Instant", "Ranged", "Copies the last card you played."),
    seed("P.E.K.K.A", Troop, 7, Epic, (2000, 600, 1), "Slow", "Melee: Short", "A massive melee troop with extremely high damage."),
    seed("Golem", Troop, 8, Epic, (3500, 200, 1), "Very Slow", "Melee: Short", "A massive tanky troop that splits into smaller golems when destroyed."),
    seed("Skeleton Army", Troop, 3, Epic, (20, 10, 1), "Fast", "Melee: Short", "Summons 16 skeletons to swarm enemies."),
    seed("Witch", Troop, 5, Epic, (800, 150, 1), "Medium", "Ranged", "A ranged troop that spawns skeletons to fight for her."),
    seed("Inferno Tower", Building, 5, Rare, (1200, 100, 0), "Slow", "Ranged", "A defensive building that shoots a beam that increases in damage."),
    seed("Electro Dragon", Troop, 5, Epic, (949, 192, 1), "Medium", "Ranged", "A flying dragon that shoots electricity at multiple enemies."),
    seed("Miner", Troop, 3, Legendary, (800, 200, 1), "Fast", "Melee: Short", "A legendary troop that can tunnel underground to any location."),
    seed("Princess", Troop, 3, Legendary, (300, 150, 1), "Medium", "Ranged", "A legendary ranged troop that shoots arrows from a distance."),
    seed("Ice Wizard", Troop, 3, Legendary, (600, 150, 1), "Medium", "Ranged", "A legendary wizard that freezes enemies on impact."),
    seed("Lava Hound", Troop, 7, Legendary, (3000, 100, 1), "Slow", "Melee: Short", "A legendary flying troop with massive health that splits into pups when destroyed."),
    seed("Sparky", Troop, 6, Legendary, (1500, 800, 1), "Slow", "Ranged", "A legendary troop that charges up and releases a powerful beam."),
    seed("Inferno Dragon", Troop, 4, Legendary, (900, 200, 1), "Medium", "Ranged", "A legendary flying dragon that shoots a beam of fire."),
    seed("Electro Wizard", Troop, 4, Legendary, (714, 115, 1), "Medium", "Ranged", "A legendary wizard that stuns enemies on spawn and attack."),
    seed("Bandit", Troop, 3, Legendary, (906, 194, 1), "Very Fast", "Melee: Short", "A legendary troop that dashes through enemies."),
    seed("Royal Ghost", Troop, 3, Legendary, (1200, 200, 1), "Fast", "Melee: Short", "A legendary invisible troop that becomes visible when attacking."),
    seed("Mega Knight", Troop, 7, Legendary, (2500, 400, 1), "Medium", "Melee: Medium", "A legendary super-strong melee troop with a powerful jump attack."),
    seed("The Log", Spell, 2, Legendary, (0, 150, 0), "Instant", "Ranged", "A legendary spell that pushes enemies back and damages them."),
];

/// The base card set as a catalog, IDs 1..=55.
///
/// Panics if the table holds a duplicate name.
#[must_use]
pub fn base_catalog() -> Catalog {
    let cards = BASE_CARDS.iter().zip(1..).map(|(card, id)| {
        Card::new(CardId::new(id), card.name, card.card_type, card.cost, card.rarity)
            .with_description(card.description)
            .with_hit_points(card.hit_points)
            .with_damage(card.damage)
            .with_deploy_time(card.deploy_time)
            .with_speed(card.speed)
            .with_range(card.range)
    });
    match Catalog::from_cards(cards) {
        Ok(catalog) => catalog,
        Err(err) => panic!("Base card table is invalid: {err}"),
    }
}
