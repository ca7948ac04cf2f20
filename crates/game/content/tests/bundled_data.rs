use std::fs;

use game_content::{ContentFactory, bundled_data_dir};
use game_core::{ActorCatalog, Combatant, EnemyKind, GameConfig, ItemCatalog, RoomKind};

#[test]
fn bundled_data_matches_builtin_presets() {
    let content = ContentFactory::new(bundled_data_dir());

    assert_eq!(content.load_config().unwrap(), GameConfig::default());
    assert_eq!(content.load_items().unwrap(), ItemCatalog::default());
    assert_eq!(content.load_actors().unwrap(), ActorCatalog::default());
}

#[test]
fn loaded_factories_build_the_default_encounter() {
    let (config, factories) = ContentFactory::new(bundled_data_dir())
        .load_factories()
        .unwrap();

    let room = factories.create_room(&config.starting_room);
    assert_eq!(room.kind(), &RoomKind::Enemy);
    assert_eq!(room.name(), "Enemy Room");

    let player = factories.create_player();
    assert_eq!(player.actor().hp(), 100);
    assert_eq!(player.actor().inventory().total_items(), 2);
}

#[test]
fn custom_data_directory_overrides_presets() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "enemy_spawn = \"Orc\"\n").unwrap();
    fs::write(
        dir.path().join("items.ron"),
        r#"(items: [(kind: "Club", name: "Club", single_use: false, effect: Weapon(damage: 4))])"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("actors.ron"),
        r#"(
            player: (name: "Hero", hp: 30, stats: (strength: 2, speed: 1, agility: 1), starter_items: ["Club"]),
            enemies: [(kind: "Orc", name: "Orc", hp: 15, stats: (strength: 2, speed: 1, agility: 0), starter_items: ["Club"], rewards: ["Club"])],
        )"#,
    )
    .unwrap();

    let (config, factories) = ContentFactory::new(dir.path()).load_factories().unwrap();
    assert_eq!(config.enemy_spawn, EnemyKind::from_text("Orc"));

    let game_core::Room::Enemy(room) = factories.create_room(&RoomKind::Enemy);
    let orc = room.enemy().actor();
    assert_eq!(orc.name(), "Orc");
    assert_eq!(orc.hp(), 15);
    assert_eq!(orc.inventory().weapons()[0].expected_damage(orc), 6);
}
