//! ASCII art for enemies.
use game_core::EnemyKind;

const GOBLIN: &str = r"
      ,      ,
     /(.-''-.)\
 |\  \/      \/  /|
 | \ / =.  .= \ / |
 \( \   o\/o   / )/
  \_, '-/  \-' ,_/
    /   \__/   \
    \ \__/\__/ /
  ___\ \|--|/ /___
/`    \      /    `\
";

const UNKNOWN: &str = r"
     .-----.
    /  ? ?  \
   |   ---   |
    \_______/
";

pub fn enemy_art(kind: &EnemyKind) -> &'static str {
    match kind {
        EnemyKind::Goblin => GOBLIN,
        EnemyKind::Unknown(_) => UNKNOWN,
    }
}
