use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NatureKind {
    Flower,
    Plant,
    Tree,
    Fungi,
    Creature,
}

/// One entry of the palette a completed quest can plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NatureElement {
    pub emoji: &'static str,
    pub name: &'static str,
    pub kind: NatureKind,
}

const fn element(emoji: &'static str, name: &'static str, kind: NatureKind) -> NatureElement {
    NatureElement { emoji, name, kind }
}

pub static PALETTE: [NatureElement; 20] = [
    element("🌸", "Cherry Blossom", NatureKind::Flower),
    element("🌺", "Hibiscus", NatureKind::Flower),
    element("🌻", "Sunflower", NatureKind::Flower),
    element("🌷", "Tulip", NatureKind::Flower),
    element("🌹", "Rose", NatureKind::Flower),
    element("💐", "Bouquet", NatureKind::Flower),
    element("🪻", "Hyacinth", NatureKind::Flower),
    element("🌼", "Daisy", NatureKind::Flower),
    element("🌱", "Seedling", NatureKind::Plant),
    element("🌿", "Herb", NatureKind::Plant),
    element("☘️", "Clover", NatureKind::Plant),
    element("🍀", "Four Leaf Clover", NatureKind::Plant),
    element("🌲", "Pine Tree", NatureKind::Tree),
    element("🌳", "Tree", NatureKind::Tree),
    element("🌴", "Palm Tree", NatureKind::Tree),
    element("🎋", "Bamboo", NatureKind::Tree),
    element("🍄", "Mushroom", NatureKind::Fungi),
    element("🦋", "Butterfly", NatureKind::Creature),
    element("🐝", "Bee", NatureKind::Creature),
    element("🐞", "Ladybug", NatureKind::Creature),
];

pub fn palette() -> &'static [NatureElement] {
    &PALETTE
}
