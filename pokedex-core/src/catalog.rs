//! Fixed catalog of the original 151 entries
//!
//! Names are stored in a flat array indexed by `id - 1`. The table is
//! data, not logic: the strings must match the audio tracks on the
//! module's SD card, which are numbered by dex id.

/// Number of catalog entries
pub const CATALOG_LEN: u16 = 151;

/// Sentinel returned for ids outside the catalog
pub const UNKNOWN_NAME: &str = "Desconocido";

/// Look up the display name for a catalog id (1-based)
///
/// Ids outside `[1, CATALOG_LEN]` fall back to [`UNKNOWN_NAME`]. The
/// session cursor never leaves that range, so the fallback is defensive
/// rather than reachable in normal operation.
pub fn name(id: u16) -> &'static str {
    if id == 0 || id > CATALOG_LEN {
        return UNKNOWN_NAME;
    }
    NAMES[(id - 1) as usize]
}

/// Audio track for a catalog id
///
/// Tracks on the SD card are numbered by dex id, so this is the
/// identity mapping. Kept as a function so the firmware never encodes
/// that assumption directly.
pub fn track(id: u16) -> u16 {
    id
}

static NAMES: [&str; CATALOG_LEN as usize] = [
    "Bulbasaur",
    "Ivysaur",
    "Venusaur",
    "Charmander",
    "Charmeleon",
    "Charizard",
    "Squirtle",
    "Wartortle",
    "Blastoise",
    "Caterpie",
    "Metapod",
    "Butterfree",
    "Weedle",
    "Kakuna",
    "Beedrill",
    "Pidgey",
    "Pidgeotto",
    "Pidgeot",
    "Rattata",
    "Raticate",
    "Spearow",
    "Fearow",
    "Ekans",
    "Arbok",
    "Pikachu",
    "Raichu",
    "Sandshrew",
    "Sandslash",
    "Nidoran F",
    "Nidorina",
    "Nidoqueen",
    "Nidoran M",
    "Nidorino",
    "Nidoking",
    "Clefairy",
    "Clefable",
    "Vulpix",
    "Ninetales",
    "Jigglypuff",
    "Wigglytuff",
    "Zubat",
    "Golbat",
    "Oddish",
    "Gloom",
    "Vileplume",
    "Paras",
    "Parasect",
    "Venonat",
    "Venomoth",
    "Diglett",
    "Dugtrio",
    "Meowth",
    "Persian",
    "Psyduck",
    "Golduck",
    "Mankey",
    "Primeape",
    "Growlithe",
    "Arcanine",
    "Poliwag",
    "Poliwhirl",
    "Poliwrath",
    "Abra",
    "Kadabra",
    "Alakazam",
    "Machop",
    "Machoke",
    "Machamp",
    "Bellsprout",
    "Weepinbell",
    "Victreebel",
    "Tentacool",
    "Tentacruel",
    "Geodude",
    "Graveler",
    "Golem",
    "Ponyta",
    "Rapidash",
    "Slowpoke",
    "Slowbro",
    "Magnemite",
    "Magneton",
    "Farfetch'd",
    "Doduo",
    "Dodrio",
    "Seel",
    "Dewgong",
    "Grimer",
    "Muk",
    "Shellder",
    "Cloyster",
    "Gastly",
    "Haunter",
    "Gengar",
    "Onix",
    "Drowzee",
    "Hypno",
    "Krabby",
    "Kingler",
    "Voltorb",
    "Electrode",
    "Exeggcute",
    "Exeggutor",
    "Cubone",
    "Marowak",
    "Hitmonlee",
    "Hitmonchan",
    "Lickitung",
    "Koffing",
    "Weezing",
    "Rhyhorn",
    "Rhydon",
    "Chansey",
    "Tangela",
    "Kangaskhan",
    "Horsea",
    "Seadra",
    "Goldeen",
    "Seaking",
    "Staryu",
    "Starmie",
    "Mr. Mime",
    "Scyther",
    "Jynx",
    "Electabuzz",
    "Magmar",
    "Pinsir",
    "Tauros",
    "Magikarp",
    "Gyarados",
    "Lapras",
    "Ditto",
    "Eevee",
    "Vaporeon",
    "Jolteon",
    "Flareon",
    "Porygon",
    "Omanyte",
    "Omastar",
    "Kabuto",
    "Kabutops",
    "Aerodactyl",
    "Snorlax",
    "Articuno",
    "Zapdos",
    "Moltres",
    "Dratini",
    "Dragonair",
    "Dragonite",
    "Mewtwo",
    "Mew",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_has_a_name() {
        for id in 1..=CATALOG_LEN {
            let n = name(id);
            assert!(!n.is_empty(), "id {} has empty name", id);
            assert_ne!(n, UNKNOWN_NAME, "id {} hit the sentinel", id);
        }
    }

    #[test]
    fn known_entries() {
        assert_eq!(name(1), "Bulbasaur");
        assert_eq!(name(25), "Pikachu");
        assert_eq!(name(150), "Mewtwo");
        assert_eq!(name(151), "Mew");
    }

    #[test]
    fn names_with_punctuation_are_exact() {
        assert_eq!(name(83), "Farfetch'd");
        assert_eq!(name(122), "Mr. Mime");
        assert_eq!(name(29), "Nidoran F");
        assert_eq!(name(32), "Nidoran M");
    }

    #[test]
    fn out_of_range_returns_sentinel() {
        assert_eq!(name(0), UNKNOWN_NAME);
        assert_eq!(name(152), UNKNOWN_NAME);
        assert_eq!(name(u16::MAX), UNKNOWN_NAME);
    }

    #[test]
    fn track_is_identity() {
        assert_eq!(track(1), 1);
        assert_eq!(track(151), 151);
    }
}
