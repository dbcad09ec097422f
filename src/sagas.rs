//! Static saga and arc registry.
//!
//! Sagas exist in this scope purely as locked/unlocked flags on the economy
//! state; no map or combat progression is simulated. The registry provides
//! the world structure the presentation layer renders.

/// A saga: a named group of story arcs.
#[derive(Debug, Clone)]
pub struct Saga {
    pub id: &'static str,
    pub name: &'static str,
    pub arcs: Vec<ArcDef>,
}

/// An arc within a saga.
#[derive(Debug, Clone)]
pub struct ArcDef {
    pub id: &'static str,
    pub name: &'static str,
    /// True for the single arc open in a brand-new game.
    pub open_at_start: bool,
}

/// Returns all sagas in display order.
pub fn get_all_sagas() -> Vec<Saga> {
    vec![
        Saga {
            id: "east_blue",
            name: "East Blue",
            arcs: vec![
                ArcDef {
                    id: "romance_dawn",
                    name: "Romance Dawn",
                    open_at_start: true,
                },
                ArcDef {
                    id: "orange_town",
                    name: "Orange Town",
                    open_at_start: false,
                },
                ArcDef {
                    id: "syrup_village",
                    name: "Syrup Village",
                    open_at_start: false,
                },
                ArcDef {
                    id: "baratie",
                    name: "Baratie",
                    open_at_start: false,
                },
                ArcDef {
                    id: "arlong_park",
                    name: "Arlong Park",
                    open_at_start: false,
                },
            ],
        },
        Saga {
            id: "grand_line",
            name: "Grand Line",
            arcs: vec![
                ArcDef {
                    id: "whisky_peak",
                    name: "Whisky Peak",
                    open_at_start: false,
                },
                ArcDef {
                    id: "little_garden",
                    name: "Little Garden",
                    open_at_start: false,
                },
                ArcDef {
                    id: "drum_island",
                    name: "Drum Island",
                    open_at_start: false,
                },
                ArcDef {
                    id: "alabasta",
                    name: "Alabasta",
                    open_at_start: false,
                },
            ],
        },
    ]
}

/// Looks up a saga by id.
pub fn find_saga(id: &str) -> Option<Saga> {
    get_all_sagas().into_iter().find(|saga| saga.id == id)
}

/// Looks up an arc by id across all sagas.
pub fn find_arc(id: &str) -> Option<ArcDef> {
    get_all_sagas()
        .into_iter()
        .flat_map(|saga| saga.arcs)
        .find(|arc| arc.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_two_sagas() {
        let sagas = get_all_sagas();
        assert_eq!(sagas.len(), 2);
        assert_eq!(sagas[0].id, "east_blue");
        assert_eq!(sagas[0].arcs.len(), 5);
        assert_eq!(sagas[1].id, "grand_line");
        assert_eq!(sagas[1].arcs.len(), 4);
    }

    #[test]
    fn test_only_romance_dawn_opens_at_start() {
        let open: Vec<&'static str> = get_all_sagas()
            .into_iter()
            .flat_map(|saga| saga.arcs)
            .filter(|arc| arc.open_at_start)
            .map(|arc| arc.id)
            .collect();
        assert_eq!(open, vec!["romance_dawn"]);
    }

    #[test]
    fn test_find_helpers() {
        assert_eq!(find_saga("grand_line").unwrap().name, "Grand Line");
        assert_eq!(find_arc("baratie").unwrap().name, "Baratie");
        assert!(find_saga("new_world").is_none());
        assert!(find_arc("wano").is_none());
    }

    #[test]
    fn test_arc_ids_are_unique() {
        let mut ids: Vec<&'static str> = get_all_sagas()
            .into_iter()
            .flat_map(|saga| saga.arcs)
            .map(|arc| arc.id)
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
