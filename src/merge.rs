//! In-place merge of refreshed items into an existing list.

/// Merges `items` into `list`: each item replaces the first value-equal
/// element, keeping its position, or is appended at the end when nothing
/// matches. The replacement stores the incoming instance, so fields outside
/// the `PartialEq` key are updated too.
pub fn insert_or_update<T: PartialEq>(list: &mut Vec<T>, items: Vec<T>) {
    for item in items {
        match list.iter().position(|existing| *existing == item) {
            Some(index) => list[index] = item,
            None => list.push(item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Equality keyed on location only, like media items compared by URI.
    #[derive(Debug, Clone)]
    struct Track {
        location: &'static str,
        title: &'static str,
    }

    impl PartialEq for Track {
        fn eq(&self, other: &Self) -> bool {
            self.location == other.location
        }
    }

    #[test]
    fn replaces_matches_in_place_and_appends_the_rest() {
        let mut list = vec!["a".to_string(), "b".to_string()];
        insert_or_update(&mut list, vec!["c".to_string(), "b".to_string()]);
        assert_eq!(list, ["a", "b", "c"]);
    }

    #[test]
    fn replacement_keeps_the_incoming_instance() {
        let mut list = vec![
            Track { location: "a.mp3", title: "stale" },
            Track { location: "b.mp3", title: "stale" },
        ];
        insert_or_update(
            &mut list,
            vec![
                Track { location: "c.mp3", title: "fresh" },
                Track { location: "b.mp3", title: "fresh" },
            ],
        );
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].title, "stale");
        assert_eq!(list[1].location, "b.mp3");
        assert_eq!(list[1].title, "fresh");
        assert_eq!(list[2].location, "c.mp3");
    }

    #[test]
    fn reapplying_the_same_items_is_idempotent() {
        let mut list = vec!["a".to_string()];
        let items = vec!["b".to_string(), "c".to_string()];
        insert_or_update(&mut list, items.clone());
        insert_or_update(&mut list, items);
        assert_eq!(list, ["a", "b", "c"]);
    }

    #[test]
    fn duplicate_items_collapse_onto_the_first_match() {
        let mut list = vec![Track { location: "a.mp3", title: "v1" }];
        insert_or_update(
            &mut list,
            vec![
                Track { location: "a.mp3", title: "v2" },
                Track { location: "a.mp3", title: "v3" },
            ],
        );
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title, "v3");
    }

    #[test]
    fn empty_inputs_are_no_ops() {
        let mut list: Vec<String> = Vec::new();
        insert_or_update(&mut list, Vec::new());
        assert!(list.is_empty());

        insert_or_update(&mut list, vec!["a".to_string()]);
        assert_eq!(list, ["a"]);
    }
}
