// src/selection.rs

/// Body-area ids picked by the user, in the order they were picked.
/// Never holds the same id twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    /// Removes `id` if present, otherwise appends it.
    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|x| x == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn joined(&self, sep: &str) -> String {
        self.ids.join(sep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(s: &SelectionSet) -> Vec<&str> {
        s.iter().collect()
    }

    #[test]
    fn toggle_adds_once_then_removes() {
        let mut s = SelectionSet::default();
        s.toggle("heart");
        assert_eq!(ids(&s), ["heart"]);
        assert!(s.contains("heart"));

        s.toggle("heart");
        assert!(s.is_empty());
        assert!(!s.contains("heart"));
    }

    #[test]
    fn re_adding_moves_id_to_the_end() {
        let mut s = SelectionSet::default();
        s.toggle("a");
        s.toggle("b");
        s.toggle("a");
        s.toggle("a");
        assert_eq!(ids(&s), ["b", "a"]);
    }

    #[test]
    fn unrelated_toggles_keep_order() {
        let mut s = SelectionSet::default();
        for id in ["head", "eyes", "legs"] {
            s.toggle(id);
        }
        s.toggle("eyes");
        assert_eq!(ids(&s), ["head", "legs"]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn joined_uses_selection_order() {
        let mut s = SelectionSet::default();
        s.toggle("heart");
        s.toggle("eyes");
        assert_eq!(s.joined(", "), "heart, eyes");
        assert_eq!(SelectionSet::default().joined(", "), "");
    }
}
