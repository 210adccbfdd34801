/// Bookkeeping for one-shot scroll reveals.
///
/// Mirrors the observer's watch set: a key is revealed on its first
/// intersecting entry and dropped from the set, so later entries for it
/// (leaving and re-entering the viewport) are ignored.
#[derive(Clone, Debug)]
pub struct FadeWatch<K> {
    watched: Vec<K>,
}

impl<K> Default for FadeWatch<K> {
    fn default() -> Self {
        Self {
            watched: Vec::new(),
        }
    }
}

impl<K: PartialEq + Clone> FadeWatch<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn watch(&mut self, key: K) {
        if !self.watched.contains(&key) {
            self.watched.push(key);
        }
    }

    pub fn is_watched(&self, key: &K) -> bool {
        self.watched.contains(key)
    }

    pub fn pending(&self) -> usize {
        self.watched.len()
    }

    /// Feed a batch of `(key, is_intersecting)` entries; returns the keys
    /// that become visible now, in delivery order.
    pub fn on_entries<I>(&mut self, entries: I) -> Vec<K>
    where
        I: IntoIterator<Item = (K, bool)>,
    {
        let mut revealed = Vec::new();
        for (key, intersecting) in entries {
            if !intersecting {
                continue;
            }
            if let Some(pos) = self.watched.iter().position(|k| *k == key) {
                self.watched.remove(pos);
                revealed.push(key);
            }
        }
        revealed
    }
}
