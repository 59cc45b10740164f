// SPDX-License-Identifier: MPL-2.0
//! One open-to-close cycle of the lightbox.

use super::group::{GroupName, ImageRef, TriggerId, TriggerRegistry};

/// Images of one group with the index currently shown.
///
/// A session is never empty and `current` is always a valid index.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    group: GroupName,
    images: Vec<ImageRef>,
    current: usize,
}

impl Session {
    /// Collects the group of `trigger` and positions the session on it.
    ///
    /// Returns `None` if the trigger is unknown to the registry.
    #[must_use]
    pub fn start(registry: &TriggerRegistry, trigger: TriggerId) -> Option<Self> {
        let group = registry.group_of(trigger)?.clone();
        let members = registry.members(&group);
        let current = members.iter().position(|id| *id == trigger)?;
        let images = members
            .iter()
            .filter_map(|id| registry.image(*id).cloned())
            .collect::<Vec<_>>();
        if images.len() != members.len() {
            return None;
        }
        Some(Self {
            group,
            images,
            current,
        })
    }

    #[must_use]
    pub fn group(&self) -> &GroupName {
        &self.group
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn image(&self, index: usize) -> Option<&ImageRef> {
        self.images.get(index)
    }

    #[must_use]
    pub fn current_image(&self) -> &ImageRef {
        &self.images[self.current]
    }

    /// Moves to `index`. Out-of-range indices leave the session unchanged.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.images.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn next_index(&self) -> usize {
        (self.current + 1) % self.images.len()
    }

    #[must_use]
    pub fn previous_index(&self) -> usize {
        (self.current + self.images.len() - 1) % self.images.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(group: &str, count: usize) -> (TriggerRegistry, Vec<TriggerId>) {
        let mut registry = TriggerRegistry::new();
        let ids = (0..count)
            .map(|i| registry.register(ImageRef::new(format!("{i}.jpg")), Some(group)))
            .collect();
        (registry, ids)
    }

    #[test]
    fn start_positions_on_trigger_within_group() {
        let mut registry = TriggerRegistry::new();
        registry.register(ImageRef::new("other.jpg"), Some("beef"));
        let a = registry.register(ImageRef::new("a.jpg"), Some("pork"));
        let b = registry.register(ImageRef::new("b.jpg"), Some("pork"));

        let session = Session::start(&registry, b).expect("session should start");
        assert_eq!(session.group().as_str(), "pork");
        assert_eq!(session.len(), 2);
        assert_eq!(session.current(), 1);

        let session = Session::start(&registry, a).expect("session should start");
        assert_eq!(session.current(), 0);
    }

    #[test]
    fn next_cycles_back_to_start_after_len_steps() {
        for len in 1..=7 {
            let (registry, ids) = registry_with("g", len);
            for start in 0..len {
                let mut session = Session::start(&registry, ids[start]).unwrap();
                for _ in 0..len {
                    let next = session.next_index();
                    session.select(next);
                }
                assert_eq!(session.current(), start, "len {len}, start {start}");
            }
        }
    }

    #[test]
    fn previous_undoes_next() {
        for len in 1..=5 {
            let (registry, ids) = registry_with("g", len);
            for start in 0..len {
                let mut session = Session::start(&registry, ids[start]).unwrap();
                let next = session.next_index();
                session.select(next);
                let previous = session.previous_index();
                session.select(previous);
                assert_eq!(session.current(), start);
            }
        }
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let (registry, ids) = registry_with("g", 3);
        let mut session = Session::start(&registry, ids[1]).unwrap();
        assert!(!session.select(3));
        assert_eq!(session.current(), 1);
    }
}
