use std::collections::HashSet;

use log::debug;

use crate::config::RevealConfig;

/// Browsers report ratios like 0.0999 for an element sitting exactly on the threshold.
const RATIO_TOLERANCE: f64 = 0.005;

/// Ids of elements that have entered the viewport at least once. Insert-only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealedSet {
    ids: HashSet<String>,
}

impl RevealedSet {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns true only for the first insertion of `id`.
    fn insert(&mut self, id: &str) -> bool {
        if self.ids.contains(id) {
            return false;
        }
        self.ids.insert(id.to_string())
    }

    /// `"revealed"` when `id` is in the set, for use in `classes!`.
    pub fn class_for(&self, id: &str) -> Option<&'static str> {
        self.contains(id).then(|| "revealed")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Unobserved,
    Observed,
    Revealed,
}

/// One intersection notification, independent of the browser type that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub id: Option<String>,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionEntry {
    /// True for intersecting entries with `ratio >= threshold - RATIO_TOLERANCE`,
    /// so 0.095 is the effective floor at the default 0.1.
    fn crosses(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio + RATIO_TOLERANCE >= threshold
    }
}

/// Whatever delivers intersection notifications for registered targets.
pub trait IntersectionWatcher {
    type Target;

    fn observe(&mut self, target: &Self::Target);

    /// Stop delivering notifications for every target.
    fn disconnect(&mut self);
}

pub struct RevealTracker<W: IntersectionWatcher> {
    watcher: W,
    config: RevealConfig,
    observed: HashSet<String>,
    revealed: RevealedSet,
    active: bool,
}

impl<W: IntersectionWatcher> RevealTracker<W> {
    pub fn new(watcher: W, config: RevealConfig) -> Self {
        Self {
            watcher,
            config,
            observed: HashSet::new(),
            revealed: RevealedSet::default(),
            active: true,
        }
    }

    /// Registers every tagged element found at mount.
    pub fn observe<I>(&mut self, elements: I) -> usize
    where
        I: IntoIterator<Item = (String, W::Target)>,
    {
        self.rescan(elements)
    }

    /// Registers elements that are not yet observed and returns how many were new.
    pub fn rescan<I>(&mut self, elements: I) -> usize
    where
        I: IntoIterator<Item = (String, W::Target)>,
    {
        if !self.active {
            return 0;
        }
        let mut added = 0;
        for (id, target) in elements {
            if self.observed.contains(&id) {
                continue;
            }
            self.watcher.observe(&target);
            self.observed.insert(id);
            added += 1;
        }
        if added > 0 {
            debug!("reveal: observing {} new element(s), {} total", added, self.observed.len());
        }
        added
    }

    /// Applies a batch of notifications and returns how many ids were newly revealed.
    pub fn handle_entries<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = IntersectionEntry>,
    {
        if !self.active {
            return 0;
        }
        let threshold = self.config.threshold;
        entries
            .into_iter()
            .filter(|entry| entry.crosses(threshold))
            .filter_map(|entry| entry.id)
            .filter(|id| self.observed.contains(id))
            .filter(|id| self.revealed.insert(id))
            .count()
    }

    /// Disconnects the watcher. Nothing changes the set afterwards.
    pub fn teardown(&mut self) {
        if self.active {
            self.active = false;
            self.watcher.disconnect();
        }
    }

    pub fn state(&self, id: &str) -> RevealState {
        if self.revealed.contains(id) {
            RevealState::Revealed
        } else if self.observed.contains(id) {
            RevealState::Observed
        } else {
            RevealState::Unobserved
        }
    }

    pub fn revealed(&self) -> &RevealedSet {
        &self.revealed
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingWatcher {
        observed: Vec<String>,
        disconnects: usize,
    }

    impl IntersectionWatcher for RecordingWatcher {
        type Target = String;

        fn observe(&mut self, target: &String) {
            self.observed.push(target.clone());
        }

        fn disconnect(&mut self) {
            self.disconnects += 1;
        }
    }

    fn tagged(ids: &[&str]) -> Vec<(String, String)> {
        ids.iter().map(|id| (id.to_string(), format!("node:{}", id))).collect()
    }

    fn entering(id: &str) -> IntersectionEntry {
        IntersectionEntry { id: Some(id.to_string()), is_intersecting: true, ratio: 0.5 }
    }

    fn leaving(id: &str) -> IntersectionEntry {
        IntersectionEntry { id: Some(id.to_string()), is_intersecting: false, ratio: 0.0 }
    }

    fn hero_tracker() -> RevealTracker<RecordingWatcher> {
        let mut tracker = RevealTracker::new(RecordingWatcher::default(), RevealConfig::default());
        tracker.observe(tagged(&["hero-title", "hero-subtitle", "hero-buttons"]));
        tracker
    }

    #[test]
    fn hero_scenario() {
        let mut tracker = hero_tracker();
        tracker.handle_entries(vec![
            leaving("hero-title"),
            leaving("hero-subtitle"),
            leaving("hero-buttons"),
        ]);
        assert!(tracker.revealed().is_empty());

        assert_eq!(tracker.handle_entries(vec![entering("hero-title")]), 1);
        assert!(tracker.revealed().contains("hero-title"));
        assert_eq!(tracker.revealed().len(), 1);

        tracker.handle_entries(vec![entering("hero-subtitle")]);
        assert!(tracker.revealed().contains("hero-subtitle"));
        assert_eq!(tracker.revealed().len(), 2);

        assert_eq!(tracker.handle_entries(vec![entering("hero-title")]), 0);
        assert_eq!(tracker.revealed().len(), 2);
        assert!(!tracker.revealed().contains("hero-buttons"));
    }

    #[test]
    fn observe_registers_each_element_with_watcher() {
        let tracker = hero_tracker();
        assert_eq!(tracker.watcher.observed, vec!["node:hero-title", "node:hero-subtitle", "node:hero-buttons"]);
        assert_eq!(tracker.state("hero-title"), RevealState::Observed);
        assert_eq!(tracker.state("contact-form"), RevealState::Unobserved);
    }

    #[test]
    fn below_threshold_does_not_reveal() {
        let mut tracker = hero_tracker();
        let glimpse = IntersectionEntry { id: Some("hero-title".into()), is_intersecting: true, ratio: 0.02 };
        assert_eq!(tracker.handle_entries(vec![glimpse]), 0);
        assert_eq!(tracker.state("hero-title"), RevealState::Observed);

        let rounded = IntersectionEntry { id: Some("hero-title".into()), is_intersecting: true, ratio: 0.0999 };
        assert_eq!(tracker.handle_entries(vec![rounded]), 1);
        assert_eq!(tracker.state("hero-title"), RevealState::Revealed);
    }

    #[test]
    fn tolerance_floor_is_just_under_threshold() {
        let mut tracker = hero_tracker();
        let under = IntersectionEntry { id: Some("hero-title".into()), is_intersecting: true, ratio: 0.09 };
        assert_eq!(tracker.handle_entries(vec![under]), 0);
        let floor = IntersectionEntry { id: Some("hero-title".into()), is_intersecting: true, ratio: 0.096 };
        assert_eq!(tracker.handle_entries(vec![floor]), 1);
    }

    #[test]
    fn entries_for_unobserved_ids_are_ignored() {
        let mut tracker = hero_tracker();
        let stray = IntersectionEntry { id: Some("never-observed".into()), is_intersecting: true, ratio: 1.0 };
        assert_eq!(tracker.handle_entries(vec![stray]), 0);
        assert_eq!(tracker.state("never-observed"), RevealState::Unobserved);
        assert!(tracker.revealed().is_empty());
    }

    #[test]
    fn entries_without_id_are_ignored() {
        let mut tracker = hero_tracker();
        let anonymous = IntersectionEntry { id: None, is_intersecting: true, ratio: 1.0 };
        assert_eq!(tracker.handle_entries(vec![anonymous]), 0);
        assert!(tracker.revealed().is_empty());
    }

    #[test]
    fn repeated_events_in_one_batch_count_once() {
        let mut tracker = hero_tracker();
        let batch = vec![entering("hero-buttons"), entering("hero-buttons"), entering("hero-buttons")];
        assert_eq!(tracker.handle_entries(batch), 1);
        assert_eq!(tracker.revealed().len(), 1);
    }

    #[test]
    fn revealed_is_terminal() {
        let mut tracker = hero_tracker();
        tracker.handle_entries(vec![entering("hero-title")]);
        tracker.handle_entries(vec![leaving("hero-title")]);
        tracker.rescan(tagged(&["hero-title"]));
        assert_eq!(tracker.state("hero-title"), RevealState::Revealed);
    }

    #[test]
    fn size_never_decreases() {
        let mut tracker = hero_tracker();
        let events = vec![
            entering("hero-title"),
            leaving("hero-title"),
            entering("hero-buttons"),
            leaving("hero-buttons"),
            entering("hero-title"),
            entering("hero-subtitle"),
        ];
        let mut last = 0;
        for event in events {
            tracker.handle_entries(vec![event]);
            assert!(tracker.revealed().len() >= last);
            last = tracker.revealed().len();
        }
        assert_eq!(last, 3);
    }

    #[test]
    fn rescan_picks_up_late_elements_once() {
        let mut tracker = hero_tracker();
        assert_eq!(tracker.rescan(tagged(&["hero-title", "hero-subtitle", "hero-buttons"])), 0);

        let added = tracker.rescan(tagged(&["hero-title", "our-header", "our-items"]));
        assert_eq!(added, 2);
        assert_eq!(tracker.observed_count(), 5);
        assert_eq!(tracker.watcher.observed.len(), 5);
        assert_eq!(tracker.state("our-items"), RevealState::Observed);

        tracker.handle_entries(vec![entering("our-items")]);
        assert!(tracker.revealed().contains("our-items"));
    }

    #[test]
    fn teardown_freezes_the_set() {
        let mut tracker = hero_tracker();
        tracker.handle_entries(vec![entering("hero-title")]);
        tracker.teardown();
        tracker.teardown();
        assert_eq!(tracker.watcher.disconnects, 1);
        assert!(!tracker.is_active());

        assert_eq!(tracker.handle_entries(vec![entering("hero-subtitle")]), 0);
        assert_eq!(tracker.rescan(tagged(&["late"])), 0);
        assert_eq!(tracker.revealed().len(), 1);
        assert_eq!(tracker.state("late"), RevealState::Unobserved);
    }

    #[test]
    fn class_for_reflects_membership() {
        let mut tracker = hero_tracker();
        assert_eq!(tracker.revealed().class_for("hero-title"), None);
        tracker.handle_entries(vec![entering("hero-title")]);
        assert_eq!(tracker.revealed().class_for("hero-title"), Some("revealed"));
    }
}
