use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use log::{info, warn};
use web_sys::Document;
use yew::prelude::*;

use crate::config::{Rescan, RevealConfig};
use crate::reveal::dom::{scan_tagged, DomWatcher, MutationRescan};
use crate::reveal::tracker::{IntersectionEntry, IntersectionWatcher, RevealTracker, RevealedSet};

type SharedTracker<W> = Rc<RefCell<Option<RevealTracker<W>>>>;
type WeakTracker<W> = Weak<RefCell<Option<RevealTracker<W>>>>;

/// Keeps the rescan source alive; dropping it cancels the timer or observer.
enum RescanHandle {
    Interval(Interval),
    Mutations(MutationRescan),
}

/// A mounted tracker plus whatever keeps rescanning it.
/// Callbacks handed out here hold weak references and go quiet once unmounted.
struct Mounted<W: IntersectionWatcher, R> {
    shared: SharedTracker<W>,
    rescan: Option<R>,
}

impl<W: IntersectionWatcher, R> Mounted<W, R> {
    fn empty() -> Self {
        Self {
            shared: Rc::new(RefCell::new(None)),
            rescan: None,
        }
    }

    /// Feeds intersection batches to the tracker and calls `on_grow` when the set grows.
    fn entries_handler<G>(&self, on_grow: G) -> impl FnMut(Vec<IntersectionEntry>)
    where
        G: Fn(&RevealedSet),
    {
        let weak = Rc::downgrade(&self.shared);
        move |entries| {
            with_tracker(&weak, |tracker| {
                if tracker.handle_entries(entries) > 0 {
                    on_grow(tracker.revealed());
                }
            });
        }
    }

    /// What each timer tick or mutation batch runs.
    fn rescan_handler<S, I>(&self, mut scan: S) -> impl FnMut()
    where
        S: FnMut() -> I,
        I: IntoIterator<Item = (String, W::Target)>,
    {
        let weak = Rc::downgrade(&self.shared);
        move || {
            with_tracker(&weak, |tracker| {
                tracker.rescan(scan());
            });
        }
    }

    fn install(&self, tracker: RevealTracker<W>) {
        *self.shared.borrow_mut() = Some(tracker);
    }

    fn keep_rescanning(&mut self, rescan: Option<R>) {
        self.rescan = rescan;
    }

    /// Stops the rescan source first, then tears the tracker down.
    fn unmount(mut self) {
        drop(self.rescan.take());
        if let Some(mut tracker) = self.shared.borrow_mut().take() {
            tracker.teardown();
        }
    }
}

/// Tracks every `data-reveal-id` element under the page and returns the ids
/// revealed so far. The set is owned here and only grows until unmount.
#[hook]
pub fn use_reveal_tracker(config: RevealConfig) -> RevealedSet {
    let revealed = use_state(RevealedSet::default);

    {
        let setter = revealed.setter();
        use_effect_with_deps(
            move |config: &RevealConfig| {
                let mut mounted = Mounted::empty();
                match web_sys::window().and_then(|w| w.document()) {
                    Some(document) => mount(&mut mounted, document, config.clone(), setter),
                    None => warn!("No document available, reveal tracking disabled"),
                }
                move || mounted.unmount()
            },
            config,
        );
    }

    (*revealed).clone()
}

fn mount(
    mounted: &mut Mounted<DomWatcher, RescanHandle>,
    document: Document,
    config: RevealConfig,
    setter: UseStateSetter<RevealedSet>,
) {
    let on_entries = mounted.entries_handler(move |revealed| setter.set(revealed.clone()));

    let rescan = config.rescan;
    let mut tracker = RevealTracker::new(DomWatcher::new(&config, on_entries), config);
    let found = tracker.observe(scan_tagged(&document));
    info!("Reveal tracking {} element(s)", found);
    mounted.install(tracker);

    let rescan_document = {
        let document = document.clone();
        mounted.rescan_handler(move || scan_tagged(&document))
    };

    let handle = match rescan {
        Rescan::Interval(millis) => Some(RescanHandle::Interval(Interval::new(millis, rescan_document))),
        Rescan::Mutations => MutationRescan::new(&document, rescan_document).map(RescanHandle::Mutations),
    };
    mounted.keep_rescanning(handle);
}

// Callbacks never nest on the main thread; a held borrow means teardown is in progress.
fn with_tracker<W, F>(shared: &WeakTracker<W>, f: F)
where
    W: IntersectionWatcher,
    F: FnOnce(&mut RevealTracker<W>),
{
    let Some(shared) = shared.upgrade() else {
        return;
    };
    let Ok(mut slot) = shared.try_borrow_mut() else {
        return;
    };
    if let Some(tracker) = slot.as_mut() {
        f(tracker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Log = Rc<RefCell<Vec<String>>>;

    struct LoggingWatcher {
        log: Log,
    }

    impl IntersectionWatcher for LoggingWatcher {
        type Target = String;

        fn observe(&mut self, target: &String) {
            self.log.borrow_mut().push(format!("observe {}", target));
        }

        fn disconnect(&mut self) {
            self.log.borrow_mut().push("disconnect".to_string());
        }
    }

    struct Ticker {
        log: Log,
    }

    impl Drop for Ticker {
        fn drop(&mut self) {
            self.log.borrow_mut().push("ticker stopped".to_string());
        }
    }

    fn mounted_with(log: &Log) -> Mounted<LoggingWatcher, Ticker> {
        let mut mounted = Mounted::empty();
        mounted.install(RevealTracker::new(
            LoggingWatcher { log: log.clone() },
            RevealConfig::default(),
        ));
        mounted.keep_rescanning(Some(Ticker { log: log.clone() }));
        mounted
    }

    fn page(ids: &[&str]) -> Vec<(String, String)> {
        ids.iter().map(|id| (id.to_string(), id.to_string())).collect()
    }

    #[test]
    fn tick_picks_up_injected_elements() {
        let log = Log::default();
        let mounted = mounted_with(&log);
        let document = Rc::new(RefCell::new(page(&["our-header"])));

        let mut tick = {
            let document = document.clone();
            mounted.rescan_handler(move || document.borrow().clone())
        };
        tick();
        document.borrow_mut().push(("our-items".to_string(), "our-items".to_string()));
        tick();
        tick();

        assert_eq!(*log.borrow(), vec!["observe our-header", "observe our-items"]);
        let revealed = Rc::new(RefCell::new(0));
        let mut deliver = {
            let revealed = revealed.clone();
            mounted.entries_handler(move |set| *revealed.borrow_mut() = set.len())
        };
        deliver(vec![IntersectionEntry {
            id: Some("our-items".into()),
            is_intersecting: true,
            ratio: 1.0,
        }]);
        assert_eq!(*revealed.borrow(), 1);
    }

    #[test]
    fn unmount_stops_rescan_before_teardown() {
        let log = Log::default();
        let mounted = mounted_with(&log);
        let mut tick = mounted.rescan_handler(|| page(&["late"]));

        mounted.unmount();
        tick();

        assert_eq!(*log.borrow(), vec!["ticker stopped", "disconnect"]);
    }

    #[test]
    fn entries_after_unmount_are_dropped() {
        let log = Log::default();
        let mounted = mounted_with(&log);
        let grew = Rc::new(RefCell::new(false));
        let mut deliver = {
            let grew = grew.clone();
            mounted.entries_handler(move |_| *grew.borrow_mut() = true)
        };
        mounted.unmount();
        deliver(vec![IntersectionEntry {
            id: Some("late".into()),
            is_intersecting: true,
            ratio: 1.0,
        }]);
        assert!(!*grew.borrow());
    }
}
