use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    js_sys, Document, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MutationObserver, MutationObserverInit,
};

use crate::config::{RevealConfig, REVEAL_ATTRIBUTE};
use crate::reveal::tracker::{IntersectionEntry, IntersectionWatcher};

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// IntersectionObserver-backed watcher. Without observer support it silently does nothing.
pub struct DomWatcher {
    observer: Option<IntersectionObserver>,
    _callback: Option<EntriesCallback>,
}

impl DomWatcher {
    pub fn new<F>(config: &RevealConfig, mut on_entries: F) -> Self
    where
        F: FnMut(Vec<IntersectionEntry>) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| IntersectionEntry {
                    id: entry.target().get_attribute(REVEAL_ATTRIBUTE),
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                })
                .collect();
            on_entries(entries);
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&config.root_margin);
        init.set_threshold(&JsValue::from_f64(config.threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => Self {
                observer: Some(observer),
                _callback: Some(callback),
            },
            Err(err) => {
                warn!("IntersectionObserver unavailable, reveal animations disabled: {:?}", err);
                Self {
                    observer: None,
                    _callback: None,
                }
            }
        }
    }
}

impl IntersectionWatcher for DomWatcher {
    type Target = Element;

    fn observe(&mut self, target: &Element) {
        if let Some(observer) = &self.observer {
            observer.observe(target);
        }
    }

    fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

/// Every element currently carrying the tagging attribute, paired with its id.
pub fn scan_tagged(document: &Document) -> Vec<(String, Element)> {
    let selector = format!("[{}]", REVEAL_ATTRIBUTE);
    let nodes = match document.query_selector_all(&selector) {
        Ok(nodes) => nodes,
        Err(_) => return Vec::new(),
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|element| {
            element
                .get_attribute(REVEAL_ATTRIBUTE)
                .map(|id| (id, element))
        })
        .collect()
}

/// Runs `on_insert` whenever nodes are added anywhere under `<body>`.
/// Disconnects on drop.
pub struct MutationRescan {
    observer: MutationObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
}

impl MutationRescan {
    pub fn new<F>(document: &Document, mut on_insert: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let body = document.body()?;
        let callback = Closure::wrap(Box::new(move |records: js_sys::Array, _: MutationObserver| {
            if records.length() > 0 {
                on_insert();
            }
        }) as Box<dyn FnMut(js_sys::Array, MutationObserver)>);

        let observer = match MutationObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(err) => {
                warn!("MutationObserver unavailable: {:?}", err);
                return None;
            }
        };
        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        if let Err(err) = observer.observe_with_options(&body, &init) {
            warn!("Failed to watch document for inserted nodes: {:?}", err);
            return None;
        }
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for MutationRescan {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
