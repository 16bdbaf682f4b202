use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::{debug, info};

use crate::page::{Banner, BannerHost, BannerId, Control, ControlId, Form, FormId, Page};

/// A banner as it sits in the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedBanner {
    pub id: BannerId,
    pub host: BannerHost,
    pub banner: Banner,
}

#[derive(Debug, Default)]
struct PageState {
    // Newest first, mirroring insertion as first child
    banners: Vec<PlacedBanner>,
    controls: Vec<(ControlId, Control)>,
    body_classes: BTreeSet<String>,
    location: Option<String>,
}

/// In-memory page used by the CLI and the tests.
#[derive(Debug, Default)]
pub struct HeadlessPage {
    has_container: bool,
    next_id: AtomicU64,
    state: Mutex<PageState>,
}

impl HeadlessPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page that contains a `.container` element.
    pub fn with_container() -> Self {
        Self {
            has_container: true,
            ..Self::default()
        }
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn banners(&self) -> Vec<PlacedBanner> {
        self.state.lock().unwrap().banners.clone()
    }

    /// Banner texts, newest first.
    pub fn banner_texts(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .banners
            .iter()
            .map(|placed| placed.banner.text.clone())
            .collect()
    }

    pub fn location(&self) -> Option<String> {
        self.state.lock().unwrap().location.clone()
    }

    pub fn controls(&self) -> Vec<Control> {
        self.state
            .lock()
            .unwrap()
            .controls
            .iter()
            .map(|(_, control)| control.clone())
            .collect()
    }
}

impl Page for HeadlessPage {
    fn has_container(&self) -> bool {
        self.has_container
    }

    fn insert_banner(&self, host: BannerHost, banner: Banner) -> BannerId {
        let id = BannerId(self.next_id());
        debug!("Inserting banner {:?} into {:?}", id, host);
        let mut state = self.state.lock().unwrap();
        state.banners.insert(0, PlacedBanner { id, host, banner });
        id
    }

    fn remove_banner(&self, id: BannerId) {
        let mut state = self.state.lock().unwrap();
        state.banners.retain(|placed| placed.id != id);
    }

    fn navigate(&self, href: &str) {
        info!("Navigating to {}", href);
        self.state.lock().unwrap().location = Some(href.to_string());
    }

    fn append_control(&self, control: Control) -> ControlId {
        let id = ControlId(self.next_id());
        self.state.lock().unwrap().controls.push((id, control));
        id
    }

    fn set_control_label(&self, id: ControlId, label: &str) {
        let mut state = self.state.lock().unwrap();
        if let Some((_, control)) = state.controls.iter_mut().find(|(cid, _)| *cid == id) {
            control.label = label.to_string();
        }
    }

    fn add_body_class(&self, class: &str) {
        self.state.lock().unwrap().body_classes.insert(class.to_string());
    }

    fn toggle_body_class(&self, class: &str) -> bool {
        let mut state = self.state.lock().unwrap();
        if state.body_classes.remove(class) {
            false
        } else {
            state.body_classes.insert(class.to_string());
            true
        }
    }

    fn body_has_class(&self, class: &str) -> bool {
        self.state.lock().unwrap().body_classes.contains(class)
    }
}

/// In-memory form with named text fields.
#[derive(Debug)]
pub struct HeadlessForm {
    id: FormId,
    defaults: HashMap<String, String>,
    values: Mutex<HashMap<String, String>>,
}

impl HeadlessForm {
    pub fn new(id: &str) -> Self {
        Self {
            id: FormId(id.to_string()),
            defaults: HashMap::new(),
            values: Mutex::new(HashMap::new()),
        }
    }

    /// Declare a field with its initial value.
    pub fn with_field(mut self, name: &str, initial: &str) -> Self {
        self.defaults.insert(name.to_string(), initial.to_string());
        self.values
            .get_mut()
            .unwrap()
            .insert(name.to_string(), initial.to_string());
        self
    }

    /// Simulate the user typing into a field.
    pub fn fill(&self, name: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
    }
}

impl Form for HeadlessForm {
    fn id(&self) -> FormId {
        self.id.clone()
    }

    fn value(&self, name: &str) -> Option<String> {
        self.values.lock().unwrap().get(name).cloned()
    }

    fn reset(&self) {
        let mut values = self.values.lock().unwrap();
        values.clear();
        values.extend(self.defaults.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}
