//! Page surface the controllers drive.
//!
//! A page host (a browser binding, or `HeadlessPage` in tests and the CLI)
//! implements these traits. Controllers receive the exact forms they attach
//! to; nothing here searches the page.

use std::fmt;

/// Identifies a form on the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormId(pub String);

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BannerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn class_name(self) -> &'static str {
        match self {
            BannerKind::Success => "success-message",
            BannerKind::Error => "error-message",
        }
    }
}

/// A transient message element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub text: String,
    pub kind: BannerKind,
    /// `error-message` or `success-message`.
    pub class_name: &'static str,
    pub style: String,
}

/// Element a banner is inserted into, as its first child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BannerHost {
    Form(FormId),
    Container,
    Body,
}

/// A floating button appended to the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub id: String,
    pub label: String,
    pub style: Vec<(&'static str, &'static str)>,
}

pub trait Page: Send + Sync {
    /// Whether the page has a `.container` element.
    fn has_container(&self) -> bool;

    fn insert_banner(&self, host: BannerHost, banner: Banner) -> BannerId;

    /// Remove a banner; unknown ids are ignored.
    fn remove_banner(&self, id: BannerId);

    fn navigate(&self, href: &str);

    fn append_control(&self, control: Control) -> ControlId;

    fn set_control_label(&self, id: ControlId, label: &str);

    fn add_body_class(&self, class: &str);

    /// Toggle a body class and report whether it is now present.
    fn toggle_body_class(&self, class: &str) -> bool;

    fn body_has_class(&self, class: &str) -> bool;
}

pub trait Form: Send + Sync {
    fn id(&self) -> FormId;

    /// Current value of a named field.
    fn value(&self, name: &str) -> Option<String>;

    /// Restore every field to its initial value.
    fn reset(&self);
}

/// A form submission as delivered by the page host.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the host from performing its native submission.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
