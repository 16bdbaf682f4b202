//! Blood Bank Client
//!
//! This library provides a Rust client for the blood bank backend API
//! together with the page glue that sits on top of it: form handlers that
//! submit login and appointment forms, transient message banners, and a
//! light/dark theme toggle whose choice survives page loads.
//!
//! # Modules
//!
//! - `client`: BloodBankClient for API operations
//! - `config`: origin and timing configuration loaded from the environment
//! - `forms`: FormController binding forms to the client
//! - `banner`: transient success/error banners
//! - `theme`: ThemeToggle and the persisted ThemePreference
//! - `storage`: preference stores (in-memory and file backed)
//! - `page`: the Page/Form traits a page host implements
//! - `headless`: in-memory Page/Form implementation
//!
//! # Sessions
//!
//! The backend uses cookie sessions. The client keeps a cookie jar and sends
//! it with every request; session tokens are never inspected here.

pub mod banner;
pub mod client;
pub mod config;
pub mod error;
pub mod forms;
pub mod headless;
pub mod models;
pub mod page;
pub mod storage;
pub mod theme;


// Re-export the main API types for ease of use
pub use client::{BloodBankClient, RequestOptions};
pub use config::{ClientConfig, FormTimings};
pub use error::{ClientError, ConfigError};
pub use forms::FormController;
pub use models::common::RequestResult;
pub use theme::{ThemePreference, ThemeToggle};
