use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::page::{Banner, BannerHost, BannerId, BannerKind, Form, Page};

const BASE_STYLE: &str = "padding: 10px; margin: 10px 0; border-radius: 5px;";
const ERROR_STYLE: &str = "background-color: #fee; border: 1px solid #f00; color: #c00;";
const SUCCESS_STYLE: &str = "background-color: #efe; border: 1px solid #0a0; color: #060;";

pub fn banner_style(kind: BannerKind) -> String {
    let colors = match kind {
        BannerKind::Error => ERROR_STYLE,
        BannerKind::Success => SUCCESS_STYLE,
    };
    format!("{} {}", BASE_STYLE, colors)
}

/// Pick where a banner goes: the submitted form, else `.container`, else the body.
pub fn resolve_host(page: &dyn Page, form: Option<&dyn Form>) -> BannerHost {
    match form {
        Some(form) => BannerHost::Form(form.id()),
        None if page.has_container() => BannerHost::Container,
        None => BannerHost::Body,
    }
}

/// A banner that has been placed and will remove itself.
#[derive(Debug)]
pub struct ShownBanner {
    pub id: BannerId,
    pub removal: JoinHandle<()>,
}

/// Insert a banner and schedule its removal after `ttl`.
///
/// Every banner owns its removal timer; showing another banner never
/// cancels or delays an earlier one.
pub fn show_message(
    page: &Arc<dyn Page>,
    form: Option<&dyn Form>,
    text: &str,
    is_error: bool,
    ttl: Duration,
) -> ShownBanner {
    let kind = if is_error {
        BannerKind::Error
    } else {
        BannerKind::Success
    };
    let host = resolve_host(page.as_ref(), form);
    let banner = Banner {
        text: text.to_string(),
        kind,
        class_name: kind.class_name(),
        style: banner_style(kind),
    };

    let id = page.insert_banner(host, banner);

    let page = Arc::clone(page);
    let removal = tokio::spawn(async move {
        tokio::time::sleep(ttl).await;
        debug!("Removing banner {:?}", id);
        page.remove_banner(id);
    });

    ShownBanner { id, removal }
}
