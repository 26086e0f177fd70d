// SPDX-License-Identifier: MPL-2.0
//! JavaScript entry points (requires the `web` feature).
//!
//! The module bootstraps a [`Page`] when the document is ready and exposes
//! thin wrappers over its notification center to page scripts:
//!
//! ```js
//! showToast("Perfil atualizado", "success");
//! showError("CRMV inválido", 0); // stays until closed
//! const toast = showInfo("Enviando...");
//! toast?.hide();
//! ```
//!
//! The sign-up form is enabled automatically when the page carries it.

use crate::app::Page;
use crate::error::Error;
use crate::infrastructure::WebDocument;
use crate::ui::notifications::{NotificationCenter, Notifier, Severity, Toast};
use std::cell::RefCell;
use std::time::Duration;
use wasm_bindgen::prelude::*;

thread_local! {
    static PAGE: RefCell<Option<Page<WebDocument>>> = const { RefCell::new(None) };
}

fn to_js(err: &Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn millis(duration_ms: Option<u32>) -> Option<Duration> {
    duration_ms.map(|ms| Duration::from_millis(u64::from(ms)))
}

fn with_center<T>(
    action: impl FnOnce(&NotificationCenter<WebDocument>) -> Option<T>,
) -> Option<T> {
    PAGE.with(|slot| match slot.borrow().as_ref() {
        Some(page) => action(page.notifications()),
        None => {
            log::error!("Toast container not initialized");
            None
        }
    })
}

/// Controller of a displayed toast.
#[wasm_bindgen(js_name = Toast)]
pub struct JsToast {
    inner: Toast<WebDocument>,
}

#[wasm_bindgen(js_class = Toast)]
impl JsToast {
    /// Closes the toast; no-op once it is closed.
    pub fn hide(&self) {
        self.inner.hide();
    }

    #[wasm_bindgen(getter)]
    pub fn id(&self) -> String {
        self.inner.id().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn severity(&self) -> String {
        self.inner.severity().wire_name().to_string()
    }
}

impl From<Toast<WebDocument>> for JsToast {
    fn from(inner: Toast<WebDocument>) -> Self {
        Self { inner }
    }
}

/// Module entry point: installs logging and bootstraps the page once the
/// document is parsed.
///
/// # Errors
///
/// Fails outside a browser window context.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let port = WebDocument::from_window().map_err(|err| to_js(&err))?;
    let ready = port.clone();
    port.when_ready(Box::new(move || {
        let page = Page::bootstrap(ready);
        PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    }))
    .map_err(|err| to_js(&err))
}

fn attach_registration_form(page: &mut Page<WebDocument>) -> Result<(), Error> {
    page.attach_registration_form().map(|_| ())
}

/// Enables the role-dependent CRMV field on the sign-up form.
///
/// Called while the document is still loading, the form is enabled once it
/// is parsed and failures are logged.
///
/// # Errors
///
/// Fails when the page lacks the form markup.
#[wasm_bindgen(js_name = initRegistrationForm)]
pub fn init_registration_form() -> Result<(), JsValue> {
    let attached = PAGE.with(|slot| slot.borrow_mut().as_mut().map(attach_registration_form));
    match attached {
        Some(result) => result.map_err(|err| to_js(&err)),
        None => {
            let port = WebDocument::from_window().map_err(|err| to_js(&err))?;
            port.when_ready(Box::new(|| {
                PAGE.with(|slot| match slot.borrow_mut().as_mut() {
                    Some(page) => {
                        if let Err(err) = attach_registration_form(page) {
                            log::error!("Registration form not enabled: {err}");
                        }
                    }
                    None => log::error!("Registration form not enabled: page not bootstrapped"),
                });
            }))
            .map_err(|err| to_js(&err))
        }
    }
}

/// Shows a toast. `kind` is `success`, `danger`, `warning` or `info`
/// (unknown kinds show as info); `durationMs` defaults to 5000, 0 keeps it open.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(
    message: &str,
    kind: Option<String>,
    duration_ms: Option<u32>,
) -> Option<JsToast> {
    let severity = kind
        .as_deref()
        .map_or(Severity::Info, Severity::from_wire_lenient);
    with_center(|center| center.show(message, severity, millis(duration_ms))).map(JsToast::from)
}

#[wasm_bindgen(js_name = showSuccess)]
pub fn show_success(message: &str, duration_ms: Option<u32>) -> Option<JsToast> {
    with_center(|center| center.success(message, millis(duration_ms))).map(JsToast::from)
}

#[wasm_bindgen(js_name = showError)]
pub fn show_error(message: &str, duration_ms: Option<u32>) -> Option<JsToast> {
    with_center(|center| center.error(message, millis(duration_ms))).map(JsToast::from)
}

#[wasm_bindgen(js_name = showWarning)]
pub fn show_warning(message: &str, duration_ms: Option<u32>) -> Option<JsToast> {
    with_center(|center| center.warning(message, millis(duration_ms))).map(JsToast::from)
}

#[wasm_bindgen(js_name = showInfo)]
pub fn show_info(message: &str, duration_ms: Option<u32>) -> Option<JsToast> {
    with_center(|center| center.info(message, millis(duration_ms))).map(JsToast::from)
}
