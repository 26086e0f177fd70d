// SPDX-License-Identifier: MPL-2.0
//! Registration form behavior.
//!
//! The sign-up page offers two account roles. Only veterinarians have to
//! provide a CRMV license number, so the license field is shown and marked
//! `required` exactly when the veterinarian radio is checked.
//!
//! Missing markup is a template defect: [`RoleFieldToggler::install`] fails
//! fast instead of degrading silently.

use crate::application::port::RenderPort;
use crate::config::defaults::{
    LICENSE_FIELD_ID, LICENSE_INPUT_ID, TUTOR_RADIO_ID, VETERINARIAN_RADIO_ID,
};
use crate::domain::registration::RoleSelection;
use crate::error::{Error, Result};
use crate::ui::design_tokens::display;
use std::rc::Rc;

/// Keeps the license field in sync with the selected role.
#[derive(Debug, Clone)]
pub struct RoleFieldToggler<P: RenderPort> {
    port: P,
    tutor: P::Element,
    veterinarian: P::Element,
    license_field: P::Element,
    license_input: P::Element,
}

impl<P: RenderPort> RoleFieldToggler<P> {
    /// Locates the form elements without binding anything.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] naming the first absent element.
    pub fn new(port: P) -> Result<Self> {
        let find = |id: &str| {
            port.element_by_id(id)
                .ok_or_else(|| Error::MissingElement(id.to_string()))
        };
        Ok(Self {
            tutor: find(TUTOR_RADIO_ID)?,
            veterinarian: find(VETERINARIAN_RADIO_ID)?,
            license_field: find(LICENSE_FIELD_ID)?,
            license_input: find(LICENSE_INPUT_ID)?,
            port,
        })
    }

    /// Locates the elements, binds both radios' `change` events and syncs
    /// once, so a pre-checked or browser-restored role is reflected at load.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] for absent markup, or a render error
    /// if the host rejects a listener or the initial sync.
    pub fn install(port: P) -> Result<Self> {
        let toggler = Self::new(port)?;
        for radio in [&toggler.tutor, &toggler.veterinarian] {
            let bound = toggler.clone();
            toggler.port.add_event_listener(
                radio,
                "change",
                Rc::new(move || {
                    if let Err(err) = bound.sync_license_field() {
                        log::error!("Failed to update the license field: {err}");
                    }
                }),
            )?;
        }
        toggler.sync_license_field()?;
        Ok(toggler)
    }

    /// Role currently checked on the form.
    #[must_use]
    pub fn selected_role(&self) -> RoleSelection {
        RoleSelection::from_veterinarian_checked(self.port.is_checked(&self.veterinarian))
    }

    /// Shows and requires the license field for veterinarians, hides and
    /// releases it otherwise. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns a render error if the host rejects the style or attribute change.
    pub fn sync_license_field(&self) -> Result<()> {
        if self.selected_role().requires_license() {
            self.port
                .set_style(&self.license_field, "display", display::BLOCK)?;
            self.port
                .set_attribute(&self.license_input, "required", "required")
        } else {
            self.port
                .set_style(&self.license_field, "display", display::NONE)?;
            self.port.remove_attribute(&self.license_input, "required")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{MemoryDocument, NodeId};

    struct Form {
        doc: MemoryDocument,
        tutor: NodeId,
        veterinarian: NodeId,
        field: NodeId,
        input: NodeId,
    }

    fn form(checked: RoleSelection) -> Form {
        let doc = MemoryDocument::new();
        let body = doc.body_id();
        let radio = |id: &str, role: RoleSelection| {
            let mut attributes = vec![("type", "radio"), ("name", "perfil"), ("id", id)];
            if role == checked {
                attributes.push(("checked", "checked"));
            }
            doc.append_new(&body, "input", &attributes)
        };
        let tutor = radio(TUTOR_RADIO_ID, RoleSelection::Tutor);
        let veterinarian = radio(VETERINARIAN_RADIO_ID, RoleSelection::Veterinarian);
        let field = doc.append_new(&body, "div", &[("id", LICENSE_FIELD_ID)]);
        let input = doc.append_new(&field, "input", &[("id", LICENSE_INPUT_ID), ("name", "crmv")]);
        Form {
            doc,
            tutor,
            veterinarian,
            field,
            input,
        }
    }

    fn assert_state(form: &Form, role: RoleSelection) {
        let required = form.doc.attribute(&form.input, "required").is_some();
        let display = form.doc.style(&form.field, "display");
        match role {
            RoleSelection::Veterinarian => {
                assert!(required);
                assert_eq!(display.as_deref(), Some("block"));
            }
            RoleSelection::Tutor => {
                assert!(!required);
                assert_eq!(display.as_deref(), Some("none"));
            }
        }
    }

    #[test]
    fn install_syncs_the_preselected_role() {
        for role in [RoleSelection::Tutor, RoleSelection::Veterinarian] {
            let form = form(role);
            let toggler = RoleFieldToggler::install(form.doc.clone()).unwrap();
            assert_eq!(toggler.selected_role(), role);
            assert_state(&form, role);
        }
    }

    #[test]
    fn change_events_toggle_the_field() {
        let form = form(RoleSelection::Tutor);
        RoleFieldToggler::install(form.doc.clone()).unwrap();

        form.doc.select_radio(&form.veterinarian);
        assert_state(&form, RoleSelection::Veterinarian);

        form.doc.select_radio(&form.tutor);
        assert_state(&form, RoleSelection::Tutor);
    }

    #[test]
    fn sync_is_idempotent() {
        let form = form(RoleSelection::Veterinarian);
        let toggler = RoleFieldToggler::install(form.doc.clone()).unwrap();
        let before = form.doc.outer_html(&form.doc.body_id());

        toggler.sync_license_field().unwrap();
        toggler.sync_license_field().unwrap();

        assert_eq!(form.doc.outer_html(&form.doc.body_id()), before);
    }

    #[test]
    fn restored_form_state_is_picked_up_on_sync() {
        let form = form(RoleSelection::Tutor);
        let toggler = RoleFieldToggler::install(form.doc.clone()).unwrap();

        // Browser form restoration flips `checked` without firing events.
        form.doc.set_checked(&form.tutor, false);
        form.doc.set_checked(&form.veterinarian, true);
        toggler.sync_license_field().unwrap();

        assert_state(&form, RoleSelection::Veterinarian);
    }

    #[test]
    fn both_radios_are_bound() {
        let form = form(RoleSelection::Tutor);
        RoleFieldToggler::install(form.doc.clone()).unwrap();
        assert_eq!(form.doc.listener_count(&form.tutor), 1);
        assert_eq!(form.doc.listener_count(&form.veterinarian), 1);
    }

    #[test]
    fn missing_markup_fails_fast() {
        let doc = MemoryDocument::new();
        let body = doc.body_id();
        doc.append_new(&body, "input", &[("type", "radio"), ("id", TUTOR_RADIO_ID)]);
        doc.append_new(&body, "input", &[("type", "radio"), ("id", VETERINARIAN_RADIO_ID)]);

        let err = RoleFieldToggler::install(doc).unwrap_err();
        assert_eq!(err, Error::MissingElement(LICENSE_FIELD_ID.to_string()));
    }
}
