// SPDX-License-Identifier: MPL-2.0
//! Registration form types.

/// Account type chosen on the registration form.
///
/// The two role radios are mutually exclusive; the page pre-checks one of
/// them, so exactly one role is selected after load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleSelection {
    /// Pet owner account.
    #[default]
    Tutor,
    /// Veterinarian account, which must provide a CRMV license number.
    Veterinarian,
}

impl RoleSelection {
    /// Resolves the selection from the checked state of the veterinarian radio.
    #[must_use]
    pub fn from_veterinarian_checked(checked: bool) -> Self {
        if checked {
            RoleSelection::Veterinarian
        } else {
            RoleSelection::Tutor
        }
    }

    /// Whether the license field must be shown and filled in.
    #[must_use]
    pub fn requires_license(self) -> bool {
        matches!(self, RoleSelection::Veterinarian)
    }
}
