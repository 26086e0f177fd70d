// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Class names of the Bootstrap 5.3 and Bootstrap Icons stylesheets the pages
load. Components only reference these constants, so a stylesheet upgrade is a
change in one place.

## Organization

- **Toast**: Widget structure and visibility
- **Container**: Overlay positioning
- **Background**: Severity backgrounds
- **Icon**: Severity icons
- **Display**: Inline display values

## Examples

```
use vetconecta_ui::ui::design_tokens::{background, toast};

let class = format!("{} {}", toast::BASE, background::SUCCESS);
assert_eq!(class, "toast text-bg-success");
```
"#]

/// Toast widget structure.
pub mod toast {
    /// Root class of a toast.
    pub const BASE: &str = "toast";
    /// Added while the toast is visible.
    pub const SHOW: &str = "show";
    /// Flex row holding the body and close button.
    pub const LAYOUT: &str = "d-flex";
    pub const BODY: &str = "toast-body";
    /// Message text span.
    pub const MESSAGE: &str = "toast-message";
    /// Screen-reader-only severity title.
    pub const VISUALLY_HIDDEN: &str = "visually-hidden";
    /// Close button, white variant for colored backgrounds.
    pub const CLOSE_BUTTON: &str = "btn-close btn-close-white me-2 m-auto";
}

/// Toast overlay container.
pub mod container {
    pub const BASE: &str = "toast-container position-fixed";
    /// Padding between the overlay and the viewport edge.
    pub const PADDING: &str = "p-3";
}

/// Severity backgrounds (`text-bg-*` sets a contrasting text color too).
pub mod background {
    pub const SUCCESS: &str = "text-bg-success";
    pub const DANGER: &str = "text-bg-danger";
    pub const WARNING: &str = "text-bg-warning";
    pub const INFO: &str = "text-bg-info";
}

/// Bootstrap Icons.
pub mod icon {
    /// Base class every icon carries.
    pub const BASE: &str = "bi";
    /// Spacing between the icon and the message.
    pub const SPACING: &str = "me-2";
    pub const CHECK_CIRCLE: &str = "bi-check-circle-fill";
    pub const X_CIRCLE: &str = "bi-x-circle-fill";
    pub const EXCLAMATION_TRIANGLE: &str = "bi-exclamation-triangle-fill";
    pub const INFO_CIRCLE: &str = "bi-info-circle-fill";
}

/// Inline `display` values.
pub mod display {
    pub const BLOCK: &str = "block";
    pub const NONE: &str = "none";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_backgrounds_are_distinct() {
        let all = [
            background::SUCCESS,
            background::DANGER,
            background::WARNING,
            background::INFO,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn icons_use_the_filled_variant() {
        for class in [
            icon::CHECK_CIRCLE,
            icon::X_CIRCLE,
            icon::EXCLAMATION_TRIANGLE,
            icon::INFO_CIRCLE,
        ] {
            assert!(class.starts_with("bi-"));
            assert!(class.ends_with("-fill"));
        }
    }
}
