//! Bootstrap class tokens emitted by the builder.

/// Form group wrapper.
pub const GROUP: &str = "form-group";
/// Group wrapper with a feedback icon.
pub const FEEDBACK: &str = "has-feedback";
/// Base control class.
pub const CONTROL: &str = "form-control";
/// Group label.
pub const LABEL: &str = "control-label";
/// Label of an attribute with a presence rule.
pub const REQUIRED: &str = "required";
/// Visually hidden, still read by screen readers.
pub const HIDE: &str = "sr-only";
/// Control of an attribute with errors.
pub const ERROR: &str = "is-invalid";
/// Help block.
pub const HELP: &str = "form-text";
/// Help block showing errors.
pub const ERROR_HELP: &str = "invalid-feedback";
/// Static text control.
pub const STATIC: &str = "form-control-static";
/// Element added by a control wrapper.
pub const INPUT_WRAPPER: &str = "input-wrapper";
/// Input group around prepended or appended content.
pub const INPUT_GROUP: &str = "input-group";
/// Text add-on of an input group.
pub const INPUT_GROUP_ADDON: &str = "input-group-addon";
/// Button add-on of an input group.
pub const INPUT_GROUP_BTN: &str = "input-group-btn";
/// Standard checkbox or radio wrapper.
pub const CHECK: &str = "form-check";
/// Inline standard checkbox or radio wrapper.
pub const CHECK_INLINE: &str = "form-check-inline";
/// Standard checkbox or radio input.
pub const CHECK_INPUT: &str = "form-check-input";
/// Standard checkbox or radio label.
pub const CHECK_LABEL: &str = "form-check-label";
/// Custom checkbox or radio wrapper.
pub const CUSTOM_CONTROL: &str = "custom-control";
/// Inline custom checkbox or radio wrapper.
pub const CUSTOM_CONTROL_INLINE: &str = "custom-control-inline";
/// Custom checkbox or radio input.
pub const CUSTOM_CONTROL_INPUT: &str = "custom-control-input";
/// Custom checkbox or radio label.
pub const CUSTOM_CONTROL_LABEL: &str = "custom-control-label";
/// Checkbox or radio input without a visible label.
pub const POSITION_STATIC: &str = "position-static";
/// Disabled checkbox or radio wrapper.
pub const DISABLED: &str = "disabled";
/// List of full error messages.
pub const ERROR_SUMMARY: &str = "bootstrap-form-error-summary";
/// Alert box.
pub const ALERT: &str = "alert alert-danger";
