//! Button style resolution and activation gating.
//!
//! The `Button` component is a thin rsx shell over this module: every class
//! string it renders comes from [`resolve_class`] and every click it forwards
//! passes through [`ButtonState::dispatch`]. Keeping the rules here lets them be
//! tested without a renderer.
//!
//! Style buckets are BEM classes from the shared theme
//! (`ui/assets/theme/main.css`):
//!
//! ```text
//! button  button--<variant>  button--<size>  <caller override>
//! ```

use serde::{Deserialize, Serialize};

/// Class applied to every button regardless of variant or size.
pub const BASE_CLASS: &str = "button";

/// Visual style bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 4] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
    ];

    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button--primary",
            ButtonVariant::Secondary => "button--secondary",
            ButtonVariant::Outline => "button--outline",
            ButtonVariant::Ghost => "button--ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Sm, ButtonSize::Md, ButtonSize::Lg];

    pub fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "button--sm",
            ButtonSize::Md => "button--md",
            ButtonSize::Lg => "button--lg",
        }
    }
}

/// Native `type` attribute of the rendered `<button>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// Build the final class attribute: base, variant, size, then the override.
///
/// A token that occurs more than once survives only at its last position, so
/// anything repeated in `extra` takes precedence over the built-in buckets.
pub fn resolve_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let tokens: Vec<&str> = [BASE_CLASS, variant.class(), size.class()]
        .into_iter()
        .chain(extra.split_whitespace())
        .collect();

    let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());
    for (idx, token) in tokens.iter().enumerate() {
        if !tokens[idx + 1..].contains(token) {
            kept.push(token);
        }
    }
    kept.join(" ")
}

/// The two flags that decide whether a button is live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub disabled: bool,
    pub loading: bool,
}

impl ButtonState {
    pub fn new(disabled: bool, loading: bool) -> Self {
        Self { disabled, loading }
    }

    /// Whether the control must be marked non-interactive (natively and via aria).
    pub fn is_inert(&self) -> bool {
        self.disabled || self.loading
    }

    pub fn permits_activation(&self) -> bool {
        !self.is_inert()
    }

    /// Forward `event` to `handler` if the guard allows it.
    ///
    /// Returns whether the handler ran. A missing handler is a silent no-op.
    pub fn dispatch<E, F>(&self, handler: Option<F>, event: E) -> bool
    where
        F: FnOnce(E),
    {
        match handler {
            Some(handler) if self.permits_activation() => {
                handler(event);
                true
            }
            _ => false,
        }
    }
}
