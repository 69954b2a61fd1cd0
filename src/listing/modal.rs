//! Create/update dialog flow shared by the entity screens.
//!
//! `Closed -> Open(mode, values) -> Submitting -> Closed` on success, or back
//! to `Open` with the error retained on failure. Invalid transitions return
//! `false` and leave the state untouched, so a double-click on a submit
//! button cannot issue a second mutation. The add/save dialogs on the
//! entity screens follow this flow around their form posts.

use std::mem;

/// Whether the dialog was opened with empty defaults or an existing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalState<T> {
    Closed,
    Open {
        mode: ModalMode,
        values: T,
        error: Option<String>,
    },
    Submitting {
        mode: ModalMode,
        values: T,
    },
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<T> ModalState<T> {
    /// Open for creation, populated from empty defaults.
    pub fn open_create(values: T) -> Self {
        Self::Open {
            mode: ModalMode::Create,
            values,
            error: None,
        }
    }

    /// Open for editing, populated from the selected record.
    pub fn open_edit(values: T) -> Self {
        Self::Open {
            mode: ModalMode::Edit,
            values,
            error: None,
        }
    }

    /// Move `Open -> Submitting`. Returns `false` from any other state.
    pub fn begin_submit(&mut self) -> bool {
        match mem::replace(self, Self::Closed) {
            Self::Open { mode, values, .. } => {
                *self = Self::Submitting { mode, values };
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    /// Move `Submitting -> Closed`. The owner refetches the list afterwards.
    pub fn submit_succeeded(&mut self) -> bool {
        match self {
            Self::Submitting { .. } => {
                *self = Self::Closed;
                true
            }
            _ => false,
        }
    }

    /// Move `Submitting -> Open` keeping the entered values and recording
    /// the failure reason inline.
    pub fn submit_failed(&mut self, reason: impl Into<String>) -> bool {
        match mem::replace(self, Self::Closed) {
            Self::Submitting { mode, values } => {
                *self = Self::Open {
                    mode,
                    values,
                    error: Some(reason.into()),
                };
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. } | Self::Submitting { .. })
    }

    pub fn mode(&self) -> Option<ModalMode> {
        match self {
            Self::Open { mode, .. } | Self::Submitting { mode, .. } => Some(*mode),
            Self::Closed => None,
        }
    }

    pub fn values(&self) -> Option<&T> {
        match self {
            Self::Open { values, .. } | Self::Submitting { values, .. } => Some(values),
            Self::Closed => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Open { error, .. } => error.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Draft {
        name: String,
    }

    #[test]
    fn create_flow_closes_on_success() {
        let mut modal = ModalState::open_create(Draft::default());
        assert_eq!(modal.mode(), Some(ModalMode::Create));
        assert!(modal.begin_submit());
        assert!(modal.submit_succeeded());
        assert_eq!(modal, ModalState::Closed);
    }

    #[test]
    fn failed_submit_reopens_with_values_and_error() {
        let draft = Draft {
            name: "Ada".into(),
        };
        let mut modal = ModalState::open_edit(draft.clone());
        assert!(modal.begin_submit());
        assert!(modal.submit_failed("email already taken"));
        assert_eq!(modal.mode(), Some(ModalMode::Edit));
        assert_eq!(modal.values(), Some(&draft));
        assert_eq!(modal.error(), Some("email already taken"));
    }

    #[test]
    fn double_submit_is_rejected() {
        let mut modal = ModalState::open_create(Draft::default());
        assert!(modal.begin_submit());
        // Already submitting.
        assert!(!modal.begin_submit());
        assert!(matches!(modal, ModalState::Submitting { .. }));
    }

    #[test]
    fn submit_from_closed_is_rejected() {
        let mut modal: ModalState<Draft> = ModalState::Closed;
        assert!(!modal.begin_submit());
        assert!(!modal.submit_succeeded());
        assert!(!modal.submit_failed("nope"));
        assert_eq!(modal, ModalState::Closed);
    }
}
