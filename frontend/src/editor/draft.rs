/// How a draft was opened; decides the dialog title and whether a delete
/// action is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit,
}

/// Edit lifecycle of one entity kind.
///
/// `Closed` means no editor is open for the kind. `Open` holds the working
/// copy plus the per-draft pending flag and the last save error. While
/// `saving` is set, field edits and repeat save clicks are ignored; the
/// in-flight request is never aborted, and a response that arrives after the
/// draft was closed is dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Draft<T> {
    Closed,
    Open {
        value: T,
        mode: Mode,
        saving: bool,
        error: Option<String>,
    },
}

/// Draft mutations requested by the view.
#[derive(Debug, Clone)]
pub enum DraftAction<T> {
    /// Open an editor for a new entity from its default template. Replaces
    /// any draft already open for the kind, without confirmation.
    OpenCreate(T),
    /// Open an editor pre-filled with the persisted entity.
    OpenEdit(T),
    /// Replace the working copy (shallow merge happens at the call site:
    /// the view clones the current value and changes one field).
    Set(T),
}

impl<T> Default for Draft<T> {
    fn default() -> Self {
        Draft::Closed
    }
}

impl<T: Clone> Draft<T> {
    pub fn is_open(&self) -> bool {
        matches!(self, Draft::Open { .. })
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, Draft::Open { saving: true, .. })
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Draft::Open { value, .. } => Some(value),
            Draft::Closed => None,
        }
    }

    pub fn mode(&self) -> Option<Mode> {
        match self {
            Draft::Open { mode, .. } => Some(*mode),
            Draft::Closed => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Draft::Open { error, .. } => error.as_deref(),
            Draft::Closed => None,
        }
    }

    pub fn apply(&mut self, action: DraftAction<T>) {
        match action {
            DraftAction::OpenCreate(value) => {
                *self = Draft::Open {
                    value,
                    mode: Mode::Create,
                    saving: false,
                    error: None,
                };
            }
            DraftAction::OpenEdit(value) => {
                *self = Draft::Open {
                    value,
                    mode: Mode::Edit,
                    saving: false,
                    error: None,
                };
            }
            DraftAction::Set(new_value) => {
                if let Draft::Open {
                    value,
                    saving: false,
                    ..
                } = self
                {
                    *value = new_value;
                }
            }
        }
    }

    /// Marks the draft as saving and returns the payload to submit. Returns
    /// `None` while a save is already pending (second click is a no-op) or
    /// when no draft is open.
    pub fn begin_save(&mut self) -> Option<T> {
        match self {
            Draft::Open { value, saving, .. } if !*saving => {
                *saving = true;
                Some(value.clone())
            }
            _ => None,
        }
    }

    /// Applies the save outcome: success closes the draft, failure keeps it
    /// open with the error attached and the pending flag cleared. A response
    /// for a draft the user already closed (or closed and reopened) is
    /// ignored.
    pub fn finish_save(&mut self, result: Result<(), String>) {
        if let Draft::Open { saving, error, .. } = self {
            if !*saving {
                return;
            }
            match result {
                Ok(()) => *self = Draft::Closed,
                Err(e) => {
                    *saving = false;
                    *error = Some(e);
                }
            }
        }
    }

    pub fn close(&mut self) {
        *self = Draft::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Entity {
        title: String,
    }

    fn entity(title: &str) -> Entity {
        Entity {
            title: title.to_string(),
        }
    }

    #[test]
    fn open_create_starts_from_the_template() {
        let mut draft: Draft<Entity> = Draft::Closed;
        draft.apply(DraftAction::OpenCreate(Entity::default()));
        assert_eq!(draft.value(), Some(&Entity::default()));
        assert_eq!(draft.mode(), Some(Mode::Create));
        assert!(!draft.is_saving());
    }

    #[test]
    fn opening_replaces_an_open_draft_without_asking() {
        let mut draft: Draft<Entity> = Draft::Closed;
        draft.apply(DraftAction::OpenEdit(entity("lama")));
        draft.apply(DraftAction::OpenCreate(entity("baru")));
        assert_eq!(draft.value(), Some(&entity("baru")));
        assert_eq!(draft.mode(), Some(Mode::Create));
    }

    #[test]
    fn set_is_ignored_while_saving_and_when_closed() {
        let mut draft: Draft<Entity> = Draft::Closed;
        draft.apply(DraftAction::Set(entity("hantu")));
        assert!(!draft.is_open());

        draft.apply(DraftAction::OpenEdit(entity("asli")));
        assert!(draft.begin_save().is_some());
        draft.apply(DraftAction::Set(entity("selama menyimpan")));
        assert_eq!(draft.value(), Some(&entity("asli")));
    }

    #[test]
    fn second_save_click_is_a_no_op() {
        let mut draft: Draft<Entity> = Draft::Closed;
        draft.apply(DraftAction::OpenEdit(entity("a")));
        assert!(draft.begin_save().is_some());
        assert!(draft.begin_save().is_none());
    }

    #[test]
    fn failure_reopens_with_error_and_allows_retry() {
        let mut draft: Draft<Entity> = Draft::Closed;
        draft.apply(DraftAction::OpenEdit(entity("a")));
        draft.begin_save();
        draft.finish_save(Err("server sibuk".to_string()));
        assert!(draft.is_open());
        assert!(!draft.is_saving());
        assert_eq!(draft.error(), Some("server sibuk"));

        // The user must click save again; no automatic retry happened.
        assert!(draft.begin_save().is_some());
        draft.finish_save(Ok(()));
        assert!(!draft.is_open());
    }

    #[test]
    fn late_response_after_close_is_dropped() {
        let mut draft: Draft<Entity> = Draft::Closed;
        draft.apply(DraftAction::OpenEdit(entity("a")));
        draft.begin_save();
        draft.close();
        draft.finish_save(Err("terlambat".to_string()));
        assert!(!draft.is_open());
    }

    #[test]
    fn late_response_after_reopen_does_not_touch_the_new_draft() {
        let mut draft: Draft<Entity> = Draft::Closed;
        draft.apply(DraftAction::OpenEdit(entity("a")));
        draft.begin_save();
        draft.close();
        draft.apply(DraftAction::OpenEdit(entity("b")));

        // The stale response targets a draft that is no longer saving.
        draft.finish_save(Ok(()));
        assert_eq!(draft.value(), Some(&entity("b")));
        assert!(draft.is_open());
    }
}
