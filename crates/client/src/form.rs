//! Edit/create form for appointment bookings, modeled as an explicit state
//! machine: the hosting view renders the tagged actions and feeds events
//! back in, instead of the form owning callbacks.

use db::{
    models::rendezvous::{CreateRendezvous, NAME_MAX, NAME_MIN, Rendezvous},
    validation::{ValidationError, ValidationErrorKind, required_text},
};

use crate::{
    api::{ApiClient, ClientError},
    literals::Literals,
};

pub const LIST_ROUTE: &str = "/rendezvous";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Actions the hosting view offers for the current form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    Save { enabled: bool },
    Remove,
    Return,
}

/// Where to go next, and what to tell the user about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub route: String,
    pub notification: Option<String>,
}

/// Result of asking to leave the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaveOutcome {
    Navigate(Navigation),
    /// Unsaved edits: the view must ask before discarding them.
    ConfirmDiscard,
}

pub struct RendezvousForm {
    literals: Literals,
    mode: FormMode,
    id: Option<i64>,
    record: CreateRendezvous,
    dirty: bool,
    confirming_delete: bool,
    name_error: Option<String>,
}

impl RendezvousForm {
    /// Start from an empty record.
    pub fn new(literals: Literals) -> Self {
        Self {
            literals,
            mode: FormMode::Create,
            id: None,
            record: CreateRendezvous::default(),
            dirty: false,
            confirming_delete: false,
            name_error: None,
        }
    }

    /// Populate from an existing record.
    pub fn edit(literals: Literals, rendezvous: Rendezvous) -> Self {
        let Rendezvous {
            id,
            name,
            prenom,
            mail,
            numero,
            adresse,
            code,
            ville,
            domaine,
        } = rendezvous;
        Self {
            literals,
            mode: FormMode::Edit,
            id: Some(id),
            record: CreateRendezvous {
                name,
                prenom,
                mail,
                numero,
                adresse,
                code,
                ville,
                domaine,
            },
            dirty: false,
            confirming_delete: false,
            name_error: None,
        }
    }

    /// Resolve the form for a route: an id means edit mode, none means a new
    /// record. A missing record is an explicit error, never an empty form.
    pub async fn load(
        api: &ApiClient,
        literals: Literals,
        id: Option<i64>,
    ) -> Result<Self, ClientError> {
        match id {
            Some(id) => {
                let rendezvous = api.rendezvous(id).await?;
                Ok(Self::edit(literals, rendezvous))
            }
            None => Ok(Self::new(literals)),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.confirming_delete
    }

    pub fn record(&self) -> &CreateRendezvous {
        &self.record
    }

    /// Mutable access for fields without dedicated validation. Any touch
    /// marks the form dirty.
    pub fn record_mut(&mut self) -> &mut CreateRendezvous {
        self.dirty = true;
        &mut self.record
    }

    pub fn name_error(&self) -> Option<&str> {
        self.name_error.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        Self::validate_name(&self.record.name).is_ok()
    }

    /// Update the name field, refreshing the mapped error message.
    pub fn set_name(&mut self, value: &str) {
        self.record.name = value.to_string();
        self.dirty = true;
        self.name_error = Self::validate_name(value)
            .err()
            .map(|e| self.error_message(&e));
    }

    fn validate_name(value: &str) -> Result<(), ValidationError> {
        required_text("name", value, NAME_MIN, NAME_MAX)
    }

    /// Too-short gets the interpolated minimum; everything else maps to the
    /// blank-input literal.
    fn error_message(&self, err: &ValidationError) -> String {
        match err.kind {
            ValidationErrorKind::TooShort { min } => {
                self.literals.format("minLength", &[&min.to_string()])
            }
            _ => self.literals.get("emptyInput").to_string(),
        }
    }

    /// The actions the hosting view should render for the current state.
    pub fn actions(&self) -> Vec<ViewAction> {
        let save = ViewAction::Save {
            enabled: self.is_valid(),
        };
        match self.mode {
            FormMode::Create => vec![save, ViewAction::Return],
            FormMode::Edit => vec![save, ViewAction::Remove, ViewAction::Return],
        }
    }

    /// Create or update, depending on mode.
    pub async fn save(&mut self, api: &ApiClient) -> Result<Navigation, ClientError> {
        if let Err(err) = Self::validate_name(&self.record.name) {
            return Err(err.into());
        }

        match self.mode {
            FormMode::Create => {
                api.create_rendezvous(&self.record).await?;
            }
            FormMode::Edit => {
                let id = self.id.ok_or(ClientError::NotFound)?;
                api.update_rendezvous(id, &self.record).await?;
            }
        }
        self.dirty = false;
        Ok(self.saved_navigation())
    }

    fn saved_navigation(&self) -> Navigation {
        let key = match self.mode {
            FormMode::Create => "createdMessage",
            FormMode::Edit => "updatedMessage",
        };
        Navigation {
            route: LIST_ROUTE.to_string(),
            notification: Some(self.literals.get(key).to_string()),
        }
    }

    /// Ask to delete; only meaningful in edit mode.
    pub fn request_remove(&mut self) {
        if self.mode == FormMode::Edit {
            self.confirming_delete = true;
        }
    }

    /// Close the confirmation modal without deleting.
    pub fn dismiss_modal(&mut self) {
        self.confirming_delete = false;
    }

    /// Confirmed delete: issue the call and navigate with the record's name
    /// folded into the notification.
    pub async fn confirm_remove(&mut self, api: &ApiClient) -> Result<Navigation, ClientError> {
        let id = self.id.ok_or(ClientError::NotFound)?;
        self.confirming_delete = false;
        api.delete_rendezvous(id).await?;
        Ok(self.removal_navigation())
    }

    fn removal_navigation(&self) -> Navigation {
        Navigation {
            route: LIST_ROUTE.to_string(),
            notification: Some(
                self.literals
                    .format("excludedMessage", &[&self.record.name]),
            ),
        }
    }

    /// Leaving a dirty form needs confirmation; a clean one navigates
    /// straight back to the list.
    pub fn request_leave(&self) -> LeaveOutcome {
        if self.dirty {
            LeaveOutcome::ConfirmDiscard
        } else {
            LeaveOutcome::Navigate(self.leave())
        }
    }

    /// Confirmed leave: discard edits, no notification.
    pub fn leave(&self) -> Navigation {
        Navigation {
            route: LIST_ROUTE.to_string(),
            notification: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literals() -> Literals {
        Literals::from_entries(
            [
                ("minLength", "Enter at least {0} characters"),
                ("emptyInput", "This field must not be blank"),
                ("createdMessage", "Appointment created"),
                ("updatedMessage", "Appointment updated"),
                ("excludedMessage", "Appointment for {0} removed"),
            ]
            .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    fn existing() -> Rendezvous {
        Rendezvous {
            id: 7,
            name: "Dupont".to_string(),
            prenom: "Marie".to_string(),
            mail: "marie.dupont@example.com".to_string(),
            numero: 612345678,
            adresse: "12 rue des Lilas".to_string(),
            code: 75011,
            ville: "Paris".to_string(),
            domaine: "vidange".to_string(),
        }
    }

    #[test]
    fn create_mode_starts_empty_and_clean() {
        let form = RendezvousForm::new(literals());
        assert_eq!(form.mode(), FormMode::Create);
        assert!(!form.is_dirty());
        assert!(form.record().name.is_empty());
        assert!(!form.is_valid());
    }

    #[test]
    fn edit_mode_is_populated() {
        let form = RendezvousForm::edit(literals(), existing());
        assert_eq!(form.mode(), FormMode::Edit);
        assert_eq!(form.record().name, "Dupont");
        assert!(form.is_valid());
        assert!(!form.is_dirty());
    }

    #[test]
    fn name_validation_messages() {
        let mut form = RendezvousForm::new(literals());

        form.set_name("ab");
        assert_eq!(form.name_error(), Some("Enter at least 3 characters"));
        assert!(!form.is_valid());

        form.set_name("    ");
        assert_eq!(form.name_error(), Some("This field must not be blank"));

        form.set_name(&"x".repeat(51));
        assert_eq!(form.name_error(), Some("This field must not be blank"));

        form.set_name("Dupont");
        assert_eq!(form.name_error(), None);
        assert!(form.is_valid());
    }

    #[test]
    fn actions_depend_on_mode_and_validity() {
        let mut form = RendezvousForm::new(literals());
        assert_eq!(
            form.actions(),
            vec![ViewAction::Save { enabled: false }, ViewAction::Return]
        );

        form.set_name("Dupont");
        assert_eq!(
            form.actions(),
            vec![ViewAction::Save { enabled: true }, ViewAction::Return]
        );

        let form = RendezvousForm::edit(literals(), existing());
        assert_eq!(
            form.actions(),
            vec![
                ViewAction::Save { enabled: true },
                ViewAction::Remove,
                ViewAction::Return
            ]
        );
    }

    #[test]
    fn dirty_form_needs_leave_confirmation() {
        let mut form = RendezvousForm::edit(literals(), existing());
        assert_eq!(
            form.request_leave(),
            LeaveOutcome::Navigate(Navigation {
                route: LIST_ROUTE.to_string(),
                notification: None,
            })
        );

        form.set_name("Durand");
        assert_eq!(form.request_leave(), LeaveOutcome::ConfirmDiscard);

        // Confirming the discard navigates without submitting.
        assert_eq!(
            form.leave(),
            Navigation {
                route: LIST_ROUTE.to_string(),
                notification: None,
            }
        );
    }

    #[test]
    fn saved_navigation_matches_mode() {
        let form = RendezvousForm::new(literals());
        assert_eq!(
            form.saved_navigation().notification.as_deref(),
            Some("Appointment created")
        );

        let form = RendezvousForm::edit(literals(), existing());
        assert_eq!(
            form.saved_navigation().notification.as_deref(),
            Some("Appointment updated")
        );
        assert_eq!(form.saved_navigation().route, LIST_ROUTE);
    }

    #[test]
    fn removal_notification_carries_the_name() {
        let form = RendezvousForm::edit(literals(), existing());
        assert_eq!(
            form.removal_navigation().notification.as_deref(),
            Some("Appointment for Dupont removed")
        );
    }

    #[test]
    fn delete_confirmation_flow() {
        let mut form = RendezvousForm::new(literals());
        form.request_remove();
        // Nothing to delete in create mode.
        assert!(!form.is_confirming_delete());

        let mut form = RendezvousForm::edit(literals(), existing());
        form.request_remove();
        assert!(form.is_confirming_delete());

        form.dismiss_modal();
        assert!(!form.is_confirming_delete());
    }

    #[test]
    fn touching_the_record_marks_the_form_dirty() {
        let mut form = RendezvousForm::edit(literals(), existing());
        form.record_mut().ville = "Lyon".to_string();
        assert!(form.is_dirty());
    }
}
