use thiserror::Error;
use udk_client::{ClientError, UsersClient};
use udk_core::validation::{self, Field, FieldError, FieldErrors};
use udk_core::{Company, Mutation, User, UserDraft};

/// Whether the dialog creates a new record or edits an existing one
#[derive(Debug, Clone)]
pub enum FormMode {
    /// Blank form for a new record
    Create,
    /// Form prefilled from an existing record
    Edit(User),
}

/// Why a submission did not go through
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Client-side validation failed; no network call was issued
    #[error("{0}")]
    Invalid(FieldErrors),
    /// The remote call failed; local state is left untouched
    #[error(transparent)]
    Remote(#[from] ClientError),
}

/// The create/edit form dialog
#[derive(Debug)]
pub struct UserForm {
    mode: FormMode,
    draft: UserDraft,
    errors: FieldErrors,
}

impl UserForm {
    /// Blank form for a new record. The username starts as the `USER-` prefix
    /// hint.
    pub fn create() -> Self {
        let draft = UserDraft {
            username: "USER-".to_string(),
            ..UserDraft::default()
        };
        Self {
            mode: FormMode::Create,
            draft,
            errors: FieldErrors::default(),
        }
    }

    /// Form prefilled from an existing record. Its username is immutable.
    pub fn edit(user: &User) -> Self {
        Self {
            mode: FormMode::Edit(user.clone()),
            draft: UserDraft::from_user(user),
            errors: FieldErrors::default(),
        }
    }

    /// True in edit mode.
    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// The draft as currently filled in.
    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    /// Errors recorded by the last full validation pass.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether a field accepts input in this mode. The username is read-only
    /// once a record exists.
    pub fn is_editable(&self, field: Field) -> bool {
        !(self.is_edit() && field == Field::Username)
    }

    /// Current value of a field, for prompt prefills.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.draft.name,
            Field::Email => &self.draft.email,
            Field::Phone => &self.draft.phone,
            Field::Username => &self.draft.username,
            Field::Street => &self.draft.address.street,
            Field::City => &self.draft.address.city,
            Field::Company => self.draft.company.as_ref().map_or("", |c| c.name.as_str()),
            Field::Website => self.draft.website.as_deref().unwrap_or(""),
        }
    }

    /// Set a field from raw input. Blank input clears optional fields.
    /// Ignored for read-only fields.
    pub fn set(&mut self, field: Field, input: &str) {
        if !self.is_editable(field) {
            return;
        }
        let value = input.trim().to_string();
        match field {
            Field::Name => self.draft.name = value,
            Field::Email => self.draft.email = value,
            Field::Phone => self.draft.phone = value,
            Field::Username => self.draft.username = value,
            Field::Street => self.draft.address.street = value,
            Field::City => self.draft.address.city = value,
            Field::Company => {
                self.draft.company = if value.is_empty() {
                    None
                } else {
                    Some(Company { name: value })
                };
            }
            Field::Website => {
                self.draft.website = if value.is_empty() { None } else { Some(value) };
            }
        }
    }

    /// Per-field validation, as on blur.
    pub fn blur(&self, field: Field) -> Result<(), FieldError> {
        validation::validate_field(&self.draft, field)
    }

    /// Validate the whole draft; failures are remembered for rendering.
    pub fn validate(&mut self) -> Result<(), FieldErrors> {
        match validation::validate_draft(&self.draft) {
            Ok(()) => {
                self.errors = FieldErrors::default();
                Ok(())
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Validate, then submit to the remote service.
    ///
    /// A validation failure blocks the submission before any network call.
    /// On success, the returned mutation is ready for the record store; the
    /// store itself is untouched here, so a remote failure leaves prior state
    /// unchanged.
    pub async fn submit(&mut self, client: &UsersClient) -> Result<Mutation, SubmitError> {
        self.validate().map_err(SubmitError::Invalid)?;

        match &self.mode {
            FormMode::Create => {
                let receipt = client.create(&self.draft).await?;
                Ok(Mutation::Create {
                    draft: self.draft.clone(),
                    receipt,
                })
            }
            FormMode::Edit(user) => {
                let record = client.update(user.id, &self.draft).await?;
                Ok(Mutation::Update { record })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use udk_core::Address;

    fn existing_user() -> User {
        User {
            id: 2,
            name: "Jane Smith".to_string(),
            username: "jane_smith".to_string(),
            email: "jane.smith@example.com".to_string(),
            phone: "555-0100".to_string(),
            website: None,
            address: Address {
                street: "Main St".to_string(),
                city: "Springfield".to_string(),
            },
            company: None,
        }
    }

    #[test]
    fn test_create_form_prefills_username_hint() {
        let form = UserForm::create();
        assert!(!form.is_edit());
        assert_eq!(form.value(Field::Username), "USER-");
        assert_eq!(form.value(Field::Name), "");
    }

    #[test]
    fn test_edit_form_prefills_from_record() {
        let form = UserForm::edit(&existing_user());
        assert!(form.is_edit());
        assert_eq!(form.value(Field::Name), "Jane Smith");
        assert_eq!(form.value(Field::City), "Springfield");
    }

    #[test]
    fn test_username_is_immutable_in_edit_mode() {
        let mut form = UserForm::edit(&existing_user());
        assert!(!form.is_editable(Field::Username));

        form.set(Field::Username, "someone_else");
        assert_eq!(form.value(Field::Username), "jane_smith");

        // Everything else stays editable
        assert!(form.is_editable(Field::Name));
        form.set(Field::Name, "Jane Q Smith");
        assert_eq!(form.value(Field::Name), "Jane Q Smith");
    }

    #[test]
    fn test_blank_input_clears_optional_fields() {
        let mut form = UserForm::edit(&existing_user());

        form.set(Field::Website, "https://example.com");
        assert_eq!(form.draft().website.as_deref(), Some("https://example.com"));

        form.set(Field::Website, "  ");
        assert!(form.draft().website.is_none());

        form.set(Field::Company, "Acme Corp");
        assert_eq!(form.draft().company.as_ref().unwrap().name, "Acme Corp");
        form.set(Field::Company, "");
        assert!(form.draft().company.is_none());
    }

    #[test]
    fn test_blur_reports_field_level_failures() {
        let mut form = UserForm::create();
        form.set(Field::Email, "not-an-email");

        let err = form.blur(Field::Email).unwrap_err();
        assert_eq!(err.message, "Invalid email format.");

        form.set(Field::Email, "ok@example.com");
        assert!(form.blur(Field::Email).is_ok());
    }

    #[test]
    fn test_validate_records_errors_for_rendering() {
        let mut form = UserForm::create();
        assert!(form.validate().is_err());
        assert!(form.errors().get(Field::Name).is_some());

        // A later clean pass clears them
        form.set(Field::Name, "Jane Smith");
        form.set(Field::Username, "USER-JANE");
        form.set(Field::Email, "jane@example.com");
        form.set(Field::Phone, "555-0100");
        form.set(Field::Street, "Main St");
        form.set(Field::City, "Springfield");
        assert!(form.validate().is_ok());
        assert!(form.errors().is_empty());
    }
}
