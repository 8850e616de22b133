//! Contact form controller: field values, validation errors and the
//! Editing -> Submitting -> Submitted lifecycle.
//!
//! The controller never talks to the network itself. `submit` hands back the
//! payload to deliver and `complete` takes the delivery result, so the view
//! decides how the send is driven and can drop it on teardown.

use log::{info, warn};

use super::delivery::{Ack, ContactPayload, DeliveryError};
use super::validation::{validate, CheckedField, ContactFields, Field, FieldError, FieldErrors};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionPhase {
    Editing,
    Submitting,
    Submitted,
}

/// Why `submit` did not start a delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    Invalid(FieldErrors),
    InFlight,
    AlreadySent,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    fields: ContactFields,
    errors: FieldErrors,
    phase: SubmissionPhase,
    delivery_error: Option<DeliveryError>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            errors: FieldErrors::new(),
            phase: SubmissionPhase::Editing,
            delivery_error: None,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        let checked = CheckedField::of(field)?;
        self.errors.get(&checked).copied()
    }

    /// Swedish text for the field's current error, if any.
    pub fn error_message(&self, field: Field) -> Option<&'static str> {
        let checked = CheckedField::of(field)?;
        self.errors.get(&checked).map(|error| error.message(checked))
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn delivery_error(&self) -> Option<&DeliveryError> {
        self.delivery_error.as_ref()
    }

    /// Updates a field and clears its error until the next submit attempt.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
        if let Some(checked) = CheckedField::of(field) {
            self.errors.remove(&checked);
        }
    }

    pub fn validate(&self) -> FieldErrors {
        validate(&self.fields)
    }

    /// Validates and, if clean, moves to Submitting and returns the payload
    /// to deliver. At most one submission is in flight per form.
    pub fn submit(&mut self) -> Result<ContactPayload, SubmitBlocked> {
        match self.phase {
            SubmissionPhase::Submitting => return Err(SubmitBlocked::InFlight),
            SubmissionPhase::Submitted => return Err(SubmitBlocked::AlreadySent),
            SubmissionPhase::Editing => {}
        }

        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(SubmitBlocked::Invalid(errors));
        }

        self.errors.clear();
        self.delivery_error = None;
        self.phase = SubmissionPhase::Submitting;
        Ok(ContactPayload::from_fields(&self.fields))
    }

    /// Applies the delivery result. Ignored unless a submission is in flight.
    pub fn complete(&mut self, result: Result<Ack, DeliveryError>) {
        if self.phase != SubmissionPhase::Submitting {
            return;
        }
        match result {
            Ok(ack) => {
                info!("Contact message delivered: {}", ack.message);
                self.phase = SubmissionPhase::Submitted;
            }
            Err(e) => {
                warn!("Contact message not delivered: {}", e);
                if let DeliveryError::Invalid(errors) = &e {
                    self.errors = errors.clone();
                }
                self.delivery_error = Some(e);
                self.phase = SubmissionPhase::Editing;
            }
        }
    }

    /// Clears everything for a new message.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::contact::delivery::testing::RecordingDelivery;
    use crate::contact::delivery::MessageDelivery;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, name.to_string());
        form.set_field(Field::Email, email.to_string());
        form.set_field(Field::Message, message.to_string());
        form
    }

    fn send(form: &mut ContactForm, delivery: &RecordingDelivery) -> Result<(), SubmitBlocked> {
        let payload = form.submit()?;
        assert_eq!(form.phase(), SubmissionPhase::Submitting);
        let result = block_on(delivery.deliver(payload));
        form.complete(result);
        Ok(())
    }

    #[test]
    fn valid_form_goes_through_to_submitted() {
        let delivery = RecordingDelivery::succeeding();
        let mut form = filled("A", "a@b.com", "this is long enough");
        assert!(form.validate().is_empty());

        send(&mut form, &delivery).unwrap();

        assert_eq!(form.phase(), SubmissionPhase::Submitted);
        assert_eq!(delivery.calls(), 1);
        assert_eq!(delivery.sent.borrow()[0].message, "this is long enough");
    }

    #[test]
    fn invalid_form_stays_editing_and_keeps_errors() {
        let delivery = RecordingDelivery::succeeding();
        let mut form = filled("", "not-an-email", "short");

        let blocked = send(&mut form, &delivery).unwrap_err();

        match blocked {
            SubmitBlocked::Invalid(errors) => assert_eq!(errors.len(), 3),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(form.phase(), SubmissionPhase::Editing);
        assert_eq!(form.error(Field::Email), Some(FieldError::InvalidFormat));
        assert_eq!(form.error(Field::Message), Some(FieldError::TooShort));
        assert_eq!(delivery.calls(), 0);
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form = ContactForm::new();
        assert!(form.submit().is_err());
        assert_eq!(form.errors().len(), 3);

        form.set_field(Field::Name, "x".to_string());
        assert_eq!(form.error(Field::Name), None);
        assert_eq!(form.error(Field::Email), Some(FieldError::Required));

        // not re-validated until the next attempt
        form.set_field(Field::Email, "still-wrong".to_string());
        assert_eq!(form.error(Field::Email), None);
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let delivery = RecordingDelivery::succeeding();
        let mut form = filled("A", "a@b.com", "this is long enough");

        let payload = form.submit().unwrap();
        assert_eq!(form.submit(), Err(SubmitBlocked::InFlight));
        assert_eq!(form.phase(), SubmissionPhase::Submitting);

        form.complete(block_on(delivery.deliver(payload)));
        assert_eq!(delivery.calls(), 1);
        assert_eq!(form.submit(), Err(SubmitBlocked::AlreadySent));
    }

    #[test]
    fn reset_after_submitted_returns_to_empty_editing() {
        let delivery = RecordingDelivery::succeeding();
        let mut form = filled("A", "a@b.com", "this is long enough");
        form.set_field(Field::Company, "PärlMat AB".to_string());
        send(&mut form, &delivery).unwrap();

        form.reset();

        assert_eq!(form.phase(), SubmissionPhase::Editing);
        for field in Field::ALL {
            assert_eq!(form.field(field), "");
        }
        assert!(form.errors().is_empty());
        assert!(form.delivery_error().is_none());
    }

    #[test]
    fn failed_delivery_returns_to_editing_with_fields_kept() {
        let delivery = RecordingDelivery::answering(Err(DeliveryError::Timeout));
        let mut form = filled("A", "a@b.com", "this is long enough");

        send(&mut form, &delivery).unwrap();

        assert_eq!(form.phase(), SubmissionPhase::Editing);
        assert_eq!(form.delivery_error(), Some(&DeliveryError::Timeout));
        assert_eq!(form.field(Field::Name), "A");

        // retry clears the previous failure
        let retry = RecordingDelivery::succeeding();
        send(&mut form, &retry).unwrap();
        assert_eq!(form.phase(), SubmissionPhase::Submitted);
        assert!(form.delivery_error().is_none());
    }

    #[test]
    fn late_result_after_reset_is_ignored() {
        let mut form = filled("A", "a@b.com", "this is long enough");
        form.submit().unwrap();
        form.complete(Ok(Ack { message: "ok".to_string() }));
        form.reset();

        form.complete(Err(DeliveryError::Aborted));
        assert_eq!(form.phase(), SubmissionPhase::Editing);
        assert!(form.delivery_error().is_none());
    }

    #[test]
    fn backend_field_errors_show_inline() {
        let mut server_errors = FieldErrors::new();
        server_errors.insert(CheckedField::Email, FieldError::InvalidFormat);
        let delivery = RecordingDelivery::answering(Err(DeliveryError::Invalid(server_errors)));
        let mut form = filled("A", "a@b.com", "this is long enough");

        send(&mut form, &delivery).unwrap();

        assert_eq!(form.phase(), SubmissionPhase::Editing);
        assert_eq!(form.error(Field::Email), Some(FieldError::InvalidFormat));
        assert_eq!(
            form.error_message(Field::Email),
            Some("Vänligen ange en giltig e-postadress")
        );
        assert_eq!(form.error_message(Field::Company), None);
    }
}
