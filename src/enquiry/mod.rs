// SPDX-License-Identifier: MPL-2.0
//! Enquiry and contact forms: field state, validation and simulated
//! submission.
//!
//! Submission never leaves the process. An enquiry produces a localized
//! [`quote::Response`]; a contact message produces a `mailto:` URI that is
//! handed to the system mail client.

pub mod contact;
pub mod quote;
pub mod validation;

pub use contact::ContactMessage;
pub use quote::{EnquiryRequest, EnquiryType, ProductInterest, Quote, Response};
pub use validation::{validate, FieldError, Violation};

use crate::config::{CONTACT_SUBMIT_DELAY_MS, ENQUIRY_SUBMIT_DELAY_MS};
use std::collections::BTreeMap;
use std::time::Duration;

/// Text inputs a form may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    EnquiryType,
    ProductInterest,
    Quantity,
    MessageType,
    Message,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::EnquiryType,
        Field::ProductInterest,
        Field::Quantity,
        Field::MessageType,
        Field::Message,
    ];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Field::Name => "form-field-name",
            Field::Email => "form-field-email",
            Field::Phone => "form-field-phone",
            Field::EnquiryType => "form-field-enquiry-type",
            Field::ProductInterest => "form-field-product",
            Field::Quantity => "form-field-quantity",
            Field::MessageType => "form-field-message-type",
            Field::Message => "form-field-message",
        }
    }
}

/// Raw text of each field. Missing fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<Field, String>);

impl FormValues {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        self.0.get(&field).map_or("", String::as_str)
    }

    pub fn set(&mut self, field: Field, value: String) {
        self.0.insert(field, value);
    }

    fn trimmed(&self, field: Field) -> String {
        self.get(field).trim().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Enquiry,
    Contact,
}

impl FormKind {
    #[must_use]
    pub fn fields(self) -> &'static [Field] {
        match self {
            FormKind::Enquiry => &[
                Field::Name,
                Field::Email,
                Field::Phone,
                Field::EnquiryType,
                Field::ProductInterest,
                Field::Quantity,
                Field::Message,
            ],
            FormKind::Contact => &[
                Field::Name,
                Field::Email,
                Field::Phone,
                Field::MessageType,
                Field::Message,
            ],
        }
    }

    #[must_use]
    pub fn required(self) -> &'static [Field] {
        match self {
            FormKind::Enquiry => &[Field::Name, Field::Email, Field::Phone, Field::EnquiryType],
            FormKind::Contact => &[Field::Name, Field::Email, Field::MessageType, Field::Message],
        }
    }

    /// Simulated processing time before the outcome is shown.
    #[must_use]
    pub fn submit_delay(self) -> Duration {
        match self {
            FormKind::Enquiry => Duration::from_millis(ENQUIRY_SUBMIT_DELAY_MS),
            FormKind::Contact => Duration::from_millis(CONTACT_SUBMIT_DELAY_MS),
        }
    }

    #[must_use]
    pub fn progress_key(self) -> &'static str {
        match self {
            FormKind::Enquiry => "form-submitting-enquiry",
            FormKind::Contact => "form-submitting-contact",
        }
    }
}

/// Validated payload handed to the simulated backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Enquiry(EnquiryRequest),
    Contact(ContactMessage),
}

/// What a finished submission produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Enquiry(Response),
    Contact { mailto: String },
}

/// Waits out the simulated processing delay and computes the outcome.
pub async fn submit(submission: Submission, delay: Duration) -> Outcome {
    tokio::time::sleep(delay).await;
    match submission {
        Submission::Enquiry(request) => Outcome::Enquiry(Response::for_request(&request)),
        Submission::Contact(message) => Outcome::Contact {
            mailto: message.mailto_uri(),
        },
    }
}

/// Hands `uri` to the system handler for `mailto:` links.
///
/// Returns whether a mail client was launched.
pub async fn open_mail_client(uri: String) -> bool {
    let result = tokio::task::spawn_blocking(move || open::that(&uri))
        .await
        .map_err(|join_err| std::io::Error::other(join_err.to_string()))
        .and_then(|opened| opened);
    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(%err, "failed to open mail client");
            false
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(Field, String),
    DeliveryToggled(bool),
    Submit,
    Completed(Outcome),
    /// Opens the composed contact message again.
    OpenMailClient,
    MailClientOpened(bool),
    /// Copies the composed `mailto:` link when no mail client opened.
    CopyMailto,
    DismissOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Submit {
        submission: Submission,
        delay: Duration,
    },
    OpenMailClient(String),
    CopyToClipboard(String),
}

#[derive(Debug, Clone)]
pub struct State {
    kind: FormKind,
    values: FormValues,
    delivery: bool,
    errors: Vec<FieldError>,
    submitting: bool,
    outcome: Option<Outcome>,
    mail_client_failed: bool,
}

impl State {
    #[must_use]
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            values: FormValues::default(),
            delivery: false,
            errors: Vec::new(),
            submitting: false,
            outcome: None,
            mail_client_failed: false,
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::FieldChanged(field, value) => {
                self.values.set(field, value);
                Effect::None
            }
            Message::DeliveryToggled(delivery) => {
                self.delivery = delivery;
                Effect::None
            }
            Message::Submit => self.submit(),
            Message::Completed(outcome) => {
                self.submitting = false;
                self.mail_client_failed = false;
                if matches!(outcome, Outcome::Contact { .. }) {
                    self.values = FormValues::default();
                    self.delivery = false;
                }
                self.outcome = Some(outcome);
                self.mailto_effect()
            }
            Message::OpenMailClient => self.mailto_effect(),
            Message::MailClientOpened(opened) => {
                self.mail_client_failed = !opened;
                Effect::None
            }
            Message::CopyMailto => match &self.outcome {
                Some(Outcome::Contact { mailto }) => Effect::CopyToClipboard(mailto.clone()),
                _ => Effect::None,
            },
            Message::DismissOutcome => {
                self.outcome = None;
                self.mail_client_failed = false;
                Effect::None
            }
        }
    }

    fn mailto_effect(&self) -> Effect {
        match &self.outcome {
            Some(Outcome::Contact { mailto }) => Effect::OpenMailClient(mailto.clone()),
            _ => Effect::None,
        }
    }

    fn submit(&mut self) -> Effect {
        if self.submitting {
            return Effect::None;
        }
        self.errors = validate(&self.values, self.kind.required());
        if !self.errors.is_empty() {
            tracing::debug!(errors = self.errors.len(), "form rejected");
            return Effect::None;
        }
        self.submitting = true;
        Effect::Submit {
            submission: self.submission(),
            delay: self.kind.submit_delay(),
        }
    }

    fn submission(&self) -> Submission {
        match self.kind {
            FormKind::Enquiry => Submission::Enquiry(EnquiryRequest {
                enquiry_type: EnquiryType::parse(self.values.get(Field::EnquiryType))
                    .unwrap_or_default(),
                product: ProductInterest::parse(self.values.get(Field::ProductInterest)),
                quantity_kg: self
                    .values
                    .get(Field::Quantity)
                    .trim()
                    .parse::<f64>()
                    .unwrap_or(0.0),
                delivery: self.delivery,
            }),
            FormKind::Contact => Submission::Contact(ContactMessage {
                name: self.values.trimmed(Field::Name),
                email: self.values.trimmed(Field::Email),
                phone: self.values.trimmed(Field::Phone),
                message_type: self.values.trimmed(Field::MessageType),
                message: self.values.trimmed(Field::Message),
            }),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    #[must_use]
    pub fn delivery(&self) -> bool {
        self.delivery
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// First error reported for `field`, if any.
    #[must_use]
    pub fn error_for(&self, field: Field) -> Option<Violation> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.violation)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Whether the last attempt to open the mail client failed.
    #[must_use]
    pub fn mail_client_failed(&self) -> bool {
        self.mail_client_failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(state: &mut State, pairs: &[(Field, &str)]) {
        for (field, value) in pairs {
            state.handle(Message::FieldChanged(*field, (*value).to_string()));
        }
    }

    #[test]
    fn invalid_form_does_not_submit() {
        let mut state = State::new(FormKind::Enquiry);
        fill(&mut state, &[(Field::Name, "Sipho")]);
        assert_eq!(state.handle(Message::Submit), Effect::None);
        assert!(!state.is_submitting());
        assert_eq!(state.error_for(Field::Email), Some(Violation::Required));
        assert_eq!(state.error_for(Field::Name), None);
    }

    #[test]
    fn valid_enquiry_submits_once() {
        let mut state = State::new(FormKind::Enquiry);
        fill(
            &mut state,
            &[
                (Field::Name, "Sipho"),
                (Field::Email, "sipho@example.com"),
                (Field::Phone, "0761234567"),
                (Field::EnquiryType, "order"),
                (Field::ProductInterest, "pork"),
                (Field::Quantity, "3"),
            ],
        );
        state.handle(Message::DeliveryToggled(true));

        let effect = state.handle(Message::Submit);
        let Effect::Submit { submission, delay } = effect else {
            panic!("expected a submission");
        };
        assert_eq!(delay, Duration::from_millis(2000));
        assert_eq!(
            submission,
            Submission::Enquiry(EnquiryRequest {
                enquiry_type: EnquiryType::Order,
                product: ProductInterest::Cut(crate::catalog::Category::Pork),
                quantity_kg: 3.0,
                delivery: true,
            })
        );
        assert!(state.is_submitting());
        assert_eq!(state.handle(Message::Submit), Effect::None);
    }

    #[test]
    fn errors_clear_on_successful_revalidation() {
        let mut state = State::new(FormKind::Contact);
        state.handle(Message::Submit);
        assert!(!state.errors().is_empty());

        fill(
            &mut state,
            &[
                (Field::Name, "Naledi"),
                (Field::Email, "naledi@example.com"),
                (Field::MessageType, "general"),
                (Field::Message, "Do you stock goat shoulder?"),
            ],
        );
        assert!(matches!(state.handle(Message::Submit), Effect::Submit { .. }));
        assert!(state.errors().is_empty());
    }

    #[test]
    fn completed_contact_resets_form() {
        let mut state = State::new(FormKind::Contact);
        fill(&mut state, &[(Field::Name, "Naledi")]);
        let effect = state.handle(Message::Completed(Outcome::Contact {
            mailto: "mailto:info@meatmasters.co.za".to_string(),
        }));
        assert_eq!(
            effect,
            Effect::OpenMailClient("mailto:info@meatmasters.co.za".to_string())
        );
        assert_eq!(state.value(Field::Name), "");
        assert!(!state.is_submitting());
        assert!(state.outcome().is_some());

        state.handle(Message::DismissOutcome);
        assert!(state.outcome().is_none());
    }

    #[test]
    fn completed_enquiry_keeps_values() {
        let mut state = State::new(FormKind::Enquiry);
        fill(&mut state, &[(Field::Name, "Sipho")]);
        let effect = state.handle(Message::Completed(Outcome::Enquiry(Response::Volunteer)));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.value(Field::Name), "Sipho");
        assert_eq!(state.handle(Message::OpenMailClient), Effect::None);
    }

    #[test]
    fn failed_mail_client_can_be_retried() {
        let mut state = State::new(FormKind::Contact);
        let mailto = "mailto:info@meatmasters.co.za?subject=Hi".to_string();
        state.handle(Message::Completed(Outcome::Contact {
            mailto: mailto.clone(),
        }));
        state.handle(Message::MailClientOpened(false));
        assert!(state.mail_client_failed());

        assert_eq!(
            state.handle(Message::OpenMailClient),
            Effect::OpenMailClient(mailto)
        );
        assert_eq!(
            state.handle(Message::CopyMailto),
            Effect::CopyToClipboard("mailto:info@meatmasters.co.za?subject=Hi".to_string())
        );
        state.handle(Message::MailClientOpened(true));
        assert!(!state.mail_client_failed());

        state.handle(Message::MailClientOpened(false));
        state.handle(Message::DismissOutcome);
        assert!(!state.mail_client_failed());
    }

    #[tokio::test]
    async fn simulated_submission_produces_outcome() {
        let outcome = submit(
            Submission::Contact(ContactMessage {
                message_type: "order".to_string(),
                ..ContactMessage::default()
            }),
            Duration::from_millis(1),
        )
        .await;
        let Outcome::Contact { mailto } = outcome else {
            panic!("expected a mailto outcome");
        };
        assert!(mailto.contains("MeatMasters%20Contact%3A%20Order"));
    }
}
