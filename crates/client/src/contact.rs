//! Contact form state: fields, submit flag and the message shown afterwards.

use common::rpc::Procedure;
use service::inputs::CreateContactSubmissionInput;
use service::resource::ContactSubmission;
use tracing::{error, info};

use crate::rpc::RpcClient;

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
pub const FAILURE_MESSAGE: &str = "Sorry, there was an error sending your message. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    submitting: bool,
    status_message: String,
}

impl ContactForm {
    /// A filled-in form that has not been submitted yet.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: phone.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn is_submitting(&self) -> bool { self.submitting }

    /// Empty until a submission finishes.
    pub fn status_message(&self) -> &str { &self.status_message }

    pub fn button_label(&self) -> &'static str {
        if self.submitting { "Sending..." } else { "Submit" }
    }

    fn input(&self) -> CreateContactSubmissionInput {
        CreateContactSubmissionInput {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
        }
    }

    fn clear_fields(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.email.clear();
        self.phone.clear();
        self.message.clear();
    }

    /// Send the form once. On success the fields are cleared; on failure they
    /// are kept so the visitor can retry. Returns the stored submission, if any.
    pub async fn submit(&mut self, client: &RpcClient) -> Option<ContactSubmission> {
        self.submitting = true;
        self.status_message.clear();

        let result = client
            .mutate::<_, ContactSubmission>(Procedure::CreateContactSubmission, &self.input())
            .await;

        let stored = match result {
            Ok(submission) => {
                info!(id = submission.id, "contact submission sent");
                self.status_message = SUCCESS_MESSAGE.to_string();
                self.clear_fields();
                Some(submission)
            }
            Err(e) => {
                error!(error = %e, "failed to submit contact form");
                self.status_message = FAILURE_MESSAGE.to_string();
                None
            }
        };
        self.submitting = false;
        stored
    }
}
