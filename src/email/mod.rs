//! Transactional email delivery through Brevo.

pub mod brevo;

pub use brevo::{
    BrevoClient, ContactAttributes, CreateContactRequest, EmailRecipient, SmtpEmailRequest,
    TemplateParams,
};
