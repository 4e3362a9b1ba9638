/// Outbound email over SMTP
///
/// [`Mailer`] wraps the `lettre` async SMTP transport to send the two
/// quote-notification emails: an alert to the office inbox and a
/// confirmation to the customer. Message bodies are assembled by pure
/// template functions so their content can be tested without a relay.

use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{info, warn};

use crate::config::Config;

/// Error type for email delivery failures
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, etc.)
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled
    #[error("Email build error: {0}")]
    Build(String),
}

/// The lead fields the notification templates render
#[derive(Debug, Clone)]
pub struct LeadDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub move_date: Option<String>,
    pub origin: String,
    pub destination: String,
    pub home_size: Option<String>,
    pub message: Option<String>,
}

/// Sends quote-notification emails via SMTP
#[derive(Debug, Clone)]
pub struct Mailer {
    smtp_host: String,
    smtp_port: u16,
    smtp_user: Option<String>,
    smtp_password: Option<String>,
    from_address: String,
    admin_email: String,
}

impl Mailer {
    /// Builds a mailer from the application configuration
    ///
    /// Returns `None` when no SMTP host is configured, signalling that
    /// outbound email is disabled.
    pub fn from_config(config: &Config) -> Option<Self> {
        let smtp_host = config.smtp_host.clone()?;
        Some(Self {
            smtp_host,
            smtp_port: config.smtp_port,
            smtp_user: config.smtp_user.clone(),
            smtp_password: config.smtp_password.clone(),
            from_address: config.smtp_from.clone(),
            admin_email: config.admin_email.clone(),
        })
    }

    /// Sends one plain-text email
    pub async fn send(&self, to: &str, subject: String, body: String) -> Result<(), MailError> {
        let email = Message::builder()
            .from(self.from_address.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| MailError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.smtp_host)?
                .port(self.smtp_port);

        if let (Some(user), Some(pass)) = (&self.smtp_user, &self.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        info!(to = to, "Notification email sent");
        Ok(())
    }

    /// Sends the admin alert and the customer confirmation for a lead
    ///
    /// Failures are logged and reported per recipient rather than aborting
    /// the pair; one email going through is still worth something.
    ///
    /// ### Returns
    ///
    /// `(admin_sent, customer_sent)`
    pub async fn send_quote_notifications(&self, lead: &LeadDetails) -> (bool, bool) {
        let (subject, body) = admin_notification(lead);
        let admin_sent = match self.send(&self.admin_email, subject, body).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to send admin notification: {}", e);
                false
            }
        };

        let (subject, body) = customer_confirmation(lead);
        let customer_sent = match self.send(&lead.email, subject, body).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to send customer confirmation: {}", e);
                false
            }
        };

        (admin_sent, customer_sent)
    }
}

/// Renders the subject and body of the office alert email
pub fn admin_notification(lead: &LeadDetails) -> (String, String) {
    let subject = format!("New quote request from {}", lead.name);

    let mut body = String::new();
    body.push_str(&format!("Name: {}\n", lead.name));
    body.push_str(&format!("Email: {}\n", lead.email));
    body.push_str(&format!("Phone: {}\n", lead.phone));
    if let Some(move_date) = &lead.move_date {
        body.push_str(&format!("Move date: {}\n", move_date));
    }
    body.push_str(&format!("From: {}\n", lead.origin));
    body.push_str(&format!("To: {}\n", lead.destination));
    if let Some(home_size) = &lead.home_size {
        body.push_str(&format!("Size: {}\n", home_size));
    }
    if let Some(message) = &lead.message {
        body.push_str(&format!("\nMessage:\n{}\n", message));
    }

    (subject, body)
}

/// Renders the subject and body of the customer confirmation email
pub fn customer_confirmation(lead: &LeadDetails) -> (String, String) {
    let subject = "We received your quote request".to_string();

    let body = format!(
        "Hi {},\n\n\
         Thanks for reaching out. We received your request for a move from {} to {} \
         and will get back to you with an estimate within one business day.\n\n\
         If anything changes in the meantime, just reply to this email.\n\n\
         - The moving team",
        lead.name, lead.origin, lead.destination
    );

    (subject, body)
}
