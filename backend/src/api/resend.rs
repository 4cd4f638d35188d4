use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::handlers::contact_dtos::Contact;

pub const WAITLIST_SUBJECT: &str = "New Waitlist Registration + FREE Ebook - Nousu Collective";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("email provider rejected the message with status {status}")]
    Rejected { status: u16, details: Value },
    #[error("could not reach email provider: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Body of Resend's `POST /emails`.
#[derive(Debug, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
    pub html: String,
    pub reply_to: String,
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn compose_waitlist_email(contact: &Contact<'_>, from: &str, to: &str) -> OutgoingEmail {
    let job_title = contact.job_title.unwrap_or("Not specified");
    let message = contact.message.unwrap_or("No additional message");

    let text = [
        "New Waitlist Registration:".to_string(),
        String::new(),
        format!("Name: {}", contact.name),
        format!("Company: {}", contact.company),
        format!("Email: {}", contact.email),
        format!("Job Title: {}", job_title),
        format!("Message: {}", message),
        String::new(),
        "Please send the FREE Ultimate Outbound Sales Guide (40-page ebook).".to_string(),
    ]
    .join("\n");

    let html = format!(
        "<div>\n  <h2>New Waitlist Registration</h2>\n  <p><b>Name:</b> {}</p>\n  <p><b>Company:</b> {}</p>\n  <p><b>Email:</b> {}</p>\n  <p><b>Job Title:</b> {}</p>\n  <p><b>Message:</b> {}</p>\n</div>",
        escape_html(contact.name),
        escape_html(contact.company),
        escape_html(contact.email),
        escape_html(job_title),
        escape_html(message),
    );

    OutgoingEmail {
        from: from.to_string(),
        to: vec![to.to_string()],
        subject: WAITLIST_SUBJECT.to_string(),
        text,
        html,
        reply_to: contact.email.to_string(),
    }
}

/// Sends `email` and returns the provider's message id, if it gave one.
pub async fn send_email(
    client: &Client,
    api_url: &str,
    api_key: &str,
    email: &OutgoingEmail,
) -> Result<Option<String>, MailError> {
    let response = client
        .post(format!("{}/emails", api_url.trim_end_matches('/')))
        .bearer_auth(api_key)
        .json(email)
        .send()
        .await?;

    let status = response.status();
    // Error bodies are passed back to the caller, a non-JSON one becomes {}.
    let payload: Value = response.json().await.unwrap_or_else(|_| json!({}));

    if !status.is_success() {
        return Err(MailError::Rejected {
            status: status.as_u16(),
            details: payload,
        });
    }

    Ok(payload
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string))
}
