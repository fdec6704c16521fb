//! Contact-form email templates.
//!
//! Two emails leave for every accepted submission: an admin
//! notification carrying the submitted details, and an auto-reply
//! acknowledging the sender. Both render branded HTML with a plain-text
//! alternative.

use crate::OutboundEmail;
use chrono::Utc;
use serde::Deserialize;

/// One contact-form submission, as posted by the site.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Notification to the site owner about a new submission.
pub fn admin_notification(submission: &ContactSubmission, admin_email: &str) -> OutboundEmail {
    let now = Utc::now();
    let received = now.format("%A, %B %-d, %Y at %H:%M UTC");
    let year = now.format("%Y");

    let html_body = format!(
        r#"<html>
<head><meta charset="UTF-8"></head>
<body style="margin: 0; padding: 40px 20px; background-color: #ffffff; font-family: Arial, sans-serif;">
  <div style="max-width: 600px; margin: 0 auto;">
    <p style="color: #000000; font-size: 14px; line-height: 1.6;">Dear Admin,</p>
    <p style="color: #000000; font-size: 14px; line-height: 1.6;">
      You have received a new contact form submission from your website. Below are the details:
    </p>
    <p style="color: #000000; font-size: 14px;"><strong>Name:</strong> {name}</p>
    <p style="color: #000000; font-size: 14px;"><strong>Email:</strong>
      <a href="mailto:{email}" style="color: #6A2FE8; text-decoration: none;">{email}</a></p>
    <p style="color: #000000; font-size: 14px;"><strong>Phone:</strong>
      <a href="tel:{phone}" style="color: #6A2FE8; text-decoration: none;">{phone}</a></p>
    <p style="color: #000000; font-size: 14px;"><strong>Message:</strong></p>
    <p style="color: #000000; font-size: 14px; white-space: pre-wrap;">{message}</p>
    <p style="color: #000000; font-size: 14px;">Please respond to this inquiry at your earliest convenience.</p>
    <p style="color: #000000; font-size: 14px;">Best regards,<br>Veltrix Labs</p>
    <p style="color: #666666; font-size: 12px;">Received on {received}</p>
  </div>
</body>
</html>"#,
        name = submission.name,
        email = submission.email,
        phone = submission.phone,
        message = submission.message,
        received = received,
    );

    let text_body = format!(
        "NEW CONTACT FORM SUBMISSION\n\
         \n\
         Contact Details:\n\
         Name: {name}\n\
         Email: {email}\n\
         Phone: {phone}\n\
         \n\
         Message:\n\
         {message}\n\
         \n\
         Received on: {received}\n\
         \n\
         Veltrix Labs Contact Form\n\
         (c) {year} Veltrix Labs. All rights reserved.\n",
        name = submission.name,
        email = submission.email,
        phone = submission.phone,
        message = submission.message,
        received = received,
        year = year,
    );

    OutboundEmail {
        to: admin_email.to_string(),
        to_name: String::new(),
        subject: format!("New Contact Form Submission from {}", submission.name),
        html_body,
        text_body,
    }
}

/// Acknowledgement sent back to the person who submitted the form.
pub fn user_auto_reply(submission: &ContactSubmission) -> OutboundEmail {
    let contact = veltrix_content::site_data().contact;
    let year = Utc::now().format("%Y");

    let html_body = format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="UTF-8"></head>
<body style="margin: 0; padding: 40px 20px; background-color: #ffffff; font-family: Arial, sans-serif;">
  <div style="max-width: 600px; margin: 0 auto;">
    <p style="color: #000000; font-size: 14px; line-height: 1.6;">Dear {name},</p>
    <p style="color: #000000; font-size: 14px; line-height: 1.6;">
      Thank you for reaching out to us! We have received your message and we're excited to connect with you.
    </p>
    <p style="color: #000000; font-size: 14px; line-height: 1.6;">
      Our team will review your inquiry and get back to you within 24 hours. In the meantime,
      feel free to explore our services and discover how we can transform your business with
      practical AI solutions.
    </p>
    <p style="color: #000000; font-size: 14px;"><strong>Your Submission Details:</strong></p>
    <p style="color: #000000; font-size: 14px;">Name: {name}<br>Email: {email}<br>Phone: {phone}</p>
    <p style="color: #000000; font-size: 14px;">
      If you have any urgent questions, please reply to this email or call us at
      <a href="tel:{company_phone}" style="color: #6A2FE8; text-decoration: none;">{company_phone}</a>.
    </p>
    <p style="color: #000000; font-size: 14px;">Best regards,<br>Veltrix Labs<br>{address}</p>
    <p style="color: #666666; font-size: 12px;">(c) {year} Veltrix Labs. All rights reserved.</p>
  </div>
</body>
</html>"#,
        name = submission.name,
        email = submission.email,
        phone = submission.phone,
        company_phone = contact.phone,
        address = contact.address,
        year = year,
    );

    let text_body = format!(
        "Hi {name}!\n\
         \n\
         Thank you for reaching out to Veltrix Labs!\n\
         \n\
         We've received your message and we're excited to connect with you. Our team will \
         get back to you within 24 hours.\n\
         \n\
         Your Submission Details:\n\
         - Name: {name}\n\
         - Email: {email}\n\
         - Phone: {phone}\n\
         \n\
         Have questions? Reply to this email or call us at {company_phone}\n\
         \n\
         Best regards,\n\
         Veltrix Labs Team\n\
         {address}\n\
         \n\
         (c) {year} Veltrix Labs. All rights reserved.\n",
        name = submission.name,
        email = submission.email,
        phone = submission.phone,
        company_phone = contact.phone,
        address = contact.address,
        year = year,
    );

    OutboundEmail {
        to: submission.email.clone(),
        to_name: submission.name.clone(),
        subject: "Thank You for Contacting Veltrix Labs!".into(),
        html_body,
        text_body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Priya Sharma".into(),
            email: "priya@example.com".into(),
            phone: "+91 98765 43210".into(),
            message: "I'd like a quote for a chatbot.".into(),
        }
    }

    #[test]
    fn admin_notification_carries_all_fields() {
        let email = admin_notification(&submission(), "hello@veltrixlabs.com");

        assert_eq!(email.to, "hello@veltrixlabs.com");
        assert_eq!(
            email.subject,
            "New Contact Form Submission from Priya Sharma"
        );
        for body in [&email.html_body, &email.text_body] {
            assert!(body.contains("Priya Sharma"));
            assert!(body.contains("priya@example.com"));
            assert!(body.contains("+91 98765 43210"));
            assert!(body.contains("I'd like a quote for a chatbot."));
        }
    }

    #[test]
    fn auto_reply_goes_to_the_submitter() {
        let email = user_auto_reply(&submission());

        assert_eq!(email.to, "priya@example.com");
        assert_eq!(email.to_name, "Priya Sharma");
        assert!(email.subject.contains("Thank You"));
        assert!(email.html_body.contains("Dear Priya Sharma"));
        assert!(email.text_body.contains("within 24 hours"));
    }

    #[test]
    fn submission_deserializes_from_form_json() {
        let submission: ContactSubmission = serde_json::from_str(
            r#"{"name":"A","email":"a@b.co","phone":"1234567890","message":"hi"}"#,
        )
        .unwrap();
        assert_eq!(submission.name, "A");
        assert_eq!(submission.phone, "1234567890");
    }
}
