//! Contact email renderer
//!
//! Builds the notification sent to the site owner for each contact message.
//! Every user-supplied value is HTML-escaped before it is placed in the markup.

use crate::domain::entities::ContactMessage;

/// HTML and plain-text bodies of a notification email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Render the owner notification for a contact message
pub fn render_contact_email(message: &ContactMessage) -> RenderedEmail {
    let name = escape_html(&message.name);
    let email = escape_html(&message.email);
    let subject = escape_html(&message.subject);
    let body = escape_html(&message.message).replace('\n', "<br>");

    let html = format!(
        r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
</head>
<body style="background-color: #f7f7f7; margin: 0; padding: 0;">
  <table border="0" cellpadding="0" cellspacing="0" role="presentation" width="100%" style="background-color: #f7f7f7;">
    <tr>
      <td align="center" style="padding: 20px 0;">
        <table border="0" cellpadding="0" cellspacing="0" role="presentation" width="100%" style="max-width: 600px; background-color: #ffffff; border-radius: 8px;">
          <tr>
            <td style="padding: 30px; text-align: center; border-bottom: 1px solid #e6e6e6;">
              <h1 style="margin: 0; font-family: Arial, sans-serif; font-size: 24px; color: #333333;">New Portfolio Message</h1>
            </td>
          </tr>
          <tr>
            <td style="padding: 30px; font-family: Arial, sans-serif; font-size: 16px; line-height: 24px; color: #333333;">
              <p style="margin: 0 0 15px 0;">You received a new message from your contact form:</p>
              <p style="margin: 0 0 10px 0;"><strong>Name:</strong> {name}</p>
              <p style="margin: 0 0 10px 0;"><strong>Email:</strong> <a href="mailto:{email}" style="color: #0066cc;">{email}</a></p>
              <p style="margin: 0 0 10px 0;"><strong>Subject:</strong> {subject}</p>
              <p style="margin: 0;"><strong>Message:</strong></p>
              <div style="margin-top: 10px; padding: 15px; border-left: 4px solid #0066cc;">{body}</div>
              <p style="margin: 20px 0 0 0;">Reply to this email to answer the sender directly.</p>
            </td>
          </tr>
          <tr>
            <td style="padding: 20px 30px; font-family: Arial, sans-serif; font-size: 14px; color: #666666; text-align: center; border-top: 1px solid #e6e6e6;">
              <p style="margin: 0;">Sent from your portfolio contact form</p>
            </td>
          </tr>
        </table>
      </td>
    </tr>
  </table>
</body>
</html>
"##
    );

    let text = format!(
        "Name: {}\nEmail: {}\nSubject: {}\n\nMessage:\n{}\n",
        message.name, message.email, message.subject, message.message
    );

    RenderedEmail {
        subject: format!("New portfolio contact: {}", message.subject),
        html,
        text,
    }
}

/// Escape the five HTML-significant characters
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
