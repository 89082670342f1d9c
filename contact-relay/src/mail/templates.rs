use crate::models::contact_submission::ContactSubmission;
use crate::models::outgoing_email::OutgoingEmail;

/// Who the relay writes as and to
#[derive(Clone, Debug)]
pub struct Letterhead {
    pub site_name: String,
    pub sender_address: String,
    pub owner_address: String,
}

/// Maps the five markup-significant characters to their entities
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(character),
        }
    }
    escaped
}

// Subjects are single header lines
fn header_safe(text: &str) -> String {
    text.chars()
        .map(|character| if character.is_control() { ' ' } else { character })
        .collect()
}

fn mailbox(display_name: &str, address: &str) -> String {
    let display_name = display_name.replace(['"', '\\'], "");
    format!("\"{display_name}\" <{address}>")
}

pub fn render_owner_email(submission: &ContactSubmission, letterhead: &Letterhead) -> OutgoingEmail {
    let name = escape_html(&submission.name);
    let email = escape_html(&submission.email);
    let message = escape_html(&submission.message);
    let site_name = escape_html(&letterhead.site_name);

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>New Contact Form Submission</title>
</head>
<body style="margin: 0; padding: 40px 20px; font-family: Arial, sans-serif; background: #0f0f1e;">
  <table width="600" cellpadding="0" cellspacing="0" align="center" style="background: #1a1a2e; border-radius: 16px;">
    <tr>
      <td style="background: #7c3aed; padding: 32px; text-align: center;">
        <h1 style="margin: 0; color: #ffffff; font-size: 26px;">New Contact Form Submission</h1>
      </td>
    </tr>
    <tr>
      <td style="padding: 32px;">
        <p style="margin: 0 0 8px 0; color: #a0a0c0; font-size: 13px; text-transform: uppercase;">From</p>
        <p style="margin: 0; color: #ffffff; font-size: 18px; font-weight: 600;">{name}</p>
        <p style="margin: 8px 0 24px 0; color: #a855f7; font-size: 16px;">{email}</p>
        <p style="margin: 0 0 8px 0; color: #a0a0c0; font-size: 13px; text-transform: uppercase;">Message</p>
        <p style="margin: 0; color: #e0e0e0; font-size: 15px; line-height: 1.6; white-space: pre-wrap;">{message}</p>
        <p style="margin: 32px 0 0 0;">
          <a href="mailto:{email}" style="background: #7c3aed; color: #ffffff; text-decoration: none; padding: 12px 28px; border-radius: 8px;">Reply via Email</a>
        </p>
      </td>
    </tr>
    <tr>
      <td style="padding: 24px; background: #141428; text-align: center; color: #6b7280; font-size: 13px;">
        This email was sent from your {site_name} portfolio contact form
      </td>
    </tr>
  </table>
</body>
</html>
"#
    );

    let text = format!(
        "New Contact Form Submission\n\nFrom: {} ({})\n\nMessage:\n{}",
        submission.name, submission.email, submission.message
    );

    OutgoingEmail {
        from: mailbox(
            &format!("{} Portfolio", letterhead.site_name),
            &letterhead.sender_address,
        ),
        to: letterhead.owner_address.clone(),
        reply_to: Some(submission.email.clone()),
        subject: header_safe(&format!(
            "New Contact Form: {} ({})",
            submission.name, submission.email
        )),
        html,
        text,
    }
}

pub fn render_confirmation_email(
    submission: &ContactSubmission,
    letterhead: &Letterhead,
) -> OutgoingEmail {
    let name = escape_html(&submission.name);
    let site_name = escape_html(&letterhead.site_name);

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Message Received</title>
</head>
<body style="margin: 0; padding: 40px 20px; font-family: Arial, sans-serif; background: #0f0f1e;">
  <table width="600" cellpadding="0" cellspacing="0" align="center" style="background: #1a1a2e; border-radius: 16px;">
    <tr>
      <td style="background: #7c3aed; padding: 32px; text-align: center;">
        <h1 style="margin: 0; color: #ffffff; font-size: 26px;">Message Received!</h1>
      </td>
    </tr>
    <tr>
      <td style="padding: 32px;">
        <h2 style="margin: 0 0 20px 0; color: #ffffff; font-size: 22px;">Hi {name},</h2>
        <p style="margin: 0 0 20px 0; color: #e0e0e0; font-size: 16px; line-height: 1.6;">
          Thank you for reaching out! I've received your message and will get back to you within 24 hours.
        </p>
        <p style="margin: 0 0 20px 0; color: #a0a0c0; font-size: 15px; line-height: 1.6;">
          In the meantime, feel free to explore more of my work on my portfolio.
        </p>
        <p style="margin: 0 0 8px 0; color: #a855f7; font-size: 13px; text-transform: uppercase;">What's Next?</p>
        <p style="margin: 0; color: #e0e0e0; font-size: 15px; line-height: 1.6;">
          I typically respond within 24 hours. If your inquiry is urgent, reply directly to this email.
        </p>
      </td>
    </tr>
    <tr>
      <td style="padding: 24px; background: #141428; text-align: center; color: #ffffff; font-size: 15px;">
        {site_name}
      </td>
    </tr>
  </table>
</body>
</html>
"#
    );

    let text = format!(
        "Hi {},\n\nThank you for reaching out! I've received your message and will get back to you within 24 hours.\n\nBest regards,\n{}",
        submission.name, letterhead.site_name
    );

    OutgoingEmail {
        from: mailbox(&letterhead.site_name, &letterhead.sender_address),
        to: submission.email.clone(),
        reply_to: None,
        subject: header_safe(&format!("Message Received - {}", letterhead.site_name)),
        html,
        text,
    }
}
