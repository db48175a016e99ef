use chrono::NaiveDate;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::config::Config;

static SMTP_HOST: &str = "smtp.seznam.cz";

/// Sends the menu over SMTP with implicit TLS on the submissions port,
/// authenticated as the sender address.
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    recipient: Mailbox,
}

impl Mailer {
    pub fn new(config: &Config) -> crate::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(SMTP_HOST)?
            .credentials(Credentials::new(
                config.sender.clone(),
                config.password.clone(),
            ))
            .build();
        Ok(Self {
            transport,
            sender: config.sender.parse()?,
            recipient: config.recipient.parse()?,
        })
    }

    pub async fn send_menu(&self, date: NaiveDate, fragment: &str) -> crate::Result<()> {
        let message = compose(self.sender.clone(), self.recipient.clone(), date, fragment)?;
        self.transport.send(message).await?;
        log::info!("emailed today's menu to {}", self.recipient);
        Ok(())
    }
}

fn compose(
    sender: Mailbox,
    recipient: Mailbox,
    date: NaiveDate,
    fragment: &str,
) -> crate::Result<Message> {
    let message = Message::builder()
        .from(sender)
        .to(recipient)
        .subject(format!("Lunch - {}", date.format("%d.%m.")))
        .header(ContentType::TEXT_HTML)
        .body(wrap_body(fragment))?;
    Ok(message)
}

/// Wraps the rendered section in the fixed outer card so the mail reads
/// well in clients that ignore a missing stylesheet.
fn wrap_body(fragment: &str) -> String {
    format!(
        "<html>\n<body style=\"font-family: Arial, sans-serif; color: #333;\">\n\
         <div style=\"max-width: 600px; margin: auto; border: 1px solid #ddd; \
         border-radius: 8px; padding: 20px; background-color: #fcfcfc;\">\n\
         {fragment}\n\
         <br>\n\
         <hr style=\"border: none; border-top: 1px solid #eee;\">\n\
         <p style=\"font-size: 12px; color: #999; text-align: center;\">\
         Sent by the daily lunch menu job.</p>\n\
         </div>\n</body>\n</html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mailbox(addr: &str) -> Mailbox {
        addr.parse().unwrap()
    }

    #[test]
    fn test_compose_subject_and_content_type() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 25).unwrap();
        let message = compose(
            mailbox("bistro@example.com"),
            mailbox("hungry@example.com"),
            date,
            "<h2>menu</h2>",
        )
        .unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("Subject: Lunch - 25.11."));
        assert!(formatted.contains("text/html"));
        assert!(formatted.contains("From: bistro@example.com"));
        assert!(formatted.contains("To: hungry@example.com"));
    }

    #[test]
    fn test_subject_keeps_leading_zeros() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        let message = compose(
            mailbox("bistro@example.com"),
            mailbox("hungry@example.com"),
            date,
            "",
        )
        .unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("Subject: Lunch - 05.03."));
    }

    #[test]
    fn test_wrap_body_embeds_fragment_and_footer() {
        let body = wrap_body("<p>Svíčková</p>");
        assert!(body.contains("<p>Svíčková</p>"));
        assert!(body.contains("background-color: #fcfcfc;"));
        assert!(body.contains("Sent by the daily lunch menu job."));
        assert!(body.starts_with("<html>"));
        assert!(body.trim_end().ends_with("</html>"));
    }
}
