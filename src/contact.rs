use std::borrow::Cow;

const SUBJECT: &str = "Contact from portfolio";

/// What a visitor typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\n\n{}\n\nReply to: {}",
            or_placeholder(&self.name, "No name"),
            or_placeholder(&self.message, "No message"),
            or_placeholder(&self.email, "No email"),
        )
    }

    /// Compose the `mailto:` URI the form submits to.
    pub fn mailto(&self, recipient: &str) -> String {
        let subject: Cow<str> = urlencoding::encode(SUBJECT);
        let body = self.body();
        format!(
            "mailto:{recipient}?subject={subject}&body={}",
            urlencoding::encode(&body)
        )
    }
}
