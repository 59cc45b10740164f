// SPDX-License-Identifier: MPL-2.0
//! `mailto:` composition for the contact form.

use crate::config::CONTACT_EMAIL;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message_type: String,
    pub message: String,
}

impl ContactMessage {
    #[must_use]
    pub fn subject(&self) -> String {
        format!("MeatMasters Contact: {}", capitalize(&self.message_type))
    }

    #[must_use]
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nPhone: {}\nMessage Type: {}\n\nMessage:\n{}",
            self.name, self.email, self.phone, self.message_type, self.message
        )
    }

    /// URI that opens the user's mail client with the message prefilled.
    #[must_use]
    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:{CONTACT_EMAIL}?subject={}&body={}",
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body())
        )
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Lerato M".to_string(),
            email: "lerato@example.com".to_string(),
            phone: "0831234567".to_string(),
            message_type: "feedback".to_string(),
            message: "Great service & fresh boerewors!".to_string(),
        }
    }

    #[test]
    fn subject_capitalizes_message_type() {
        assert_eq!(message().subject(), "MeatMasters Contact: Feedback");
    }

    #[test]
    fn mailto_targets_shop_address_with_encoded_fields() {
        let uri = message().mailto_uri();
        assert!(uri.starts_with("mailto:info@meatmasters.co.za?subject="));
        assert!(uri.contains("subject=MeatMasters%20Contact%3A%20Feedback"));
        assert!(uri.contains("&body=Name%3A%20Lerato%20M%0AEmail%3A%20lerato%40example.com"));
        assert!(uri.contains("fresh%20boerewors%21"));
        assert!(!uri.contains(' '));
        assert_eq!(uri.matches('&').count(), 1);
    }

    #[test]
    fn capitalize_handles_empty_and_unicode() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "Éclair");
    }
}
