//! Contact export.
//!
//! - [`contacts_to_csv`]: one header row (`Name,Email,Phone,Organization`) and one
//!   row per contact, CRLF line endings, fields quoted when they contain a comma,
//!   quote or line break. Multiple emails or phones are joined with `"; "`.
//! - [`contacts_to_vcard`]: vCard 3.0, one `BEGIN:VCARD … END:VCARD` block per
//!   contact, text values escaped.
//! - [`data_uri`]: wraps an export for an `<a download>` link.

use crate::models::Contact;

const CSV_HEADER: &str = "Name,Email,Phone,Organization";

pub fn contacts_to_csv(contacts: &[Contact]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push_str("\r\n");
    for contact in contacts {
        let row = [
            contact.name.clone(),
            contact.emails.join("; "),
            contact.phones.join("; "),
            contact.organization.clone().unwrap_or_default(),
        ];
        let row: Vec<String> = row.iter().map(|field| csv_field(field)).collect();
        out.push_str(&row.join(","));
        out.push_str("\r\n");
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn contacts_to_vcard(contacts: &[Contact]) -> String {
    let mut out = String::new();
    for contact in contacts {
        let full_name = contact.display_name();
        let (given, family) = split_name(&contact.name);

        out.push_str("BEGIN:VCARD\r\nVERSION:3.0\r\n");
        out.push_str(&format!("FN:{}\r\n", vcard_text(full_name)));
        out.push_str(&format!(
            "N:{};{};;;\r\n",
            vcard_text(family),
            vcard_text(given)
        ));
        for email in &contact.emails {
            out.push_str(&format!("EMAIL;TYPE=INTERNET:{}\r\n", vcard_text(email)));
        }
        for phone in &contact.phones {
            out.push_str(&format!("TEL:{}\r\n", vcard_text(phone)));
        }
        if let Some(org) = contact.organization.as_deref().filter(|o| !o.is_empty()) {
            out.push_str(&format!("ORG:{}\r\n", vcard_text(org)));
        }
        out.push_str("END:VCARD\r\n");
    }
    out
}

/// "Ana Maria Lopez" → ("Ana Maria", "Lopez").
fn split_name(name: &str) -> (&str, &str) {
    let name = name.trim();
    match name.rsplit_once(' ') {
        Some((given, family)) => (given.trim_end(), family),
        None => (name, ""),
    }
}

fn vcard_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}

/// `data:` URI with the body percent-encoded, for download links.
pub fn data_uri(mime: &str, body: &str) -> String {
    format!("data:{mime};charset=utf-8,{}", urlencoding::encode(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Contact {
        Contact {
            resource_name: "people/c1".to_string(),
            name: "Ana Maria Lopez".to_string(),
            emails: vec!["ana@example.com".to_string(), "ana@work.example".to_string()],
            phones: vec!["+34 600 000 000".to_string()],
            organization: Some("Acme, Inc.".to_string()),
        }
    }

    #[test]
    fn test_csv_quotes_special_fields() {
        let mut bob = Contact {
            name: "Bob \"the builder\"".to_string(),
            ..Contact::default()
        };
        bob.emails.push("bob@example.com".to_string());

        let csv = contacts_to_csv(&[ana(), bob]);
        let lines: Vec<&str> = csv.split("\r\n").collect();
        assert_eq!(lines[0], "Name,Email,Phone,Organization");
        assert_eq!(
            lines[1],
            "Ana Maria Lopez,ana@example.com; ana@work.example,+34 600 000 000,\"Acme, Inc.\""
        );
        assert_eq!(lines[2], "\"Bob \"\"the builder\"\"\",bob@example.com,,");
        assert_eq!(lines[3], "");
    }

    #[test]
    fn test_csv_of_nothing_is_header_only() {
        assert_eq!(contacts_to_csv(&[]), "Name,Email,Phone,Organization\r\n");
    }

    #[test]
    fn test_vcard_fields() {
        let card = contacts_to_vcard(&[ana()]);
        assert!(card.starts_with("BEGIN:VCARD\r\nVERSION:3.0\r\n"));
        assert!(card.contains("FN:Ana Maria Lopez\r\n"));
        assert!(card.contains("N:Lopez;Ana Maria;;;\r\n"));
        assert!(card.contains("EMAIL;TYPE=INTERNET:ana@work.example\r\n"));
        assert!(card.contains("TEL:+34 600 000 000\r\n"));
        assert!(card.contains("ORG:Acme\\, Inc.\r\n"));
        assert!(card.ends_with("END:VCARD\r\n"));
    }

    #[test]
    fn test_vcard_nameless_contact() {
        let contact = Contact {
            emails: vec!["x@example.com".to_string()],
            ..Contact::default()
        };
        let card = contacts_to_vcard(&[contact]);
        assert!(card.contains("FN:x@example.com\r\n"));
        assert!(card.contains("N:;;;;\r\n"));
        assert!(!card.contains("ORG:"));
        assert_eq!(card.matches("BEGIN:VCARD").count(), 1);
    }

    #[test]
    fn test_data_uri_encoding() {
        assert_eq!(
            data_uri("text/csv", "a,b\r\nü"),
            "data:text/csv;charset=utf-8,a%2Cb%0D%0A%C3%BC"
        );
    }
}
