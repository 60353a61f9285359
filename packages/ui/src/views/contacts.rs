use api::export::{contacts_to_csv, contacts_to_vcard, data_uri};
use api::Contact;
use dioxus::prelude::*;

use crate::views::backend_list::{list_state, use_backend_list, ListStatus};

/// Contacts whose name, email or organization contains `query`, ignoring case.
pub fn filter_contacts<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    let needle = query.trim().to_lowercase();
    contacts
        .iter()
        .filter(|contact| {
            needle.is_empty()
                || contact.display_name().to_lowercase().contains(&needle)
                || contact.emails.iter().any(|e| e.to_lowercase().contains(&needle))
                || contact
                    .organization
                    .as_deref()
                    .is_some_and(|org| org.to_lowercase().contains(&needle))
        })
        .collect()
}

#[component]
pub fn ContactsView() -> Element {
    let contacts = use_backend_list(|client| async move { client.contacts().await });
    let mut query = use_signal(String::new);

    let (loaded, loading, error) = list_state(&contacts);

    let visible: Vec<Contact> = filter_contacts(&loaded, &query()).into_iter().cloned().collect();
    let csv_href = data_uri("text/csv", &contacts_to_csv(&visible));
    let vcard_href = data_uri("text/vcard", &contacts_to_vcard(&visible));

    rsx! {
        div {
            class: "page contacts",
            div {
                class: "page-header",
                h1 { "Contacts" }
                if !visible.is_empty() {
                    div {
                        class: "export-links",
                        a { class: "btn", href: "{csv_href}", download: "contacts.csv", "Export CSV" }
                        a { class: "btn", href: "{vcard_href}", download: "contacts.vcf", "Export vCard" }
                    }
                }
            }
            input {
                class: "search",
                r#type: "search",
                placeholder: "Search contacts",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }
            ListStatus { loading, error, empty: loaded.is_empty(), noun: "contacts" }
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Phone" }
                        th { "Organization" }
                    }
                }
                tbody {
                    for contact in visible {
                        tr {
                            key: "{contact.resource_name}",
                            td { "{contact.display_name()}" }
                            td { {contact.emails.first().cloned().unwrap_or_default()} }
                            td { {contact.phones.first().cloned().unwrap_or_default()} }
                            td { {contact.organization.clone().unwrap_or_default()} }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, email: &str, org: Option<&str>) -> Contact {
        Contact {
            resource_name: format!("people/{name}"),
            name: name.to_string(),
            emails: vec![email.to_string()],
            organization: org.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_filter_contacts() {
        let contacts = vec![
            contact("Ana Lima", "ana@example.com", Some("Acme")),
            contact("Bob Stone", "bob@stone.io", None),
        ];

        assert_eq!(filter_contacts(&contacts, "").len(), 2);
        assert_eq!(filter_contacts(&contacts, "  ana ")[0].name, "Ana Lima");
        assert_eq!(filter_contacts(&contacts, "STONE.IO")[0].name, "Bob Stone");
        assert_eq!(filter_contacts(&contacts, "acme")[0].name, "Ana Lima");
        assert!(filter_contacts(&contacts, "zed").is_empty());
    }
}
