use api::DriveFile;
use dioxus::prelude::*;

use crate::views::backend_list::{list_state, use_backend_list, ListStatus};

/// Folders first, then files, each alphabetically.
pub fn sort_drive_files(files: &mut [DriveFile]) {
    files.sort_by(|a, b| {
        b.is_folder()
            .cmp(&a.is_folder())
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
}

#[component]
pub fn DriveView() -> Element {
    let files = use_backend_list(|client| async move { client.drive_files().await });
    let (mut files, loading, error) = list_state(&files);
    sort_drive_files(&mut files);

    rsx! {
        div {
            class: "page drive",
            h1 { "Drive" }
            ListStatus { loading, error, empty: files.is_empty(), noun: "files" }
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Size" }
                        th { "Modified" }
                    }
                }
                tbody {
                    for file in files {
                        tr {
                            key: "{file.id}",
                            td {
                                span { class: "file-icon", if file.is_folder() { "\u{1F4C1}" } else { "\u{1F4C4}" } }
                                match file.web_view_link.clone() {
                                    Some(link) => rsx! { a { href: "{link}", target: "_blank", rel: "noopener", "{file.name}" } },
                                    None => rsx! { "{file.name}" },
                                }
                            }
                            td { {file.human_size().unwrap_or_else(|| "-".to_string())} }
                            td { {file.modified_time.clone().unwrap_or_default()} }
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

    fn file(name: &str, folder: bool) -> DriveFile {
        DriveFile {
            id: name.to_string(),
            name: name.to_string(),
            mime_type: if folder {
                "application/vnd.google-apps.folder".to_string()
            } else {
                "text/plain".to_string()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_folders_sort_first() {
        let mut files = vec![
            file("notes.txt", false),
            file("Projects", true),
            file("agenda.txt", false),
            file("archive", true),
        ];
        sort_drive_files(&mut files);
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["archive", "Projects", "agenda.txt", "notes.txt"]);
    }
}
