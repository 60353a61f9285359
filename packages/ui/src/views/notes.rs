use dioxus::prelude::*;
use store::{Note, NoteFields, RecordId};

use crate::markdown::render_markdown;
use crate::page::{Editor, Submitted};
use crate::views::ModalOverlay;
use crate::{alert, use_stores};

#[component]
pub fn NotesView() -> Element {
    let mut stores = use_stores();
    let mut editor = use_signal(Editor::<NoteFields>::new);
    let mut expanded = use_signal(|| None::<RecordId>);

    let notes: Vec<Note> = stores.read().notes.records().to_vec();

    let save = move |_| {
        let mut guard = stores.write();
        match editor.write().submit(&mut guard.notes) {
            Ok(Submitted::Created(id)) => tracing::info!(id, "note created"),
            Ok(Submitted::Updated(id)) => tracing::info!(id, "note updated"),
            Ok(Submitted::Vanished(id)) => {
                tracing::warn!(id, "note vanished while editing");
                alert("This note was deleted before your changes were saved.");
            }
            Err(err) => alert(&err.to_string()),
        }
    };

    let delete = move |id: RecordId| {
        let result = stores.write().notes.delete(id);
        match result {
            Ok(true) => tracing::info!(id, "note deleted"),
            Ok(false) => {}
            Err(err) => alert(&format!("Could not delete note: {err}")),
        }
    };

    rsx! {
        div {
            class: "page notes",
            div {
                class: "page-header",
                h1 { "Notes" }
                button {
                    class: "btn primary",
                    onclick: move |_| editor.write().open_new(),
                    "New Note"
                }
            }

            if notes.is_empty() {
                p { class: "list-status", "No notes yet." }
            }

            ul {
                class: "card-list",
                for note in notes {
                    NoteCard {
                        key: "{note.id}",
                        expanded: expanded() == Some(note.id),
                        note: note.clone(),
                        on_toggle: move |id: RecordId| {
                            let next = if expanded() == Some(id) { None } else { Some(id) };
                            expanded.set(next);
                        },
                        on_edit: move |note: Note| editor.write().open_edit(&note),
                        on_delete: delete,
                    }
                }
            }

            if editor.read().is_open() {
                ModalOverlay {
                    title: editor.read().heading(),
                    on_close: move |_| editor.write().close(),
                    div {
                        class: "modal-body",
                        label { r#for: "note-title", "Title" }
                        input {
                            id: "note-title",
                            r#type: "text",
                            value: "{editor.read().form.title}",
                            oninput: move |evt| editor.write().form.title = evt.value(),
                        }
                        label { r#for: "note-content", "Content" }
                        textarea {
                            id: "note-content",
                            rows: "8",
                            value: "{editor.read().form.content}",
                            oninput: move |evt| editor.write().form.content = evt.value(),
                        }
                    }
                    div {
                        class: "modal-actions",
                        button { class: "btn", onclick: move |_| editor.write().close(), "Cancel" }
                        button { class: "btn primary", onclick: save, "Save" }
                    }
                }
            }
        }
    }
}

#[component]
fn NoteCard(
    note: Note,
    expanded: bool,
    on_toggle: EventHandler<RecordId>,
    on_edit: EventHandler<Note>,
    on_delete: EventHandler<RecordId>,
) -> Element {
    let id = note.id;
    let updated = note
        .updated_at
        .with_timezone(&chrono::Local)
        .format("%b %-d, %Y %H:%M");
    let edit_target = note.clone();

    rsx! {
        li {
            class: "card",
            div {
                class: "card-header",
                h3 {
                    class: "card-title",
                    onclick: move |_| on_toggle.call(id),
                    "{note.title}"
                }
                div {
                    class: "card-actions",
                    button { class: "btn small", onclick: move |_| on_edit.call(edit_target.clone()), "Edit" }
                    button { class: "btn small danger", onclick: move |_| on_delete.call(id), "Delete" }
                }
            }
            if expanded {
                div {
                    class: "markdown-preview",
                    dangerous_inner_html: render_markdown(&note.content),
                }
            }
            p { class: "card-meta", "Updated {updated}" }
        }
    }
}
