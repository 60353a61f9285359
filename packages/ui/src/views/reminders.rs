use dioxus::prelude::*;
use store::{RecordId, Reminder, ReminderFields};

use crate::page::{sort_by_due, Editor, Submitted};
use crate::views::dashboard::local_now;
use crate::views::ModalOverlay;
use crate::{alert, use_stores};

/// How a reminder's time reads in the list.
pub fn describe_due(reminder: &Reminder) -> String {
    match reminder.due_at() {
        Some(due) => due.format("%a %b %-d, %H:%M").to_string(),
        None => reminder.time.clone(),
    }
}

#[component]
pub fn RemindersView() -> Element {
    let mut stores = use_stores();
    let mut editor = use_signal(Editor::<ReminderFields>::new);

    let mut reminders: Vec<Reminder> = stores.read().reminders.records().to_vec();
    sort_by_due(&mut reminders);
    let now = local_now();

    let save = move |_| {
        let mut guard = stores.write();
        match editor.write().submit(&mut guard.reminders) {
            Ok(Submitted::Created(id)) => tracing::info!(id, "reminder created"),
            Ok(Submitted::Updated(id)) => tracing::info!(id, "reminder updated"),
            Ok(Submitted::Vanished(id)) => {
                tracing::warn!(id, "reminder vanished while editing");
                alert("This reminder was deleted before your changes were saved.");
            }
            Err(err) => alert(&err.to_string()),
        }
    };

    let delete = move |id: RecordId| {
        let result = stores.write().reminders.delete(id);
        if let Err(err) = result {
            alert(&format!("Could not delete reminder: {err}"));
        }
    };

    rsx! {
        div {
            class: "page reminders",
            div {
                class: "page-header",
                h1 { "Reminders" }
                button {
                    class: "btn primary",
                    onclick: move |_| editor.write().open_new(),
                    "New Reminder"
                }
            }

            if reminders.is_empty() {
                p { class: "list-status", "No reminders yet." }
            }

            ul {
                class: "card-list",
                for reminder in reminders {
                    ReminderRow {
                        key: "{reminder.id}",
                        overdue: reminder.due_at().is_some_and(|due| due < now),
                        reminder: reminder.clone(),
                        on_edit: move |reminder: Reminder| editor.write().open_edit(&reminder),
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
                        label { r#for: "reminder-text", "Reminder" }
                        input {
                            id: "reminder-text",
                            r#type: "text",
                            value: "{editor.read().form.text}",
                            oninput: move |evt| editor.write().form.text = evt.value(),
                        }
                        label { r#for: "reminder-time", "When" }
                        input {
                            id: "reminder-time",
                            r#type: "datetime-local",
                            value: "{editor.read().form.time}",
                            oninput: move |evt| editor.write().form.time = evt.value(),
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
fn ReminderRow(
    reminder: Reminder,
    overdue: bool,
    on_edit: EventHandler<Reminder>,
    on_delete: EventHandler<RecordId>,
) -> Element {
    let id = reminder.id;
    let due = describe_due(&reminder);
    let edit_target = reminder.clone();
    let class = if overdue { "card overdue" } else { "card" };

    rsx! {
        li {
            class: "{class}",
            div {
                class: "card-header",
                div {
                    h3 { class: "card-title", "{reminder.text}" }
                    p { class: "card-meta", "{due}" }
                }
                div {
                    class: "card-actions",
                    button { class: "btn small", onclick: move |_| on_edit.call(edit_target.clone()), "Edit" }
                    button { class: "btn small danger", onclick: move |_| on_delete.call(id), "Delete" }
                }
            }
        }
    }
}
