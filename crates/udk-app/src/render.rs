//! Text rendering of screens, dialogs, and toasts
//!
//! Everything renders to a `String` so the output is testable; the app loop
//! just prints the result. Styling uses crossterm's ANSI helpers and degrades
//! to plain text when the terminal ignores them.

use crossterm::style::Stylize;
use udk_core::User;
use udk_core::validation::{FieldError, FieldErrors};

use crate::dialog::{ConfirmDelete, UserForm};
use crate::screen::{DetailScreen, ListScreen};
use crate::toast::{Toast, ToastKind};
use crate::view::ViewState;

const TABLE_COLUMNS: [&str; 8] = [
    "ID", "Name", "Username", "Email", "Phone", "Website", "Address", "Company",
];

const COMMANDS_HINT: &str =
    "commands: add | edit <id> | delete <id> | open <id> | help | quit";

/// Render the list view for its current state.
pub fn list_screen(screen: &ListScreen) -> String {
    match screen.state() {
        ViewState::Idle | ViewState::Loading => format!("{}", "Loading users...".dim()),
        ViewState::Failed(_) => alert("Failed to fetch users."),
        ViewState::Loaded(store) => {
            let mut out = String::new();
            out.push_str(&format!("{}\n", "User Management".bold()));
            out.push_str(&user_table(store.users()));
            out.push_str(&format!("{}", COMMANDS_HINT.dim()));
            out
        }
    }
}

/// Render the detail view for its current state.
pub fn detail_screen(screen: &DetailScreen) -> String {
    match screen.state() {
        ViewState::Idle | ViewState::Loading => format!("{}", "Loading user...".dim()),
        ViewState::Failed(_) => alert("Failed to fetch user details."),
        ViewState::Loaded(user) => {
            let mut out = user_card(user);
            out.push_str(&format!("{}", "commands: back | quit".dim()));
            out
        }
    }
}

/// Render one toast line.
pub fn toast(toast: &Toast) -> String {
    match toast.kind {
        ToastKind::Success => format!("{} {}", "✔".green(), toast.message),
        ToastKind::Error => format!("{} {}", "✖".red(), toast.message),
    }
}

/// Render the dialog header line.
pub fn form_header(form: &UserForm) -> String {
    let title = if form.is_edit() { "Edit User" } else { "Add User" };
    format!("{} {}", title.bold(), "(/cancel to abort)".dim())
}

/// Render the delete confirmation prompt.
pub fn confirm_prompt(dialog: &ConfirmDelete) -> String {
    format!("{} {}", "Confirm Delete".bold(), dialog.prompt())
}

/// Render a single field-level validation message.
pub fn field_error(error: &FieldError) -> String {
    format!("{}", error.message.as_str().red())
}

/// Render every message of a failed submission, one per line.
pub fn field_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(field_error)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the command reference.
pub fn help() -> String {
    [
        "add              open the form for a new user",
        "edit <id>        open the form for an existing user",
        "delete <id>      ask for confirmation, then delete",
        "open <id>        show the detail view of a user",
        "back             return to the previous view",
        "quit             leave the application",
    ]
    .join("\n")
}

/// A blocking, non-retryable error banner.
fn alert(message: &str) -> String {
    format!("{}", message.red().bold())
}

fn user_table(users: &[User]) -> String {
    let rows: Vec<[String; 8]> = users.iter().map(row_cells).collect();

    let mut widths: [usize; 8] = TABLE_COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let header: [String; 8] = TABLE_COLUMNS.map(|column| column.to_string());
    let mut out = format!("{}\n", format_row(&header, &widths).bold());

    if rows.is_empty() {
        out.push_str("No users available.\n");
        return out;
    }

    for (index, row) in rows.iter().enumerate() {
        let line = format_row(row, &widths);
        // Zebra striping keyed by row position, not identifier parity
        if index % 2 == 0 {
            out.push_str(&line);
        } else {
            out.push_str(&format!("{}", line.dark_grey()));
        }
        out.push('\n');
    }
    out
}

fn row_cells(user: &User) -> [String; 8] {
    [
        user.id.to_string(),
        user.name.clone(),
        user.username.clone(),
        user.email.clone(),
        user.phone.clone(),
        user.website.clone().unwrap_or_else(|| "N/A".to_string()),
        format!("{}, {}", user.address.street, user.address.city),
        user.company
            .as_ref()
            .map_or_else(|| "N/A".to_string(), |company| company.name.clone()),
    ]
}

fn format_row(cells: &[String; 8], widths: &[usize; 8]) -> String {
    cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
}

fn user_card(user: &User) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", user.name.as_str().bold()));
    out.push_str(&format!("  Username: {}\n", user.username));
    out.push_str(&format!("  Email:    {}\n", user.email));
    out.push_str(&format!("  Phone:    {}\n", user.phone));
    out.push_str(&format!(
        "  Website:  {}\n",
        user.website.as_deref().unwrap_or("N/A")
    ));
    out.push_str(&format!(
        "  Address:  {}, {}\n",
        user.address.street, user.address.city
    ));
    out.push_str(&format!(
        "  Company:  {}\n",
        user.company
            .as_ref()
            .map_or("N/A", |company| company.name.as_str())
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use udk_core::{Address, RecordStore};

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: name.to_lowercase().replace(' ', "_"),
            email: "user@example.com".to_string(),
            phone: "555-0100".to_string(),
            website: None,
            address: Address {
                street: "Main St".to_string(),
                city: "Springfield".to_string(),
            },
            company: None,
        }
    }

    #[test]
    fn test_empty_store_renders_single_placeholder_row() {
        let screen = ListScreen::loaded(RecordStore::new(Vec::new()));
        let output = list_screen(&screen);

        assert!(output.contains("No users available."));
        // Header row plus placeholder, no data rows
        assert_eq!(output.matches("No users available.").count(), 1);
    }

    #[test]
    fn test_loaded_store_renders_every_record() {
        let store = RecordStore::new(vec![user(1, "John Doe"), user(2, "Jane Smith")]);
        let screen = ListScreen::loaded(store);
        let output = list_screen(&screen);

        assert!(output.contains("John Doe"));
        assert!(output.contains("Jane Smith"));
        assert!(output.contains("N/A")); // absent website and company
        assert!(!output.contains("No users available."));
    }

    #[test]
    fn test_detail_card_shows_the_record_fields() {
        let screen = DetailScreen::loaded(user(7, "Kurtis Weissnat"));
        let output = detail_screen(&screen);

        assert!(output.contains("Kurtis Weissnat"));
        assert!(output.contains("kurtis_weissnat"));
        assert!(output.contains("Main St, Springfield"));
    }

    #[test]
    fn test_toast_carries_the_message() {
        let mut queue = crate::toast::ToastQueue::default();
        queue.success("User created successfully!");
        let toasts = queue.drain();

        assert!(toast(&toasts[0]).contains("User created successfully!"));
    }
}
