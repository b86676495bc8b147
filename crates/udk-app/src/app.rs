//! Application state and the interactive terminal loop
//!
//! [`App`] owns the client, the screens, the navigation history, and the toast
//! queue. The controller methods are independent of the terminal so the whole
//! flow is testable against an in-process fixture server; [`App::run`] is the
//! thin command loop on top.

use std::io::{self, Write};

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use udk_client::UsersClient;
use udk_core::validation::RULES;
use udk_core::{RecordStore, UserId};

use crate::config::AppConfig;
use crate::dialog::{ConfirmDelete, SubmitError, UserForm};
use crate::render;
use crate::route::Route;
use crate::screen::{DetailScreen, ListScreen};
use crate::toast::ToastQueue;

type InputLines = Lines<BufReader<Stdin>>;

/// Outcome of a form submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The remote call succeeded and the store was reconciled
    Saved,
    /// Validation blocked the submission; no network call was issued
    Invalid,
    /// The remote call failed; the store is unchanged
    Failed,
}

/// The terminal front end
#[derive(Debug)]
pub struct App {
    client: UsersClient,
    list: ListScreen,
    detail: Option<DetailScreen>,
    history: Vec<Route>,
    toasts: ToastQueue,
}

impl App {
    /// Build the app from configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(UsersClient::new(config.api_base_url.clone()))
    }

    /// Build the app around an existing client.
    pub fn with_client(client: UsersClient) -> Self {
        Self {
            client,
            list: ListScreen::default(),
            detail: None,
            history: vec![Route::List],
            toasts: ToastQueue::default(),
        }
    }

    /// The route currently shown.
    pub fn route(&self) -> Route {
        *self.history.last().unwrap_or(&Route::List)
    }

    /// The list view.
    pub fn list(&self) -> &ListScreen {
        &self.list
    }

    /// The detail view, while one is open.
    pub fn detail(&self) -> Option<&DetailScreen> {
        self.detail.as_ref()
    }

    /// The record store, once the list has loaded.
    pub fn store(&self) -> Option<&RecordStore> {
        self.list.store()
    }

    /// Take the pending toasts, oldest first.
    pub fn take_toasts(&mut self) -> Vec<crate::toast::Toast> {
        self.toasts.drain()
    }

    /// Fetch-on-entry of the list view.
    pub async fn load_users(&mut self) {
        if !self.list.fetch(&self.client).await {
            self.toasts.error("Failed to fetch users.");
        }
    }

    /// Navigate to `/users/{id}` and fetch the record.
    pub async fn open_detail(&mut self, id: UserId) {
        self.history.push(Route::Detail(id));
        let mut screen = DetailScreen::new(id);
        if !screen.fetch(&self.client).await {
            self.toasts.error("Failed to fetch user details.");
        }
        self.detail = Some(screen);
    }

    /// Navigate to the previous history entry. The list is never re-fetched
    /// on the way back.
    pub fn back(&mut self) {
        if self.history.len() > 1 {
            self.history.pop();
        }
        if self.route() == Route::List {
            self.detail = None;
        }
    }

    /// Validate and submit the form; on success fold the mutation into the
    /// store and queue the matching toast.
    pub async fn submit_form(&mut self, form: &mut UserForm) -> SubmitOutcome {
        let was_edit = form.is_edit();
        match form.submit(&self.client).await {
            Ok(mutation) => {
                self.list.apply(mutation);
                if was_edit {
                    self.toasts.success("User updated successfully!");
                } else {
                    self.toasts.success("User created successfully!");
                }
                SubmitOutcome::Saved
            }
            Err(SubmitError::Invalid(_)) => SubmitOutcome::Invalid,
            Err(SubmitError::Remote(error)) => {
                tracing::warn!(%error, "form submission failed");
                self.toasts.error("Failed to submit the form.");
                SubmitOutcome::Failed
            }
        }
    }

    /// Confirm a pending delete; on success fold the mutation into the store.
    pub async fn confirm_delete(&mut self, dialog: &ConfirmDelete) -> bool {
        match dialog.confirm(&self.client).await {
            Ok(mutation) => {
                self.list.apply(mutation);
                self.toasts.success("User deleted successfully!");
                true
            }
            Err(error) => {
                tracing::warn!(%error, "delete failed");
                self.toasts.error("Failed to delete user.");
                false
            }
        }
    }

    /// Run the interactive loop until the user quits or stdin closes.
    pub async fn run(&mut self) -> io::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        self.load_users().await;
        self.flush_toasts();
        self.render();

        loop {
            prompt()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            if !self.dispatch(&mut lines, Command::parse(&line)).await? {
                break;
            }
        }

        Ok(())
    }

    /// Handle one parsed command, then drain the toast queue and re-render
    /// unconditionally, so no toast outlives the interaction that queued it.
    /// Returns `false` when the loop should stop.
    async fn dispatch(&mut self, lines: &mut InputLines, command: Command) -> io::Result<bool> {
        match command {
            Command::Quit => return Ok(false),
            Command::Noop => {}
            Command::Help => println!("{}", render::help()),
            Command::Unknown => println!("Unknown command. Type `help` for the list."),
            Command::Back => self.back(),
            Command::Open(id) => self.open_detail(id).await,
            Command::Add => {
                if self.guard_list_view() {
                    self.run_form(lines, UserForm::create()).await?;
                }
            }
            Command::Edit(id) => {
                if self.guard_list_view() {
                    match self.list.get(id).cloned() {
                        Some(user) => self.run_form(lines, UserForm::edit(&user)).await?,
                        None => println!("No user with id {id}."),
                    }
                }
            }
            Command::Delete(id) => {
                if self.guard_list_view() {
                    match self.list.get(id).cloned() {
                        Some(user) => {
                            self.run_delete(lines, ConfirmDelete::new(user)).await?;
                        }
                        None => println!("No user with id {id}."),
                    }
                }
            }
        }

        self.flush_toasts();
        self.render();
        Ok(true)
    }

    /// Mutations are dispatched from the list view only.
    fn guard_list_view(&self) -> bool {
        if self.route() == Route::List && self.store().is_some() {
            true
        } else {
            println!("Only available on the list view.");
            false
        }
    }

    async fn run_form(&mut self, lines: &mut InputLines, mut form: UserForm) -> io::Result<()> {
        println!("{}", render::form_header(&form));
        if !fill_form(lines, &mut form).await? {
            return Ok(());
        }
        if self.submit_form(&mut form).await == SubmitOutcome::Invalid {
            println!("{}", render::field_errors(form.errors()));
        }
        Ok(())
    }

    async fn run_delete(
        &mut self,
        lines: &mut InputLines,
        dialog: ConfirmDelete,
    ) -> io::Result<()> {
        println!("{}", render::confirm_prompt(&dialog));
        prompt()?;
        let Some(input) = lines.next_line().await? else {
            return Ok(());
        };
        if matches!(input.trim().to_lowercase().as_str(), "y" | "yes") {
            self.confirm_delete(&dialog).await;
        }
        Ok(())
    }

    fn flush_toasts(&mut self) {
        for toast in self.toasts.drain() {
            println!("{}", render::toast(&toast));
        }
    }

    fn render(&self) {
        match self.route() {
            Route::List => println!("{}", render::list_screen(&self.list)),
            Route::Detail(_) => {
                if let Some(screen) = &self.detail {
                    println!("{}", render::detail_screen(screen));
                }
            }
        }
    }
}

/// Prompt per field in schema order, validating on blur. Empty input keeps a
/// prefilled value; `/cancel` aborts the dialog.
async fn fill_form(lines: &mut InputLines, form: &mut UserForm) -> io::Result<bool> {
    for rule in RULES {
        let field = rule.field;
        if !form.is_editable(field) {
            continue;
        }
        loop {
            let current = form.value(field).to_string();
            if current.is_empty() {
                print!("{}: ", field.label());
            } else {
                print!("{} [{current}]: ", field.label());
            }
            io::stdout().flush()?;

            let Some(input) = lines.next_line().await? else {
                return Ok(false);
            };
            let input = input.trim();
            if input == "/cancel" {
                return Ok(false);
            }
            if !input.is_empty() || current.is_empty() {
                form.set(field, input);
            }

            match form.blur(field) {
                Ok(()) => break,
                Err(error) => println!("{}", render::field_error(&error)),
            }
        }
    }
    Ok(true)
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

/// A parsed line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Add,
    Edit(UserId),
    Delete(UserId),
    Open(UserId),
    Back,
    Help,
    Quit,
    /// Blank line
    Noop,
    Unknown,
}

impl Command {
    fn parse(line: &str) -> Self {
        let mut parts = line.split_whitespace();
        match parts.next() {
            None => Self::Noop,
            Some("add" | "a") => Self::Add,
            Some("edit" | "e") => id_arg(parts.next()).map_or(Self::Unknown, Self::Edit),
            Some("delete" | "d") => id_arg(parts.next()).map_or(Self::Unknown, Self::Delete),
            Some("open" | "o") => id_arg(parts.next()).map_or(Self::Unknown, Self::Open),
            Some("back" | "b") => Self::Back,
            Some("help" | "h" | "?") => Self::Help,
            Some("quit" | "q" | "exit") => Self::Quit,
            Some(_) => Self::Unknown,
        }
    }
}

fn id_arg(arg: Option<&str>) -> Option<UserId> {
    arg?.parse().ok()
}
