//! Interactive command shell
//!
//! Thin glue over the core: prompts for a command, prompts for that
//! command's fields, calls into the stores and session, and prints a
//! one-line confirmation or error. Command errors never terminate the
//! shell; only `exit` does.

use std::io::{self, BufRead, Write};

use crate::auth::{hash_password, Session};
use crate::display::format_task_table;
use crate::error::{VaultError, VaultResult};
use crate::models::CategoryId;
use crate::storage::Storage;

const COMMAND_PROMPT: &str =
    "Enter command (register-user, login, create-task, create-category, list-task, exit): ";

/// Commands that can run without an active session
fn requires_auth(command: &str) -> bool {
    !matches!(command, "register-user" | "exit" | "")
}

/// Run the command loop until the user exits.
///
/// `initial_command` seeds the first iteration; afterwards every command is
/// prompted for. Errors from individual commands are printed and the loop
/// continues.
pub fn run_shell(
    storage: &mut Storage,
    session: &mut Session,
    initial_command: Option<String>,
) -> VaultResult<()> {
    let mut current = initial_command.unwrap_or_default();

    loop {
        if current.is_empty() {
            match read_command()? {
                Some(command) => current = command,
                // stdin closed; treat it as an exit request
                None => {
                    println!();
                    println!("Exiting TaskVault");
                    session.clear();
                    return Ok(());
                }
            }
            if current.is_empty() {
                continue;
            }
        }

        if current == "exit" {
            println!("Exiting TaskVault");
            session.clear();
            return Ok(());
        }

        if let Err(e) = run_command(storage, session, &current) {
            println!("Error executing command: {}", e);
        }

        current.clear();
    }
}

fn run_command(storage: &mut Storage, session: &mut Session, command: &str) -> VaultResult<()> {
    // Everything except registration needs a signed-in user; prompt for
    // login on demand instead of rejecting the command.
    if requires_auth(command) && !session.is_authenticated() {
        login(storage, session)?;
    }

    match command {
        "register-user" => register_user(storage),
        "login" => login(storage, session),
        "create-category" => create_category(storage, session),
        "create-task" => create_task(storage, session),
        "list-task" => list_tasks(storage, session),
        other => Err(VaultError::Validation(format!("invalid command: {}", other))),
    }
}

fn register_user(storage: &mut Storage) -> VaultResult<()> {
    let name = prompt_line("Enter your name: ")?;
    let email = prompt_line("Enter your email: ")?;
    let password = prompt_password("Enter your password: ")?;
    if password.is_empty() {
        return Err(VaultError::Validation("password cannot be empty".into()));
    }

    let hashed = hash_password(&password)?;
    let user = storage.users.create(&name, &email, &hashed)?;

    println!("User registered: {} ({})", user.name, user.email);
    Ok(())
}

fn login(storage: &Storage, session: &mut Session) -> VaultResult<()> {
    let email = prompt_line("Enter your email: ")?;
    let password = prompt_password("Enter your password: ")?;

    let user = session.authenticate(&storage.users, &email, &password)?;
    println!("Login successful! Welcome {}", user.name);
    Ok(())
}

fn create_category(storage: &mut Storage, session: &Session) -> VaultResult<()> {
    let owner = session.current()?.id;

    let title = prompt_line("Enter category title: ")?;
    let color = prompt_line("Enter category color: ")?;

    let category = storage
        .categories
        .create(&title, &color, owner, &storage.users)?;

    println!("Category created: {} ({})", category.title, category.color);
    Ok(())
}

fn create_task(storage: &mut Storage, session: &Session) -> VaultResult<()> {
    let creator = session.current()?.id;

    let title = prompt_line("Enter task title: ")?;

    let raw_id = prompt_line("Enter category ID: ")?;
    let category_id: CategoryId = raw_id
        .parse()
        .map_err(|_| VaultError::Validation(format!("invalid category ID: {}", raw_id)))?;

    let due_date = prompt_line("Enter due date (YYYY-MM-DD): ")?;

    storage
        .tasks
        .create(&title, &due_date, category_id, creator, &storage.categories)?;

    println!("Task created successfully");
    Ok(())
}

fn list_tasks(storage: &Storage, session: &Session) -> VaultResult<()> {
    let user = session.current()?;
    let tasks = storage.tasks.owned_by(user.id);

    println!("\nYour Tasks:");
    println!("{}", format_task_table(&tasks, &storage.categories));
    Ok(())
}

/// Prompt for the next command; `None` means stdin reached EOF
fn read_command() -> VaultResult<Option<String>> {
    print!("{}", COMMAND_PROMPT);
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_line(prompt: &str) -> VaultResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_password(prompt: &str) -> VaultResult<String> {
    let password = rpassword::prompt_password(prompt)?;
    Ok(password.trim().to_string())
}
