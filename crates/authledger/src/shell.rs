//! Interactive terminal shell.
//!
//! Two views, switched on the session status: a signed-out menu offering
//! login and signup, and a home view showing the signed-in account with
//! a logout action. Error messages come verbatim from the core.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use authledger_core::SessionManager;

/// Drive the prompt loop until the user quits or input ends.
pub async fn run(manager: &SessionManager) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let next = if manager.current_user().is_some() {
            home_view(manager, &mut lines).await?
        } else {
            auth_view(manager, &mut lines).await?
        };
        if next == Flow::Quit {
            println!("Bye.");
            return Ok(());
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

async fn auth_view(manager: &SessionManager, lines: &mut Lines<BufReader<Stdin>>) -> anyhow::Result<Flow> {
    println!();
    println!("== AuthLedger ==");
    println!("  1) Login");
    println!("  2) Sign up");
    println!("  q) Quit");

    let Some(choice) = prompt(lines, "> ").await? else {
        return Ok(Flow::Quit);
    };
    match choice.trim() {
        "1" => {
            let Some(email) = prompt(lines, "Email: ").await? else {
                return Ok(Flow::Quit);
            };
            let Some(password) = prompt(lines, "Password: ").await? else {
                return Ok(Flow::Quit);
            };
            match manager.login(&email, &password).await {
                Ok(user) => println!("Welcome back, {}!", user.name),
                Err(e) => println!("Login failed: {e}"),
            }
        }
        "2" => {
            let Some(name) = prompt(lines, "Name: ").await? else {
                return Ok(Flow::Quit);
            };
            let Some(email) = prompt(lines, "Email: ").await? else {
                return Ok(Flow::Quit);
            };
            let Some(password) = prompt(lines, "Password: ").await? else {
                return Ok(Flow::Quit);
            };
            match manager.signup(&name, &email, &password).await {
                Ok(user) => println!("Account created. Welcome, {}!", user.name),
                Err(e) => {
                    // Show every failing field when there are several.
                    let fields = e.field_errors();
                    if fields.len() > 1 {
                        for field in fields {
                            println!("  {}: {}", field.field(), field.message());
                        }
                    } else {
                        println!("Signup failed: {e}");
                    }
                }
            }
        }
        "q" | "Q" => return Ok(Flow::Quit),
        other => println!("Unknown choice: {other}"),
    }
    Ok(Flow::Continue)
}

async fn home_view(manager: &SessionManager, lines: &mut Lines<BufReader<Stdin>>) -> anyhow::Result<Flow> {
    // current_user is present when this view is shown.
    let Some(user) = manager.current_user() else {
        return Ok(Flow::Continue);
    };

    println!();
    println!("== Welcome! ==");
    println!("  Name:  {}", user.name);
    println!("  Email: {}", user.email);
    println!("  l) Logout");
    println!("  q) Quit");

    let Some(choice) = prompt(lines, "> ").await? else {
        return Ok(Flow::Quit);
    };
    match choice.trim() {
        "l" | "L" => {
            manager.logout().await;
            println!("Signed out.");
        }
        "q" | "Q" => return Ok(Flow::Quit),
        other => println!("Unknown choice: {other}"),
    }
    Ok(Flow::Continue)
}

/// Print `label`, read one line. `None` means end of input.
///
/// Credential inputs are passed through untrimmed; the core's validation
/// decides what is acceptable.
async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> anyhow::Result<Option<String>> {
    print!("{label}");
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}
