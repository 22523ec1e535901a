// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `shelfsense login`, `logout` and `whoami`.

use std::io::{BufRead, IsTerminal, Write};

use shelfsense_api::HttpAuthGateway;
use shelfsense_core::{AuthError, Role, ShelfError};
use shelfsense_security::{RedactingWriter, SecretList};
use shelfsense_session::{AuthGateway, Credentials, Landing, NavigationGate, SessionStore};
use tracing::info;

use crate::Context;

/// Environment variable consulted before prompting for a password.
pub const PASSWORD_ENV_VAR: &str = "SHELFSENSE_PASSWORD";

/// Run the `shelfsense login` command.
pub async fn run_login(ctx: &Context, email: Option<String>) -> Result<(), ShelfError> {
    let email = match email {
        Some(email) => email,
        None => prompt_line("Email: ")?,
    };
    let password = read_password()?;
    let credentials = Credentials::new(email, password);

    let gateway = HttpAuthGateway::new(&ctx.client);
    let (role, landing) = sign_in(&gateway, &ctx.session, &ctx.secrets, &credentials).await?;

    if ctx.use_color {
        use colored::Colorize;
        println!("{} signed in as {}", "✓".green(), role.to_string().bold());
    } else {
        println!("[OK] signed in as {role}");
    }
    println!("  landing: {landing}");
    Ok(())
}

/// Validates, exchanges and stores credentials.
///
/// A token without a usable role is refused and nothing is stored.
pub async fn sign_in(
    gateway: &dyn AuthGateway,
    store: &SessionStore,
    secrets: &SecretList,
    credentials: &Credentials,
) -> Result<(Role, Landing), ShelfError> {
    credentials.validate()?;

    let session = gateway.login(credentials).await?;
    let landing = Landing::for_role(session.role);
    if landing == Landing::Denied {
        info!("login refused: token carries no known role");
        return Err(ShelfError::Auth(AuthError::ServerError(
            "access token carries no recognized role".to_string(),
        )));
    }

    store.open(&session)?;
    for value in store.secret_values() {
        RedactingWriter::<std::io::Stderr>::add_secret(secrets, value);
    }
    Ok((session.role, landing))
}

/// Run the `shelfsense logout` command.
pub fn run_logout(ctx: &Context) -> Result<(), ShelfError> {
    let was_signed_in = ctx.session.is_authenticated();
    ctx.session.clear()?;
    RedactingWriter::<std::io::Stderr>::clear_secrets(&ctx.secrets);

    if was_signed_in {
        println!("signed out");
    } else {
        println!("no session to discard");
    }
    Ok(())
}

/// Run the `shelfsense whoami` command.
pub fn run_whoami(ctx: &Context, width: u32) -> Result<(), ShelfError> {
    if !ctx.session.is_authenticated() {
        return Err(ShelfError::Unauthenticated);
    }
    for line in describe(&ctx.session, width, ctx.config.navigation.mobile_breakpoint) {
        println!("{line}");
    }
    Ok(())
}

/// Role, landing and sidebar of the stored session, one line each.
pub fn describe(store: &SessionStore, width: u32, breakpoint: u32) -> Vec<String> {
    let role = store.role();
    let gate = NavigationGate::new(role, width, breakpoint);

    let mut lines = vec![
        format!("role:    {role}"),
        format!("landing: {}", Landing::for_role(role)),
    ];
    if let Some(issued) = store.issued_locally() {
        lines.push(format!("since:   {}", issued.to_rfc3339()));
    }
    lines.push(format!("layout:  {}", gate.layout()));

    let sections = gate.visible_sections();
    if sections.is_empty() {
        lines.push("menu:    (empty)".to_string());
    } else {
        lines.push("menu:".to_string());
        for section in sections {
            lines.push(format!("  {section}"));
            for page in section.pages() {
                lines.push(format!("    {page}  {}", page.route()));
            }
        }
    }
    lines
}

fn prompt_line(prompt: &str) -> Result<String, ShelfError> {
    eprint!("{prompt}");
    std::io::stderr()
        .flush()
        .map_err(|e| ShelfError::Internal(format!("failed to flush prompt: {e}")))?;
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| ShelfError::Internal(format!("failed to read input: {e}")))?;
    Ok(line.trim().to_string())
}

/// Password from `SHELFSENSE_PASSWORD` or an interactive prompt.
fn read_password() -> Result<String, ShelfError> {
    if let Ok(password) = std::env::var(PASSWORD_ENV_VAR)
        && !password.is_empty()
    {
        return Ok(password);
    }

    if std::io::stdin().is_terminal() {
        eprint!("Password: ");
        return rpassword::read_password()
            .map_err(|e| ShelfError::Internal(format!("failed to read password: {e}")));
    }

    Err(ShelfError::Internal(format!(
        "no password provided. Set {PASSWORD_ENV_VAR} or run interactively."
    )))
}
