// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource subcommands: list, create, update and delete.
//!
//! Every screen runs through a [`ResourceController`]; this module only adds
//! the role gate in front and the terminal output behind it.

use std::io::{BufRead, IsTerminal, Write};
use std::sync::Arc;

use clap::Subcommand;
use serde::Serialize;
use shelfsense_api::models::restock_task::{filter_by_id, filter_by_status};
use shelfsense_api::{ApiResource, HttpAdapter, RestockTask};
use shelfsense_core::{
    Capability, Entity, EntityId, FieldMap, ResourceAdapter, ResourceError, Role, ShelfError,
};
use shelfsense_resource::ResourceController;
use shelfsense_session::{Section, SessionStore, can_access};
use tracing::debug;

use crate::Context;
use crate::render::{self, Tabular};

/// Actions shared by every resource screen.
#[derive(Subcommand, Debug)]
pub enum ResourceAction {
    /// List every record.
    List {
        /// Print the records as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Create a record.
    Create {
        /// Field value, e.g. `--set productName=Rice`. Repeatable.
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Update a record; fields not given keep their current value.
    Update {
        id: i64,
        /// Field value, e.g. `--set productName=Rice`. Repeatable.
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Delete a record after confirmation.
    Delete {
        id: i64,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

/// Restock task actions; listing takes filters.
#[derive(Subcommand, Debug)]
pub enum RestockAction {
    /// List restock tasks.
    List {
        /// Only tasks with this status (case-insensitive).
        #[arg(long)]
        status: Option<String>,
        /// Only the task with this id; 0 means any. Combines with --status.
        #[arg(long)]
        id: Option<i64>,
        /// Print the tasks as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Create a restock task.
    Create {
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Update a restock task.
    Update {
        id: i64,
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Delete a restock task after confirmation.
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}

/// What a resource action produced.
#[derive(Debug)]
pub enum Outcome<E> {
    Listed(Vec<E>),
    Saved,
    Deleted { label: String },
    Kept { label: String },
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing field name in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Checks the stored role against the section and, for writes, the
/// inventory management capability.
pub fn authorize(
    store: &SessionStore,
    section: Section,
    action: &ResourceAction,
) -> Result<Role, ShelfError> {
    if !store.is_authenticated() {
        return Err(ShelfError::Unauthenticated);
    }
    let role = store.role();

    let mut required = vec![section.capability()];
    if !matches!(action, ResourceAction::List { .. }) {
        required.push(Capability::ManageInventory);
    }
    for capability in required {
        if !can_access(role, capability) {
            return Err(ShelfError::Forbidden { role, capability });
        }
    }
    Ok(role)
}

/// Drives `controller` through one action.
///
/// `confirm` is asked before a delete and receives the record label.
pub async fn execute<E, A>(
    controller: &ResourceController<E, A>,
    action: ResourceAction,
    confirm: &mut dyn FnMut(&str) -> Result<bool, ShelfError>,
) -> Result<Outcome<E>, ShelfError>
where
    E: Entity,
    A: ResourceAdapter<E> + ?Sized,
{
    match action {
        ResourceAction::List { .. } => {
            controller.load().await?;
            Ok(Outcome::Listed(controller.snapshot().items))
        }
        ResourceAction::Create { fields } => {
            controller.begin_create();
            controller.submit(fields.into_iter().collect()).await?;
            Ok(Outcome::Saved)
        }
        ResourceAction::Update { id, fields } => {
            let id = EntityId(id);
            controller.load().await?;
            if !controller.begin_edit_id(id) {
                return Err(ResourceError::NotFound.into());
            }
            let overrides: FieldMap = fields.into_iter().collect();
            let draft = controller.snapshot().draft.merged(&overrides);
            controller.submit(draft).await?;
            Ok(Outcome::Saved)
        }
        ResourceAction::Delete { id, yes } => {
            let id = EntityId(id);
            controller.load().await?;
            let label = controller
                .snapshot()
                .find(id)
                .map(Entity::label)
                .ok_or(ResourceError::NotFound)?;

            controller.request_delete(id, label.clone());
            if !yes && !confirm(&label)? {
                controller.cancel_delete();
                return Ok(Outcome::Kept { label });
            }
            controller.confirm_delete().await?;
            Ok(Outcome::Deleted { label })
        }
    }
}

/// Run a resource subcommand against the HTTP backend.
pub async fn run<E>(ctx: &Context, section: Section, action: ResourceAction) -> Result<(), ShelfError>
where
    E: ApiResource + Tabular + Serialize,
{
    let json = matches!(action, ResourceAction::List { json: true });
    let outcome = perform::<E>(ctx, section, action).await?;
    match outcome {
        Outcome::Listed(items) => print_items(&items, json, ctx.use_color)?,
        other => print_outcome(&other),
    }
    Ok(())
}

/// Run a restock task subcommand; listing applies the status and id filters.
pub async fn run_restock(ctx: &Context, action: RestockAction) -> Result<(), ShelfError> {
    let (action, status, id, json) = match action {
        RestockAction::List { status, id, json } => {
            (ResourceAction::List { json }, status, id, json)
        }
        RestockAction::Create { fields } => (ResourceAction::Create { fields }, None, None, false),
        RestockAction::Update { id, fields } => {
            (ResourceAction::Update { id, fields }, None, None, false)
        }
        RestockAction::Delete { id, yes } => (ResourceAction::Delete { id, yes }, None, None, false),
    };

    match perform::<RestockTask>(ctx, Section::RestockTasks, action).await? {
        Outcome::Listed(tasks) => {
            let filtered = filter_tasks(&tasks, status.as_deref(), id.map(EntityId));
            print_items(&filtered, json, ctx.use_color)?;
        }
        other => print_outcome(&other),
    }
    Ok(())
}

/// Tasks kept by both the status and the id filter, in list order.
///
/// Each filter runs over the full list; an unset one keeps everything.
pub fn filter_tasks(tasks: &[RestockTask], status: Option<&str>, id: Option<EntityId>) -> Vec<RestockTask> {
    let by_status = filter_by_status(tasks, status.unwrap_or_default());
    let by_id = filter_by_id(tasks, id);
    by_status
        .into_iter()
        .filter(|t| by_id.iter().any(|kept| kept.task_id == t.task_id))
        .cloned()
        .collect()
}

async fn perform<E: ApiResource>(
    ctx: &Context,
    section: Section,
    action: ResourceAction,
) -> Result<Outcome<E>, ShelfError> {
    let role = authorize(&ctx.session, section, &action)?;
    debug!(kind = E::KIND, %role, ?action, "running resource action");

    let controller = ResourceController::new(Arc::new(HttpAdapter::<E>::new(ctx.client.clone())));
    let result = execute(&controller, action, &mut confirm_on_terminal).await;
    render::print_notices(&controller.take_notices(), ctx.use_color);
    result
}

fn print_items<E: Tabular + Serialize>(
    items: &[E],
    json: bool,
    use_color: bool,
) -> Result<(), ShelfError> {
    if json {
        let text = serde_json::to_string_pretty(items)
            .map_err(|e| ShelfError::Internal(format!("failed to encode records: {e}")))?;
        println!("{text}");
    } else {
        render::print_table(items, use_color);
    }
    Ok(())
}

fn print_outcome<E>(outcome: &Outcome<E>) {
    match outcome {
        Outcome::Listed(_) | Outcome::Saved => {}
        Outcome::Deleted { label } => println!("deleted {label}"),
        Outcome::Kept { label } => println!("kept {label}"),
    }
}

fn confirm_on_terminal(label: &str) -> Result<bool, ShelfError> {
    if !std::io::stdin().is_terminal() {
        return Err(ShelfError::Internal(
            "refusing to delete without --yes when stdin is not a terminal".to_string(),
        ));
    }
    eprint!("Delete {label}? [y/N] ");
    std::io::stderr()
        .flush()
        .map_err(|e| ShelfError::Internal(format!("failed to flush prompt: {e}")))?;
    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|e| ShelfError::Internal(format!("failed to read answer: {e}")))?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
