//! Slash command interaction handler.
//!
//! Copies the options, applies the admin capability check, runs the command and sends
//! the reply. Failures are sent as ephemeral messages so only the invoking member sees
//! them.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::server::bot::{
    command::{dispatch, option::CommandInput, CommandContext, CommandReply},
    handler::Handler,
    permission::{is_admin, requires_admin},
};

const PERMISSION_DENIED: &str = "You do not have permission to use this command.";

/// Handles one slash command invocation.
///
/// # Arguments
/// - `handler` - Bot handler holding the database, resolver and admin roles
/// - `ctx` - Discord context for sending the response
/// - `command` - The invoked command
pub async fn handle_command(handler: &Handler, ctx: Context, command: CommandInteraction) {
    let name = command.data.name.as_str();
    let actor_id = command.user.id.get();

    tracing::debug!("Command /{} invoked by {}", name, actor_id);

    let message = if requires_admin(name) && !actor_is_admin(handler, &command) {
        tracing::warn!("User {} was denied /{}", actor_id, name);
        CreateInteractionResponseMessage::new()
            .content(PERMISSION_DENIED)
            .ephemeral(true)
    } else {
        let input = CommandInput::from_resolved(&command.data.options());
        let command_ctx = CommandContext {
            db: &handler.db,
            identity: handler.identity.as_ref(),
            league: &handler.league,
            actor_id,
        };

        match dispatch(&command_ctx, name, &input).await {
            Ok(CommandReply::Text(text)) => CreateInteractionResponseMessage::new().content(text),
            Ok(CommandReply::Embed(embed)) => CreateInteractionResponseMessage::new().embed(embed),
            Err(err) => CreateInteractionResponseMessage::new()
                .content(err.user_message())
                .ephemeral(true),
        }
    };

    if let Err(e) = command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        tracing::error!("Failed to respond to /{}: {}", name, e);
    }
}

fn actor_is_admin(handler: &Handler, command: &CommandInteraction) -> bool {
    match &command.member {
        Some(member) => is_admin(member.permissions, &member.roles, &handler.admin_role_ids),
        None => false,
    }
}
