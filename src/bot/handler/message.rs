use serenity::all::{Context, Message};
use tracing::trace;

use crate::{
    bot::dispatch::DispatchGate, model::message::InboundMessage,
    service::gateway::MessagingGateway,
};

/// Handle message creation in a channel
pub async fn handle_message(
    gate: &DispatchGate,
    gateway: &dyn MessagingGateway,
    ctx: &Context,
    message: Message,
) {
    let bot_user_id = ctx.cache.current_user().id;
    let inbound = InboundMessage::from_message(&message, bot_user_id);

    let outcome = gate.dispatch(gateway, inbound).await;

    trace!("Message {} dispatched: {:?}", message.id, outcome);
}
