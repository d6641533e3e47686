//! REPL runner: converts teloxide messages to core Message and passes them to the
//! HandlerChain.

use crate::adapters::TelegramMessageWrapper;
use anyhow::Result;
use shortlink_core::{HandlerChain, ToCoreMessage};
use teloxide::prelude::*;
use tracing::{error, info, instrument};

/// Starts the REPL with the given teloxide Bot and HandlerChain. Each message is converted
/// to a core Message and passed to chain.handle (spawned per message so the REPL returns
/// immediately; per-user ordering is the conversation handler's queue's job).
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    let chain = handler_chain;
    teloxide::repl(
        bot,
        move |_bot: Bot, msg: teloxide::types::Message| {
            let chain = chain.clone();

            async move {
                let wrapper = TelegramMessageWrapper(&msg);
                let core_msg = wrapper.to_core();

                match msg.text() {
                    Some(text) => {
                        info!(
                            user_id = core_msg.user.id,
                            chat_id = core_msg.chat.id,
                            message_content = %text,
                            "Received message"
                        );
                    }
                    None => {
                        info!(
                            user_id = core_msg.user.id,
                            chat_id = core_msg.chat.id,
                            "Received non-text message"
                        );
                        return Ok(());
                    }
                }

                let chain_for_task = chain.clone();
                tokio::spawn(async move {
                    if let Err(e) = chain_for_task.handle(&core_msg).await {
                        error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                    }
                });

                Ok(())
            }
        },
    )
    .await;

    Ok(())
}
