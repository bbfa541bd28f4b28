use serenity::async_trait;

use crate::{
    bot::{command::Command, context::CommandContext},
    error::AppError,
};

pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "!help"
    }

    fn usage(&self) -> &'static str {
        "!help"
    }

    fn description(&self) -> &'static str {
        "Lists the available commands"
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<(), AppError> {
        let lines: Vec<String> = ctx
            .commands
            .iter()
            .map(|command| format!("`{}` - {}", command.usage(), command.description()))
            .collect();

        ctx.reply(format!("**Commands**\n{}", lines.join("\n")))
            .await
    }
}
