use crate::error::Result;
use crate::prompt::Prompter;

use super::ActionContext;

pub fn handle_list<P: Prompter>(ctx: &mut ActionContext<P>) -> Result<()> {
    let rendered = format!("\n\n{}\n", ctx.projects.format());
    ctx.prompter.say(&rendered)
}
