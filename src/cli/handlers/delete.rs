use crate::error::Result;
use crate::prompt::Prompter;
use colored::Colorize;

use super::ActionContext;

pub async fn handle_delete<P: Prompter>(ctx: &mut ActionContext<P>) -> Result<()> {
    // An empty menu could never be answered
    if ctx.projects.is_empty() {
        return ctx.prompter.say("No projects to delete.");
    }

    let titles = ctx.projects.titles();
    let options: Vec<&str> = titles.iter().map(String::as_str).collect();
    let index = ctx
        .prompter
        .pick("Which project do you want to delete?", &options)
        .await?;

    let project = ctx.projects.remove_at(index)?;
    tracing::info!(index, title = %project.title, "Deleted project");

    ctx.prompter
        .say(&format!("{} {}", "Project deleted:".red(), project.title))
}
