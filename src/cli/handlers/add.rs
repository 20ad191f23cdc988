use crate::error::Result;
use crate::model::{Project, Task};
use crate::prompt::Prompter;

use super::ActionContext;

/// Answer that ends the task entry loop. Compared exactly, so `"N"` keeps going.
const STOP_ADDING: &str = "n";

pub async fn handle_add<P: Prompter>(ctx: &mut ActionContext<P>) -> Result<()> {
    let title = ctx.prompter.ask("Enter project title: ").await?;
    let priority = coerce_priority(&ctx.prompter.ask("Enter project priority: ").await?);

    let mut tasks = Vec::new();
    loop {
        let task_title = ctx.prompter.ask("Enter task title: ").await?;
        let task_status = ctx.prompter.ask("Enter task status: ").await?;
        tasks.push(Task::new(task_title, task_status));

        if ctx.prompter.ask("Add another task? (y/n): ").await? == STOP_ADDING {
            break;
        }
    }

    tracing::info!(title = %title, priority, tasks = tasks.len(), "Adding project");
    ctx.projects.append(Project::new(title, priority, tasks));
    Ok(())
}

/// Best-effort integer parse: optional leading whitespace and sign, then as
/// many digits as are present. No digits gives `0`; overflow saturates.
pub fn coerce_priority(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .fold(0i64, |acc, digit| {
            if negative {
                acc.saturating_mul(10).saturating_sub(digit)
            } else {
                acc.saturating_mul(10).saturating_add(digit)
            }
        })
}
