//! The interactive menu loop.
//!
//! [`App`] owns the project list for the whole run. It starts in
//! [`AppState::Running`], dispatches one menu action per iteration and moves
//! to [`AppState::Exiting`] when the user picks "Exit" or the prompter
//! reports an interrupt. [`App::shutdown`] then saves the list.

use crate::cli::handlers::{ActionContext, handle_add, handle_delete, handle_list};
use crate::error::{PrioError, Result};
use crate::model::ProjectList;
use crate::prompt::Prompter;
use crate::storage::JsonStore;

const MENU_PROMPT: &str = "What do you want to do?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddProject,
    ListProjects,
    DeleteProject,
    Exit,
}

impl Action {
    /// Menu order shown to the user.
    pub const ALL: [Action; 4] = [
        Action::AddProject,
        Action::ListProjects,
        Action::DeleteProject,
        Action::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::AddProject => "Add project",
            Action::ListProjects => "List projects",
            Action::DeleteProject => "Delete project",
            Action::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user chose "Exit".
    Requested,
    /// A shutdown signal arrived or input ran out.
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Running,
    Exiting(ExitReason),
}

pub struct App<P> {
    store: JsonStore,
    ctx: ActionContext<P>,
    state: AppState,
}

impl<P: Prompter> App<P> {
    pub fn new(store: JsonStore, projects: ProjectList, prompter: P) -> Self {
        Self {
            store,
            ctx: ActionContext::new(projects, prompter),
            state: AppState::Running,
        }
    }

    /// Build the app from whatever the store currently holds.
    pub fn load(store: JsonStore, prompter: P) -> Result<Self> {
        let projects = store.load()?;
        Ok(Self::new(store, projects, prompter))
    }

    pub fn projects(&self) -> &ProjectList {
        &self.ctx.projects
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    /// Run menu iterations until the app leaves [`AppState::Running`].
    ///
    /// An interrupt drops any half-entered project and ends the loop
    /// normally. Any other error ends it with that error; the list as it
    /// stood is still available to [`App::shutdown`].
    pub async fn run(&mut self) -> Result<ExitReason> {
        loop {
            let next = match self.step().await {
                Ok(next) => next,
                Err(PrioError::Interrupted) => {
                    tracing::info!("Interrupted, leaving menu loop");
                    if let Err(e) = self.ctx.prompter.say("\n\n saving and exiting\n") {
                        tracing::warn!(error = %e, "Failed to write exit notice");
                    }
                    AppState::Exiting(ExitReason::Interrupted)
                }
                Err(e) => return Err(e),
            };

            self.state = next;
            if let AppState::Exiting(reason) = next {
                return Ok(reason);
            }
        }
    }

    async fn step(&mut self) -> Result<AppState> {
        let labels = Action::ALL.map(Action::label);
        let index = self.ctx.prompter.pick(MENU_PROMPT, &labels).await?;
        let action = Action::ALL
            .get(index)
            .copied()
            .ok_or(PrioError::IndexOutOfRange {
                index,
                len: Action::ALL.len(),
            })?;

        tracing::debug!(?action, "Dispatching menu action");
        match action {
            Action::AddProject => handle_add(&mut self.ctx).await?,
            Action::ListProjects => handle_list(&mut self.ctx)?,
            Action::DeleteProject => handle_delete(&mut self.ctx).await?,
            Action::Exit => return Ok(AppState::Exiting(ExitReason::Requested)),
        }
        Ok(AppState::Running)
    }

    /// Save the final list and hand it back. Consumes the app, so the list
    /// is written at most once per run.
    pub fn shutdown(self) -> Result<ProjectList> {
        self.store.save(&self.ctx.projects)?;
        Ok(self.ctx.projects)
    }
}
