mod add;
mod delete;
mod list;

pub use add::{coerce_priority, handle_add};
pub use delete::handle_delete;
pub use list::handle_list;

use crate::model::ProjectList;
use crate::prompt::Prompter;

/// State shared by every menu action: the single project list and the
/// prompter used to talk to the user.
pub struct ActionContext<P> {
    pub projects: ProjectList,
    pub prompter: P,
}

impl<P: Prompter> ActionContext<P> {
    pub fn new(projects: ProjectList, prompter: P) -> Self {
        Self { projects, prompter }
    }
}
