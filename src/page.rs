//! The customer page: the only state that outlives an action.

use crate::forms::customer::CustomerForm;
use crate::render::{MessageSlot, ResultsTable};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
    pub form: CustomerForm,
    pub message: MessageSlot,
    pub results: ResultsTable,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }
}
