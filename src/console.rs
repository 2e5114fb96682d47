//! Line commands understood by the interactive console.

use std::str::FromStr;
#[cfg(feature = "console")]
use std::{cell::RefCell, rc::Rc};

use crate::dto::request::Action;
use crate::forms::FormError;
use crate::forms::customer::{CustomerForm, FormField};
#[cfg(feature = "console")]
use crate::{
    forms::search::QueryEncoding, page::Page, services::customer::perform,
    transport::CustomerTransport,
};

pub const HELP: &str = "\
set <field> [value]   type into a field (empty value clears it)
create | update | retrieve | delete | search | unsubscribe | clear
show                  print the form and the current message
results               print the search results table as HTML
help | quit";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Set(FormField, String),
    Run(Action),
    Show,
    Results,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = FormError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        match verb {
            "set" => {
                let rest = rest.trim_start();
                let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(FormError::MissingArgument("set".to_string()));
                }
                Ok(Command::Set(field.parse()?, value.to_string()))
            }
            "show" => Ok(Command::Show),
            "results" => Ok(Command::Results),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => other.parse().map(Command::Run),
        }
    }
}

/// Formats the form one field per line, element id first.
pub fn describe_form(form: &CustomerForm) -> String {
    FormField::ALL
        .into_iter()
        .map(|field| format!("{:<22}{}", field.element_id(), form.get(field)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Runs an action on the current `LocalSet` without waiting for it.
///
/// The console keeps reading commands while the request is in flight;
/// `on_done` sees the page once the outcome has been rendered.
#[cfg(feature = "console")]
pub fn spawn_action<T, F>(
    transport: Rc<T>,
    page: Rc<RefCell<Page>>,
    action: Action,
    encoding: QueryEncoding,
    on_done: F,
) -> tokio::task::JoinHandle<()>
where
    T: CustomerTransport + ?Sized + 'static,
    F: FnOnce(&Page) + 'static,
{
    tokio::task::spawn_local(async move {
        if let Err(err) = perform(transport.as_ref(), &page, action, encoding).await {
            log::error!("{action} failed: {err}");
        }
        on_done(&page.borrow());
    })
}
