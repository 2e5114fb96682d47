use std::cell::RefCell;

use crate::dto::request::{Action, CustomerRequest};
use crate::forms::customer::CustomerForm;
use crate::forms::search::{QueryEncoding, SearchQuery};
use crate::page::Page;
use crate::render::render_outcome;
use crate::services::ServiceResult;
use crate::transport::CustomerTransport;

/// Builds the request for an action from the current form values.
///
/// Returns `None` for [`Action::Clear`], which sends nothing.
pub fn prepare_request(
    action: Action,
    form: &CustomerForm,
    encoding: QueryEncoding,
) -> ServiceResult<Option<CustomerRequest>> {
    let request = match action {
        Action::Create => CustomerRequest::Create(form.read_form()),
        Action::Update => {
            let (id, body) = form.read_form_with_id();
            CustomerRequest::Update { id, body }
        }
        Action::Retrieve => CustomerRequest::Retrieve {
            id: form.id().to_string(),
        },
        Action::Delete => CustomerRequest::Delete {
            id: form.id().to_string(),
        },
        Action::Unsubscribe => CustomerRequest::Unsubscribe {
            id: form.id().to_string(),
        },
        Action::Search => CustomerRequest::Search {
            query: SearchQuery::from_form(form).to_query_string(encoding)?,
        },
        Action::Clear => return Ok(None),
    };
    Ok(Some(request))
}

/// Runs one user action against the page.
///
/// The page is borrowed only to read the form and to render the outcome, never
/// across the await, so several actions may be in flight at once. Whichever
/// completes last writes last.
pub async fn perform<T>(
    transport: &T,
    page: &RefCell<Page>,
    action: Action,
    encoding: QueryEncoding,
) -> ServiceResult<()>
where
    T: CustomerTransport + ?Sized,
{
    let request = {
        let mut page = page.borrow_mut();
        match prepare_request(action, &page.form, encoding)? {
            Some(request) => request,
            None => {
                page.form.clear_all();
                return Ok(());
            }
        }
    };

    log::info!("{action}: {} {}", request.method(), request.path());
    let outcome = transport.send(&request).await;

    render_outcome(&mut page.borrow_mut(), action, outcome);
    Ok(())
}
