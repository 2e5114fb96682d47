use crate::dto::reply::ApiReply;
use crate::dto::request::Action;
use crate::page::Page;
use crate::render::{DELETED_NOTICE, SERVER_ERROR_NOTICE, SUCCESS_NOTICE};
use crate::transport::{ApiError, ApiResult};

/// Reflects the outcome of one action back into the page.
pub fn render_outcome(page: &mut Page, action: Action, outcome: ApiResult<ApiReply>) {
    match outcome {
        Ok(ApiReply::Customer(customer)) => {
            page.form.write_form(&customer);
            page.message.set(SUCCESS_NOTICE);
        }
        Ok(ApiReply::Deleted) => {
            page.form.clear_form();
            page.message.set(DELETED_NOTICE);
        }
        Ok(ApiReply::Listing(summaries)) => {
            page.results.set(&summaries);
            page.message.set(SUCCESS_NOTICE);
        }
        Err(err) => render_failure(page, action, &err),
    }
}

fn render_failure(page: &mut Page, action: Action, err: &ApiError) {
    match action {
        // The delete error body is never consulted.
        Action::Delete => {
            log::error!("{action} failed: {err}");
            page.message.set(SERVER_ERROR_NOTICE);
        }
        Action::Retrieve => {
            page.form.clear_form();
            surface_message(page, action, err);
        }
        _ => surface_message(page, action, err),
    }
}

/// Shows the server's message; without one the slot keeps its previous text.
fn surface_message(page: &mut Page, action: Action, err: &ApiError) {
    match err.message() {
        Some(message) => page.message.set(message),
        None => log::warn!("{action} failed without a server message: {err}"),
    }
}
