//! HTTP routes for the contact book.

use axum::{
    Form, Router,
    extract::{Path, State},
    http::{HeaderMap, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::errors::AppError;
use crate::validation::{ContactForm, validate_contact};
use crate::web::{
    flash::{self, Flash},
    pages,
    state::AppState,
};

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/contact", get(contact_list).post(contact_create))
        .route("/contact/add", get(contact_add_form))
        // A contact named "update" is still reachable by GET.
        .route(
            "/contact/update",
            get(contact_detail_named_update).post(contact_update),
        )
        .route("/contact/edit/{name}", get(contact_edit_form))
        // Rendered pages POST here; GET behaves identically.
        .route(
            "/contact/delete/{name}",
            get(contact_delete).post(contact_delete),
        )
        .route("/contact/{name}", get(contact_detail))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn redirect_with_flash(flash: Flash) -> Response {
    (
        [(SET_COOKIE, flash.set_cookie())],
        Redirect::to("/contact"),
    )
        .into_response()
}

async fn home() -> impl IntoResponse {
    pages::home()
}

async fn about() -> impl IntoResponse {
    pages::about()
}

async fn not_found() -> impl IntoResponse {
    pages::not_found()
}

async fn contact_list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let contacts = state.store.load_all()?;
    let pending = Flash::from_headers(&headers);
    let page = pages::contact_list(&contacts, pending);

    match pending {
        Some(_) => Ok(([(SET_COOKIE, flash::CLEAR_COOKIE)], page).into_response()),
        None => Ok(page.into_response()),
    }
}

async fn contact_add_form() -> impl IntoResponse {
    pages::add_form(&ContactForm::default(), &[])
}

async fn contact_create(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let form = form.trimmed();

    let _guard = state.lock_writes().await;
    let name_taken = state.store.is_duplicate(&form.name)?;

    match validate_contact(&form, None, name_taken) {
        Ok(contact) => {
            tracing::info!(name = %contact.name, "contact added");
            state.store.add(contact)?;
            Ok(redirect_with_flash(Flash::Added))
        }
        Err(AppError::Validation(errors)) => {
            tracing::debug!(?errors, "rejected new contact");
            Ok(pages::add_form(&form, &errors).into_response())
        }
        Err(e) => Err(e),
    }
}

async fn contact_edit_form(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    let contact = state
        .store
        .find(&name)?
        .ok_or_else(|| AppError::NotFound(format!("Contact '{}'", name)))?;

    Ok(pages::edit_form(&ContactForm::from_contact(&contact), &[]).into_response())
}

async fn contact_update(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let form = form.trimmed();
    let old_name = form.old_name.clone().unwrap_or_default();

    let _guard = state.lock_writes().await;
    let name_taken = state.store.is_duplicate(&form.name)?;

    match validate_contact(&form, Some(old_name.as_str()), name_taken) {
        Ok(contact) => {
            tracing::info!(old_name = %old_name, name = %contact.name, "contact edited");
            state.store.update(&old_name, contact)?;
            Ok(redirect_with_flash(Flash::Edited))
        }
        Err(AppError::Validation(errors)) => {
            tracing::debug!(?errors, "rejected contact edit");
            Ok(pages::edit_form(&form, &errors).into_response())
        }
        Err(e) => Err(e),
    }
}

async fn contact_delete(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    let _guard = state.lock_writes().await;

    if state.store.find(&name)?.is_none() {
        return Err(AppError::NotFound(format!("Contact '{}'", name)));
    }

    state.store.delete(&name)?;
    tracing::info!(name = %name, "contact deleted");
    Ok(redirect_with_flash(Flash::Deleted))
}

async fn contact_detail(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    render_detail(&state, &name)
}

async fn contact_detail_named_update(
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    render_detail(&state, "update")
}

fn render_detail(state: &AppState, name: &str) -> Result<Response, AppError> {
    let contact = state
        .store
        .find(name)?
        .ok_or_else(|| AppError::NotFound(format!("Contact '{}'", name)))?;

    Ok(pages::detail(&contact).into_response())
}
