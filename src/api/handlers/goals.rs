// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Goal list, add and remove endpoints
//!
//! Empty or missing form fields are not rejected: the request just
//! redirects back to the list without touching storage or counters.

use axum::{
    Form,
    extract::{FromRequest, Multipart, Request, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::AppState;
use crate::error::AppError;
use crate::metrics::paths;

const GOALS_PATH: &str = "/goals";

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"))
}

/// First value of `field` in a urlencoded or multipart body.
///
/// A body that cannot be read as a form yields an empty string, so the
/// handler treats it like a missing field.
async fn form_value(req: Request, field: &str) -> String {
    if is_multipart(req.headers()) {
        let mut multipart = match Multipart::from_request(req, &()).await {
            Ok(multipart) => multipart,
            Err(e) => {
                tracing::debug!("Unreadable multipart body: {}", e);
                return String::new();
            }
        };
        while let Ok(Some(part)) = multipart.next_field().await {
            if part.name() == Some(field) {
                return part.text().await.unwrap_or_default();
            }
        }
        return String::new();
    }

    match Form::<Vec<(String, String)>>::from_request(req, &()).await {
        Ok(Form(pairs)) => pairs
            .into_iter()
            .find(|(key, _)| key == field)
            .map(|(_, value)| value)
            .unwrap_or_default(),
        Err(e) => {
            tracing::debug!("Unreadable form body: {}", e);
            String::new()
        }
    }
}

/// Plain-text 500; the error detail stays in the server log.
fn internal_error(message: &'static str) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
}

/// 302 Found, which is what form posts from the list view expect.
fn back_to_list() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, GOALS_PATH)]).into_response()
}

/// GET /goals
pub async fn list_goals(State(state): State<Arc<AppState>>) -> Response {
    match state.store.list_goals().await {
        Ok(goals) => {
            state.metrics.record_request(paths::LIST_GOALS);
            match state.view.render_goals(&goals) {
                Ok(page) => Html(page).into_response(),
                Err(e) => {
                    tracing::error!("Error rendering goal list: {}", e);
                    internal_error("Error rendering the page")
                }
            }
        }
        Err(e) => {
            tracing::error!("Error from querying database: {}", e);
            internal_error("Error querying the database")
        }
    }
}

/// POST /add_goal
pub async fn add_goal(State(state): State<Arc<AppState>>, req: Request) -> Response {
    let goal_name = form_value(req, "goal_name").await;
    if goal_name.is_empty() {
        tracing::debug!("Empty goal_name, nothing to add");
        return back_to_list();
    }

    if let Err(e) = state.store.insert_goal(&goal_name).await {
        tracing::error!("Error from inserting into database: {}", e);
        return internal_error("Error inserting into the database");
    }

    state.metrics.record_goal_added();
    state.metrics.record_request(paths::ADD_GOAL);
    back_to_list()
}

/// POST /remove_goal
pub async fn remove_goal(State(state): State<Arc<AppState>>, req: Request) -> Response {
    let goal_id = form_value(req, "goal_id").await;
    if goal_id.is_empty() {
        tracing::debug!("Empty goal_id, nothing to remove");
        return back_to_list();
    }

    let result = match goal_id.trim().parse::<i32>() {
        Ok(id) => state.store.delete_goal(id).await,
        Err(_) => Err(AppError::InvalidGoalId(goal_id.clone())),
    };
    if let Err(e) = result {
        tracing::error!("Error from deleting from database: {}", e);
        return internal_error("Error deleting from the database");
    }

    state.metrics.record_goal_removed();
    state.metrics.record_request(paths::REMOVE_GOAL);
    back_to_list()
}
