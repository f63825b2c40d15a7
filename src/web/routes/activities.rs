use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Activity;
use crate::store::{RosterError, RosterStore};

#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

/// Error body shared by every roster endpoint: a single human-readable
/// `detail` string.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status = match self {
            RosterError::ActivityNotFound => StatusCode::NOT_FOUND,
            RosterError::AlreadySignedUp | RosterError::NotRegistered => StatusCode::BAD_REQUEST,
        };
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub async fn activities_handler(
    State(store): State<RosterStore>,
) -> Json<BTreeMap<String, Activity>> {
    Json(store.snapshot())
}

#[derive(Debug, Deserialize)]
pub struct RosterCommandQuery {
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterCommandQuery>,
    State(store): State<RosterStore>,
) -> Response {
    match store.signup(&activity_name, &query.email) {
        Ok(()) => Json(MessageBody {
            message: format!("Signed up {} for {}", query.email, activity_name),
        })
        .into_response(),
        Err(e) => {
            warn!("Signup for {} failed: {}", activity_name, e);
            e.into_response()
        }
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterCommandQuery>,
    State(store): State<RosterStore>,
) -> Response {
    match store.unregister(&activity_name, &query.email) {
        Ok(()) => Json(MessageBody {
            message: format!("Unregistered {} from {}", query.email, activity_name),
        })
        .into_response(),
        Err(e) => {
            warn!("Unregister from {} failed: {}", activity_name, e);
            e.into_response()
        }
    }
}
