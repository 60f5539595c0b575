//! Label types for Prometheus metrics

use prometheus_client::encoding::EncodeLabelSet;

/// Path label values used by `requests_total`
pub mod paths {
    pub const LIST_GOALS: &str = "/";
    pub const ADD_GOAL: &str = "/add_goal";
    pub const REMOVE_GOAL: &str = "/remove_goal";
    pub const HEALTH: &str = "/health";
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct PathLabels {
    pub path: String,
}

impl PathLabels {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}
