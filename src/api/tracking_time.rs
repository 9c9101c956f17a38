use super::{ApiError, ApiResponse};
use crate::libs::config::TrackingTimeConfig;
use crate::msg_debug;
use chrono::Local;
use reqwest::Client;
use serde::Deserialize;

const TRACKING_TASKS_URL: &str = "api/v2/tasks";
const TRACK_URL: &str = "api/v4/tasks/track";
const STOP_URL: &str = "api/v4/tasks/stop";
const SYNC_URL: &str = "api/v4/tasks/sync";
const TRACKING_FILTER: &str = "TRACKING";

/// Format the server expects for every `date` query parameter.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%:z";

/// A single tracked-time record attached to a user's assignment on a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Event {
    pub id: i64,
    #[serde(rename = "formatedDuration", alias = "formated_duration")]
    pub formated_duration: String,
}

/// User summary as reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub surname: String,
}

/// Per-user assignment on a task: the user id paired with that user's event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskUser {
    pub id: i64,
    pub event: Event,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub project: String,
    pub user: User,
    pub users: Vec<TaskUser>,
    /// Resolved tracking event of the configured user, copied out of `users`.
    pub event: Event,
}

impl Task {
    /// Picks the task currently tracked by `user_id` from a server-ordered list.
    ///
    /// The server is expected to return at most one tracked task per owning
    /// user; if it ever returns more, the first match wins. The matching
    /// task gets the user's event copied onto its `event` field. `None` is
    /// the normal "nothing is being tracked" outcome, not an error.
    pub fn find_active(tasks: Vec<Task>, user_id: i64) -> Option<Task> {
        for mut task in tasks {
            if task.user.id == user_id {
                task.adopt_user_event(user_id);
                return Some(task);
            }
        }
        None
    }

    /// Copies the first per-user event matching `user_id` onto the task.
    ///
    /// Returns `false` when no assignment matches; the task then keeps its
    /// current `event` value.
    fn adopt_user_event(&mut self, user_id: i64) -> bool {
        for user in &self.users {
            if user.id == user_id {
                self.event = user.event.clone();
                return true;
            }
        }
        false
    }

    /// Applies the task returned by the sync endpoint in place.
    ///
    /// The returned task replaces this one, then the per-user event is
    /// adopted again so the freshly recomputed duration lands on `event`.
    /// When the server omits both the matching assignment and a top-level
    /// event, the previously resolved event is kept.
    pub fn apply_update(&mut self, updated: Task, user_id: i64) {
        let previous_event = std::mem::take(&mut self.event);
        *self = updated;
        if !self.adopt_user_event(user_id) && self.event == Event::default() {
            self.event = previous_event;
        }
    }
}

/// TrackingTime API client.
///
/// Wraps a `reqwest::Client` preset with the configured base URL and HTTP
/// basic auth credentials. Each method performs exactly one GET request and
/// unwraps the response envelope.
#[derive(Debug)]
pub struct TrackingTime {
    client: Client,
    config: TrackingTimeConfig,
}

impl TrackingTime {
    pub fn new(config: &TrackingTimeConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<ApiResponse, ApiError> {
        let url = format!("{}/{}", self.config.api_url.trim_end_matches('/'), path);
        msg_debug!(format!("GET {}", url));

        let res = self
            .client
            .get(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .query(query)
            .send()
            .await?;

        let body = res.bytes().await?;
        ApiResponse::from_bytes(&body)
    }

    /// Tasks the server currently reports as being tracked, in server order.
    pub async fn tracking_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let response = self.get(TRACKING_TASKS_URL, &[("filter", TRACKING_FILTER.to_string())]).await?;
        response.decode()
    }

    /// The task currently tracked by the configured user, if any.
    pub async fn active_task(&self) -> Result<Option<Task>, ApiError> {
        let tasks = self.tracking_tasks().await?;
        Ok(Task::find_active(tasks, self.config.user_id))
    }

    /// Starts tracking the task, stopping whatever task was running before.
    ///
    /// Returns the server's status message.
    pub async fn start_tracking(&self, id: i64) -> Result<String, ApiError> {
        let response = self
            .get(&format!("{}/{}", TRACK_URL, id), &[("stop_running_task", "true".to_string()), ("date", now())])
            .await?;
        Ok(response.message().to_string())
    }

    /// Stops tracking the task. Returns the server's status message.
    pub async fn stop_tracking(&self, id: i64) -> Result<String, ApiError> {
        let response = self.get(&format!("{}/{}", STOP_URL, id), &[("date", now())]).await?;
        Ok(response.message().to_string())
    }

    /// Syncs elapsed time for the task's resolved event.
    ///
    /// The task is updated in place with the server-recomputed state and the
    /// status message is returned.
    pub async fn sync_task(&self, task: &mut Task) -> Result<String, ApiError> {
        let response = self
            .get(
                &format!("{}/{}", SYNC_URL, task.id),
                &[
                    ("event_id", task.event.id.to_string()),
                    ("date", now()),
                    ("return_task", "true".to_string()),
                ],
            )
            .await?;
        task.apply_update(response.decode()?, self.config.user_id);
        Ok(response.message().to_string())
    }
}

/// Current local time in the format the API expects for `date` parameters.
pub fn now() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}
