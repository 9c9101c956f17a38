use crate::api::tracking_time::Task;

pub struct View {}

impl View {
    /// Project/Name/ID block for the currently tracked task.
    pub fn active_task(task: &Task) {
        println!("Project: {}", task.project);
        println!("Name: {}", task.name);
        println!("ID: {}", task.id);
    }

    /// Sync outcome: server message, then the recomputed duration.
    pub fn sync(message: &str, duration: &str) {
        println!("{}", message);
        println!("{}", duration);
    }
}
