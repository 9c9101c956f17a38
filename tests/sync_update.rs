#[cfg(test)]
mod tests {
    use ttrack::api::tracking_time::{Event, Task, TaskUser, User};

    const USER_ID: i64 = 1;

    fn resolved_task() -> Task {
        Task {
            id: 42,
            name: "Y".to_string(),
            project: "X".to_string(),
            user: User {
                id: USER_ID,
                ..Default::default()
            },
            users: vec![TaskUser {
                id: USER_ID,
                event: Event {
                    id: 7,
                    formated_duration: "1:30:00".to_string(),
                },
            }],
            event: Event {
                id: 7,
                formated_duration: "1:30:00".to_string(),
            },
        }
    }

    #[test]
    fn test_update_replaces_fields_and_refreshes_event() {
        let mut task = resolved_task();
        let updated = Task {
            id: 42,
            name: "Y renamed".to_string(),
            project: "X".to_string(),
            user: task.user.clone(),
            users: vec![TaskUser {
                id: USER_ID,
                event: Event {
                    id: 7,
                    formated_duration: "1:45:00".to_string(),
                },
            }],
            event: Event::default(),
        };

        task.apply_update(updated, USER_ID);

        assert_eq!(task.name, "Y renamed");
        assert_eq!(task.event.id, 7);
        assert_eq!(task.event.formated_duration, "1:45:00");
    }

    #[test]
    fn test_update_without_user_entry_keeps_resolved_event() {
        let mut task = resolved_task();
        let updated = Task {
            users: Vec::new(),
            event: Event::default(),
            ..resolved_task()
        };

        task.apply_update(updated, USER_ID);

        assert_eq!(task.event.id, 7);
        assert_eq!(task.event.formated_duration, "1:30:00");
    }

    #[test]
    fn test_update_with_top_level_event_only_keeps_server_event() {
        let mut task = resolved_task();
        let updated = Task {
            users: Vec::new(),
            event: Event {
                id: 7,
                formated_duration: "2:00:00".to_string(),
            },
            ..resolved_task()
        };

        task.apply_update(updated, USER_ID);

        assert_eq!(task.event.formated_duration, "2:00:00");
    }
}
