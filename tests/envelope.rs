#[cfg(test)]
mod tests {
    use ttrack::api::tracking_time::Task;
    use ttrack::api::{ApiError, ApiResponse};

    const TASK_LIST_BODY: &[u8] = br#"{
        "response": {"message": "success"},
        "data": [
            {
                "id": 42,
                "name": "Y",
                "project": "X",
                "user": {"id": 1, "name": "Kirill", "surname": "L"},
                "users": [{"id": 1, "event": {"id": 7, "formatedDuration": "1:30:00"}}]
            }
        ]
    }"#;

    #[test]
    fn test_decodes_envelope_message() {
        let response = ApiResponse::from_bytes(TASK_LIST_BODY).unwrap();
        assert_eq!(response.message(), "success");
    }

    #[test]
    fn test_decodes_payload_into_task_list() {
        let response = ApiResponse::from_bytes(TASK_LIST_BODY).unwrap();
        let tasks: Vec<Task> = response.decode().unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 42);
        assert_eq!(tasks[0].name, "Y");
        assert_eq!(tasks[0].project, "X");
        assert_eq!(tasks[0].user.id, 1);
        assert_eq!(tasks[0].users[0].event.formated_duration, "1:30:00");
    }

    #[test]
    fn test_message_survives_absent_payload() {
        let body = br#"{"response": {"message": "Tracking started"}}"#;
        let response = ApiResponse::from_bytes(body).unwrap();
        assert_eq!(response.message(), "Tracking started");
    }

    #[test]
    fn test_message_survives_null_payload() {
        let body = br#"{"response": {"message": "Tracking stopped"}, "data": null}"#;
        let response = ApiResponse::from_bytes(body).unwrap();
        assert_eq!(response.message(), "Tracking stopped");
    }

    #[test]
    fn test_decoding_absent_payload_fails() {
        let body = br#"{"response": {"message": "ok"}, "data": null}"#;
        let response = ApiResponse::from_bytes(body).unwrap();
        let result = response.decode::<Vec<Task>>();
        assert!(matches!(result, Err(ApiError::MissingPayload)));
    }

    #[test]
    fn test_decoding_mismatched_payload_fails() {
        // The payload is an object, not the task list the caller asks for.
        let body = br#"{"response": {"message": "ok"}, "data": {"id": 1}}"#;
        let response = ApiResponse::from_bytes(body).unwrap();
        let result = response.decode::<Vec<Task>>();
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_invalid_outer_bytes_fail() {
        let result = ApiResponse::from_bytes(b"not json at all");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_missing_message_fails() {
        let body = br#"{"response": {}, "data": []}"#;
        let result = ApiResponse::from_bytes(body);
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_decoding_is_idempotent() {
        let first = ApiResponse::from_bytes(TASK_LIST_BODY).unwrap();
        let second = ApiResponse::from_bytes(TASK_LIST_BODY).unwrap();

        assert_eq!(first.message(), second.message());
        let first_tasks: Vec<Task> = first.decode().unwrap();
        let second_tasks: Vec<Task> = second.decode().unwrap();
        assert_eq!(first_tasks, second_tasks);

        // Re-decoding the same payload yields the same result again.
        let again: Vec<Task> = first.decode().unwrap();
        assert_eq!(first_tasks, again);
    }

    #[test]
    fn test_snake_case_duration_key_is_accepted() {
        let body = br#"{
            "response": {"message": "ok"},
            "data": [{"id": 1, "users": [{"id": 1, "event": {"id": 2, "formated_duration": "0:10:00"}}]}]
        }"#;
        let response = ApiResponse::from_bytes(body).unwrap();
        let tasks: Vec<Task> = response.decode().unwrap();
        assert_eq!(tasks[0].users[0].event.formated_duration, "0:10:00");
    }
}
