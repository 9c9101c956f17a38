#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    NoActiveTasks,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigModuleTrackingTime,
    TrackingTimeConfigNotFound,

    // === PROMPTS ===
    PromptUsername,
    PromptPassword,
    PromptUserId,
    PromptApiUrl,
}
