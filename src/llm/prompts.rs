//! Prompt builders for the inference server.

/// Prompt for summarizing one chunk of a log file.
pub fn log_analysis(log_content: &str) -> String {
    format!(
        "You must respond in English only. Analyze this log chunk and provide a concise summary of key information found.\n\
         \n\
         Focus on:\n\
         - Errors and warnings\n\
         - Important events or state changes\n\
         - Performance issues\n\
         - Security-related messages\n\
         \n\
         Do not provide suggestions, recommendations, or improvements. Only report what is in the logs.\n\
         \n\
         Log:\n{log_content}"
    )
}

/// Prompt for scanning one chunk of a log file for leaked secrets.
pub fn secrets_in_logs(log_content: &str) -> String {
    format!(
        "Analyze this log chunk for secrets, errors and information.\n\
         Output only findings of secrets, errors or general data found, nothing else.\n\
         \n\
         Log:\n{log_content}"
    )
}

/// Prompt for assessing a formatted report of detected secrets.
pub fn secrets_report(report: &str) -> String {
    format!(
        "Analyze the following report of potential secrets detected in a repository.\n\
         \n\
         For each finding, provide:\n\
         1. The type of secret (API key, password, token, etc.)\n\
         2. Why it's a security risk\n\
         3. Recommendation for remediation\n\
         \n\
         Report:\n{report}"
    )
}
