pub mod check;
pub mod init;
pub mod play;

use std::path::Path;

use sl_core::QuizContent;
use tracing::debug;

/// Load a quiz file, describing failures for the terminal.
fn load_quiz(path: &Path) -> Result<QuizContent, String> {
    let content = QuizContent::from_path(path)
        .map_err(|e| format!("cannot load '{}': {e}", path.display()))?;
    debug!(
        file = %path.display(),
        questions = content.questions.len(),
        "quiz loaded"
    );
    Ok(content)
}

/// Shorten text to fit a table cell.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
