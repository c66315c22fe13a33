use std::fs;
use std::path::Path;

use sl_core::QuizContent;

pub fn run(path: &Path) -> Result<(), String> {
    if path.exists() {
        return Err(format!("'{}' already exists", path.display()));
    }

    let json = QuizContent::sample()
        .to_json_pretty()
        .map_err(|e| format!("cannot serialize sample quiz: {e}"))?;
    fs::write(path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))?;

    println!("Created sample quiz {}", path.display());
    println!();
    println!("Get started:");
    println!("  # Edit the questions, answers, and fragments");
    println!("  sl check {}   # Validate the question graph", path.display());
    println!("  sl play {}    # Play it", path.display());

    Ok(())
}
