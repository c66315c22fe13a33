use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(file: &Path) -> Result<(), String> {
    let content = super::load_quiz(file)?;
    let graph = &content.questions;
    let reachable = graph.reachable();

    if !graph.is_empty() {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["#", "Question", "Answers", "Leads to"]);

        for (index, question) in graph.iter().enumerate() {
            let targets: Vec<String> = question
                .answers
                .iter()
                .map(|a| a.next.map_or_else(|| "end".to_string(), |n| n.to_string()))
                .collect();
            table.add_row(vec![
                index.to_string(),
                super::truncate(&question.text, 60),
                question.answers.len().to_string(),
                targets.join(", "),
            ]);
        }

        println!("{table}");
        println!();
    }

    for index in (0..graph.len()).filter(|i| !reachable.contains(i)) {
        println!(
            "  {} question {index} is never reached from question 0",
            "warning:".yellow()
        );
    }

    let issues = graph.validate();
    for issue in &issues {
        println!("  {} {issue}", "error:".red());
    }

    if !issues.is_empty() {
        return Err(format!(
            "{} issue{} found in '{}'",
            issues.len(),
            if issues.len() == 1 { "" } else { "s" },
            file.display()
        ));
    }

    let title = content.title.as_deref().unwrap_or("quiz");
    println!("  All checks passed for '{title}'.");
    println!(
        "  {} questions, {} answers",
        graph.len(),
        graph.iter().map(|q| q.answers.len()).sum::<usize>()
    );

    Ok(())
}
