use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use sl_core::{QuizContent, pick_name};
use sl_engine::{EngineConfig, FinishedStory, Step, StoryEngine};

pub fn run(file: &Path, seed: Option<u64>, name: Option<&str>) -> Result<(), String> {
    let content = super::load_quiz(file)?;

    let player_name = match name {
        Some(name) => name.to_string(),
        None => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            pick_name(&mut rng, &content.names)
                .map_err(|e| format!("cannot choose a player name: {e}"))?
                .to_string()
        }
    };

    let mut config = EngineConfig::default().with_placeholder(content.placeholder.clone());
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut engine = StoryEngine::start(&content.questions, player_name, config)
        .map_err(|e| format!("failed to start quiz: {e}"))?;

    let title = content.title.as_deref().unwrap_or("Storyloom");
    println!("  {} {title}", "Starting".bold());
    println!("  Player: {}", engine.player_name());
    println!("  Type an answer number, 'quit' to exit.\n");
    print_question(&engine);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            println!("Goodbye!");
            break;
        }

        if engine.is_finished() {
            if input.eq_ignore_ascii_case("again") || input.eq_ignore_ascii_case("r") {
                engine.reset();
                println!();
                print_question(&engine);
            } else {
                println!("{}\n", "Type 'again' to play again or 'quit' to exit.".yellow());
            }
            continue;
        }

        let Some(index) = input.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) else {
            println!("{}\n", format!("'{input}' is not an answer number").yellow());
            continue;
        };

        let finished = match engine.choose(index) {
            Ok(Step::Finished(story)) => Some(story),
            Ok(Step::Question { .. }) => None,
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
                continue;
            }
        };

        match finished {
            Some(story) => print_result(&content, &story),
            None => print_question(&engine),
        }
    }

    Ok(())
}

fn print_question(engine: &StoryEngine) {
    let Ok(question) = engine.current_question() else {
        return;
    };
    let progress = engine.progress();
    println!(
        "  [{}/{}] {}",
        progress.position + 1,
        progress.total,
        question.text.bold()
    );
    for (i, answer) in question.answers.iter().enumerate() {
        println!("    {}. {}", i + 1, answer.text);
    }
    println!();
}

fn print_result(content: &QuizContent, story: &FinishedStory) {
    println!();
    println!("  {}", story.narrate(&content.intro).bold());
    println!();
    println!("  Type 'again' to play again or 'quit' to exit.\n");
}
