use crossterm::style::Stylize;
use morph_core::{AnalyzerConfig, MorphAnalyzer, Parse};
use std::io::{stdin, stdout, BufRead, Write};
use std::path::PathBuf;
use tracing::Level;

const CONFIG_ENV: &str = "MORPH_CONFIG";

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => match AnalyzerConfig::from_json_file(&PathBuf::from(path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[ERROR] {e}");
                std::process::exit(2);
            }
        },
        None => AnalyzerConfig::from_env(),
    };
    if let Some(path) = std::env::args_os().nth(1) {
        config.dict_path = Some(PathBuf::from(path));
    }

    let morph = match MorphAnalyzer::new(&config) {
        Ok(morph) => morph,
        Err(e) => {
            eprintln!("[ERROR] Could not load dictionary: {e}");
            eprintln!("usage: morph_repl <dictionary-dir>  (or set MORPH_DICT_PATH)");
            std::process::exit(1);
        }
    };

    println!("Morphological analyzer ({}). Type a word, ':lexeme <word>', ':inflect <word> <grammemes>' or 'exit'.", morph.language());
    println!("---------------------------------------------------------------");
    prompt();

    for line in stdin().lock().lines() {
        let Ok(line) = line else { break };
        let input = line.trim();
        match input.split_whitespace().collect::<Vec<_>>().as_slice() {
            [] => {}
            ["exit"] => break,
            [":lexeme", word] => {
                if let Some(parse) = morph.parse(word).first() {
                    for form in morph.lexeme(parse) {
                        println!("  {:<20} {}", form.word(), form.tag().to_string().dark_grey());
                    }
                }
            }
            [":inflect", word, grammemes] => {
                let required: Vec<&str> = grammemes.split(',').collect();
                match morph.parse(word).first().map(|p| morph.inflect(p, &required)) {
                    Some(Ok(Some(form))) => print_parse(0, &form),
                    Some(Ok(None)) => println!("  {}", "no such form".yellow()),
                    Some(Err(e)) => println!("  {}", e.to_string().red()),
                    None => {}
                }
            }
            _ => {
                for (i, parse) in morph.parse(input).iter().enumerate() {
                    print_parse(i + 1, parse);
                }
            }
        }
        prompt();
    }
}

fn print_parse(n: usize, parse: &Parse) {
    let word = if parse.is_known() {
        parse.word().green()
    } else {
        parse.word().yellow()
    };
    println!(
        "  {n}: {word} -> {} [{}] score {:.3}",
        parse.normal_form().bold(),
        parse.tag(),
        parse.score()
    );
}

fn prompt() {
    print!("\n> ");
    stdout().flush().ok();
}
