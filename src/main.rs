use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use regex::Regex;
use spellfix::checker::dictionary::PrimaryDictionary;
use spellfix::cli::output::{self, OutputFormat};
use spellfix::cli::prompt::TerminalDecisionProvider;
use spellfix::{Config, Corrector, Session, SpellChecker};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spellfix")]
#[command(version, about = "Interactive spell checking and correction", long_about = None)]
struct Cli {
    /// Files to check
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Fix misspellings interactively and write the files back
    #[arg(short, long)]
    fix: bool,

    /// When a fix run is quit early, keep the corrections made so far
    #[arg(long, requires = "fix")]
    keep_partial: bool,

    /// Hunspell word-list file (*.dic)
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Hunspell affix file (*.aff)
    #[arg(short, long)]
    affix: Option<PathBuf>,

    /// Session file holding the user dictionary and ignore list
    #[arg(long)]
    session_file: Option<PathBuf>,

    /// Add words to the user dictionary and exit
    #[arg(long)]
    add_word: Vec<String>,

    /// Add words to the ignore list and exit
    #[arg(long)]
    ignore_word: Vec<String>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if errors are found
    #[arg(long)]
    no_fail: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "spellfix", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(
        cli.dictionary.clone(),
        cli.affix.clone(),
        cli.session_file.clone(),
    )?;

    let mut session = Session::new();
    if let Some(path) = &config.session_file {
        if path.exists() {
            session.load(path);
        }
    }

    // Session maintenance without a spell-check run
    if !cli.add_word.is_empty() || !cli.ignore_word.is_empty() {
        for word in &cli.add_word {
            session.add_user_dictionary_word(word);
        }
        for word in &cli.ignore_word {
            session.add_ignore_word(word);
        }
        save_session(&session, &config);
        return Ok(());
    }

    if cli.files.is_empty() {
        anyhow::bail!("No files specified. Use --help for usage information.");
    }

    let checker = build_checker(&config)?;

    let mut total_errors = 0;
    let mut total_fixed = 0;

    for file_path in &cli.files {
        if !file_path.exists() {
            eprintln!("Error: File not found: {}", file_path.display());
            continue;
        }

        let text = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        if cli.fix {
            let mut provider = TerminalDecisionProvider::new(config.max_suggestions);
            let mut corrector = Corrector::new(&checker, &mut session);

            match corrector.run(&mut provider, &text, !cli.keep_partial) {
                Some(corrections) => {
                    if !corrections.is_empty() {
                        let corrected = spellfix::corrector::patcher::apply(&text, &corrections);
                        fs::write(file_path, corrected).with_context(|| {
                            format!("Failed to write file: {}", file_path.display())
                        })?;
                        total_fixed += corrections.len();
                    }
                }
                None => {
                    eprintln!("Spell check cancelled; {} unchanged.", file_path.display());
                }
            }
        } else {
            let errors = checker.scan(&session, &text);
            let reported: Vec<_> = errors
                .into_iter()
                .map(|error| {
                    let suggestions = checker.suggest_words(&session, &error.word);
                    (error, suggestions)
                })
                .collect();

            total_errors += reported.len();
            output::print_errors(file_path, &text, &reported, !cli.no_color, &cli.format);
        }
    }

    if cli.fix {
        // Words accepted into the user dictionary or ignore list during the
        // run persist across sessions.
        save_session(&session, &config);
        output::print_fix_summary(total_fixed, &cli.files, !cli.no_color);
    } else {
        output::print_check_summary(total_errors, &cli.files, !cli.no_color);
    }

    if total_errors > 0 && !cli.no_fail && !cli.fix {
        std::process::exit(1);
    }

    Ok(())
}

fn build_checker(config: &Config) -> Result<SpellChecker> {
    let (dic, aff) = match (&config.dictionary_file, &config.affix_file) {
        (Some(dic), Some(aff)) => (dic, aff),
        _ => anyhow::bail!(
            "No dictionary configured. Pass --dictionary and --affix or set them in .spellfix.toml."
        ),
    };

    let primary = PrimaryDictionary::load(dic, aff)
        .with_context(|| format!("Failed to load dictionary: {}", dic.display()))?;

    let mut checker = SpellChecker::new();
    checker.set_primary(primary);

    if let Some(pattern) = &config.word_pattern {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("Invalid word pattern: {}", pattern))?;
        checker.set_word_pattern(pattern);
    }

    Ok(checker)
}

fn save_session(session: &Session, config: &Config) {
    let Some(path) = &config.session_file else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if !session.save(path) {
        eprintln!("Warning: failed to save session to {}", path.display());
    }
}
