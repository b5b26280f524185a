use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

use crate::{
    extract::extract_text,
    matcher::{calculate_fit_score, default_vocabulary, extract_skills, recommendation},
    types::FitResult,
    utils::{content_type_from_path, read_skills_from_file},
};

#[derive(Parser)]
#[command(name = "FitScore")]
#[command(about = "Score a resume against a job description by matched skill keywords")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the resume document (.txt, .pdf or .docx)
    #[arg(short, long)]
    resume: Option<PathBuf>,

    /// Path to the job description document
    #[arg(short, long)]
    jd: Option<PathBuf>,

    /// Path to a skill vocabulary file (one term per line)
    #[arg(short, long)]
    skills: Option<PathBuf>,

    /// Enable interactive mode
    #[arg(short, long)]
    interactive: bool,

    /// Output format (text, json, csv)
    #[arg(short, long, default_value = "text")]
    format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a resume against a job description
    Score {
        /// Path to the resume document
        resume: PathBuf,

        /// Path to the job description document
        jd: PathBuf,

        /// Path to a skill vocabulary file
        #[arg(short, long)]
        skills: Option<PathBuf>,

        /// Output format (text, json, csv)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show the skills detected in a single document
    Skills {
        /// Path to the document
        file: PathBuf,

        /// Path to a skill vocabulary file
        #[arg(short, long)]
        skills: Option<PathBuf>,
    },

    /// Score every resume in a directory against one job description
    Batch {
        /// Directory containing resume documents
        #[arg(short, long)]
        directory: PathBuf,

        /// Path to the job description document
        #[arg(short, long)]
        jd: PathBuf,

        /// File pattern (e.g., "*.pdf", "*.docx")
        #[arg(short, long, default_value = "*.*")]
        pattern: String,

        /// Recurse into subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Path to a skill vocabulary file
        #[arg(short, long)]
        skills: Option<PathBuf>,

        /// Output format (text, json, csv)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Interactive scoring mode
    Interactive,
}

pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn run() -> Result<()> {
        let app = Self::new();

        match app.cli.command.as_ref() {
            Some(Commands::Score {
                resume,
                jd,
                skills,
                format,
            }) => Self::run_score(resume, jd, skills.as_ref(), format),
            Some(Commands::Skills { file, skills }) => Self::run_skills(file, skills.as_ref()),
            Some(Commands::Batch {
                directory,
                jd,
                pattern,
                recursive,
                skills,
                format,
            }) => Self::run_batch(directory, jd, pattern, *recursive, skills.as_ref(), format),
            Some(Commands::Interactive) => Self::run_interactive(),
            None => {
                if app.cli.interactive {
                    Self::run_interactive()
                } else if let (Some(resume), Some(jd)) = (&app.cli.resume, &app.cli.jd) {
                    Self::run_score(resume, jd, app.cli.skills.as_ref(), &app.cli.format)
                } else {
                    Self::show_help();
                    Ok(())
                }
            }
        }
    }

    /// Read a document and extract its text, inferring the content type
    /// from the file extension. An unreadable file is logged and treated
    /// as empty text; extraction failures propagate.
    fn read_document(path: &Path) -> Result<String> {
        let content_type = content_type_from_path(path);

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!(
                    "{}",
                    format!("Error reading file {}: {}", path.display(), e).red()
                );
                return Ok(String::new());
            }
        };

        extract_text(&bytes, content_type)
    }

    fn load_vocabulary(skills: Option<&PathBuf>) -> Result<Vec<String>> {
        match skills {
            Some(path) => read_skills_from_file(&path.to_string_lossy()),
            None => Ok(default_vocabulary()),
        }
    }

    fn run_score(resume: &Path, jd: &Path, skills: Option<&PathBuf>, format: &str) -> Result<()> {
        let vocabulary = Self::load_vocabulary(skills)?;

        let start = Instant::now();
        let resume_text = Self::read_document(resume)?;
        let jd_text = Self::read_document(jd)?;
        println!(
            "{}",
            format!(
                "Extracted both documents in {} ms",
                start.elapsed().as_millis()
            )
            .blue()
        );

        let result = calculate_fit_score(&resume_text, &jd_text, &vocabulary);

        Self::display_result(&result, format)
    }

    fn run_skills(file: &Path, skills: Option<&PathBuf>) -> Result<()> {
        let vocabulary = Self::load_vocabulary(skills)?;

        let text = Self::read_document(file)?;
        let found = extract_skills(&text, &vocabulary);

        println!("{}: {}", file.display(), Self::join_skills(&found).green());

        Ok(())
    }

    fn run_batch(
        directory: &Path,
        jd: &Path,
        pattern: &str,
        recursive: bool,
        skills: Option<&PathBuf>,
        format: &str,
    ) -> Result<()> {
        println!("{}", "Batch Mode".bold().blue());
        println!("{}", "===========".blue());

        if !directory.exists() || !directory.is_dir() {
            return Err(anyhow::anyhow!(
                "Directory not found: {}",
                directory.display()
            ));
        }

        let vocabulary = Self::load_vocabulary(skills)?;
        let jd_text = Self::read_document(jd)?;

        let files = Self::scan_directory(directory, pattern, recursive)?;
        if files.is_empty() {
            return Err(anyhow::anyhow!(
                "No supported documents found in {}",
                directory.display()
            ));
        }
        println!("Found {} resumes to score", files.len());

        let start = Instant::now();
        let progress = ProgressBar::new(files.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("Scoring: [{bar:40.cyan/blue}] {pos}/{len} files")
                .unwrap()
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );

        let mut results: Vec<(PathBuf, FitResult)> = Vec::new();
        for file_path in &files {
            progress.set_message(format!("Processing: {}", file_path.display()));

            let resume_text = Self::read_document(file_path)?;
            let result = calculate_fit_score(&resume_text, &jd_text, &vocabulary);
            results.push((file_path.clone(), result));

            progress.inc(1);
        }
        progress.finish_with_message("Batch scoring completed");

        // best candidates first
        results.sort_by(|a, b| b.1.score.cmp(&a.1.score));

        Self::display_batch_results(&results, format, start.elapsed())
    }

    fn run_interactive() -> Result<()> {
        Self::show_startup_logo();

        println!("{}", "Interactive Mode".bold().blue());
        println!("{}", "=================".blue());

        loop {
            let resume_path: String = Input::new()
                .with_prompt("Enter path to resume file")
                .interact_text()?;

            let jd_path: String = Input::new()
                .with_prompt("Enter path to job description file")
                .interact_text()?;

            let vocabulary = Self::get_vocabulary_interactive()?;

            let resume_text = Self::read_document(Path::new(resume_path.trim()))?;
            let jd_text = Self::read_document(Path::new(jd_path.trim()))?;
            let result = calculate_fit_score(&resume_text, &jd_text, &vocabulary);

            Self::display_result(&result, "text")?;

            let again = Confirm::new()
                .with_prompt("Score another pair?")
                .default(false)
                .interact()?;
            if !again {
                return Ok(());
            }
        }
    }

    fn get_vocabulary_interactive() -> Result<Vec<String>> {
        let options = &["Use built-in skill list", "Load skill list from file"];

        let choice = Select::new()
            .with_prompt("Which skill vocabulary should be used?")
            .default(0)
            .items(options)
            .interact()?;

        match choice {
            0 => Ok(default_vocabulary()),
            1 => {
                let file_path: String = Input::new()
                    .with_prompt("Enter path to skills file")
                    .default("skills.txt".to_string())
                    .interact_text()?;

                read_skills_from_file(&file_path)
            }
            _ => unreachable!(),
        }
    }

    fn scan_directory(directory: &Path, pattern: &str, recursive: bool) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        if recursive {
            let matcher = glob::Pattern::new(pattern)?;
            for entry in WalkDir::new(directory)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
            {
                let name = entry.file_name().to_string_lossy().to_string();
                if matcher.matches(&name) {
                    files.push(entry.path().to_path_buf());
                }
            }
        } else {
            let search_pattern = format!("{}/{}", directory.display(), pattern);
            for entry in glob(&search_pattern)? {
                if let Ok(path) = entry {
                    if path.is_file() {
                        files.push(path);
                    }
                }
            }
        }

        // keep only supported document types
        files.retain(|file| {
            let name = file.to_string_lossy().to_lowercase();
            name.ends_with(".pdf") || name.ends_with(".docx") || name.ends_with(".txt")
        });
        files.sort();

        Ok(files)
    }

    fn join_skills(skills: &crate::types::SkillSet) -> String {
        if skills.is_empty() {
            "None".to_string()
        } else {
            skills.iter().cloned().collect::<Vec<_>>().join(", ")
        }
    }

    fn display_result(result: &FitResult, format: &str) -> Result<()> {
        match format.to_lowercase().as_str() {
            "json" => Self::display_json_result(result),
            "csv" => Self::display_csv_result(result),
            _ => {
                Self::display_text_result(result);
                Ok(())
            }
        }
    }

    fn display_text_result(result: &FitResult) {
        println!("\n{}", "=".repeat(50).blue());
        println!("{}", "FIT SCORE".blue().bold());
        println!("{}", "=".repeat(50).blue());

        println!("Score: {}/100", result.score.to_string().bold());
        println!(
            "Matching Skills: {}",
            Self::join_skills(&result.matched).green()
        );
        println!(
            "Missing Skills: {}",
            Self::join_skills(&result.missing).red()
        );

        println!("\nRecommendation:");
        let text = recommendation(result.score);
        if result.score >= 80 {
            println!("{}", text.green());
        } else if result.score >= 50 {
            println!("{}", text.yellow());
        } else {
            println!("{}", text.red());
        }
    }

    fn display_json_result(result: &FitResult) -> Result<()> {
        let json = serde_json::json!({
            "score": result.score,
            "matched": result.matched,
            "missing": result.missing,
            "recommendation": recommendation(result.score),
        });

        println!("{}", serde_json::to_string_pretty(&json)?);
        Ok(())
    }

    fn display_csv_result(result: &FitResult) -> Result<()> {
        println!("skill,status");
        for skill in &result.matched {
            println!("{},matched", skill);
        }
        for skill in &result.missing {
            println!("{},missing", skill);
        }
        println!("score,{}", result.score);
        Ok(())
    }

    fn display_batch_results(
        results: &[(PathBuf, FitResult)],
        format: &str,
        duration: std::time::Duration,
    ) -> Result<()> {
        println!("\n{}", "=".repeat(60).blue());
        println!("{}", "BATCH SCORING RESULTS".blue().bold());
        println!("{}", "=".repeat(60).blue());

        match format.to_lowercase().as_str() {
            "json" => Self::display_batch_json_results(results)?,
            "csv" => Self::display_batch_csv_results(results),
            _ => Self::display_batch_text_results(results),
        }

        println!("{}", "=".repeat(60).blue());
        println!(
            "{}",
            format!(
                "Scored {} resumes in {} ms",
                results.len(),
                duration.as_millis()
            )
            .italic()
        );

        Ok(())
    }

    fn display_batch_text_results(results: &[(PathBuf, FitResult)]) {
        for (i, (file, result)) in results.iter().enumerate() {
            println!(
                "  {}: {} -> {}/100 (matched: {})",
                i + 1,
                file.display().to_string().blue(),
                result.score.to_string().bold(),
                Self::join_skills(&result.matched).green()
            );
        }
    }

    fn display_batch_json_results(results: &[(PathBuf, FitResult)]) -> Result<()> {
        let results_json: Vec<serde_json::Value> = results
            .iter()
            .map(|(file, result)| {
                serde_json::json!({
                    "file": file.to_string_lossy(),
                    "score": result.score,
                    "matched": result.matched,
                    "missing": result.missing,
                })
            })
            .collect();

        println!("{}", serde_json::to_string_pretty(&results_json)?);
        Ok(())
    }

    fn display_batch_csv_results(results: &[(PathBuf, FitResult)]) {
        println!("file,score,matched,missing");
        for (file, result) in results {
            println!(
                "{},{},{},{}",
                file.to_string_lossy(),
                result.score,
                result
                    .matched
                    .iter()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(";"),
                result
                    .missing
                    .iter()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(";")
            );
        }
    }

    fn show_help() {
        println!("{}", "FitScore - Resume Fit Scorer".blue().bold());
        println!();
        println!("Usage:");
        println!("  fitscore --resume <resume_file> --jd <jd_file>");
        println!("  fitscore score <resume_file> <jd_file>");
        println!("  fitscore skills <file>");
        println!("  fitscore batch --directory <dir> --jd <jd_file>");
        println!("  fitscore interactive");
        println!();
        println!("Examples:");
        println!("  fitscore score resume.pdf posting.docx");
        println!("  fitscore score resume.txt posting.txt --format json");
        println!("  fitscore skills resume.docx --skills skills.txt");
        println!("  fitscore batch --directory ./resumes --jd posting.pdf --pattern \"*.pdf\"");
        println!("  fitscore interactive");
        println!();
        println!("For more help, run: fitscore --help");
    }

    fn show_startup_logo() {
        let logo = r#"
 _____ _ _   ____
|  ___(_) |_/ ___|  ___ ___  _ __ ___
| |_  | | __\___ \ / __/ _ \| '__/ _ \
|  _| | | |_ ___) | (_| (_) | | |  __/
|_|   |_|\__|____/ \___\___/|_|  \___|
"#;
        println!("{}", logo);
        println!();
    }
}
