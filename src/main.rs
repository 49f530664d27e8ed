mod db;
mod ingest;
mod loader;
mod parser;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use loader::DocumentFormat;
use parser::profile::CandidateProfile;

#[derive(Parser)]
#[command(name = "cv_intake", about = "Candidate CV extraction and intake pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a profile from one CV and store it
    Ingest {
        /// Path to a .pdf or .docx file
        file: PathBuf,
        /// Owner recorded on the candidate row
        #[arg(long, default_value = "anonymous")]
        owner: String,
    },
    /// Ingest every CV in a directory (concurrent, streaming to DB)
    Batch {
        /// Directory to scan for .pdf and .docx files
        dir: PathBuf,
        /// Owner recorded on every candidate row
        #[arg(long, default_value = "anonymous")]
        owner: String,
    },
    /// Extract and print a profile without storing it
    Parse {
        /// Path to a .pdf or .docx file
        file: PathBuf,
        /// Print the profile as JSON instead of a field listing
        #[arg(long)]
        json: bool,
    },
    /// Candidates overview table
    List {
        /// Filter by status (Employed, Open to Work, Student, Pending)
        #[arg(short, long)]
        status: Option<String>,
        /// Filter by department (e.g. "Engineering")
        #[arg(short, long)]
        department: Option<String>,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
    /// Show one stored candidate in full
    Show {
        /// Candidate id as printed by 'list'
        id: i64,
    },
    /// Re-run extraction over every stored candidate's raw text
    Reextract,
    /// Show intake statistics
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ingest { file, owner } => {
            let conn = db::connect()?;
            db::init_schema(&conn)?;
            let format = DocumentFormat::from_extension(&file)?;
            let bytes = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let file_name = display_name(&file);
            let profile = parser::parse_document(bytes, format, &file_name).await;
            let id = db::insert_candidate(&conn, &profile, &owner, &file_name)?;
            println!(
                "Stored candidate #{}: {} ({}, {})",
                id, profile.name, profile.department, profile.status
            );
            Ok(())
        }
        Commands::Batch { dir, owner } => {
            let conn = db::connect()?;
            db::init_schema(&conn)?;
            let files = collect_documents(&dir)?;
            if files.is_empty() {
                println!("No .pdf or .docx files in {}", dir.display());
                return Ok(());
            }
            println!("Ingesting {} documents (streaming to DB)...", files.len());
            let stats = ingest::ingest_files_streaming(&conn, files, &owner).await?;
            println!(
                "Done: {} documents ({} stored, {} errors).",
                stats.total, stats.ok, stats.errors
            );
            Ok(())
        }
        Commands::Parse { file, json } => {
            let format = DocumentFormat::from_extension(&file)?;
            let bytes = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let profile = parser::parse_document(bytes, format, &display_name(&file)).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                print_profile(&profile);
            }
            Ok(())
        }
        Commands::List { status, department, limit } => {
            let conn = db::connect()?;
            db::init_schema(&conn)?;
            let rows = db::fetch_overview(
                &conn,
                status.as_deref(),
                department.as_deref(),
                limit,
            )?;
            if rows.is_empty() {
                println!("No candidates found.");
                return Ok(());
            }

            // Compact, readable table
            println!(
                "{:>4} | {:<22} | {:<26} | {:<12} | {:<20} | {:<12} | {}",
                "#", "Name", "Email", "Department", "Role", "Status", "Added"
            );
            println!("{}", "-".repeat(120));

            for r in &rows {
                let added = r.created_at.get(..10).unwrap_or(&r.created_at);
                println!(
                    "{:>4} | {:<22} | {:<26} | {:<12} | {:<20} | {:<12} | {}",
                    r.id,
                    truncate(&r.name, 22),
                    truncate(&r.email, 26),
                    truncate(&r.department, 12),
                    truncate(&r.role, 20),
                    truncate(&r.status, 12),
                    added,
                );
            }

            println!("\n{} candidates", rows.len());
            Ok(())
        }
        Commands::Show { id } => {
            let conn = db::connect()?;
            db::init_schema(&conn)?;
            match db::fetch_candidate(&conn, id)? {
                Some(record) => {
                    println!(
                        "Candidate #{}, added {} by {}",
                        record.id, record.created_at, record.owner
                    );
                    println!("Source file: {}", record.source_file);
                    println!();
                    print_profile(&record.profile);
                }
                None => println!("No candidate with id {}", id),
            }
            Ok(())
        }
        Commands::Reextract => {
            let conn = db::connect()?;
            db::init_schema(&conn)?;
            let rows = db::fetch_raw_texts(&conn)?;
            if rows.is_empty() {
                println!("No stored candidates. Run 'ingest' or 'batch' first.");
                return Ok(());
            }
            println!("Re-extracting {} candidate profiles...", rows.len());
            let updated = reextract_profiles(&conn, &rows)?;
            println!("Updated {} candidates.", updated);
            Ok(())
        }
        Commands::Stats => {
            let conn = db::connect()?;
            db::init_schema(&conn)?;
            let s = db::get_stats(&conn)?;
            println!("Candidates: {}", s.total);
            if !s.by_status.is_empty() {
                println!("\nBy status:");
                for (status, count) in &s.by_status {
                    println!("  {:<14} {}", status, count);
                }
            }
            if !s.by_department.is_empty() {
                println!("\nBy department:");
                for (department, count) in &s.by_department {
                    println!("  {:<14} {}", department, count);
                }
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

/// Re-extract profiles from stored raw text, writing back in chunks so a
/// failure late in a large run keeps earlier progress.
fn reextract_profiles(
    conn: &rusqlite::Connection,
    rows: &[(i64, String)],
) -> anyhow::Result<usize> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(rows.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut updated = 0;
    for chunk in rows.chunks(500) {
        let profiles: Vec<(i64, CandidateProfile)> = chunk
            .par_iter()
            .map(|(id, raw)| (*id, parser::extract_profile(raw)))
            .collect();

        updated += db::update_profiles(conn, &profiles)?;
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();
    Ok(updated)
}

/// Collect ingestable documents from a directory, sorted by path for a
/// stable ingest order. Files with other extensions are ignored.
fn collect_documents(dir: &Path) -> anyhow::Result<Vec<(PathBuf, DocumentFormat)>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?
    {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Ok(format) = DocumentFormat::from_extension(&path) {
            files.push((path, format));
        }
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

fn print_profile(p: &CandidateProfile) {
    println!("Name:           {}", p.name);
    println!("Email:          {}", or_dash(&p.email));
    println!("Phone:          {}", or_dash(&p.phone));
    println!("Department:     {}", p.department);
    println!("Role:           {}", p.role);
    println!("Status:         {}", p.status);
    println!("Experience:     {}", p.experience);
    println!("Education:      {}", or_dash(&p.education));
    println!("Skills:         {}", p.skills_summary);
    println!("Certifications: {}", join_or_dash(&p.certifications, "; "));
    println!("Languages:      {}", join_or_dash(&p.languages, ", "));
    println!("LinkedIn:       {}", or_dash(&p.linkedin));
    println!("Portfolio:      {}", or_dash(&p.portfolio));
    println!("Address:        {}", or_dash(&p.address));
    println!("Availability:   {}", p.availability);
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}

fn join_or_dash(items: &[String], sep: &str) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(sep)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document")
        .to_string()
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
