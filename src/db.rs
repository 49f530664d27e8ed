use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;

use crate::parser::profile::CandidateProfile;

const DB_PATH: &str = "data/candidates.sqlite";

pub fn connect() -> Result<Connection> {
    std::fs::create_dir_all("data")?;
    let conn = Connection::open(DB_PATH)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS candidates (
            id             INTEGER PRIMARY KEY,
            owner          TEXT NOT NULL,
            source_file    TEXT NOT NULL,
            created_at     TEXT NOT NULL,
            name           TEXT NOT NULL,
            email          TEXT NOT NULL,
            phone          TEXT NOT NULL,
            department     TEXT NOT NULL,
            skills         TEXT NOT NULL, -- JSON array
            experience     TEXT NOT NULL,
            education      TEXT NOT NULL,
            raw_text       TEXT NOT NULL,
            role           TEXT NOT NULL,
            skills_summary TEXT NOT NULL,
            status         TEXT NOT NULL,
            address        TEXT NOT NULL,
            linkedin       TEXT NOT NULL,
            portfolio      TEXT NOT NULL,
            certifications TEXT NOT NULL, -- JSON array
            languages      TEXT NOT NULL, -- JSON array
            availability   TEXT NOT NULL,
            salary         TEXT NOT NULL,
            notes          TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_candidates_status ON candidates(status);
        CREATE INDEX IF NOT EXISTS idx_candidates_department ON candidates(department);
        ",
    )?;
    Ok(())
}

// ── Ingest ──

/// Prepare the candidates INSERT so batch ingest can reuse it per row.
pub fn prepare_insert(conn: &Connection) -> Result<rusqlite::Statement<'_>> {
    Ok(conn.prepare(
        "INSERT INTO candidates
         (owner, source_file, created_at, name, email, phone, department, skills,
          experience, education, raw_text, role, skills_summary, status, address,
          linkedin, portfolio, certifications, languages, availability, salary, notes)
         VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10,?11,?12,?13,?14,?15,?16,?17,?18,?19,?20,?21,?22)",
    )?)
}

/// Insert via a pre-prepared statement, returning the new rowid. The store
/// assigns the identifier, the creation timestamp, and the owning-user
/// reference; the profile itself carries everything else.
pub fn insert_prepared(
    stmt: &mut rusqlite::Statement,
    profile: &CandidateProfile,
    owner: &str,
    source_file: &str,
) -> Result<i64> {
    let created_at = Utc::now().to_rfc3339();
    let id = stmt.insert(rusqlite::params![
        owner,
        source_file,
        created_at,
        profile.name,
        profile.email,
        profile.phone,
        profile.department,
        serde_json::to_string(&profile.skills)?,
        profile.experience,
        profile.education,
        profile.raw_text,
        profile.role,
        profile.skills_summary,
        profile.status,
        profile.address,
        profile.linkedin,
        profile.portfolio,
        serde_json::to_string(&profile.certifications)?,
        serde_json::to_string(&profile.languages)?,
        profile.availability,
        profile.salary,
        profile.notes,
    ])?;
    Ok(id)
}

/// One-off insert for single-file ingest.
pub fn insert_candidate(
    conn: &Connection,
    profile: &CandidateProfile,
    owner: &str,
    source_file: &str,
) -> Result<i64> {
    let mut stmt = prepare_insert(conn)?;
    insert_prepared(&mut stmt, profile, owner, source_file)
}

// ── Lookup ──

pub struct CandidateRecord {
    pub id: i64,
    pub owner: String,
    pub source_file: String,
    pub created_at: String,
    pub profile: CandidateProfile,
}

pub fn fetch_candidate(conn: &Connection, id: i64) -> Result<Option<CandidateRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, owner, source_file, created_at, name, email, phone, department,
                skills, experience, education, raw_text, role, skills_summary, status,
                address, linkedin, portfolio, certifications, languages, availability,
                salary, notes
         FROM candidates WHERE id = ?1",
    )?;
    let mut rows = stmt
        .query_map([id], row_to_record)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows.pop())
}

fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<CandidateRecord> {
    // List columns hold JSON written by insert; a hand-edited bad value
    // degrades to an empty list rather than failing the whole query.
    let json_vec =
        |s: String| serde_json::from_str::<Vec<String>>(&s).unwrap_or_default();
    Ok(CandidateRecord {
        id: row.get(0)?,
        owner: row.get(1)?,
        source_file: row.get(2)?,
        created_at: row.get(3)?,
        profile: CandidateProfile {
            name: row.get(4)?,
            email: row.get(5)?,
            phone: row.get(6)?,
            department: row.get(7)?,
            skills: json_vec(row.get(8)?),
            experience: row.get(9)?,
            education: row.get(10)?,
            raw_text: row.get(11)?,
            role: row.get(12)?,
            skills_summary: row.get(13)?,
            status: row.get(14)?,
            address: row.get(15)?,
            linkedin: row.get(16)?,
            portfolio: row.get(17)?,
            certifications: json_vec(row.get(18)?),
            languages: json_vec(row.get(19)?),
            availability: row.get(20)?,
            salary: row.get(21)?,
            notes: row.get(22)?,
        },
    })
}

// ── Overview ──

pub struct OverviewRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub status: String,
    pub created_at: String,
}

pub fn fetch_overview(
    conn: &Connection,
    status: Option<&str>,
    department: Option<&str>,
    limit: usize,
) -> Result<Vec<OverviewRow>> {
    let mut conditions = Vec::new();
    let mut params: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

    if let Some(s) = status {
        conditions.push(format!("status = ?{}", params.len() + 1));
        params.push(Box::new(s.to_string()));
    }
    if let Some(d) = department {
        conditions.push(format!("department = ?{}", params.len() + 1));
        params.push(Box::new(d.to_string()));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    };

    let sql = format!(
        "SELECT id, name, email, department, role, status, created_at
         FROM candidates{}
         ORDER BY id DESC
         LIMIT {}",
        where_clause, limit
    );

    let mut stmt = conn.prepare(&sql)?;
    let param_refs: Vec<&dyn rusqlite::types::ToSql> = params.iter().map(|p| p.as_ref()).collect();
    let rows = stmt
        .query_map(param_refs.as_slice(), |row| {
            Ok(OverviewRow {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                department: row.get(3)?,
                role: row.get(4)?,
                status: row.get(5)?,
                created_at: row.get(6)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

// ── Re-extraction ──

pub fn fetch_raw_texts(conn: &Connection) -> Result<Vec<(i64, String)>> {
    let mut stmt = conn.prepare("SELECT id, raw_text FROM candidates ORDER BY id")?;
    let rows = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Overwrite the derived fields of the given candidates with freshly
/// extracted profiles. Raw text, ownership, and timestamps stay untouched.
pub fn update_profiles(conn: &Connection, updates: &[(i64, CandidateProfile)]) -> Result<usize> {
    let tx = conn.unchecked_transaction()?;
    let mut count = 0;
    {
        let mut stmt = tx.prepare(
            "UPDATE candidates SET
                name = ?2, email = ?3, phone = ?4, department = ?5, skills = ?6,
                experience = ?7, education = ?8, role = ?9, skills_summary = ?10,
                status = ?11, address = ?12, linkedin = ?13, portfolio = ?14,
                certifications = ?15, languages = ?16
             WHERE id = ?1",
        )?;
        for (id, p) in updates {
            count += stmt.execute(rusqlite::params![
                id,
                p.name,
                p.email,
                p.phone,
                p.department,
                serde_json::to_string(&p.skills)?,
                p.experience,
                p.education,
                p.role,
                p.skills_summary,
                p.status,
                p.address,
                p.linkedin,
                p.portfolio,
                serde_json::to_string(&p.certifications)?,
                serde_json::to_string(&p.languages)?,
            ])?;
        }
    }
    tx.commit()?;
    Ok(count)
}

// ── Stats ──

pub struct Stats {
    pub total: usize,
    pub by_status: Vec<(String, usize)>,
    pub by_department: Vec<(String, usize)>,
}

pub fn get_stats(conn: &Connection) -> Result<Stats> {
    let total: usize = conn.query_row("SELECT COUNT(*) FROM candidates", [], |r| r.get(0))?;

    let mut stmt = conn.prepare(
        "SELECT status, COUNT(*) FROM candidates GROUP BY status ORDER BY COUNT(*) DESC",
    )?;
    let by_status = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    let mut stmt = conn.prepare(
        "SELECT department, COUNT(*) FROM candidates GROUP BY department ORDER BY COUNT(*) DESC",
    )?;
    let by_department = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Stats {
        total,
        by_status,
        by_department,
    })
}

// ── Tests ──
