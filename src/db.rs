use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use tracing::warn;

use crate::extract::CanonicalQuestion;

/// Outcome tally for one persisted batch.
#[derive(Debug, Default)]
pub struct BatchStats {
    pub inserted: usize,
    pub failed: usize,
}

impl BatchStats {
    pub fn print(&self) {
        println!("\n=== Summary ===");
        println!("Inserted: {}", self.inserted);
        println!("Failed:   {}", self.failed);
    }
}

pub fn connect(path: &str) -> Result<Connection> {
    let conn = Connection::open(path).with_context(|| format!("Failed to open {}", path))?;
    conn.execute("PRAGMA foreign_keys = ON", [])?;
    Ok(conn)
}

/// Create the two target tables. The `run` path assumes they already exist;
/// this backs the `init` subcommand and the tests.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS question (
            id            INTEGER PRIMARY KEY,
            topics        TEXT NOT NULL,
            difficulty    TEXT NOT NULL,
            prompt        TEXT NOT NULL,
            function_name TEXT NOT NULL,
            starter_code  TEXT
        );

        CREATE TABLE IF NOT EXISTS iopair (
            id              INTEGER PRIMARY KEY,
            input_text      TEXT NOT NULL,
            expected_output TEXT NOT NULL,
            question_id     INTEGER NOT NULL REFERENCES question(id)
        );
        CREATE INDEX IF NOT EXISTS idx_iopair_question ON iopair(question_id);
        ",
    )?;
    Ok(())
}

// ── Persistence ──

/// Insert one question plus its IO pairs atomically; returns the new id.
/// Dropping the transaction on any failed insert rolls the record back whole.
fn insert_question(conn: &Connection, question: &CanonicalQuestion) -> Result<i64> {
    let tx = conn.unchecked_transaction()?;
    tx.execute(
        "INSERT INTO question (topics, difficulty, prompt, function_name, starter_code)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            question.topics,
            question.difficulty,
            question.prompt,
            question.function_name,
            question.starter_code,
        ],
    )?;
    let question_id = tx.last_insert_rowid();

    {
        let mut stmt = tx.prepare(
            "INSERT INTO iopair (input_text, expected_output, question_id)
             VALUES (?1, ?2, ?3)",
        )?;
        for (input_text, expected_output) in &question.input_output_pairs {
            stmt.execute(params![input_text, expected_output, question_id])?;
        }
    }

    tx.commit()?;
    Ok(question_id)
}

/// Persist records one transaction each. A failed record rolls back alone
/// and is tallied; the batch keeps going.
pub fn insert_batch(conn: &Connection, questions: &[CanonicalQuestion]) -> BatchStats {
    let mut stats = BatchStats::default();
    let total = questions.len();

    for (idx, question) in questions.iter().enumerate() {
        println!("Inserting question {}/{}...", idx + 1, total);
        match insert_question(conn, question) {
            Ok(id) => {
                stats.inserted += 1;
                println!(
                    "  [OK] question id {} with {} io pairs",
                    id,
                    question.input_output_pairs.len()
                );
            }
            Err(err) => {
                stats.failed += 1;
                warn!(%err, function = %question.function_name, "insert failed, rolled back");
                println!("  [FAIL] {}", question.function_name);
            }
        }
    }

    stats
}
