//! Command handlers. Each one calls the record manager and reports the outcome.

use std::io::Write;

use anyhow::{bail, Context};
use student_db_core::persistence::RecordStore;
use student_db_core::record::validation::{validate_changes, validate_student};
use student_db_core::{DbError, RecordManager, Student};

use crate::cli::{AddArgs, Commands, ListArgs, OutputFormat, UpdateArgs};
use crate::output::{render, render_detail};

/// Dispatches one parsed command.
pub fn run<S: RecordStore, W: Write>(
    command: Commands,
    manager: &mut RecordManager<S>,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => list(manager, &args, out),
        Commands::Show { student_id } => show(manager, &student_id, out),
        Commands::Add(args) => add(manager, args, out),
        Commands::Update(args) => update(manager, &args, out),
        Commands::Delete { student_id } => delete(manager, &student_id, out),
    }
}

fn list<S: RecordStore, W: Write>(
    manager: &RecordManager<S>,
    args: &ListArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let students = manager.list(&args.to_query());

    if args.format != OutputFormat::Table {
        return render(out, &students, args.format);
    }

    writeln!(out, "Results ({})", students.len())?;
    if manager.is_empty() {
        writeln!(out, "No students found. Use `add` to create the first record.")?;
        return Ok(());
    }
    if students.is_empty() {
        writeln!(out, "No matching students found.")?;
        return Ok(());
    }
    render(out, &students, args.format)
}

fn show<S: RecordStore, W: Write>(
    manager: &RecordManager<S>,
    student_id: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let student = manager.get(student_id).ok_or_else(|| DbError::NotFound {
        id: student_id.to_string(),
    })?;
    render_detail(out, student)
}

fn add<S: RecordStore, W: Write>(
    manager: &mut RecordManager<S>,
    args: AddArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let student = Student {
        student_id: args.id,
        first_name: args.first_name,
        last_name: args.last_name,
        age: args.age,
        grade: args.grade,
        email: args.email,
        enrollment_date: args
            .enrollment_date
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
        score: args.score,
    };
    validate_student(&student)?;

    let student_id = student.student_id.clone();
    manager
        .add(student)
        .with_context(|| format!("Could not add student '{}'", student_id))?;
    writeln!(out, "Student '{}' added.", student_id)?;
    Ok(())
}

fn update<S: RecordStore, W: Write>(
    manager: &mut RecordManager<S>,
    args: &UpdateArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let current = manager
        .get(&args.student_id)
        .ok_or_else(|| DbError::NotFound {
            id: args.student_id.clone(),
        })?;

    let changes = args.to_changes();
    if changes.is_empty() {
        bail!("Nothing to update: pass at least one field to change");
    }
    validate_changes(&changes)?;

    writeln!(
        out,
        "Editing record for: {} (ID: {})",
        current.full_name(),
        current.student_id
    )?;

    manager
        .update(&args.student_id, &changes)
        .with_context(|| format!("Could not update student '{}'", args.student_id))?;
    writeln!(out, "Student '{}' updated.", args.student_id)?;
    if let Some(updated) = manager.get(&args.student_id) {
        render_detail(out, updated)?;
    }
    Ok(())
}

fn delete<S: RecordStore, W: Write>(
    manager: &mut RecordManager<S>,
    student_id: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let removed = manager
        .delete(student_id)
        .with_context(|| format!("Could not delete student '{}'", student_id))?;
    writeln!(
        out,
        "Student '{}' ({}) deleted.",
        removed.student_id,
        removed.full_name()
    )?;
    Ok(())
}
