use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use student_db_core::{Field, Query, StudentChanges};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV file holding the student table
    #[arg(long, global = true, default_value = "students.csv")]
    pub data_file: PathBuf,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List students, optionally filtered and sorted
    List(ListArgs),

    /// Show one student by ID
    Show {
        /// Student ID
        student_id: String,
    },

    /// Add a new student
    Add(AddArgs),

    /// Update fields of an existing student
    Update(UpdateArgs),

    /// Delete a student (cannot be undone)
    Delete {
        /// Student ID
        student_id: String,
    },
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Search by student ID
    #[arg(long)]
    pub id: Option<String>,

    /// Search by first name
    #[arg(long)]
    pub name: Option<String>,

    /// Search by grade
    #[arg(long)]
    pub grade: Option<String>,

    /// Extra substring filter, e.g. `email=school.test` (repeatable)
    #[arg(long = "filter", value_name = "FIELD=TEXT", value_parser = parse_filter)]
    pub filters: Vec<(Field, String)>,

    /// Sort results by this field
    #[arg(long, value_name = "FIELD")]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Minimum score (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub min_score: Option<i64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl ListArgs {
    /// Builds the manager query. Unknown sort fields keep insertion order.
    pub fn to_query(&self) -> Query {
        let mut query = Query::new().ascending(!self.desc);
        let named = [
            (Field::StudentId, &self.id),
            (Field::FirstName, &self.name),
            (Field::Grade, &self.grade),
        ];
        for (field, text) in named {
            if let Some(text) = text {
                query = query.filter(field, text.clone());
            }
        }
        for (field, text) in &self.filters {
            query = query.filter(*field, text.clone());
        }
        if let Some(sort) = &self.sort {
            query = query.sort_by_name(sort);
        }
        if let Some(min_score) = self.min_score {
            query = query.min_score(min_score);
        }
        query
    }
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Student ID
    #[arg(long)]
    pub id: String,

    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    /// Age (1-150)
    #[arg(long, default_value_t = 1)]
    pub age: u32,

    #[arg(long)]
    pub grade: String,

    #[arg(long)]
    pub email: String,

    /// Enrollment date as YYYY-MM-DD (default: today)
    #[arg(long, value_parser = parse_date)]
    pub enrollment_date: Option<NaiveDate>,

    /// Score (0-100)
    #[arg(long, default_value_t = 50)]
    pub score: u32,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Student ID to update
    pub student_id: String,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long)]
    pub grade: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Enrollment date as YYYY-MM-DD
    #[arg(long, value_parser = parse_date)]
    pub enrollment_date: Option<NaiveDate>,

    #[arg(long)]
    pub score: Option<u32>,
}

impl UpdateArgs {
    pub fn to_changes(&self) -> StudentChanges {
        StudentChanges {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            grade: self.grade.clone(),
            email: self.email.clone(),
            enrollment_date: self.enrollment_date,
            score: self.score,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn parse_filter(s: &str) -> Result<(Field, String), String> {
    let (name, text) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=TEXT, got '{}'", s))?;
    let field = name.parse::<Field>().map_err(|e| e.to_string())?;
    Ok((field, text.to_string()))
}
