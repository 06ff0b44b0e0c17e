use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;

use crate::source::LoadError;

pub const DEFAULT_SALARY: &str = "Not specified";
pub const DEFAULT_AI_USED: &str = "Unknown";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: usize,
    pub title: String,
    pub description: String,
    pub salary: String,
    pub location: String,
    pub employment: String,
    pub ai_used: String,
    pub requirements: String,
    pub benefits: String,
    pub employer: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Salary,
    Location,
    Employment,
    AiUsed,
    Requirements,
    Benefits,
    Employer,
}

impl Field {
    pub fn column(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Salary => "salary",
            Self::Location => "location",
            Self::Employment => "employment_type",
            Self::AiUsed => "ai_used",
            Self::Requirements => "requirements",
            Self::Benefits => "benefits",
            Self::Employer => "employer",
        }
    }

    fn default_value(self) -> &'static str {
        match self {
            Self::Salary => DEFAULT_SALARY,
            Self::AiUsed => DEFAULT_AI_USED,
            _ => "",
        }
    }
}

impl Record {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Salary => &self.salary,
            Field::Location => &self.location,
            Field::Employment => &self.employment,
            Field::AiUsed => &self.ai_used,
            Field::Requirements => &self.requirements,
            Field::Benefits => &self.benefits,
            Field::Employer => &self.employer,
        }
    }
}

// Maps header names to cell positions; unknown columns are ignored.
struct ColumnIndex {
    headers: StringRecord,
}

impl ColumnIndex {
    fn cell<'a>(&self, row: &'a StringRecord, field: Field) -> &'a str {
        let value = self
            .headers
            .iter()
            .position(|h| h == field.column())
            .and_then(|idx| row.get(idx))
            .unwrap_or_default();
        if value.is_empty() {
            field.default_value()
        } else {
            value
        }
    }

    fn build(&self, id: usize, row: &StringRecord) -> Record {
        Record {
            id,
            title: self.cell(row, Field::Title).to_string(),
            description: self.cell(row, Field::Description).to_string(),
            salary: self.cell(row, Field::Salary).to_string(),
            location: self.cell(row, Field::Location).to_string(),
            employment: self.cell(row, Field::Employment).to_string(),
            ai_used: self.cell(row, Field::AiUsed).to_string(),
            requirements: self.cell(row, Field::Requirements).to_string(),
            benefits: self.cell(row, Field::Benefits).to_string(),
            employer: self.cell(row, Field::Employer).to_string(),
        }
    }
}

fn is_blank_row(row: &StringRecord) -> bool {
    row.iter().all(str::is_empty)
}

pub fn parse_records(text: &str) -> Result<Vec<Record>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|source| LoadError::Parse { source })?
        .clone();
    let columns = ColumnIndex { headers };

    let mut out: Vec<Record> = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|source| LoadError::Parse { source })?;
        if is_blank_row(&row) {
            continue;
        }
        out.push(columns.build(out.len() + 1, &row));
    }
    log::debug!("parsed {} records", out.len());
    Ok(out)
}
