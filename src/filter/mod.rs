use serde::{Deserialize, Serialize};

use crate::record::Record;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterDimension {
    Search,
    Location,
    Employment,
}

impl FilterDimension {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "search" | "q" | "query" => Some(Self::Search),
            "location" | "loc" => Some(Self::Location),
            "type" | "employment" | "employment_type" => Some(Self::Employment),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Location => "location",
            Self::Employment => "type",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search: String,
    pub location: String,
    pub employment: String,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn equals_ci(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl FilterCriteria {
    pub fn get(&self, dimension: FilterDimension) -> &str {
        match dimension {
            FilterDimension::Search => &self.search,
            FilterDimension::Location => &self.location,
            FilterDimension::Employment => &self.employment,
        }
    }

    pub fn set(&mut self, dimension: FilterDimension, value: String) {
        match dimension {
            FilterDimension::Search => self.search = value,
            FilterDimension::Location => self.location = value,
            FilterDimension::Employment => self.employment = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.location.is_empty() && self.employment.is_empty()
    }

    pub fn matches_dimension(&self, dimension: FilterDimension, record: &Record) -> bool {
        let wanted = self.get(dimension);
        if wanted.is_empty() {
            return true;
        }
        match dimension {
            FilterDimension::Search => {
                contains_ci(&record.title, wanted)
                    || contains_ci(&record.description, wanted)
                    || contains_ci(&record.employer, wanted)
            }
            FilterDimension::Location => contains_ci(&record.location, wanted),
            // exact match, unlike the substring rules above
            FilterDimension::Employment => equals_ci(&record.employment, wanted),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.matches_dimension(FilterDimension::Search, record)
            && self.matches_dimension(FilterDimension::Location, record)
            && self.matches_dimension(FilterDimension::Employment, record)
    }

    pub fn summary(&self) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();
        for dimension in [
            FilterDimension::Search,
            FilterDimension::Location,
            FilterDimension::Employment,
        ] {
            let value = self.get(dimension);
            if !value.is_empty() {
                parts.push(format!("{}={}", dimension.label(), value));
            }
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

pub fn apply<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records.into_iter().filter(|r| criteria.matches(r)).collect()
}
