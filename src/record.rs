// ABOUTME: JobRecord struct holding the 13 extracted job-posting fields.
// ABOUTME: Field names and order match the CSV header exactly; Date is seeded at construction.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// The 13 CSV column names, in serialization order.
pub const FIELD_NAMES: [&str; 13] = [
    "Date",
    "Job_Description",
    "Job_Link",
    "Job_Title",
    "Location",
    "Company_Name",
    "Company_Link",
    "Job_Posted",
    "Job_Type",
    "Job_Mode",
    "Recruiter_Name",
    "Recruiter_Title",
    "Recruiter_Link",
];

/// One scraped job posting.
///
/// Every field is always present; a field whose extraction found nothing
/// holds an empty string. The struct shape enforces the "exactly 13 keys,
/// none added or removed" invariant statically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct JobRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Job_Description")]
    pub job_description: String,
    #[serde(rename = "Job_Link")]
    pub job_link: String,
    #[serde(rename = "Job_Title")]
    pub job_title: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Company_Name")]
    pub company_name: String,
    #[serde(rename = "Company_Link")]
    pub company_link: String,
    #[serde(rename = "Job_Posted")]
    pub job_posted: String,
    #[serde(rename = "Job_Type")]
    pub job_type: String,
    #[serde(rename = "Job_Mode")]
    pub job_mode: String,
    #[serde(rename = "Recruiter_Name")]
    pub recruiter_name: String,
    #[serde(rename = "Recruiter_Title")]
    pub recruiter_title: String,
    #[serde(rename = "Recruiter_Link")]
    pub recruiter_link: String,
}

impl JobRecord {
    /// Create a record with every field empty except `date`, which is set
    /// to today's calendar date in `YYYY-MM-DD` form.
    pub fn new() -> Self {
        Self {
            date: Local::now().format("%Y-%m-%d").to_string(),
            ..Default::default()
        }
    }

    /// The field values as `(name, value)` pairs in CSV column order.
    pub fn field_pairs(&self) -> [(&'static str, &str); 13] {
        [
            ("Date", &self.date),
            ("Job_Description", &self.job_description),
            ("Job_Link", &self.job_link),
            ("Job_Title", &self.job_title),
            ("Location", &self.location),
            ("Company_Name", &self.company_name),
            ("Company_Link", &self.company_link),
            ("Job_Posted", &self.job_posted),
            ("Job_Type", &self.job_type),
            ("Job_Mode", &self.job_mode),
            ("Recruiter_Name", &self.recruiter_name),
            ("Recruiter_Title", &self.recruiter_title),
            ("Recruiter_Link", &self.recruiter_link),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_seeds_date_and_nothing_else() {
        let record = JobRecord::new();
        assert_eq!(record.date.len(), 10); // YYYY-MM-DD
        assert!(record.date.chars().filter(|c| *c == '-').count() == 2);
        for (name, value) in record.field_pairs() {
            if name != "Date" {
                assert_eq!(value, "", "{} should start empty", name);
            }
        }
    }

    #[test]
    fn field_pairs_match_header_order() {
        let record = JobRecord::new();
        let names: Vec<&str> = record.field_pairs().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, FIELD_NAMES.to_vec());
    }
}
