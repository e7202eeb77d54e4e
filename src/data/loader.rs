use chrono::NaiveDate;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::utils::Timezone;

use super::contacts::ContactStore;
use super::types::{Contact, ScheduledCall};

pub(crate) struct LoadedData {
    pub(crate) calls: Vec<ScheduledCall>,
    pub(crate) contacts: ContactStore,
    /// Records or files that failed to parse and were dropped.
    pub(crate) skipped: i64,
}

/// Resolve the data directory: `$CALLSHEET_HOME`, else `~/.callsheet`.
pub(crate) fn data_dir() -> Result<PathBuf, AppError> {
    if let Ok(home) = std::env::var("CALLSHEET_HOME") {
        let path = PathBuf::from(home);
        if path.is_dir() {
            return Ok(path);
        }
        return Err(AppError::DataDirNotFound);
    }
    if let Some(home) = dirs::home_dir() {
        let path = home.join(".callsheet");
        if path.is_dir() {
            return Ok(path);
        }
    }
    Err(AppError::DataDirNotFound)
}

pub(crate) fn load_data(
    since: Option<NaiveDate>,
    until: Option<NaiveDate>,
    tz: Timezone,
) -> Result<LoadedData, AppError> {
    let dir = data_dir()?;
    let (contacts, contact_skipped) = load_contacts(&dir)?;
    let (calls, call_skipped) = load_calls(&dir, since, until, tz);
    Ok(LoadedData {
        calls,
        contacts: ContactStore::new(contacts),
        skipped: contact_skipped + call_skipped,
    })
}

fn load_contacts(dir: &Path) -> Result<(Vec<Contact>, i64), AppError> {
    let path = dir.join("contacts.json");
    if !path.is_file() {
        return Ok((Vec::new(), 0));
    }
    let content = fs::read_to_string(&path).map_err(|source| AppError::ReadFile {
        path: path.clone(),
        source,
    })?;
    Ok(parse_records::<Contact>(&content))
}

fn load_calls(
    dir: &Path,
    since: Option<NaiveDate>,
    until: Option<NaiveDate>,
    tz: Timezone,
) -> (Vec<ScheduledCall>, i64) {
    let mut files: Vec<PathBuf> = Vec::new();
    if let Ok(entries) = glob::glob(&format!("{}/calls/**/*.json", dir.display())) {
        files.extend(entries.flatten());
    }

    let results: Vec<(Vec<ScheduledCall>, i64)> = files
        .par_iter()
        .map(|path| match fs::read_to_string(path) {
            Ok(content) => parse_records::<ScheduledCall>(&content),
            // An unreadable file is skipped like a malformed one
            Err(_) => (Vec::new(), 1),
        })
        .collect();

    let mut calls: Vec<ScheduledCall> = Vec::new();
    let mut skipped = 0i64;
    for (mut file_calls, file_skipped) in results {
        calls.append(&mut file_calls);
        skipped += file_skipped;
    }

    if since.is_some() || until.is_some() {
        calls.retain(|call| in_range(call, since, until, tz));
    }
    (calls, skipped)
}

/// Parse a JSON array element by element so one bad record does not drop the
/// whole file. A file that is not an array counts as one skipped unit.
fn parse_records<T: serde::de::DeserializeOwned>(content: &str) -> (Vec<T>, i64) {
    let values: Vec<serde_json::Value> = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => return (Vec::new(), 1),
    };
    let mut records = Vec::with_capacity(values.len());
    let mut skipped = 0i64;
    for value in values {
        match serde_json::from_value::<T>(value) {
            Ok(record) => records.push(record),
            Err(_) => skipped += 1,
        }
    }
    (records, skipped)
}

/// Date filters compare the call's calendar date in the display timezone.
fn in_range(
    call: &ScheduledCall,
    since: Option<NaiveDate>,
    until: Option<NaiveDate>,
    tz: Timezone,
) -> bool {
    let Some(ts) = call.timestamp() else {
        return false;
    };
    let date = tz.date_of(ts);
    if let Some(s) = since
        && date < s
    {
        return false;
    }
    if let Some(u) = until
        && date > u
    {
        return false;
    }
    true
}
