use std::{ffi::OsStr, fs, path::Path};

use tracing::{debug, warn};

use super::{Day, Result, ScaffoldError};

const DAY_PREFIX: &str = "day";

/// How the scan treats a `day*` entry whose suffix is not a number.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Policy {
    /// Any bad entry abandons the scan and numbering restarts at 1.
    #[default]
    Strict,
    /// Bad entries are skipped.
    Lenient,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Numbering {
    pub day: Day,
    /// The scan found nothing usable and the day was reset to 1.
    pub fell_back: bool,
}

impl Numbering {
    fn fallback() -> Self {
        Self {
            day: Day::FIRST,
            fell_back: true,
        }
    }
}

fn parse_suffix(name: &OsStr) -> Option<u64> {
    name.to_str()?.strip_prefix(DAY_PREFIX)?.parse().ok()
}

fn has_prefix(name: &OsStr) -> bool {
    name.as_encoded_bytes().starts_with(DAY_PREFIX.as_bytes())
}

/// Largest numeric suffix among `day*` names, or `None` if the scan failed.
pub fn max_suffix<'a, I>(names: I, policy: Policy) -> Option<u64>
where
    I: IntoIterator<Item = &'a OsStr>,
{
    let mut max: Option<u64> = None;
    for name in names.into_iter().filter(|n| has_prefix(n)) {
        match parse_suffix(name) {
            Some(n) => max = max.max(Some(n)),
            None if policy == Policy::Lenient => {
                warn!(entry = ?name, "skipping entry without a numeric suffix");
            }
            None => {
                warn!(entry = ?name, "entry without a numeric suffix, restarting at day1");
                return None;
            }
        }
    }
    max
}

/// Works out the next day from the entries in `root`.
///
/// Never fails on a bad listing; that falls back to day 1 like any other
/// unusable scan. Only running past `u64::MAX` is an error.
pub fn next_day(root: &Path, policy: Policy) -> Result<Numbering> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(root = %root.display(), error = %err, "cannot list workspace");
            return Ok(Numbering::fallback());
        }
    };
    let mut names = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => names.push(entry.file_name()),
            Err(err) => {
                warn!(error = %err, "cannot read workspace entry");
                return Ok(Numbering::fallback());
            }
        }
    }
    debug!(count = names.len(), "scanned workspace");

    match max_suffix(names.iter().map(|n| n.as_os_str()), policy) {
        Some(max) => {
            let next = max.checked_add(1).ok_or(ScaffoldError::DayOverflow(max))?;
            Ok(Numbering {
                day: Day::new(next),
                fell_back: false,
            })
        }
        None => Ok(Numbering::fallback()),
    }
}
