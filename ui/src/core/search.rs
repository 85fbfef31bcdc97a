//! Search bar draft and its validated form.

use std::num::IntErrorKind;

use thiserror::Error;
use time::{macros::format_description, Date};

/// Raw text as typed into the header search bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDraft {
    pub location: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFormData {
    pub location: String,
    pub check_in: Option<Date>,
    pub check_out: Option<Date>,
    pub people: u32,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("guests must be a whole number (got {0:?})")]
    GuestsNotANumber(String),
    #[error("guests must be between 1 and {max}")]
    GuestsOutOfRange { max: u32 },
    #[error("{field} must be a date like 2025-06-30 (got {value:?})")]
    BadDate { field: &'static str, value: String },
    #[error("check-out must be after check-in")]
    CheckOutNotAfterCheckIn,
}

impl SearchDraft {
    /// Validate the draft. Blank fields are allowed; blank guests means one.
    pub fn validate(&self, max_guests: u32) -> Result<SearchFormData, SearchError> {
        let people = match self.guests.trim() {
            "" => 1,
            raw => raw.parse::<u32>().map_err(|err| match err.kind() {
                IntErrorKind::PosOverflow => SearchError::GuestsOutOfRange { max: max_guests },
                _ => SearchError::GuestsNotANumber(raw.to_string()),
            })?,
        };
        if people == 0 || people > max_guests {
            return Err(SearchError::GuestsOutOfRange { max: max_guests });
        }

        let check_in = parse_date("check-in", &self.check_in)?;
        let check_out = parse_date("check-out", &self.check_out)?;
        if let (Some(start), Some(end)) = (check_in, check_out) {
            if end <= start {
                return Err(SearchError::CheckOutNotAfterCheckIn);
            }
        }

        Ok(SearchFormData {
            location: self.location.trim().to_string(),
            check_in,
            check_out,
            people,
        })
    }
}

fn parse_date(field: &'static str, raw: &str) -> Result<Option<Date>, SearchError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    Date::parse(raw, &format_description!("[year]-[month]-[day]"))
        .map(Some)
        .map_err(|_| SearchError::BadDate {
            field,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn draft(location: &str, check_in: &str, check_out: &str, guests: &str) -> SearchDraft {
        SearchDraft {
            location: location.into(),
            check_in: check_in.into(),
            check_out: check_out.into(),
            guests: guests.into(),
        }
    }

    #[test]
    fn empty_draft_is_a_one_guest_search() {
        let form = SearchDraft::default().validate(16).unwrap();
        assert_eq!(form.people, 1);
        assert!(form.location.is_empty());
        assert_eq!(form.check_in, None);
    }

    #[test]
    fn full_draft_parses() {
        let form = draft(" Bali ", "2025-12-20", "2025-12-27", "4")
            .validate(16)
            .unwrap();
        assert_eq!(form.location, "Bali");
        assert_eq!(form.check_in, Some(date!(2025 - 12 - 20)));
        assert_eq!(form.check_out, Some(date!(2025 - 12 - 27)));
        assert_eq!(form.people, 4);
    }

    #[test]
    fn guest_bounds() {
        assert_eq!(
            draft("", "", "", "0").validate(16),
            Err(SearchError::GuestsOutOfRange { max: 16 })
        );
        assert_eq!(
            draft("", "", "", "17").validate(16),
            Err(SearchError::GuestsOutOfRange { max: 16 })
        );
        assert_eq!(
            draft("", "", "", "two").validate(16),
            Err(SearchError::GuestsNotANumber("two".into()))
        );
    }

    #[test]
    fn huge_guest_count_is_out_of_range() {
        assert_eq!(
            draft("", "", "", "99999999999999").validate(16),
            Err(SearchError::GuestsOutOfRange { max: 16 })
        );
        assert_eq!(
            draft("", "", "", "-3").validate(16),
            Err(SearchError::GuestsNotANumber("-3".into()))
        );
    }

    #[test]
    fn dates_must_be_ordered() {
        assert_eq!(
            draft("", "2025-12-27", "2025-12-27", "").validate(16),
            Err(SearchError::CheckOutNotAfterCheckIn)
        );
        assert!(matches!(
            draft("", "12/27/2025", "", "").validate(16),
            Err(SearchError::BadDate { field: "check-in", .. })
        ));
    }
}
