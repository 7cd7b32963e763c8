//! Field value normalisation for backend submission.

use crate::FieldValue;

/// Render a field value as the string the backend stores.
///
/// Text and coded values pass through unchanged. A date selection emits the
/// calendar day the operator picked, as `YYYY-MM-DD`, read in the selection's
/// own timezone. Serialising the instant as UTC instead can move the day
/// forwards or backwards depending on the host offset; taking the local date
/// keeps the emitted day stable for any offset from -12:00 to +14:00.
pub fn normalize_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) | FieldValue::Code(s) => s.clone(),
        FieldValue::DateSelection { start_date, .. } => {
            start_date.date_naive().format("%Y-%m-%d").to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, TimeZone};

    fn local_midnight(offset_minutes: i32) -> FieldValue {
        let offset = if offset_minutes >= 0 {
            FixedOffset::east_opt(offset_minutes * 60).unwrap()
        } else {
            FixedOffset::west_opt(-offset_minutes * 60).unwrap()
        };
        let start_date = offset
            .from_local_datetime(
                &NaiveDate::from_ymd_opt(2024, 1, 15)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            )
            .single()
            .unwrap();
        FieldValue::DateSelection {
            start_date,
            end_date: None,
        }
    }

    #[test]
    fn text_and_code_pass_through() {
        assert_eq!(normalize_value(&FieldValue::Text("Jane Doe".into())), "Jane Doe");
        assert_eq!(
            normalize_value(&FieldValue::Code("1065AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA".into())),
            "1065AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"
        );
    }

    #[test]
    fn date_is_invariant_across_host_offsets() {
        // Every quarter-hour offset from UTC-12:00 to UTC+14:00.
        for offset_minutes in (-12 * 60..=14 * 60).step_by(15) {
            assert_eq!(
                normalize_value(&local_midnight(offset_minutes)),
                "2024-01-15",
                "offset {offset_minutes} minutes shifted the day"
            );
        }
    }

    #[test]
    fn end_date_is_ignored() {
        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        let start_date = offset.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let end_date = offset.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap();
        let value = FieldValue::DateSelection {
            start_date,
            end_date: Some(end_date),
        };
        assert_eq!(normalize_value(&value), "2024-01-15");
    }
}
