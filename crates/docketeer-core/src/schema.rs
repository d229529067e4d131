/// Arrow projection of parsed docket entries.
pub mod docket {
    use std::sync::Arc;

    use arrow::array::{
        ArrayRef, BooleanArray, Date32Array, ListBuilder, StringArray, StringBuilder,
        Time32SecondArray, UInt8Array,
    };
    use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
    use arrow::error::ArrowError;
    use arrow::record_batch::RecordBatch;
    use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

    use crate::types::DocketEntry;

    /// Days from 0001-01-01 (CE) to 1970-01-01.
    const EPOCH_DAYS_FROM_CE: i32 = 719_163;

    /// Schema for one row per docket entry.
    pub fn docket_entry_schema() -> Schema {
        Schema::new(vec![
            Field::new("case_number", DataType::Utf8, false),
            Field::new("relief_category", DataType::Utf8, false),
            Field::new("relief_type", DataType::Utf8, true),
            Field::new("relief_sought", DataType::Utf8, true),
            Field::new("applicant", DataType::Utf8, true),
            Field::new("section", DataType::UInt8, true),
            Field::new("township", DataType::Utf8, true),
            Field::new("range", DataType::Utf8, true),
            Field::new("county", DataType::Utf8, true),
            Field::new("meridian", DataType::Utf8, false),
            Field::new("hearing_date", DataType::Date32, true),
            Field::new("hearing_time", DataType::Time32(TimeUnit::Second), true),
            Field::new("status", DataType::Utf8, false),
            Field::new("continuation_date", DataType::Date32, true),
            Field::new("judge", DataType::Utf8, true),
            Field::new("attorney", DataType::Utf8, true),
            Field::new("result_text", DataType::Utf8, true),
            Field::new("valid", DataType::Boolean, false),
            Field::new(
                "validation_errors",
                DataType::List(Arc::new(Field::new("item", DataType::Utf8, true))),
                false,
            ),
        ])
    }

    /// Build a [`RecordBatch`] matching [`docket_entry_schema`].
    pub fn entries_to_batch(entries: &[DocketEntry]) -> Result<RecordBatch, ArrowError> {
        let utf8 = |f: fn(&DocketEntry) -> Option<&str>| -> ArrayRef {
            Arc::new(StringArray::from(entries.iter().map(f).collect::<Vec<_>>()))
        };
        let owned = |f: fn(&DocketEntry) -> Option<String>| -> ArrayRef {
            Arc::new(StringArray::from(entries.iter().map(f).collect::<Vec<_>>()))
        };
        let date = |f: fn(&DocketEntry) -> Option<NaiveDate>| -> ArrayRef {
            Arc::new(Date32Array::from(
                entries.iter().map(|e| f(e).map(date32)).collect::<Vec<_>>(),
            ))
        };

        let mut errors = ListBuilder::new(StringBuilder::new());
        for entry in entries {
            for message in &entry.validation_errors {
                errors.values().append_value(message);
            }
            errors.append(true);
        }

        let columns: Vec<ArrayRef> = vec![
            utf8(|e| Some(e.case_number.as_str())),
            utf8(|e| Some(e.relief_category.as_str())),
            utf8(|e| e.relief_type.as_deref()),
            utf8(|e| e.relief_sought.as_deref()),
            utf8(|e| e.applicant.as_deref()),
            Arc::new(UInt8Array::from(
                entries.iter().map(|e| e.legal.section).collect::<Vec<_>>(),
            )),
            owned(|e| e.legal.township.map(|t| t.to_string())),
            owned(|e| e.legal.range.map(|r| r.to_string())),
            utf8(|e| e.legal.county.as_deref()),
            utf8(|e| Some(e.legal.meridian.as_str())),
            date(|e| e.hearing_date),
            Arc::new(Time32SecondArray::from(
                entries
                    .iter()
                    .map(|e| e.hearing_time.map(time32))
                    .collect::<Vec<_>>(),
            )),
            utf8(|e| Some(e.status.as_str())),
            date(|e| e.continuation_date),
            utf8(|e| e.judge.as_deref()),
            utf8(|e| e.attorney.as_deref()),
            utf8(|e| e.result_text.as_deref()),
            Arc::new(BooleanArray::from(
                entries.iter().map(|e| e.valid).collect::<Vec<_>>(),
            )),
            Arc::new(errors.finish()),
        ];

        RecordBatch::try_new(Arc::new(docket_entry_schema()), columns)
    }

    fn date32(d: NaiveDate) -> i32 {
        d.num_days_from_ce() - EPOCH_DAYS_FROM_CE
    }

    fn time32(t: NaiveTime) -> i32 {
        t.num_seconds_from_midnight() as i32
    }
}
