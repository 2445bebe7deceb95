use std::borrow::Cow;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::domain::entities::dataset::Dataset;
use crate::error::{EditorError, Result};

const COUNTRY_CODE: &str = "+91";

/// `+919876543210` becomes `+91 9876543210`; anything else is left alone.
pub fn space_after_country_code(value: &str) -> Cow<'_, str> {
    match value.strip_prefix(COUNTRY_CODE) {
        Some(rest) => Cow::Owned(format!("{COUNTRY_CODE} {rest}")),
        None => Cow::Borrowed(value),
    }
}

/// Header quoted only where needed, every data field quoted, `\n` line ends.
pub fn write_dataset_csv(dataset: &Dataset, phone_column: &str) -> Result<Vec<u8>> {
    let mut header_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    header_writer.write_record(dataset.columns())?;
    let mut out = header_writer
        .into_inner()
        .map_err(|err| EditorError::Io(err.into_error()))?;

    let phone_idx = dataset.schema().position(phone_column);
    let mut body_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for row in dataset.rows() {
        let record: Vec<Cow<'_, str>> = row
            .values()
            .iter()
            .enumerate()
            .map(|(col_idx, value)| {
                if Some(col_idx) == phone_idx {
                    space_after_country_code(value)
                } else {
                    Cow::Borrowed(value.as_str())
                }
            })
            .collect();
        body_writer.write_record(record.iter().map(|value| value.as_bytes()))?;
    }
    let body = body_writer
        .into_inner()
        .map_err(|err| EditorError::Io(err.into_error()))?;

    out.extend_from_slice(&body);
    Ok(out)
}
