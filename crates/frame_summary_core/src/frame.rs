use std::sync::Arc;

use arrow::array::{ArrayRef, Int64Array};
use arrow::compute::sum_checked;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use crate::contract::{FrameSummary, SummaryError};

pub const SAMPLE_COLUMN: &str = "x";
pub const SAMPLE_VALUES: [i64; 5] = [1, 2, 3, 4, 5];

/// Wraps `values` as a single non-nullable `Int64` column named `column`.
pub fn build_frame(column: &str, values: &[i64]) -> Result<RecordBatch, SummaryError> {
    let schema = Arc::new(Schema::new(vec![Field::new(
        column,
        DataType::Int64,
        false,
    )]));
    let arrays: Vec<ArrayRef> = vec![Arc::new(Int64Array::from(values.to_vec()))];

    Ok(RecordBatch::try_new(schema, arrays)?)
}

/// Sums an `Int64` column. An empty column sums to zero; overflow is an error.
pub fn column_sum(batch: &RecordBatch, column: &str) -> Result<i64, SummaryError> {
    let array = batch
        .column_by_name(column)
        .ok_or_else(|| SummaryError::new(format!("column '{column}' not found in frame")))?;

    let values = array
        .as_any()
        .downcast_ref::<Int64Array>()
        .ok_or_else(|| {
            SummaryError::new(format!(
                "column '{column}' has type {}, expected Int64",
                array.data_type()
            ))
        })?;

    Ok(sum_checked(values)?.unwrap_or(0))
}

pub fn frame_shape(batch: &RecordBatch) -> (usize, usize) {
    (batch.num_rows(), batch.num_columns())
}

pub fn summarize(column: &str, values: &[i64]) -> Result<FrameSummary, SummaryError> {
    let batch = build_frame(column, values)?;
    let sum = column_sum(&batch, column)?;

    Ok(FrameSummary {
        sum,
        shape: frame_shape(&batch),
    })
}

/// Summary of the fixed `[1, 2, 3, 4, 5]` sample under column `x`.
pub fn summarize_sample() -> Result<FrameSummary, SummaryError> {
    summarize(SAMPLE_COLUMN, &SAMPLE_VALUES)
}
