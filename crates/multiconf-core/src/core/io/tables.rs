use crate::core::models::records::{DeviationRecord, MetricRecord, SimilarityRecord};
use std::io::Write;
use thiserror::Error;
use tracing::warn;

/// Errors from writing an output table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("CSV write error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Writes the ensemble-aggregate RMSR table.
///
/// Column order and naming are part of the contract; downstream consumers
/// key on them positionally and by name:
/// `predictor,residue,residue_aa,RMSR`.
pub fn write_aggregate_rmsr<W: Write>(
    records: &[DeviationRecord],
    writer: W,
) -> Result<(), TableError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["predictor", "residue", "residue_aa", "RMSR"])?;
    for record in records {
        csv.write_record(&[
            record.predictor.clone(),
            record.residue.to_string(),
            record.residue_name.clone(),
            record.value.to_string(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes the per-model RMSR table:
/// `predictor,model,residue,residue_aa,RMSR`.
///
/// Rows without a model number do not fit this shape and are skipped with a
/// warning; they belong in the aggregate table.
pub fn write_per_model_rmsr<W: Write>(
    records: &[DeviationRecord],
    writer: W,
) -> Result<(), TableError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["predictor", "model", "residue", "residue_aa", "RMSR"])?;
    for record in records {
        let Some(model) = record.model else {
            warn!(
                predictor = %record.predictor,
                residue = record.residue,
                "Record without a model number in per-model table, skipping"
            );
            continue;
        };
        csv.write_record(&[
            record.predictor.clone(),
            model.to_string(),
            record.residue.to_string(),
            record.residue_name.clone(),
            record.value.to_string(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes the per-residue RMSF table: `predictor,residue,residue_aa,rmsf`.
pub fn write_rmsf<W: Write>(records: &[DeviationRecord], writer: W) -> Result<(), TableError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["predictor", "residue", "residue_aa", "rmsf"])?;
    for record in records {
        csv.write_record(&[
            record.predictor.clone(),
            record.residue.to_string(),
            record.residue_name.clone(),
            record.value.to_string(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes the RMSF-profile similarity table:
/// `element1,element2,cosine_similarity`.
pub fn write_cosine_similarity<W: Write>(
    records: &[SimilarityRecord],
    writer: W,
) -> Result<(), TableError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["element1", "element2", "cosine_similarity"])?;
    for record in records {
        csv.write_record(&[
            record.first.clone(),
            record.second.clone(),
            record.value.to_string(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes the frame-metric table: `predictor,frame,metrics`. The metrics
/// column carries the external calculator's payload verbatim.
pub fn write_frame_metrics<W: Write>(
    records: &[MetricRecord],
    writer: W,
) -> Result<(), TableError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["predictor", "frame", "metrics"])?;
    for record in records {
        csv.write_record(&[
            record.predictor.clone(),
            record.frame.to_string(),
            record.payload.clone(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}
