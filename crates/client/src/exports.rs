//! Timetable export downloads.

use edt_core::errors::ScheduleResult;

use crate::ApiClient;

/// Export formats offered by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Excel,
}

impl ExportFormat {
    /// Path segment in the export URL.
    pub fn segment(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "excel",
        }
    }

    /// File extension for the saved download.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Suggested name for a downloaded timetable export.
pub fn export_file_name(classe_id: i64, semestre_id: i64, format: ExportFormat) -> String {
    format!(
        "EDT_{}_S{}.{}",
        classe_id,
        semestre_id,
        format.extension()
    )
}

impl ApiClient {
    /// `GET /exports/emploi-temps/{id}/{pdf|excel}`: the rendered timetable
    /// as a binary stream, to be saved client-side.
    pub async fn export_timetable(
        &self,
        emploi_temps_id: i64,
        format: ExportFormat,
    ) -> ScheduleResult<Vec<u8>> {
        self.get_bytes(&format!(
            "/exports/emploi-temps/{}/{}",
            emploi_temps_id,
            format.segment()
        ))
        .await
    }
}
