use crate::models::MonthlyTable;

/// The storage collaborator: turns an uploaded payload into a table.
///
/// Implementations own every file-format concern — encodings, headers, cell
/// parsing — so the engine never sees raw bytes. The declared extension is
/// whatever the caller knows about the payload (`"csv"`, `"xlsx"`, ...);
/// implementations decide which ones they support and reject the rest with
/// their own error type.
pub trait TableSource {
    /// This implementation's parse-failure type.
    type Error: std::error::Error;

    /// Parse raw bytes with a declared extension into a table.
    fn parse(&self, bytes: &[u8], extension: &str) -> Result<MonthlyTable, Self::Error>;
}
