use derive_getters::Getters;

/// Value sent for `table` when no table is rendered on the page.
/// This is what `JSON.stringify(null)` produces.
pub const ABSENT_TABLE: &str = "null";

/// Everything the `downloadFiles` route needs to build an rsync command.
#[derive(Debug, Getters, PartialEq, Clone, Default)]
pub struct DownloadRequest {
    id: Option<String>,
    plate: Option<String>,
    version: Option<String>,
    /// JSON text of the table rows, when a table is rendered.
    table: Option<String>,
}

impl DownloadRequest {
    pub fn new(
        id: Option<String>,
        plate: Option<String>,
        version: Option<String>,
        table: Option<String>,
    ) -> Self {
        Self {
            id,
            plate,
            version,
            table,
        }
    }

    /// Form fields in the order the server reads them.
    /// Missing values are sent empty, a missing table is sent as [ABSENT_TABLE].
    pub fn to_form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.clone().unwrap_or_default()),
            ("plate", self.plate.clone().unwrap_or_default()),
            ("version", self.version.clone().unwrap_or_default()),
            (
                "table",
                self.table
                    .clone()
                    .unwrap_or_else(|| ABSENT_TABLE.to_owned()),
            ),
        ]
    }
}
