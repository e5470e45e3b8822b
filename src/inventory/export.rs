use super::record::MeshRecord;

/// Status label written for every exported part.
pub const KEPT_STATUS: &str = "Keep";

/// Worksheet name for the exported parts.
pub const EXPORT_SHEET: &str = "Kept Meshes";

/// Worksheet columns as `(header, width in characters)`.
pub const EXPORT_COLUMNS: [(&str, u16); 10] = [
    ("Component Name", 25),
    ("Width (mm)", 20),
    ("Height (mm)", 20),
    ("Depth (mm)", 20),
    ("Full Dimensions", 30),
    ("Vertex Count", 15),
    ("Material Name", 25),
    ("Status", 15),
    ("Notes", 30),
    ("Export Order", 15),
];

/// One worksheet row for a kept part.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    /// 1-based position in the export.
    pub order: usize,
    pub name: String,
    pub width_mm: f64,
    pub height_mm: f64,
    pub depth_mm: f64,
    pub dimensions: String,
    pub vertex_count: usize,
    pub material_name: String,
    pub status: &'static str,
    pub notes: String,
}

impl ExportRow {
    pub(crate) fn from_record(order: usize, record: &MeshRecord) -> Self {
        let extents = record.extents();
        Self {
            order,
            name: record.name().to_owned(),
            width_mm: extents.width_mm(),
            height_mm: extents.height_mm(),
            depth_mm: extents.depth_mm(),
            dimensions: record.dimensions_text(),
            vertex_count: record.vertex_count(),
            material_name: record.material_name().to_owned(),
            status: KEPT_STATUS,
            notes: String::new(),
        }
    }

    /// Cell values in [`EXPORT_COLUMNS`] order.
    #[must_use]
    pub fn cells(&self) -> [String; 10] {
        [
            self.name.clone(),
            format!("{:.2}", self.width_mm),
            format!("{:.2}", self.height_mm),
            format!("{:.2}", self.depth_mm),
            self.dimensions.clone(),
            self.vertex_count.to_string(),
            self.material_name.clone(),
            self.status.to_owned(),
            self.notes.clone(),
            self.order.to_string(),
        ]
    }
}

/// File name for an export made at `timestamp`.
///
/// `timestamp` is an ISO-8601 string; anything after the seconds is dropped
/// and `:` and `.` become `-`.
#[must_use]
pub fn export_file_name(timestamp: &str) -> String {
    let stamp: String = timestamp
        .chars()
        .take(19)
        .map(|c| if matches!(c, ':' | '.') { '-' } else { c })
        .collect();
    format!("GLB_Kept_Meshes_{stamp}.xlsx")
}

/// Tooltip for the export control given the number of kept parts.
#[must_use]
pub fn export_label(kept: usize) -> String {
    match kept {
        0 => "No meshes marked as \"Keep\" to export".to_owned(),
        1 => "Export 1 kept mesh to Excel".to_owned(),
        n => format!("Export {n} kept meshes to Excel"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_strips_separators() {
        assert_eq!(
            export_file_name("2024-05-01T12:34:56.789Z"),
            "GLB_Kept_Meshes_2024-05-01T12-34-56.xlsx"
        );
    }

    #[test]
    fn labels_pluralize() {
        assert_eq!(export_label(0), "No meshes marked as \"Keep\" to export");
        assert_eq!(export_label(1), "Export 1 kept mesh to Excel");
        assert_eq!(export_label(3), "Export 3 kept meshes to Excel");
    }

    #[test]
    fn columns_and_cells_line_up() {
        let row = ExportRow {
            order: 2,
            name: "Lid".into(),
            width_mm: 10.0,
            height_mm: 20.5,
            depth_mm: 0.25,
            dimensions: "10.00 × 20.50 × 0.25 mm".into(),
            vertex_count: 1234,
            material_name: "ABS".into(),
            status: KEPT_STATUS,
            notes: String::new(),
        };
        let cells = row.cells();
        assert_eq!(cells.len(), EXPORT_COLUMNS.len());
        assert_eq!(cells[0], "Lid");
        assert_eq!(cells[3], "0.25");
        assert_eq!(cells[7], "Keep");
        assert_eq!(cells[9], "2");
    }
}
