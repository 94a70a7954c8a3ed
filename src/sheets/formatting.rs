use crate::models::{CellColor, RichCell};
use google_sheets4::FieldMask;
use google_sheets4::api::{
    CellData, CellFormat, Color, ExtendedValue, GridCoordinate, Request, RowData, TextFormat,
    TextFormatRun, UpdateCellsRequest,
};

/// Overwrite one row starting at column 0 of `row`.
pub(super) fn update_row_request(sheet_id: Option<i32>, row: i32, cells: &[RichCell]) -> Request {
    Request {
        update_cells: Some(UpdateCellsRequest {
            rows: Some(vec![RowData {
                values: Some(cells.iter().map(cell_data).collect()),
            }]),
            fields: Some(FieldMask::new(&["*"])),
            start: Some(GridCoordinate {
                sheet_id,
                row_index: Some(row),
                column_index: Some(0),
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Link cells become a HYPERLINK formula and lose their text runs.
pub(super) fn cell_data(cell: &RichCell) -> CellData {
    let user_entered_format = Some(CellFormat {
        background_color: cell.background.map(to_color),
        ..Default::default()
    });

    match &cell.link {
        Some(link) => CellData {
            user_entered_value: Some(ExtendedValue {
                formula_value: Some(hyperlink_formula(link, &cell.text)),
                ..Default::default()
            }),
            user_entered_format,
            ..Default::default()
        },
        None => CellData {
            user_entered_value: Some(ExtendedValue {
                string_value: Some(cell.text.clone()),
                ..Default::default()
            }),
            user_entered_format,
            text_format_runs: Some(vec![TextFormatRun {
                start_index: Some(0),
                format: Some(TextFormat {
                    bold: Some(cell.bold),
                    ..Default::default()
                }),
            }]),
            ..Default::default()
        },
    }
}

pub(super) fn hyperlink_formula(link: &str, text: &str) -> String {
    format!(
        "=HYPERLINK(\"{}\",\"{}\")",
        link.replace('"', "\"\""),
        text.replace('"', "\"\"")
    )
}

fn to_color(color: CellColor) -> Color {
    Color {
        red: Some(color.red),
        green: Some(color.green),
        blue: Some(color.blue),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_row_request() {
        let cells = vec![RichCell::text("100"), RichCell::text("A1")];
        let req = update_row_request(Some(9), 4, &cells);
        let update = req.update_cells.unwrap();

        let start = update.start.unwrap();
        assert_eq!(start.sheet_id, Some(9));
        assert_eq!(start.row_index, Some(4));
        assert_eq!(start.column_index, Some(0));

        let rows = update.rows.unwrap();
        assert_eq!(rows.len(), 1, "one request writes exactly one row");
        assert_eq!(rows[0].values.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_plain_cell() {
        let data = cell_data(&RichCell::text("Warranty"));

        let value = data.user_entered_value.unwrap();
        assert_eq!(value.string_value.as_deref(), Some("Warranty"));
        assert_eq!(value.formula_value, None);

        let runs = data.text_format_runs.unwrap();
        assert_eq!(runs[0].format.as_ref().unwrap().bold, Some(false));

        // No color at all rather than an explicit black or white
        assert!(data.user_entered_format.unwrap().background_color.is_none());
    }

    #[test]
    fn test_bold_cell_with_background() {
        let cell = RichCell::text("ID").bold().with_background(CellColor::YELLOW);
        let data = cell_data(&cell);

        let runs = data.text_format_runs.unwrap();
        assert_eq!(runs[0].start_index, Some(0));
        assert_eq!(runs[0].format.as_ref().unwrap().bold, Some(true));

        let color = data.user_entered_format.unwrap().background_color.unwrap();
        assert_eq!(color.red, Some(1.0));
        assert_eq!(color.green, Some(1.0));
        assert_eq!(color.blue, Some(0.0));
    }

    #[test]
    fn test_link_cell() {
        let cell = RichCell::link("iOSmates", "https://iosmates.com").bold();
        let data = cell_data(&cell);

        let value = data.user_entered_value.unwrap();
        assert_eq!(
            value.formula_value.as_deref(),
            Some("=HYPERLINK(\"https://iosmates.com\",\"iOSmates\")")
        );
        assert_eq!(value.string_value, None);
        assert!(data.text_format_runs.is_none(), "link cells drop bold runs");
    }

    #[test]
    fn test_hyperlink_formula_escapes_quotes() {
        assert_eq!(
            hyperlink_formula("https://x.test/?q=\"a\"", "say \"hi\""),
            "=HYPERLINK(\"https://x.test/?q=\"\"a\"\"\",\"say \"\"hi\"\"\")"
        );
    }
}
