use comfy_table::{presets::ASCII_MARKDOWN, Attribute, Cell, CellAlignment, ContentArrangement, Table};

/// Builder for the breakdown tables of a text report
pub struct TableBuilder {
    table: Table,
}

impl TableBuilder {
    /// Create a new table builder with default styling
    pub fn new() -> Self {
        let mut table = Table::new();

        table
            .load_preset(ASCII_MARKDOWN)
            .set_content_arrangement(ContentArrangement::Dynamic);

        Self { table }
    }

    /// Set table headers, rendered bold
    pub fn headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let header_cells: Vec<Cell> = headers
            .into_iter()
            .map(|h| Cell::new(h.into()).add_attribute(Attribute::Bold))
            .collect();

        self.table.set_header(header_cells);
        self
    }

    /// Add a label row with a right-aligned count
    pub fn count_row<S: Into<String>>(&mut self, label: S, count: u64) -> &mut Self {
        self.table.add_row(vec![
            Cell::new(label.into()),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
        self
    }

    /// Add a row of plain text cells
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row_cells: Vec<Cell> = cells.into_iter().map(|cell| Cell::new(cell.into())).collect();

        self.table.add_row(row_cells);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.table.row_iter().next().is_none()
    }

    /// Build and return the formatted table as a string
    pub fn build(&self) -> String {
        self.table.to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
