use htmldom::Element;

use super::Grid;
use crate::error::GridError;
use crate::model::Row;

impl Grid {
    /// Header cell of a column.
    pub fn header_prototype(&self, column: &str) -> Result<Element, GridError> {
        Ok(self.column(column)?.header_prototype(&self.links))
    }

    /// Body cell of a column for an optional row.
    pub fn cell_prototype(&self, column: &str, row: Option<&Row>) -> Result<Element, GridError> {
        self.column(column)?.cell_prototype(row)
    }

    /// Primary-key value of a row, as text.
    pub fn row_id(&self, row: &Row) -> Result<String, GridError> {
        Ok(self.accessor.property(row, &self.primary_key)?.to_plain_string())
    }

    /// Content of one cell. Auto-init cells attach their control to the form.
    pub fn render_cell(&mut self, column: &str, row: &Row) -> Result<String, GridError> {
        let index = self.column_index(column)?;
        self.render_cell_at(index, row)
    }

    fn render_cell_at(&mut self, index: usize, row: &Row) -> Result<String, GridError> {
        let column = &self.columns[index];
        if !(column.is_auto_init() && column.is_row_editable(row)) {
            return column.render(row);
        }

        let row_id = self.row_id(row)?;
        self.columns[index].render_editable(row, &row_id, &mut self.form, &self.config)
    }

    /// Renders the whole grid as a table.
    pub fn render(&mut self) -> Result<String, GridError> {
        self.finalize()?;

        let rows = match self.model.as_deref() {
            Some(model) => model.rows()?,
            None => Vec::new(),
        };
        log::debug!("[grid] rendering '{}' with {} row(s)", self.name, rows.len());

        let header = Element::tr().children(
            self.columns
                .iter()
                .map(|column| column.header_prototype(&self.links)),
        );

        let mut body = Element::new("tbody");
        for row in &rows {
            let mut tr = Element::tr();
            for index in 0..self.columns.len() {
                let mut td = self.columns[index].cell_prototype(Some(row))?;
                td.set_raw(self.render_cell_at(index, row)?);
                tr.push_child(td);
            }
            body.push_child(tr);
        }

        let table = Element::table()
            .id(self.name.as_str())
            .class("grido")
            .data("grido-options", serde_json::to_string(&self.client_options)?)
            .child(Element::new("thead").child(header))
            .child(body);

        Ok(table.to_html())
    }
}
