//! Demo order grid

use grido_forms::SelectBox;
use grido_lib::source::MemorySource;
use grido_lib::{Grid, GridConfig, Row};

fn orders() -> Vec<Row> {
    vec![
        Row::new()
            .set("id", 1)
            .set("status", "open")
            .set("total", 1250)
            .set("placed", "2024-03-05")
            .set("customer", Row::new().set("name", "Contoso")),
        Row::new()
            .set("id", 2)
            .set("status", "shipped")
            .set("total", 80)
            .set("placed", "2024-03-07")
            .set("customer", Row::new().set("name", "Fabrikam")),
        Row::new()
            .set("id", 3)
            .set("status", "closed")
            .set("total", 432)
            .set("placed", "2024-02-28")
            .set("customer", Row::new().set("name", "Northwind")),
    ]
}

/// Builds the demo grid over in-memory orders.
pub fn order_grid(config: GridConfig) -> anyhow::Result<Grid> {
    let mut grid = Grid::new("orders", config);
    grid.set_model(MemorySource::new(orders()));

    grid.add_column_text("status", "Status")
        .set_replacement("shipped", "Shipped")
        .set_editable_control(
            SelectBox::with_items([("open", "Open"), ("shipped", "Shipped"), ("closed", "Closed")]),
        )?
        .set_disable_editable_if(|row| row.get_string("status").ok().flatten() == Some("closed"));

    grid.add_column_number("total", "Total", 2).set_editable(true);

    grid.add_column_date("placed", "Placed");

    grid.add_column_text("customer", "Customer")
        .set_field("customer.name")
        .set_editable_callback(|id, new_value, old_value, column| {
            log::info!(
                "[demo] {} of order {}: '{}' -> '{}'",
                column.name(),
                id,
                old_value,
                new_value
            );
            true
        });

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grido_lib::Request;

    #[test]
    fn demo_grid_renders() {
        let mut grid = order_grid(GridConfig::default()).unwrap();
        let html = grid.render().unwrap();

        assert!(html.contains("Contoso"));
        assert!(html.contains("05.03.2024"));
        assert!(html.contains(r#"name="edittotal[1]" value="1,250.00""#));
        assert!(!html.contains(r#"data-grido-editable-value="closed""#));
    }

    #[test]
    fn demo_grid_serves_select_control() {
        let mut grid = order_grid(GridConfig::default()).unwrap();
        let request = Request::ajax()
            .with_param("do", "orders-columns-status-editableControl")
            .with_param("orders-columns-status-value", "shipped");

        let body = grid.dispatch(&request).unwrap().body();
        assert!(body.starts_with("<select"));
        assert!(body.contains(r#"<option value="shipped" selected="selected">Shipped</option>"#));
    }
}
