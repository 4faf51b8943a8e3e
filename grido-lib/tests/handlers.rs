//! Tests for the commit and control-fetch request handlers.

mod common;

use common::{CountingSource, order_grid, order_rows, updates};
use grido_forms::TextInput;
use grido_lib::source::{DataSource, MemorySource};
use grido_lib::{ColumnKind, EditResult, Grid, GridConfig, GridError, Request, Response, Row};

fn payload(response: &Response) -> EditResult {
    serde_json::from_value(response.as_json().cloned().unwrap()).unwrap()
}

// =============================================================================
// Commit
// =============================================================================

#[test]
fn test_commit_with_callback() {
    let mut grid = Grid::new("grid", GridConfig::default());
    grid.add_column_text("status", "Status")
        .set_editable_callback(|id, new, old, column| {
            id == "7" && new == "done" && old == "open" && column.name() == "status"
        });

    let response = grid
        .handle_editable("status", &Request::ajax(), "7", "done", "open")
        .unwrap();

    assert_eq!(response.content_type(), Some("application/json; charset=utf-8"));
    assert_eq!(response.body(), r#"{"html":"done","updated":true}"#);
}

#[test]
fn test_commit_callback_result_is_reported() {
    let mut grid = Grid::new("grid", GridConfig::default());
    grid.add_column_text("status", "Status")
        .set_editable_callback(|_, _, _, _| false);

    let response = grid
        .handle_editable("status", &Request::ajax(), "7", "done", "open")
        .unwrap();
    assert_eq!(
        payload(&response),
        EditResult {
            updated: false,
            html: "done".to_string()
        }
    );
}

#[test]
fn test_commit_through_model_update() {
    let (source, counter) = CountingSource::new(order_rows());
    let mut grid = Grid::new("grid", GridConfig::default());
    grid.set_model(source);
    grid.add_column_text("status", "Status").set_editable(false);

    let response = grid
        .handle_editable("status", &Request::ajax(), "7", "done", "open")
        .unwrap();
    assert!(payload(&response).updated);
    assert_eq!(updates(&counter), 1);

    let rows = grid.model().unwrap().rows().unwrap();
    assert_eq!(rows[0].get_string("status").unwrap(), Some("done"));
    assert_eq!(rows[1].get_string("status").unwrap(), Some("closed"));
}

#[test]
fn test_commit_reports_model_update_result() {
    let mut grid = order_grid();
    grid.column_mut("status").unwrap().set_editable(false);

    let response = grid
        .handle_editable("status", &Request::ajax(), "99", "done", "open")
        .unwrap();
    assert!(!payload(&response).updated);
}

#[test]
fn test_commit_html_is_formatted_and_escaped() {
    let mut grid = Grid::new("grid", GridConfig::default());
    grid.add_column_text("note", "Note")
        .set_editable_callback(|_, _, _, _| true);
    grid.add_column_number("total", "Total", 2)
        .set_editable_callback(|_, _, _, _| true);

    let response = grid
        .handle_editable("note", &Request::ajax(), "1", "<b>&", "")
        .unwrap();
    assert_eq!(payload(&response).html, "&lt;b&gt;&amp;");

    let response = grid
        .handle_editable("total", &Request::ajax(), "1", "1234.5", "")
        .unwrap();
    assert_eq!(payload(&response).html, "1,234.50");
}

#[test]
fn test_commit_with_custom_render_uses_row_callback() {
    let mut grid = Grid::new("grid", GridConfig::default());
    grid.add_column_text("status", "Status")
        .set_editable_callback(|_, _, _, _| true)
        .set_custom_render(|row| {
            format!(
                "<em>{}</em>",
                row.get_string("status").ok().flatten().unwrap_or_default()
            )
        })
        .set_editable_row_callback(|id, _| Ok(Row::new().set("id", id).set("status", "done")));

    let response = grid
        .handle_editable("status", &Request::ajax(), "7", "done", "open")
        .unwrap();
    assert_eq!(payload(&response).html, "<em>done</em>");
}

#[test]
fn test_commit_with_custom_render_fetches_row_from_model() {
    let mut grid = order_grid();
    grid.column_mut("status")
        .unwrap()
        .set_custom_render(|row| {
            format!(
                "{}#{}",
                row.get_string("status").ok().flatten().unwrap_or_default(),
                row.get_long("id").ok().flatten().unwrap_or_default()
            )
        })
        .set_editable(false);

    let response = grid
        .handle_editable("status", &Request::ajax(), "7", "done", "open")
        .unwrap();
    assert_eq!(
        payload(&response),
        EditResult {
            updated: true,
            html: "done#7".to_string()
        }
    );
}

#[test]
fn test_commit_missing_row_propagates_source_error() {
    let mut grid = order_grid();
    grid.column_mut("status")
        .unwrap()
        .set_custom_render(|_| String::new())
        .set_editable(false);

    let err = grid
        .handle_editable("status", &Request::ajax(), "99", "done", "open")
        .unwrap_err();
    assert!(matches!(err, GridError::Source(_)));
}

#[test]
fn test_commit_on_plain_request_is_terminated() {
    let (source, counter) = CountingSource::new(order_rows());
    let mut grid = Grid::new("grid", GridConfig::default());
    grid.set_model(source);
    grid.add_column_text("status", "Status").set_editable(false);

    let response = grid
        .handle_editable("status", &Request::plain(), "7", "done", "open")
        .unwrap();

    assert!(response.is_terminated());
    assert_eq!(response.body(), "");
    assert_eq!(response.content_type(), None);
    assert_eq!(updates(&counter), 0);
    let rows = grid.model().unwrap().rows().unwrap();
    assert_eq!(rows[0].get_string("status").unwrap(), Some("open"));
}

#[test]
fn test_commit_on_disabled_column_is_terminated() {
    let (source, counter) = CountingSource::new(order_rows());
    let mut grid = Grid::new("grid", GridConfig::default());
    grid.set_model(source);
    grid.add_column_text("status", "Status")
        .set_editable(false)
        .disable_editable();

    let response = grid
        .handle_editable("status", &Request::ajax(), "7", "done", "open")
        .unwrap();
    assert_eq!(response, Response::Terminated);
    assert_eq!(updates(&counter), 0);
}

#[test]
fn test_configuration_error_precedes_persistence() {
    let (source, counter) = CountingSource::new(order_rows());
    let mut grid = Grid::new("grid", GridConfig::default());
    grid.set_model(source);
    grid.add_column_text("status", "Status").set_editable(false);
    grid.add_column_text("customer", "Customer")
        .set_field("customer.name")
        .set_editable(false);

    let err = grid
        .handle_editable("status", &Request::ajax(), "7", "done", "open")
        .unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(updates(&counter), 0);
}

#[test]
fn test_commit_unknown_column() {
    let mut grid = order_grid();
    let err = grid
        .handle_editable("missing", &Request::ajax(), "7", "done", "open")
        .unwrap_err();
    assert!(matches!(err, GridError::ColumnNotFound(name) if name == "missing"));
}

// =============================================================================
// Control fetch
// =============================================================================

#[test]
fn test_control_fetch_renders_seeded_default_control() {
    let mut grid = order_grid();
    grid.column_mut("status").unwrap().set_editable(false);

    let response = grid
        .handle_editable_control("status", &Request::ajax(), "42")
        .unwrap();

    assert_eq!(response.content_type(), Some("text/plain; charset=utf-8"));
    assert_eq!(
        response.body(),
        r#"<input id="frm-editstatus" class="form-control" type="text" name="editstatus" value="42">"#
    );
    assert_eq!(grid.form().control("editstatus").unwrap().value(), "42");
}

#[test]
fn test_control_fetch_uses_prototype() {
    let mut grid = order_grid();
    grid.column_mut("status")
        .unwrap()
        .set_editable_control(TextInput::new().input_type("number").class("narrow"))
        .unwrap();

    let response = grid
        .handle_editable_control("status", &Request::ajax(), "3")
        .unwrap();
    assert_eq!(
        response.body(),
        r#"<input id="frm-editstatus" class="narrow" type="number" name="editstatus" value="3">"#
    );
}

#[test]
fn test_control_fetch_escapes_value() {
    let mut grid = order_grid();
    grid.column_mut("status").unwrap().set_editable(false);

    let response = grid
        .handle_editable_control("status", &Request::ajax(), r#"a "b""#)
        .unwrap();
    assert!(response.body().contains(r#"value="a &quot;b&quot;""#));
}

#[test]
fn test_control_fetch_gating() {
    let mut grid = order_grid();
    let response = grid
        .handle_editable_control("status", &Request::ajax(), "42")
        .unwrap();
    assert!(response.is_terminated());

    grid.column_mut("status").unwrap().set_editable(false);
    let response = grid
        .handle_editable_control("status", &Request::plain(), "42")
        .unwrap();
    assert!(response.is_terminated());
    assert!(grid.form().is_empty());
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn test_dispatch_commit_from_query() {
    let mut grid = order_grid();
    grid.column_mut("status").unwrap().set_editable(false);

    let request = Request::from_query(
        "?do=grid-columns-status-editable&grid-columns-status-id=7\
         &grid-columns-status-newValue=in+progress&grid-columns-status-oldValue=open",
        true,
    );
    let response = grid.dispatch(&request).unwrap();
    assert_eq!(
        payload(&response),
        EditResult {
            updated: true,
            html: "in progress".to_string()
        }
    );
}

#[test]
fn test_dispatch_control_fetch() {
    let mut grid = order_grid();
    grid.column_mut("status").unwrap().set_editable(false);

    let request = Request::ajax()
        .with_param("do", "grid-columns-status-editableControl")
        .with_param("grid-columns-status-value", "open");
    let response = grid.dispatch(&request).unwrap();
    assert!(response.body().contains(r#"value="open""#));
}

#[test]
fn test_dispatch_link_round_trip() {
    let mut grid = order_grid();
    grid.column_mut("status").unwrap().set_editable(false);

    let link = grid.link("status", "editableControl");
    let query = link.split_once('?').map(|(_, q)| q).unwrap();
    let request = Request::from_query(query, true);
    assert!(matches!(grid.dispatch(&request).unwrap(), Response::Text(_)));
}

#[test]
fn test_dispatch_errors() {
    let mut grid = order_grid();
    grid.column_mut("status").unwrap().set_editable(false);

    let err = grid.dispatch(&Request::ajax()).unwrap_err();
    assert!(matches!(err, GridError::MissingParameter(name) if name == "do"));

    let request = Request::ajax().with_param("do", "grid-columns-status-sort");
    assert!(matches!(
        grid.dispatch(&request).unwrap_err(),
        GridError::UnknownSignal(_)
    ));

    let request = Request::ajax().with_param("do", "other-columns-status-editable");
    assert!(matches!(
        grid.dispatch(&request).unwrap_err(),
        GridError::UnknownSignal(_)
    ));

    let request = Request::ajax().with_param("do", "grid-columns-total-editable");
    assert!(matches!(
        grid.dispatch(&request).unwrap_err(),
        GridError::MissingParameter(_)
    ));

    let request = Request::ajax()
        .with_param("do", "grid-columns-total-editable")
        .with_param("grid-columns-total-id", "7");
    assert!(matches!(
        grid.dispatch(&request).unwrap_err(),
        GridError::ColumnNotFound(_)
    ));

    let request = Request::ajax().with_param("do", "grid-columns-status-editable");
    match grid.dispatch(&request).unwrap_err() {
        GridError::MissingParameter(name) => assert_eq!(name, "grid-columns-status-id"),
        other => panic!("expected missing parameter, got {:?}", other),
    }
}

#[test]
fn test_number_column_commit_keeps_kind() {
    let mut grid = Grid::new("grid", GridConfig::default());
    grid.set_model(MemorySource::new(order_rows()));
    grid.add_column_text("total", "Total")
        .set_kind(ColumnKind::number(0))
        .set_editable(false);

    let response = grid
        .handle_editable("total", &Request::ajax(), "8", "2500", "80")
        .unwrap();
    assert_eq!(payload(&response).html, "2,500");
}
