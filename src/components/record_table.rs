//! Record Table Component
//!
//! Rebuilt from scratch with the DOM builder whenever the record store changes.
//! Clicks are handled by one delegated listener on the container, keyed by the
//! `data-*` attributes written on each button and header cell.

use dom_builder::{Builder, ElementBuilder};
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::context::use_tracker;
use crate::models::{RecordKind, Summary};
use crate::sort::toggle_sort;

/// Header titles; `true` marks a sortable column
const COLUMNS: [(&str, bool); 4] = [("", false), ("Amount", true), ("Name", true), ("", false)];

const CELL_CLASSES: &str = "px-6 py-4 whitespace-nowrap";
const HEADER_CLASSES: &str = "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";
const EDIT_BUTTON_CLASSES: &str = "px-4 py-2 font-medium text-white bg-blue-600 rounded-md hover:bg-blue-500 focus:outline-none focus:shadow-outline-blue active:bg-blue-600 transition duration-150 ease-in-out";
const DELETE_BUTTON_CLASSES: &str = "ml-2 px-4 py-2 font-medium text-white bg-red-600 rounded-md hover:bg-red-500 focus:outline-none focus:shadow-outline-red active:bg-red-600 transition duration-150 ease-in-out";

/// One rendered row
#[derive(Debug, Clone, PartialEq)]
pub struct RowModel {
    pub id: String,
    pub kind: RecordKind,
    pub index: usize,
    pub amount: String,
    pub name: String,
}

/// Rows in display order: gained records, then burned, each in insertion order
pub fn table_rows(summary: &Summary) -> Vec<RowModel> {
    RecordKind::ALL
        .iter()
        .flat_map(|&kind| {
            summary
                .records(kind)
                .iter()
                .enumerate()
                .map(move |(index, record)| RowModel {
                    id: format!("{}{}", index, kind),
                    kind,
                    index,
                    amount: record.amount_text(),
                    name: record.name.clone().unwrap_or_default(),
                })
        })
        .collect()
}

/// What a click inside the table asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    Edit(RecordKind, usize),
    Delete(RecordKind, usize),
    Sort(usize),
}

impl TableAction {
    /// Decode the `data-action`, `data-kind`, `data-index` and `data-column`
    /// attributes of the clicked element
    pub fn parse(
        action: &str,
        kind: Option<&str>,
        index: Option<&str>,
        column: Option<&str>,
    ) -> Option<Self> {
        let target = || -> Option<(RecordKind, usize)> {
            Some((kind?.parse().ok()?, index?.parse().ok()?))
        };
        match action {
            "edit" => target().map(|(k, i)| TableAction::Edit(k, i)),
            "delete" => target().map(|(k, i)| TableAction::Delete(k, i)),
            "sort" => column?.parse().ok().map(TableAction::Sort),
            _ => None,
        }
    }
}

fn cell(builder: &Builder, row: &Element) -> Result<ElementBuilder, JsValue> {
    let td = builder.create("td")?;
    td.classes([CELL_CLASSES]).append_to(row);
    Ok(td)
}

/// Clear `container` and draw the whole table for `summary`
pub fn render_table(builder: &Builder, container: &Element, summary: &Summary) -> Result<(), JsValue> {
    container.set_inner_html("");

    let table = builder
        .create("table")?
        .classes(["min-w-full divide-y divide-gray-200"])
        .append_to(container)
        .build();
    let thead = builder.create("thead")?.append_to(&table).build();
    let header = builder.create("tr")?.append_to(&thead).build();
    for (column, (title, sortable)) in COLUMNS.iter().enumerate() {
        let th = builder.create("th")?;
        th.text(title).classes([HEADER_CLASSES]).append_to(&header);
        if *sortable {
            th.data("action", "sort")
                .data("column", &column.to_string())
                .classes(["cursor-pointer"]);
        }
    }

    let tbody = builder
        .create("tbody")?
        .classes(["divide-y divide-gray-200"])
        .append_to(&table)
        .build();

    for row in table_rows(summary) {
        let tr = builder.create("tr")?.id(&row.id).append_to(&tbody).build();
        let index = row.index.to_string();

        let indicator = cell(builder, &tr)?.build();
        builder
            .create("i")?
            .classes([row.kind.indicator_classes()])
            .aria_label(row.kind.as_str())
            .append_to(&indicator);

        cell(builder, &tr)?.text(&row.amount).classes(["font-bold text-gray-600"]);
        cell(builder, &tr)?.text(&row.name);

        let actions = cell(builder, &tr)?.build();
        for (action, label, classes) in [
            ("edit", "Edit", EDIT_BUTTON_CLASSES),
            ("delete", "Delete", DELETE_BUTTON_CLASSES),
        ] {
            builder
                .create("button")?
                .text(label)
                .input_type("button")
                .classes([classes])
                .data("action", action)
                .data("kind", row.kind.as_str())
                .data("index", &index)
                .append_to(&actions);
        }
    }
    Ok(())
}

/// Reorder the body rows of the rendered table by one column's text.
/// Only the DOM moves; the next render restores insertion order.
fn sort_rendered_rows(container: &Element, column: usize) -> Result<(), JsValue> {
    let Some(tbody) = container.query_selector("tbody")? else {
        return Ok(());
    };
    let rows = tbody.children();
    let rows: Vec<Element> = (0..rows.length()).filter_map(|i| rows.item(i)).collect();
    let cells: Vec<String> = rows
        .iter()
        .map(|row| {
            row.children()
                .item(column as u32)
                .and_then(|cell| cell.text_content())
                .unwrap_or_default()
        })
        .collect();

    let (order, direction) = toggle_sort(&cells);
    for i in order {
        tbody.append_child(&rows[i])?;
    }
    log::debug!(target: "TABLE", "Sorted column {} {:?}", column, direction);
    Ok(())
}

fn clicked_action(ev: &web_sys::MouseEvent) -> Option<TableAction> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    let el = target.closest("[data-action]").ok()??;
    let attr = |name: &str| el.get_attribute(name);
    TableAction::parse(
        &attr("data-action")?,
        attr("data-kind").as_deref(),
        attr("data-index").as_deref(),
        attr("data-column").as_deref(),
    )
}

#[component]
pub fn RecordTable() -> impl IntoView {
    let ctx = use_tracker();
    let container_ref = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        let summary = ctx.records.with(|store| store.summary());
        let (Some(container), Some(builder)) = (container_ref.get(), Builder::from_window()) else {
            return;
        };
        if let Err(e) = render_table(&builder, &container, &summary) {
            log::error!(target: "TABLE", "Render failed: {:?}", e);
        }
    });

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(action) = clicked_action(&ev) else {
            return;
        };
        match action {
            TableAction::Edit(kind, index) => ctx.begin_edit(kind, index),
            TableAction::Delete(kind, index) => ctx.remove(kind, index),
            TableAction::Sort(column) => {
                if let Some(container) = container_ref.get_untracked() {
                    if let Err(e) = sort_rendered_rows(&container, column) {
                        log::error!(target: "TABLE", "Sort failed: {:?}", e);
                    }
                }
            }
        }
    };

    view! {
        <div id="divDetails" class="tracker-table" node_ref=container_ref on:click=on_click></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageKeys;
    use crate::models::{Record, Totals};
    use crate::sort::SortDirection;
    use crate::storage::MemoryStorage;
    use crate::store::RecordStore;

    fn sample() -> Summary {
        Summary {
            gained: vec![
                Record::new(100.0, Some("breakfast".to_string())),
                Record::new(200.0, Some("lunch".to_string())),
            ],
            burned: vec![Record::new(50.0, Some("walk".to_string()))],
            totals: Totals {
                gained_total: 300.0,
                burned_total: 50.0,
            },
        }
    }

    #[test]
    fn test_rows_in_insertion_order() {
        let rows = table_rows(&sample());
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["breakfast", "lunch", "walk"]);

        let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["0gained", "1gained", "0burned"]);
        assert_eq!(rows[2].kind, RecordKind::Burned);
        assert_eq!(rows[2].amount, "50");
    }

    #[test]
    fn test_unnamed_record_renders_empty_name() {
        let summary = Summary {
            burned: vec![Record::new(30.0, None)],
            ..Default::default()
        };
        assert_eq!(table_rows(&summary)[0].name, "");
    }

    #[test]
    fn test_sort_is_view_only() {
        let storage = MemoryStorage::default();
        let mut store = RecordStore::load(storage.clone(), StorageKeys::default());
        store.add(RecordKind::Gained, "100", Some("breakfast")).unwrap();
        store.add(RecordKind::Gained, "200", Some("lunch")).unwrap();
        store.add(RecordKind::Burned, "50", Some("walk")).unwrap();
        let persisted = (storage.raw("gainedRecords"), storage.raw("burnedRecords"));

        let rows = table_rows(&store.summary());
        let amounts: Vec<String> = rows.iter().map(|r| r.amount.clone()).collect();

        let (order, direction) = toggle_sort(&amounts);
        assert_eq!(direction, SortDirection::Ascending);
        let shown: Vec<&str> = order.iter().map(|&i| rows[i].name.as_str()).collect();
        assert_eq!(shown, vec!["walk", "breakfast", "lunch"]);

        let sorted: Vec<String> = order.iter().map(|&i| amounts[i].clone()).collect();
        let (again, direction) = toggle_sort(&sorted);
        assert_eq!(direction, SortDirection::Descending);
        let shown: Vec<&str> = again.iter().map(|&i| rows[order[i]].name.as_str()).collect();
        assert_eq!(shown, vec!["lunch", "breakfast", "walk"]);

        assert_eq!(
            (storage.raw("gainedRecords"), storage.raw("burnedRecords")),
            persisted
        );
        let names: Vec<_> = table_rows(&store.summary()).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["breakfast", "lunch", "walk"]);

        store.add(RecordKind::Gained, "10", Some("tea")).unwrap();
        let names: Vec<_> = table_rows(&store.summary()).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["breakfast", "lunch", "tea", "walk"]);
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(
            TableAction::parse("edit", Some("gained"), Some("1"), None),
            Some(TableAction::Edit(RecordKind::Gained, 1))
        );
        assert_eq!(
            TableAction::parse("delete", Some("burned"), Some("0"), None),
            Some(TableAction::Delete(RecordKind::Burned, 0))
        );
        assert_eq!(TableAction::parse("sort", None, None, Some("2")), Some(TableAction::Sort(2)));
    }

    #[test]
    fn test_parse_rejects_malformed_actions() {
        assert_eq!(TableAction::parse("edit", Some("snack"), Some("1"), None), None);
        assert_eq!(TableAction::parse("delete", Some("gained"), Some("-1"), None), None);
        assert_eq!(TableAction::parse("delete", Some("gained"), None, None), None);
        assert_eq!(TableAction::parse("sort", None, None, None), None);
        assert_eq!(TableAction::parse("explode", Some("gained"), Some("0"), None), None);
    }
}
