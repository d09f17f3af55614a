use crate::components::{empty_state::EmptyState, layout::LoadingSpinner};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Read-only table embedded under a row, fed from the same payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: String,
    pub cells: Vec<String>,
    pub nested: Option<NestedTable>,
}

#[component]
fn NestedRows(table: NestedTable, span: usize) -> impl IntoView {
    let NestedTable { columns, rows } = table;
    view! {
        <tr class="bg-surface-muted">
            <td colspan=span.to_string() class="px-6 py-3">
                {if rows.is_empty() {
                    view! { <p class="text-sm text-fg-muted">{"No leave records"}</p> }.into_view()
                } else {
                    view! {
                        <table class="min-w-full text-sm">
                            <thead>
                                <tr>
                                    {columns.iter().map(|col| view! {
                                        <th class="px-3 py-1 text-left font-medium text-fg-muted">{col.label}</th>
                                    }).collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|cells| view! {
                                    <tr>
                                        {cells.into_iter().map(|cell| view! {
                                            <td class="px-3 py-1 text-fg">{cell}</td>
                                        }).collect_view()}
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_view()
                }}
            </td>
        </tr>
    }
}

#[component]
pub fn DataTable(
    columns: Vec<Column>,
    #[prop(into)] rows: Signal<Vec<TableRow>>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(default = None)] on_edit: Option<Callback<String>>,
    #[prop(default = None)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let has_actions = on_edit.is_some() || on_delete.is_some();
    let span = columns.len() + usize::from(has_actions);
    let headers = columns.clone();

    view! {
        <div class="relative overflow-x-auto" aria-busy=move || loading.get().to_string()>
            <Show when=move || loading.get()>
                <div class="absolute inset-0 z-10 flex flex-col items-center justify-center bg-surface-elevated/70" role="status">
                    <LoadingSpinner />
                    <span class="text-sm text-fg-muted">{"Loading..."}</span>
                </div>
            </Show>
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        {headers.iter().map(|col| view! {
                            <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                {col.label}
                            </th>
                        }).collect_view()}
                        {has_actions.then(|| view! {
                            <th class="px-6 py-3 text-right text-xs font-medium text-fg-muted uppercase tracking-wider">
                                {"Actions"}
                            </th>
                        })}
                    </tr>
                </thead>
                <tbody class="bg-surface-elevated divide-y divide-border">
                    {move || {
                        let current = rows.get();
                        if current.is_empty() && !loading.get() {
                            return view! {
                                <tr>
                                    <td colspan=span.to_string() class="px-6 py-4">
                                        <EmptyState title="No records found" />
                                    </td>
                                </tr>
                            }.into_view();
                        }
                        current.into_iter().map(|row| {
                            let TableRow { id, cells, nested } = row;
                            let edit_id = id.clone();
                            let delete_id = id.clone();
                            view! {
                                <tr data-row-id=id>
                                    {cells.into_iter().map(|cell| view! {
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{cell}</td>
                                    }).collect_view()}
                                    {has_actions.then(|| view! {
                                        <td class="px-6 py-4 whitespace-nowrap text-right text-sm space-x-2">
                                            {on_edit.map(|cb| view! {
                                                <button
                                                    class="text-action-primary-bg hover:underline disabled:opacity-50"
                                                    disabled=move || loading.get()
                                                    on:click=move |_| cb.call(edit_id.clone())
                                                >
                                                    {"Update"}
                                                </button>
                                            })}
                                            {on_delete.map(|cb| view! {
                                                <button
                                                    class="text-action-danger-bg hover:underline disabled:opacity-50"
                                                    disabled=move || loading.get()
                                                    on:click=move |_| cb.call(delete_id.clone())
                                                >
                                                    {"Delete"}
                                                </button>
                                            })}
                                        </td>
                                    })}
                                </tr>
                                {nested.map(|table| view! { <NestedRows table=table span=span /> })}
                            }
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn columns() -> Vec<Column> {
        vec![Column::new("firstName", "First Name"), Column::new("email", "Email")]
    }

    #[test]
    fn renders_rows_and_actions() {
        let html = render_to_string(move || {
            let rows = create_rw_signal(vec![TableRow {
                id: "e1".into(),
                cells: vec!["Rina".into(), "rina@example.com".into()],
                nested: None,
            }]);
            view! {
                <DataTable
                    columns=columns()
                    rows=rows
                    on_edit=Some(Callback::new(|_| {}))
                    on_delete=Some(Callback::new(|_| {}))
                />
            }
        });
        assert!(html.contains("First Name"));
        assert!(html.contains("rina@example.com"));
        assert!(html.contains("Update"));
        assert!(html.contains("Delete"));
    }

    #[test]
    fn renders_nested_table_without_actions() {
        let html = render_to_string(move || {
            let rows = create_rw_signal(vec![TableRow {
                id: "e1".into(),
                cells: vec!["Rina".into(), "rina@example.com".into()],
                nested: Some(NestedTable {
                    columns: vec![Column::new("reason", "Reason")],
                    rows: vec![vec!["Family trip".into()]],
                }),
            }]);
            view! { <DataTable columns=columns() rows=rows /> }
        });
        assert!(html.contains("Family trip"));
        assert!(!html.contains("Actions"));
    }

    #[test]
    fn empty_rows_show_empty_state() {
        let html = render_to_string(move || {
            let rows = create_rw_signal(Vec::<TableRow>::new());
            view! { <DataTable columns=columns() rows=rows /> }
        });
        assert!(html.contains("No records found"));
        assert!(!html.contains("animate-spin"));
    }

    #[test]
    fn loading_shows_spinner_instead_of_empty_state() {
        let html = render_to_string(move || {
            let rows = create_rw_signal(Vec::<TableRow>::new());
            view! { <DataTable columns=columns() rows=rows loading=true /> }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("Loading..."));
        assert!(!html.contains("No records found"));
    }

    #[test]
    fn loading_keeps_previous_rows_visible() {
        let html = render_to_string(move || {
            let rows = create_rw_signal(vec![TableRow {
                id: "e1".into(),
                cells: vec!["Rina".into(), "rina@example.com".into()],
                nested: None,
            }]);
            view! { <DataTable columns=columns() rows=rows loading=true /> }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("rina@example.com"));
    }
}
