//! Subject table component

use leptos::prelude::*;
use vtu_sgpa_common::view::SUBJECT_COLUMNS;
use vtu_sgpa_common::{SubjectRow, ViewModel};

#[component]
pub fn SubjectTable(model: Memo<ViewModel>) -> impl IntoView {
    let rows = move || {
        model.with(|v| {
            v.results
                .as_ref()
                .map(|r| r.rows.iter().cloned().enumerate().collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="table-container">
            <table class="subjects-table">
                <thead>
                    <tr>
                        {SUBJECT_COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody id="subjectsTableBody">
                    <For
                        each=rows
                        key=|(index, row)| (*index, row.cells[0].clone())
                        children=|(_, row)| view! { <SubjectRowView row=row /> }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn SubjectRowView(row: SubjectRow) -> impl IntoView {
    let result_class = format!("result {}", row.result_class);
    let [code, name, internal, external, total, result, credits, grade, grade_point, credit_points] =
        row.cells;

    view! {
        <tr>
            <td>{code}</td>
            <td>{name}</td>
            <td class="marks internal">{internal}</td>
            <td class="marks external">{external}</td>
            <td class="marks total">{total}</td>
            <td class=result_class>{result}</td>
            <td class="credits">{credits}</td>
            <td class="grade">{grade}</td>
            <td class="grade-points">{grade_point}</td>
            <td class="credit-points">{credit_points}</td>
        </tr>
    }
}
