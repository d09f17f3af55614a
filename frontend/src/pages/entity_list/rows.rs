use crate::{
    api::{Admin, Employee, Leave},
    components::data_table::{NestedTable, TableRow},
    pages::entity_list::config::nested_leave_columns,
    utils::time::format_optional_date,
};

pub fn admin_row(admin: Admin) -> TableRow {
    TableRow {
        cells: vec![
            admin.first_name,
            admin.last_name,
            admin.email,
            format_optional_date(admin.date_of_birth),
            admin.gender,
        ],
        id: admin.admin_id,
        nested: None,
    }
}

pub fn employee_row(employee: Employee) -> TableRow {
    TableRow {
        cells: vec![
            employee.first_name,
            employee.last_name,
            employee.email,
            employee.gender,
            employee.phone_number,
            employee.address,
        ],
        id: employee.employee_id,
        nested: None,
    }
}

pub fn employee_with_leaves_row(employee: Employee) -> TableRow {
    let nested = NestedTable {
        columns: nested_leave_columns(),
        rows: employee
            .leaves()
            .iter()
            .map(|leave| {
                vec![
                    leave.reason.clone(),
                    format_optional_date(leave.start_date),
                    format_optional_date(leave.end_date),
                ]
            })
            .collect(),
    };
    TableRow {
        nested: Some(nested),
        ..employee_row(employee)
    }
}

fn leave_owner(leave: &Leave) -> String {
    let name = [
        leave.employee_first_name.as_deref(),
        leave.employee_last_name.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ");
    if name.trim().is_empty() {
        leave.employee_id.clone().unwrap_or_default()
    } else {
        name
    }
}

pub fn leave_row(leave: Leave) -> TableRow {
    TableRow {
        cells: vec![
            leave_owner(&leave),
            leave.reason.clone(),
            format_optional_date(leave.start_date),
            format_optional_date(leave.end_date),
        ],
        id: leave.leave_id,
        nested: None,
    }
}
