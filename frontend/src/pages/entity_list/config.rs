use crate::{api::EntityKind, components::data_table::Column};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListVariant {
    #[default]
    Admins,
    Employees,
    Leaves,
    EmployeeLeaves,
}

impl ListVariant {
    pub const ALL: [ListVariant; 4] = [
        ListVariant::Admins,
        ListVariant::Employees,
        ListVariant::Leaves,
        ListVariant::EmployeeLeaves,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ListVariant::Admins => "Admins",
            ListVariant::Employees => "Employees",
            ListVariant::Leaves => "Leaves",
            ListVariant::EmployeeLeaves => "Employee Leaves",
        }
    }

    pub const fn kind(self) -> EntityKind {
        match self {
            ListVariant::Admins => EntityKind::Admin,
            ListVariant::Employees | ListVariant::EmployeeLeaves => EntityKind::Employee,
            ListVariant::Leaves => EntityKind::Leave,
        }
    }

    pub fn config(self) -> ListConfig {
        match self {
            ListVariant::Admins => ListConfig {
                variant: self,
                columns: vec![
                    Column::new("firstName", "First Name"),
                    Column::new("lastName", "Last Name"),
                    Column::new("email", "Email"),
                    Column::new("dateOfBirth", "Date of Birth"),
                    Column::new("gender", "Gender"),
                ],
                add_route: Some("/admin/add-admin"),
                edit_route: Some("/admin/update-admin"),
            },
            ListVariant::Employees => ListConfig {
                variant: self,
                columns: employee_columns(),
                add_route: Some("/employee/add-employee"),
                edit_route: Some("/employee/update-employee"),
            },
            ListVariant::Leaves => ListConfig {
                variant: self,
                columns: vec![
                    Column::new("employee", "Employee"),
                    Column::new("reason", "Reason"),
                    Column::new("startDate", "Start Date"),
                    Column::new("endDate", "End Date"),
                ],
                add_route: Some("/leave/add-leave"),
                edit_route: Some("/leave/update-leave"),
            },
            ListVariant::EmployeeLeaves => ListConfig {
                variant: self,
                columns: employee_columns(),
                add_route: None,
                edit_route: None,
            },
        }
    }
}

fn employee_columns() -> Vec<Column> {
    vec![
        Column::new("firstName", "First Name"),
        Column::new("lastName", "Last Name"),
        Column::new("email", "Email"),
        Column::new("gender", "Gender"),
        Column::new("phoneNumber", "Phone Number"),
        Column::new("address", "Address"),
    ]
}

pub fn nested_leave_columns() -> Vec<Column> {
    vec![
        Column::new("reason", "Reason"),
        Column::new("startDate", "Start Date"),
        Column::new("endDate", "End Date"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    pub variant: ListVariant,
    pub columns: Vec<Column>,
    pub add_route: Option<&'static str>,
    pub edit_route: Option<&'static str>,
}

impl ListConfig {
    pub fn kind(&self) -> EntityKind {
        self.variant.kind()
    }

    pub fn title(&self) -> &'static str {
        self.variant.label()
    }

    pub fn searchable(&self) -> bool {
        self.kind().supports_search()
    }

    /// Employee-with-leaves is read-only.
    pub fn has_row_actions(&self) -> bool {
        self.edit_route.is_some()
    }
}
