use serde::{Deserialize, Serialize};

/// Organisational unit that can hold assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    pub cost_center: String,
}

/// Resolve a department name, `None` when the id dangles.
pub fn department_name<'a>(departments: &'a [Department], id: &str) -> Option<&'a str> {
    departments
        .iter()
        .find(|department| department.id == id)
        .map(|department| department.name.as_str())
}
