#![allow(dead_code)]

use relmap_core::schema::{Builder, TableConfig};
use relmap_core::{Config, Model, RowSet};

/// `tUsers` references `tRoles`; `tRoleUsers` joins the two.
pub fn users_and_roles() -> RowSet {
    RowSet::new()
        .table("dbo", "tUsers")
        .table("dbo", "tRoles")
        .table("dbo", "tRoleUsers")
        .column("tUsers", "id", "int")
        .column("tUsers", "roleId", "int")
        .nullable_column("tUsers", "email", "nvarchar")
        .column("tRoles", "id", "int")
        .column("tRoles", "name", "nvarchar")
        .column("tRoleUsers", "userId", "int")
        .column("tRoleUsers", "roleId", "int")
        .generated_key("tUsers", "id")
        .generated_key("tRoles", "id")
        .primary_key("tRoleUsers", "userId")
        .primary_key("tRoleUsers", "roleId")
        .foreign_key("tUsers", "roleId", "tRoles", "id")
        .foreign_key("tRoleUsers", "userId", "tUsers", "id")
        .foreign_key("tRoleUsers", "roleId", "tRoles", "id")
}

pub fn build(rows: &RowSet) -> Model {
    Builder::new().build(rows).unwrap()
}

/// `User` and `Role` renames, with the junction table left out.
pub fn user_role_config() -> Config {
    Config::new()
        .table("tUsers", TableConfig::new().name("User"))
        .table("tRoles", TableConfig::new().name("Role"))
}

/// [`user_role_config`] plus the junction table as a many-to-many.
pub fn many_to_many_config() -> Config {
    user_role_config().table(
        "tRoleUsers",
        TableConfig::new()
            .name("RoleUser")
            .many_to_many(&[("userId", "roles"), ("roleId", "users")]),
    )
}
