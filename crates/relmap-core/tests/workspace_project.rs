mod support;

use relmap_core::schema::{TableConfig, TableId};
use relmap_core::{Config, Workspace};

use pretty_assertions::assert_eq;

const USERS: TableId = TableId(0);
const ROLES: TableId = TableId(1);
const ROLE_USERS: TableId = TableId(2);

#[test]
fn renames_and_inclusion() {
    let model = support::build(&support::users_and_roles());
    let workspace = Workspace::project(&model, &support::user_role_config()).unwrap();

    let users = workspace.mapping(USERS);
    assert_eq!(users.entity, "tUsers");
    assert_eq!(users.name, "User");
    assert!(users.is_included());

    assert_eq!(workspace.table_name(ROLES), "Role");

    let junction = workspace.mapping(ROLE_USERS);
    assert_eq!(junction.name, "tRoleUsers");
    assert!(!junction.is_included());
    assert!(!workspace.names.is_tracked(ROLE_USERS));

    let included: Vec<_> = workspace.included().map(|m| m.name.as_str()).collect();
    assert_eq!(included, ["User", "Role"]);
}

#[test]
fn empty_entry_includes_table_unchanged() {
    let model = support::build(&support::users_and_roles());
    let config = Config::new().table("tRoleUsers", TableConfig::new());

    let workspace = Workspace::project(&model, &config).unwrap();
    assert!(workspace.is_included(ROLE_USERS));
    assert_eq!(workspace.table_name(ROLE_USERS), "tRoleUsers");
    assert_eq!(workspace.column_name(ROLE_USERS.column(0)), "userId");
}

#[test]
fn column_names() {
    let model = support::build(
        &support::users_and_roles()
            .table("dbo", "tCities")
            .column("tCities", "ID", "int")
            .column("tCities", "Name", "nvarchar")
            .column("tCities", "ZipCode", "nvarchar"),
    );
    let config = Config::new().table(
        "tCities",
        TableConfig::new()
            .name("City")
            .lowercase()
            .column("ZipCode", "postalCode"),
    );

    let workspace = Workspace::project(&model, &config).unwrap();
    let city = workspace.mapping(TableId(3));
    assert_eq!(city.columns, ["iD", "name", "postalCode"]);

    let names: Vec<_> = workspace.names.iter(TableId(3)).collect();
    assert_eq!(names, ["iD", "name", "postalCode"]);
}

#[test]
fn names_are_seeded_with_columns() {
    let model = support::build(&support::users_and_roles());
    let workspace = Workspace::project(&model, &support::user_role_config()).unwrap();

    let names: Vec<_> = workspace.names.iter(USERS).collect();
    assert_eq!(names, ["id", "roleId", "email"]);
    assert!(workspace.names.contains(ROLES, "name"));
}

#[test]
fn raw_model_is_not_modified() {
    let model = support::build(&support::users_and_roles());
    let before = model.clone();

    let mut workspace = Workspace::project(&model, &support::many_to_many_config()).unwrap();
    workspace.reconstruct_many_to_many().unwrap();
    workspace.resolve_associations().unwrap();

    assert_eq!(model, before);
    assert_ne!(workspace.model, before);
}

#[test]
fn unknown_config_tables_are_ignored() {
    let model = support::build(&support::users_and_roles());
    let config = support::user_role_config().table("tCities", TableConfig::new().name("City"));

    let workspace = Workspace::project(&model, &config).unwrap();
    assert_eq!(workspace.included().count(), 2);
}

#[test]
fn renaming_an_unknown_column_fails() {
    let model = support::build(&support::users_and_roles());
    let config = Config::new().table("tUsers", TableConfig::new().column("phone", "mobile"));

    let err = Workspace::project(&model, &config).unwrap_err();
    assert!(err.is_dangling_reference());
    assert_eq!(
        err.to_string(),
        "dangling reference in `columns` of table `tUsers`: column `phone` does not exist"
    );
}

#[test]
fn clashing_entity_names_fail() {
    let model = support::build(&support::users_and_roles());
    let config = Config::new()
        .table("tUsers", TableConfig::new().name("Account"))
        .table("tRoles", TableConfig::new().name("Account"));

    let err = Workspace::project(&model, &config).unwrap_err();
    assert!(err.is_name_collision());
    assert!(err.to_string().contains("`tUsers` and `tRoles`"), "{err}");
}

#[test]
fn clashing_column_names_fail() {
    let model = support::build(&support::users_and_roles());
    let config = Config::new().table("tUsers", TableConfig::new().column("email", "roleId"));

    let err = Workspace::project(&model, &config).unwrap_err();
    assert!(err.is_name_collision());
    assert!(err.to_string().contains("`roleId`"), "{err}");
}

#[test]
fn many_to_many_needs_two_entries() {
    let model = support::build(&support::users_and_roles());

    for pivots in [
        vec![("userId", "roles")],
        vec![("userId", "roles"), ("roleId", "users"), ("userId", "more")],
    ] {
        let config = Config::new().table("tRoleUsers", TableConfig::new().many_to_many(&pivots));

        let err = Workspace::project(&model, &config).unwrap_err();
        assert!(err.is_config_shape(), "{err}");
        assert!(err.to_string().contains("`tRoleUsers`"), "{err}");
    }
}

#[test]
fn many_to_many_entries_must_be_pairs() {
    let model = support::build(&support::users_and_roles());

    for pivots in [
        r#"[["userId", "roles", "members"], ["roleId", "users"]]"#,
        r#"[["userId", "roles"], ["roleId"]]"#,
    ] {
        let config =
            Config::from_json(&format!(r#"{{"tRoleUsers": {{"manyToMany": {pivots}}}}}"#)).unwrap();

        let err = Workspace::project(&model, &config).unwrap_err();
        assert!(err.is_config_shape(), "{err}");

        let message = err.to_string();
        assert!(
            message.starts_with("invalid configuration for table `tRoleUsers` (`manyToMany`)"),
            "{message}"
        );
        assert!(message.contains("`[column, property]` pair"), "{message}");
    }
}
