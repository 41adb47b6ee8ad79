mod support;

use relmap_core::schema::{JoinColumn, TableConfig, TableId};
use relmap_core::Workspace;

use pretty_assertions::assert_eq;

const USERS: TableId = TableId(0);
const ROLES: TableId = TableId(1);
const ROLE_USERS: TableId = TableId(2);

fn reconstruct(config: &relmap_core::Config) -> relmap_core::Result<Workspace> {
    let model = support::build(&support::users_and_roles());
    let mut workspace = Workspace::project(&model, config)?;
    workspace.reconstruct_many_to_many()?;
    Ok(workspace)
}

#[test]
fn associations_on_both_sides() {
    let workspace = reconstruct(&support::many_to_many_config()).unwrap();

    let [user_roles] = &workspace.mapping(USERS).many_to_many[..] else {
        panic!("expected one association on User");
    };
    assert_eq!(user_roles.name, "tRoleUsers");
    assert_eq!(user_roles.col_name, "roles");
    assert_eq!(user_roles.property, "roles");
    assert_eq!(user_roles.col_type, "Role");
    assert_eq!(user_roles.target, ROLES);
    assert_eq!(
        user_roles.join_columns,
        JoinColumn {
            name: "userId".to_string(),
            referenced_column_name: "id".to_string(),
        }
    );
    assert_eq!(user_roles.inverse_join_columns.name, "roleId");

    let [role_users] = &workspace.mapping(ROLES).many_to_many[..] else {
        panic!("expected one association on Role");
    };
    assert_eq!(role_users.property, "users");
    assert_eq!(role_users.col_type, "User");
    assert_eq!(role_users.join_columns.name, "roleId");
    assert_eq!(role_users.inverse_join_columns.name, "userId");

    assert!(workspace.mapping(ROLE_USERS).many_to_many.is_empty());
    assert!(workspace.names.contains(USERS, "roles"));
    assert!(workspace.names.contains(ROLES, "users"));
}

#[test]
fn consumed_edges_are_removed() {
    let workspace = reconstruct(&support::many_to_many_config()).unwrap();
    let model = &workspace.model;

    for pivot in &model.table(ROLE_USERS).columns {
        assert!(pivot.many_to_one.is_none(), "{}", pivot.name);
    }

    assert!(model.column(USERS.column(0)).one_to_many.is_empty());

    // `tUsers.roleId` still references `tRoles.id`
    let back_refs: Vec<_> = model
        .column(ROLES.column(0))
        .one_to_many
        .iter()
        .map(|r| r.column)
        .collect();
    assert_eq!(back_refs, [USERS.column(1)]);
    assert!(model.column(USERS.column(1)).many_to_one.is_some());
}

#[test]
fn referenced_columns_use_projected_names() {
    let users = TableConfig::new().name("User").column("id", "userKey");
    let junction = TableConfig::new()
        .lowercase()
        .column("userId", "UserRef")
        .many_to_many(&[("userId", "roles"), ("roleId", "users")]);
    let config = support::many_to_many_config()
        .table("tUsers", users)
        .table("tRoleUsers", junction);

    let workspace = reconstruct(&config).unwrap();
    let association = &workspace.mapping(USERS).many_to_many[0];
    assert_eq!(
        association.join_columns,
        JoinColumn {
            name: "UserRef".to_string(),
            referenced_column_name: "userKey".to_string(),
        }
    );
    assert_eq!(
        association.inverse_join_columns,
        JoinColumn {
            name: "roleId".to_string(),
            referenced_column_name: "id".to_string(),
        }
    );
}

#[test]
fn pivot_without_foreign_key_fails() {
    let model = support::build(
        &support::users_and_roles().column("tRoleUsers", "note", "nvarchar"),
    );
    let config = support::user_role_config().table(
        "tRoleUsers",
        TableConfig::new().many_to_many(&[("userId", "roles"), ("note", "notes")]),
    );

    let mut workspace = Workspace::project(&model, &config).unwrap();
    let err = workspace.reconstruct_many_to_many().unwrap_err();
    assert!(err.is_dangling_reference());
    assert_eq!(
        err.to_string(),
        "dangling reference in `manyToMany` of table `tRoleUsers`: column `note` has no many-to-one relation"
    );
}

#[test]
fn unknown_pivot_column_fails() {
    let config = support::user_role_config().table(
        "tRoleUsers",
        TableConfig::new().many_to_many(&[("userId", "roles"), ("groupId", "users")]),
    );

    let err = reconstruct(&config).unwrap_err();
    assert!(err.is_dangling_reference());
    let message = err.to_string();
    assert!(message.contains("`groupId` does not exist"), "{message}");
}

#[test]
fn same_pivot_twice_fails() {
    let config = support::user_role_config().table(
        "tRoleUsers",
        TableConfig::new().many_to_many(&[("userId", "roles"), ("USERID", "users")]),
    );

    let err = reconstruct(&config).unwrap_err();
    assert!(err.is_config_shape(), "{err}");
}

#[test]
fn property_clash_fails() {
    let config = support::many_to_many_config().table(
        "tUsers",
        TableConfig::new().name("User").column("email", "roles"),
    );

    let err = reconstruct(&config).unwrap_err();
    assert!(err.is_name_collision());
    let message = err.to_string();
    assert!(
        message.contains("name collision in `User`: `roles`"),
        "{message}"
    );
}

#[test]
fn excluded_side_gets_no_association() {
    let config = relmap_core::Config::new()
        .table("tUsers", TableConfig::new().name("User"))
        .table(
            "tRoleUsers",
            TableConfig::new().many_to_many(&[("userId", "roles"), ("roleId", "users")]),
        );

    let workspace = reconstruct(&config).unwrap();
    assert!(workspace.mapping(USERS).many_to_many.is_empty());
    assert!(workspace.mapping(ROLES).many_to_many.is_empty());
    assert!(workspace.model.column(ROLE_USERS.column(0)).many_to_one.is_none());
}

#[test]
fn associations_follow_junction_order() {
    // A second junction between the same tables
    let rows = support::users_and_roles()
        .table("dbo", "tRoleAdmins")
        .column("tRoleAdmins", "adminId", "int")
        .column("tRoleAdmins", "roleId", "int")
        .foreign_key("tRoleAdmins", "adminId", "tUsers", "id")
        .foreign_key("tRoleAdmins", "roleId", "tRoles", "id");
    let model = support::build(&rows);

    let config = support::many_to_many_config().table(
        "tRoleAdmins",
        TableConfig::new().many_to_many(&[("adminId", "administeredRoles"), ("roleId", "admins")]),
    );

    let mut workspace = Workspace::project(&model, &config).unwrap();
    workspace.reconstruct_many_to_many().unwrap();

    let user: Vec<_> = workspace
        .mapping(USERS)
        .many_to_many
        .iter()
        .map(|a| (a.name.as_str(), a.property.as_str()))
        .collect();
    assert_eq!(
        user,
        [("tRoleUsers", "roles"), ("tRoleAdmins", "administeredRoles")]
    );

    let role: Vec<_> = workspace
        .mapping(ROLES)
        .many_to_many
        .iter()
        .map(|a| a.property.as_str())
        .collect();
    assert_eq!(role, ["users", "admins"]);
}
