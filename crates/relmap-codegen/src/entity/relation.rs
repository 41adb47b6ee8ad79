use super::Expand;
use crate::util;
use relmap_core::entity::ColumnDef;
use relmap_core::schema::JoinColumn;

use std::fmt::Write;

impl Expand<'_> {
    pub(super) fn many_to_one(
        &mut self,
        name: &str,
        target: &str,
        ref_name: &str,
        column: &ColumnDef,
        join_column: &str,
    ) {
        self.swagger_property(column, Some(target));

        write!(
            self.props,
            "\n  @ManyToOne(type => {target}, {target} => {target}.{ref_name})"
        )
        .unwrap();
        write!(
            self.props,
            "\n  @JoinColumn({{name: {}}})",
            util::quote(join_column)
        )
        .unwrap();
        writeln!(self.props, "\n  {name}: {target};").unwrap();

        self.orm.insert("ManyToOne");
        self.orm.insert("JoinColumn");
    }

    pub(super) fn one_to_many(&mut self, name: &str, target: &str, ref_name: &str) {
        write!(
            self.props,
            "\n  @OneToMany(type => {target}, {target} => {target}.{ref_name})"
        )
        .unwrap();
        writeln!(self.props, "\n  {name}: {target}[];").unwrap();

        self.orm.insert("OneToMany");
    }

    pub(super) fn many_to_many(
        &mut self,
        name: &str,
        target: &str,
        join_table: &str,
        join_columns: &JoinColumn,
        inverse_join_columns: &JoinColumn,
    ) {
        write!(self.props, "\n  @ManyToMany(type => {target})").unwrap();
        self.props.push_str("\n  @JoinTable({");
        write!(self.props, "\n    name: {},", util::quote(join_table)).unwrap();
        write!(
            self.props,
            "\n    joinColumns: [{}],",
            join_column(join_columns)
        )
        .unwrap();
        write!(
            self.props,
            "\n    inverseJoinColumns: [{}],",
            join_column(inverse_join_columns)
        )
        .unwrap();
        self.props.push_str("\n  })");
        writeln!(self.props, "\n  {name}: {target}[];").unwrap();

        self.orm.insert("ManyToMany");
        self.orm.insert("JoinTable");
    }
}

fn join_column(column: &JoinColumn) -> String {
    format!(
        "{{name: {}, referencedColumnName: {}}}",
        util::quote(&column.name),
        util::quote(&column.referenced_column_name)
    )
}
