use super::Expand;
use crate::util;
use relmap_core::entity::ColumnDef;

use std::fmt::Write;

impl Expand<'_> {
    /// Renders a key or scalar column property.
    pub(super) fn column(&mut self, name: &str, def: &ColumnDef, decorator: &'static str) {
        self.swagger_property(def, None);

        write!(self.props, "\n  @{decorator}({})", definition(def)).unwrap();
        writeln!(self.props, "\n  {name}: {};", util::ts_type(def.ty)).unwrap();
        self.orm.insert(decorator);
    }
}

/// Column options object, e.g. `{name: 'email', type: 'nvarchar', length: 255}`.
fn definition(def: &ColumnDef) -> String {
    let mut props = vec![
        format!("name: {}", util::quote(&def.name)),
        format!("type: {}", util::quote(&def.native_ty)),
    ];

    if let Some(length) = def.length.filter(|length| *length > 0) {
        if def.native_ty != "text" {
            props.push(format!("length: {length}"));
        }
    }

    if def.nullable {
        props.push("nullable: true".to_string());
    }

    format!("{{{}}}", props.join(", "))
}
