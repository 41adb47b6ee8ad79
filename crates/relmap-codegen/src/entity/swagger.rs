use super::Expand;
use relmap_core::entity::ColumnDef;

use std::fmt::Write;

impl Expand<'_> {
    /// Emits `@ApiModelProperty` (or the `Optional` variant for nullable
    /// columns) when swagger output is enabled.
    ///
    /// Relations are described by their target type; scalars only get a
    /// decorator when the column has a description.
    pub(super) fn swagger_property(&mut self, def: &ColumnDef, target: Option<&str>) {
        if !self.options.swagger {
            return;
        }

        let args = match (target, &def.description) {
            (Some(target), _) => format!("{{type: () => {target}}}"),
            (None, Some(description)) => {
                format!("{{description: '{}'}}", description.replace('\'', "\""))
            }
            (None, None) => return,
        };

        let decorator = if def.nullable {
            "ApiModelPropertyOptional"
        } else {
            "ApiModelProperty"
        };

        write!(self.props, "\n  @{decorator}({args})").unwrap();
        self.swagger.insert(decorator);
    }
}
