mod associate;

mod builder;
pub use builder::Builder;

mod column;
pub use column::{Column, ColumnId, Ref};

pub mod config;
pub use config::{Config, TableConfig};

mod many_to_many;
pub use many_to_many::{Association, JoinColumn};

mod model;
pub use model::Model;

mod names;
pub use names::Names;

mod table;
pub use table::{Table, TableId};

mod workspace;
pub use workspace::{TableMapping, Workspace};
