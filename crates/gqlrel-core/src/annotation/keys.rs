//! Recognized annotation keys.

/// Argument list for an explicit `type`.
pub const ARGS: &str = "args";

/// Column default value, copied verbatim.
pub const DEFAULT: &str = "default";

/// Override for the generated enum name.
pub const ENUM_NAME: &str = "enumName";

/// Referenced field on the target type of an object reference.
pub const FOREIGN: &str = "foreign";

/// General index membership: `true`, `"name"` or `{ name, type }`.
pub const INDEX: &str = "index";

/// String length; turns `String` into a bounded `string` column.
pub const LENGTH: &str = "length";

/// Reciprocal field of a many-to-many relation, or the identity field of a
/// self-referential one.
pub const MANY_TO_MANY: &str = "manyToMany";

/// Table or column name override.
pub const NAME: &str = "name";

/// Numeric precision for `Float` columns.
pub const PRECISION: &str = "precision";

/// Primary key membership; `false` opts the identity field out.
pub const PRIMARY: &str = "primary";

/// Numeric scale for `Float` columns.
pub const SCALE: &str = "scale";

/// Omit the type or field entirely.
pub const SKIP: &str = "skip";

/// Join table name override.
pub const TABLE: &str = "table";

/// Join table comment override.
pub const TABLE_COMMENT: &str = "tableComment";

/// Explicit column type tag.
pub const TYPE: &str = "type";

/// Unique constraint membership.
pub const UNIQUE: &str = "unique";
