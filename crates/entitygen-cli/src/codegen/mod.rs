//! Artifact rendering.
//!
//! Generation runs as a two-stage pipeline:
//!
//! ```text
//! ClassDescriptor + GenerationContext
//!     ↓
//!  [entitygen_core::build]
//!     ↓
//!   ArtifactModel
//!     ↓
//!  [Java renderer] → Dc<Entity>.java
//! ```
//!
//! The model is fully resolved before any text is produced, so the renderer
//! only formats.
//!
//! # Output variants
//!
//! - **Qualified** (default): `tableName`, one constant per field named after
//!   the field, a `$$id` alias for the primary key, `allColumn` and
//!   `updateColumns` lists
//! - **Flat**: one `UPPER_SNAKE` constant per field holding the column name
//!
//! # Example
//!
//! For an `Order` entity mapped to table `orders` with the table prefix
//! enabled, the qualified variant renders:
//!
//! ```java
//! public class DcOrder {
//!
//!     public static final String tableName = "`orders`";
//!
//!     public static final String id = "`orders`.`id`";
//!
//!     public static final String $$id = "`orders`.`id`";
//!
//!     public static final String userName = "`orders`.`user_name`";
//!
//!     public static final List<String> allColumn = Arrays.asList("`orders`.`id`", "`orders`.`user_name`");
//!
//!     public static final List<String> updateColumns = Arrays.asList("`orders`.`user_name`");
//! }
//! ```

pub mod java;

pub use java::{render_java, to_rendered_artifact};
