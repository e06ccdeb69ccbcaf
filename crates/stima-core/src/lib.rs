pub mod category;
pub mod config;
pub mod error;
pub mod report;

pub use category::{
    Annotation, Annotator, BuiltinCategory, Category, CategoryCount, CategoryDef, CategoryTable,
    BUILTIN_CATEGORIES,
};
pub use config::{CategoryConfigEntry, TableConfig};
pub use error::{Result, StimaError};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    static COLORS: Mutex<()> = Mutex::new(());

    /// Run `f` with colorization forced on or off. The override is process
    /// wide, so callers are serialized.
    pub(crate) fn with_colors<T>(enabled: bool, f: impl FnOnce() -> T) -> T {
        let _guard = COLORS.lock().unwrap_or_else(|e| e.into_inner());
        colored::control::set_override(enabled);
        let out = f();
        colored::control::unset_override();
        out
    }
}
