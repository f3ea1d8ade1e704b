//! MetaClass port - Describes the kind of application being launched.

/// Type information about an application kind, handed to profiles before
/// launch so they can tailor the options they contribute.
pub trait MetaClass: Send + Sync {
    /// Name of the application kind, e.g. `java`.
    fn application_kind(&self) -> &str;
}
