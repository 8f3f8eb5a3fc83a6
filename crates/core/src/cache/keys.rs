/// Cache key holding the serialized snapshot of the whole task collection.
///
/// There is no per-task caching: every write deletes this single key.
pub const TASKS_KEY: &str = "tasks";
