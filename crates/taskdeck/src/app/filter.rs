use taskdeck_adapter::Task;

/// Tasks whose name, owner or command contains `query`, ignoring case.
///
/// Order is preserved; an empty query keeps every task.
pub fn filter_tasks<'a>(tasks: &'a [Task], query: &str) -> Vec<&'a Task> {
    let needle = query.to_lowercase();
    tasks
        .iter()
        .filter(|task| {
            task.name.to_lowercase().contains(&needle)
                || task.owner.to_lowercase().contains(&needle)
                || task.command.to_lowercase().contains(&needle)
        })
        .collect()
}
