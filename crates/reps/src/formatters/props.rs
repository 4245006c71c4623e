use reps_types::Grip;

/// Whether a value is worth a display slot before the others.
///
/// Booleans, numbers, non-empty strings and their wrapper objects are
/// interesting. Objects are not: picking them first could expand large graphs.
pub fn is_interesting(value: &Grip) -> bool {
    match value {
        Grip::Bool(_) | Grip::Number(_) => true,
        Grip::String(text) => !text.is_empty(),
        Grip::Tagged(_) => value.as_object().is_some_and(|object| {
            matches!(
                object.class_name().to_lowercase().as_str(),
                "boolean" | "number" | "string"
            )
        }),
        Grip::Null | Grip::Other(_) => false,
    }
}

/// Pick up to `max` positions, interesting values first, then the rest.
///
/// Accessors without a value (`None`) count as uninteresting. The result is
/// sorted so the selection displays in insertion order.
pub fn select_indexes(values: &[Option<&Grip>], max: usize) -> Vec<usize> {
    let interesting = |value: &Option<&Grip>| value.is_some_and(is_interesting);

    let mut indexes: Vec<usize> = values
        .iter()
        .enumerate()
        .filter(|(_, value)| interesting(*value))
        .map(|(i, _)| i)
        .take(max)
        .collect();

    if indexes.len() < max {
        let remaining = max - indexes.len();
        indexes.extend(
            values
                .iter()
                .enumerate()
                .filter(|(_, value)| !interesting(*value))
                .map(|(i, _)| i)
                .take(remaining),
        );
    }

    indexes.sort_unstable();
    indexes
}
