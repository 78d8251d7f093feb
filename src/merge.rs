use crate::error::DotError;
use crate::value::Value;
use log::trace;

/// One step of a path into the merged tree. Worklist items carry owned
/// paths instead of borrows so the traversal stays iterative.
#[derive(Debug, Clone)]
enum Step {
    Key(String),
    Index(usize),
}

/// Merges values left to right with "distinct" semantics: containers
/// unify recursively, everything else is last-write-wins. Arrays merge
/// positionally, index by index, not by concatenation.
///
/// The per-pair merge is iterative over an explicit worklist, so the
/// call stack stays bounded no matter how deep the data nests.
///
/// # Errors
///
/// Returns [`DotError::EmptyMerge`] when called with no sources.
pub fn merge_distinct_recursive<I>(sources: I) -> Result<Value, DotError>
where
    I: IntoIterator<Item = Value>,
{
    let mut sources = sources.into_iter();
    let mut merged = sources.next().ok_or(DotError::EmptyMerge)?;

    for source in sources {
        merge_pair(&mut merged, source);
    }

    Ok(merged)
}

fn merge_pair(root: &mut Value, source: Value) {
    let mut work: Vec<(Vec<Step>, Value)> = vec![(Vec::new(), source)];

    while let Some((at, source)) = work.pop() {
        let Some(target) = follow_mut(root, &at) else {
            continue;
        };

        match (&mut *target, source) {
            (Value::Object(map), Value::Object(entries)) => {
                for (key, value) in entries {
                    let unify = value.is_container()
                        && map.get(&key).is_some_and(Value::is_container);
                    if unify {
                        let mut child = at.clone();
                        child.push(Step::Key(key));
                        work.push((child, value));
                    } else {
                        map.insert(key, value);
                    }
                }
            }
            (Value::Array(items), Value::Array(entries)) => {
                for (index, value) in entries.into_iter().enumerate() {
                    if index >= items.len() {
                        items.push(value);
                    } else if value.is_container() && items[index].is_container() {
                        let mut child = at.clone();
                        child.push(Step::Index(index));
                        work.push((child, value));
                    } else {
                        items[index] = value;
                    }
                }
            }
            (target, source) => {
                trace!("distinct merge: container kinds differ, right-hand value wins");
                *target = source;
            }
        }
    }
}

fn follow_mut<'a>(root: &'a mut Value, at: &[Step]) -> Option<&'a mut Value> {
    let mut current = root;

    for step in at {
        current = match (current, step) {
            (Value::Object(map), Step::Key(key)) => map.get_mut(key)?,
            (Value::Array(items), Step::Index(index)) => items.get_mut(*index)?,
            _ => return None,
        };
    }

    Some(current)
}
