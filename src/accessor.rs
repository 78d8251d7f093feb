use crate::error::DotError;
use crate::path::{self, Segment};
use crate::value::{DefaultValue, Map, Value};
use log::debug;

/// Gets a reference to the value at a dot-notation path.
///
/// An empty key denotes the whole value. A key that exists literally on
/// an object (dots and all) wins over path traversal, so keys containing
/// dots stay reachable. Any structural miss yields `None`.
pub fn get<'a>(target: &'a Value, key: &str) -> Option<&'a Value> {
    if key.is_empty() {
        return Some(target);
    }

    if let Value::Object(map) = target {
        if let Some(hit) = map.get(key) {
            return Some(hit);
        }
    }

    if !key.contains('.') {
        return lookup(target, key);
    }

    let mut current = target;
    for segment in path::split(key) {
        current = lookup(current, segment)?;
    }

    Some(current)
}

/// Gets the value at a path, or the default on a miss.
///
/// The default may be a plain value or a lazy producer; a producer is
/// only invoked when the lookup actually misses.
pub fn get_or<'a>(target: &Value, key: &str, default: impl Into<DefaultValue<'a>>) -> Value {
    match get(target, key) {
        Some(hit) => hit.clone(),
        None => default.into().resolve(),
    }
}

/// Sets the value at a dot-notation path, creating intermediate
/// containers as needed.
///
/// A `None` (or empty) key replaces the whole target. Intermediate
/// segments that hold scalars are destructively replaced by an empty
/// container; the container kind is picked from the following segment,
/// so numeric segments build arrays and everything else builds objects.
/// Writing a non-numeric key into an array promotes the array to an
/// object keyed `"0"`, `"1"`, ….
///
/// # Errors
///
/// Returns [`DotError::NotContainer`] when the target root is a scalar,
/// since a keyed write has nowhere to land.
pub fn set(target: &mut Value, key: Option<&str>, value: Value) -> Result<(), DotError> {
    let key = match key {
        Some(key) if !key.is_empty() => key,
        _ => {
            *target = value;
            return Ok(());
        }
    };

    if !target.is_container() {
        return Err(DotError::NotContainer {
            key: key.to_string(),
        });
    }

    let segments = path::split(key);
    let Some((last, init)) = segments.split_last() else {
        *target = value;
        return Ok(());
    };

    let mut current = target;
    for (i, segment) in init.iter().enumerate() {
        let next = init.get(i + 1).copied().unwrap_or(*last);
        current = descend(current, segment, next);
    }

    write_slot(current, last, value, true);
    Ok(())
}

/// Whether a single dot-notation path fully resolves.
///
/// Empty keys and empty or scalar targets never match.
pub fn has(target: &Value, key: &str) -> bool {
    if key.is_empty() || !target.is_container() || target.is_empty_container() {
        return false;
    }

    get(target, key).is_some()
}

/// Whether every one of the given paths resolves. An empty key list is
/// `false`.
pub fn has_all(target: &Value, keys: &[&str]) -> bool {
    if keys.is_empty() {
        return false;
    }

    keys.iter().all(|key| has(target, key))
}

/// Removes one or many dot-notation paths, in place.
///
/// Each key first tries a literal top-level delete, then walks the path
/// through existing containers only; the key is skipped the instant a
/// segment is missing or non-container. Removing an array index shifts
/// the elements after it.
pub fn forget(target: &mut Value, keys: &[&str]) {
    if keys.is_empty() {
        return;
    }

    for key in keys {
        if remove_literal(target, key) {
            continue;
        }

        if !key.contains('.') {
            continue;
        }

        let segments = path::split(key);
        let Some((last, init)) = segments.split_last() else {
            continue;
        };

        if let Some(parent) = walk_containers(target, init) {
            remove_literal(parent, last);
        }
    }
}

/// Walks existing container nodes only; `None` the instant a segment is
/// missing or non-container.
fn walk_containers<'a>(target: &'a mut Value, segments: &[&str]) -> Option<&'a mut Value> {
    let mut current = target;
    for segment in segments {
        current = follow_container(current, segment)?;
    }
    Some(current)
}

/// Gets the value at a path and removes it from the target.
pub fn pull<'a>(target: &mut Value, key: &str, default: impl Into<DefaultValue<'a>>) -> Value {
    let value = get_or(target, key, default);
    forget(target, &[key]);
    value
}

/// Pops the value at a path, with wildcard support.
///
/// A trailing `*` pops every entry at its level into an array. A
/// non-trailing `*` keeps the level itself and applies the remaining
/// path to each entry, collecting per-entry results keyed by entry key
/// (objects) or position (arrays); deletion happens at the depth where
/// the remainder resolves. A missing segment yields the default.
pub fn take_off_recursive<'a>(
    target: &mut Value,
    key: &str,
    default: impl Into<DefaultValue<'a>>,
) -> Value {
    take_off(target, key).unwrap_or_else(|| default.into().resolve())
}

fn take_off(target: &mut Value, key: &str) -> Option<Value> {
    let (head, rest) = match key.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (key, None),
    };

    if head == path::WILDCARD {
        return take_off_wildcard(target, rest);
    }

    match target {
        Value::Object(map) => match rest {
            None => map.remove(head),
            Some(rest) => take_off(map.get_mut(head)?, rest),
        },
        Value::Array(items) => {
            let index = head.parse::<usize>().ok()?;
            if index >= items.len() {
                return None;
            }
            match rest {
                None => Some(items.remove(index)),
                Some(rest) => take_off(&mut items[index], rest),
            }
        }
        _ => None,
    }
}

fn take_off_wildcard(target: &mut Value, rest: Option<&str>) -> Option<Value> {
    match (target, rest) {
        // a trailing wildcard pops every entry at this level
        (Value::Object(map), None) => {
            Some(Value::Array(std::mem::take(map).into_values().collect()))
        }
        (Value::Array(items), None) => Some(Value::Array(std::mem::take(items))),
        // a non-trailing wildcard keeps this level and recurses per entry
        (Value::Object(map), Some(rest)) => {
            let mut values = Map::new();
            for (sub_key, sub_value) in map.iter_mut() {
                values.insert(
                    sub_key.clone(),
                    take_off(sub_value, rest).unwrap_or(Value::Null),
                );
            }
            Some(Value::Object(values))
        }
        (Value::Array(items), Some(rest)) => Some(Value::Array(
            items
                .iter_mut()
                .map(|item| take_off(item, rest).unwrap_or(Value::Null))
                .collect(),
        )),
        _ => None,
    }
}

/// Flattens a nested value into a single-level object keyed by
/// dot-joined paths.
///
/// Arrays flatten with their indices as segments. Empty containers are
/// leaves: they are kept as empty-container values, not expanded away.
/// A scalar input is returned unchanged.
pub fn dot(target: &Value) -> Value {
    if !target.is_container() {
        return target.clone();
    }

    let mut flat = Map::new();
    flatten_into(&mut flat, target, "");
    Value::Object(flat)
}

fn flatten_into(flat: &mut Map, target: &Value, prefix: &str) {
    match target {
        Value::Object(map) => {
            for (key, value) in map {
                flatten_entry(flat, key, value, prefix);
            }
        }
        Value::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                flatten_entry(flat, &index.to_string(), value, prefix);
            }
        }
        _ => {}
    }
}

fn flatten_entry(flat: &mut Map, key: &str, value: &Value, prefix: &str) {
    let joined = if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    };

    if value.is_container() && !value.is_empty_container() {
        flatten_into(flat, value, &joined);
    } else {
        flat.insert(joined, value.clone());
    }
}

/// Rebuilds a nested value from a flat object of dot-joined paths.
/// Inverse of [`dot`].
pub fn undot(flat: &Value) -> Value {
    let Some(map) = flat.as_object() else {
        return flat.clone();
    };

    // Rebuild a list root when every path starts with an index; this is
    // how a flattened array round-trips back to an array.
    let list_root = !map.is_empty()
        && map.keys().all(|key| {
            let head = key.split('.').next().unwrap_or(key);
            Segment::parse(head).as_index().is_some()
        });

    let mut result = if list_root {
        Value::array()
    } else {
        Value::object()
    };

    for (key, value) in map {
        // the root is a fresh container, so `set` cannot fail here
        let _ = set(&mut result, Some(key.as_str()), value.clone());
    }

    result
}

/// Gets an item using dot notation, with `*` wildcard collection.
///
/// A `None` key returns the whole target. A wildcard maps the remaining
/// path over every entry at its level and collects the results into an
/// array, with misses filled by `Null`. Without a wildcard this behaves
/// like [`get_or`].
pub fn data_get<'a>(
    target: &Value,
    key: Option<&str>,
    default: impl Into<DefaultValue<'a>>,
) -> Value {
    let Some(key) = key else {
        return target.clone();
    };

    data_get_segments(target, &path::split(key)).unwrap_or_else(|| default.into().resolve())
}

fn data_get_segments(target: &Value, segments: &[&str]) -> Option<Value> {
    let mut current = target;

    for (i, segment) in segments.iter().enumerate() {
        if *segment == path::WILDCARD {
            let rest = &segments[i + 1..];
            let collected: Vec<Value> = match current {
                Value::Object(map) => map
                    .values()
                    .map(|item| data_get_segments(item, rest).unwrap_or(Value::Null))
                    .collect(),
                Value::Array(items) => items
                    .iter()
                    .map(|item| data_get_segments(item, rest).unwrap_or(Value::Null))
                    .collect(),
                _ => return None,
            };
            return Some(Value::Array(collected));
        }

        current = lookup(current, segment)?;
    }

    Some(current.clone())
}

/// Sets an item using dot notation, with `*` wildcard fan-out.
///
/// Unlike [`set`], this never fails: a scalar anywhere along the path is
/// replaced by a fresh container. A wildcard applies the remaining path
/// to every entry at its level. With `overwrite` false, only slots that
/// do not already exist are written.
pub fn data_set(target: &mut Value, key: &str, value: Value, overwrite: bool) {
    data_set_segments(target, &path::split(key), &value, overwrite);
}

fn data_set_segments(target: &mut Value, segments: &[&str], value: &Value, overwrite: bool) {
    let Some((segment, rest)) = segments.split_first() else {
        return;
    };

    if *segment == path::WILDCARD {
        if !target.is_container() {
            *target = Value::object();
        }
        match target {
            Value::Object(map) => {
                for inner in map.values_mut() {
                    if rest.is_empty() {
                        if overwrite {
                            *inner = value.clone();
                        }
                    } else {
                        data_set_segments(inner, rest, value, overwrite);
                    }
                }
            }
            Value::Array(items) => {
                for inner in items.iter_mut() {
                    if rest.is_empty() {
                        if overwrite {
                            *inner = value.clone();
                        }
                    } else {
                        data_set_segments(inner, rest, value, overwrite);
                    }
                }
            }
            _ => {}
        }
        return;
    }

    if !target.is_container() {
        *target = empty_container_for(segment);
    }

    if rest.is_empty() {
        write_slot(target, segment, value.clone(), overwrite);
    } else {
        let next = rest.first().copied().unwrap_or(segment);
        let child = descend(target, segment, next);
        data_set_segments(child, rest, value, overwrite);
    }
}

fn lookup<'a>(target: &'a Value, segment: &str) -> Option<&'a Value> {
    match target {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => {
            let index = segment.parse::<usize>().ok()?;
            items.get(index)
        }
        _ => None,
    }
}

/// Walks one segment down, materializing the slot as a container when it
/// is absent or a scalar. Only ever called on container values.
fn descend<'a>(current: &'a mut Value, segment: &str, next: &str) -> &'a mut Value {
    let index = segment.parse::<usize>().ok();

    if index.is_none() && current.is_array() {
        debug!("promoting array to object for non-numeric segment `{segment}`");
        promote_to_object(current);
    }

    match current {
        Value::Object(map) => {
            let slot = map.entry(segment.to_string()).or_insert(Value::Null);
            if !slot.is_container() {
                *slot = empty_container_for(next);
            }
            slot
        }
        Value::Array(items) => {
            // the promotion above guarantees a numeric segment here
            let index = index.unwrap_or(items.len());
            if index >= items.len() {
                items.resize(index + 1, Value::Null);
            }
            let slot = &mut items[index];
            if !slot.is_container() {
                *slot = empty_container_for(next);
            }
            slot
        }
        _ => unreachable!("descend is only called on container values"),
    }
}

fn write_slot(current: &mut Value, segment: &str, value: Value, overwrite: bool) {
    let index = segment.parse::<usize>().ok();

    if index.is_none() && current.is_array() {
        debug!("promoting array to object for non-numeric segment `{segment}`");
        promote_to_object(current);
    }

    match current {
        Value::Object(map) => {
            if overwrite || !map.contains_key(segment) {
                map.insert(segment.to_string(), value);
            }
        }
        Value::Array(items) => {
            let index = index.unwrap_or(items.len());
            if index >= items.len() {
                items.resize(index + 1, Value::Null);
                items[index] = value;
            } else if overwrite {
                items[index] = value;
            }
        }
        _ => {}
    }
}

fn follow_container<'a>(current: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    let next = match current {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => {
            let index = segment.parse::<usize>().ok()?;
            items.get_mut(index)
        }
        _ => None,
    }?;

    next.is_container().then_some(next)
}

fn remove_literal(target: &mut Value, key: &str) -> bool {
    match target {
        Value::Object(map) => map.remove(key).is_some(),
        Value::Array(items) => match key.parse::<usize>() {
            Ok(index) if index < items.len() => {
                items.remove(index);
                true
            }
            _ => false,
        },
        _ => false,
    }
}

fn promote_to_object(value: &mut Value) {
    if let Value::Array(items) = value {
        let map: Map = std::mem::take(items)
            .into_iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item))
            .collect();
        *value = Value::Object(map);
    }
}

fn empty_container_for(next_segment: &str) -> Value {
    if Segment::parse(next_segment).as_index().is_some() {
        Value::array()
    } else {
        Value::object()
    }
}
