use crate::foundation::error::{RaffleError, RaffleResult};

/// One line of the rigging console: a label plus 1-based participant ids.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Route {
    /// Display label; "Route" when the line carries no `label:` prefix.
    pub label: String,
    /// 1-based indices into the current participant order.
    pub ids: Vec<usize>,
}

/// Parse a routes text block of `Label: n1 n2 n3 ...` lines.
///
/// Empty lines are skipped. Everything before the first `:` is the label;
/// digit runs anywhere in the remainder are the ids, so `1, 2, 3` and
/// `1 2 3` both work. Parsing never fails; validation happens at load
/// time against the current participant list.
pub fn parse_routes(text: &str) -> Vec<Route> {
    text.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            let (label, ids_part) = match line.split_once(':') {
                Some((label, rest)) => (label.trim().to_owned(), rest),
                None => ("Route".to_owned(), line),
            };
            Route {
                label,
                ids: digit_runs(ids_part),
            }
        })
        .collect()
}

fn digit_runs(s: &str) -> Vec<usize> {
    let mut ids = Vec::new();
    let mut current: Option<usize> = None;
    for c in s.chars() {
        match (c.to_digit(10), current) {
            (Some(d), Some(n)) => current = Some(n.saturating_mul(10).saturating_add(d as usize)),
            (Some(d), None) => current = Some(d as usize),
            (None, Some(n)) => {
                ids.push(n);
                current = None;
            }
            (None, None) => {}
        }
    }
    if let Some(n) = current {
        ids.push(n);
    }
    ids
}

/// Resolve a route's 1-based ids against the current participant lines.
///
/// All-or-nothing: any out-of-range id rejects the entire load and reports
/// the full missing-id set, so a stale route can never partially queue.
/// Resolved names are the raw lines, which the resolver matches by display
/// name or raw text.
pub fn resolve_route(route: &Route, participants: &[String]) -> RaffleResult<Vec<String>> {
    let mut queue = Vec::with_capacity(route.ids.len());
    let mut missing = Vec::new();

    for &id in &route.ids {
        match id.checked_sub(1).and_then(|i| participants.get(i)) {
            Some(name) => queue.push(name.clone()),
            None => missing.push(id),
        }
    }

    if !missing.is_empty() {
        return Err(RaffleError::RouteReference {
            label: route.label.clone(),
            missing,
        });
    }
    if queue.is_empty() {
        return Err(RaffleError::rigging(format!(
            "route '{}' has no participant ids",
            route.label
        )));
    }
    Ok(queue)
}

#[cfg(test)]
#[path = "../../tests/unit/rigging/routes.rs"]
mod tests;
