//! Adding routes to the list and picking the ones that depart after a given time

use itertools::Itertools;
use tracing::debug;

use crate::model::{DepartureTime, Route, TimeFormatError};

/// Appends a new route to the end of the list.
/// The time is validated before anything is appended.
pub fn add_route(
    mut routes: Vec<Route>,
    destination: String,
    number: Option<i64>,
    time: String,
) -> Result<Vec<Route>, TimeFormatError> {
    time.parse::<DepartureTime>()?;

    routes.push(Route {
        destination,
        number,
        time,
    });

    Ok(routes)
}

/// Returns the routes departing strictly after `threshold`, in list order.
///
/// Fails if any stored route has a time that doesn't parse.
#[tracing::instrument(skip_all, fields(threshold = %threshold, count = routes.len()))]
pub fn select_routes(
    routes: &[Route],
    threshold: DepartureTime,
) -> Result<Vec<Route>, TimeFormatError> {
    let selected = routes
        .iter()
        .map(|route| route.departure().map(|departure| (departure, route)))
        .filter_ok(|(departure, _)| *departure > threshold)
        .map_ok(|(_, route)| route.clone())
        .collect::<Result<Vec<_>, _>>()?;

    debug!("selected {} of {} routes", selected.len(), routes.len());

    Ok(selected)
}
