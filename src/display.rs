use std::fmt::Write;

use crate::model::Route;

pub const NO_ROUTES_FOUND: &str = "No routes found";

const DESTINATION_WIDTH: usize = 30;
const NUMBER_WIDTH: usize = 4;
const TIME_WIDTH: usize = 20;

/// Renders the routes as a bordered table, or [`NO_ROUTES_FOUND`] when there are none.
/// The result always ends with a newline.
pub fn render_routes(routes: &[Route]) -> String {
    if routes.is_empty() {
        return format!("{NO_ROUTES_FOUND}\n");
    }

    let line = format!(
        "+-{}-+-{}-+-{}-+",
        "-".repeat(DESTINATION_WIDTH),
        "-".repeat(NUMBER_WIDTH),
        "-".repeat(TIME_WIDTH)
    );

    let mut table = String::new();

    // Writing to a String can't fail
    _ = writeln!(table, "{line}");
    _ = writeln!(
        table,
        "| {:^DESTINATION_WIDTH$} | {:^NUMBER_WIDTH$} | {:^TIME_WIDTH$} |",
        "Destination", "№", "Time"
    );
    _ = writeln!(table, "{line}");

    for route in routes {
        let number = route.number.map(|n| n.to_string()).unwrap_or_default();
        _ = writeln!(
            table,
            "| {:<DESTINATION_WIDTH$} | {:>NUMBER_WIDTH$} | {:<TIME_WIDTH$} |",
            route.destination, number, route.time
        );
    }

    _ = writeln!(table, "{line}");

    table
}
