//! Display collaborators: city names, map links, browser launch.
//!
//! Everything here consumes the engine's plain output (an index sequence
//! and a length) and nothing here is required by the engine, so callers
//! can swap or stub this layer freely.

use std::io;
use std::process::Command;

/// Maps a route of node indices back to human-readable names.
///
/// # Panics
///
/// Panics if an index is out of range for `names`.
pub fn route_names<'a>(names: &'a [&str], route: &[usize]) -> Vec<&'a str> {
    route.iter().map(|&i| names[i]).collect()
}

/// Builds a Google Maps directions URL for a closed tour.
///
/// Each stop becomes a path segment with spaces encoded as `+`, and the
/// starting city is appended once more at the end so the rendered route
/// returns home.
pub fn maps_url(names: &[&str], route: &[usize]) -> String {
    let mut url = String::from("https://www.google.com/maps/dir/");
    for (i, &stop) in route.iter().enumerate() {
        url.push_str(&names[stop].replace(' ', "+"));
        if i < route.len() - 1 {
            url.push('/');
        }
    }
    if let Some(&first) = route.first() {
        url.push('/');
        url.push_str(&names[first].replace(' ', "+"));
    }
    url
}

/// Opens a URL in the system's default browser.
///
/// # Errors
///
/// Returns the I/O error if the platform opener could not be spawned.
pub fn open_in_browser(url: &str) -> io::Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = Command::new("open");
        c.arg(url);
        c
    };

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(url);
        c
    };

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = {
        let mut c = Command::new("xdg-open");
        c.arg(url);
        c
    };

    command.spawn().map(|_| ())
}
