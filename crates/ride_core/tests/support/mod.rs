#![allow(dead_code)]

use ride_core::demo::DemoReport;

/// Render the sample report into a string.
pub fn render_demo_report() -> String {
    let report = DemoReport::build().expect("sample report");
    let mut out = Vec::new();
    report.write(&mut out).expect("write report");
    String::from_utf8(out).expect("report is utf8")
}

/// Lines that describe a ride (everything containing a ride id field).
pub fn ride_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|line| line.contains("Ride ID:")).collect()
}
