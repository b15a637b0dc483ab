use crate::activity::ActivityType;

/// A notable event raised while extracting one file.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    EmptyGeometry,
    RouteFallback,
    SkippedActivity { activity: ActivityType },
    ParseError { message: String },
    OutsideBoundary,
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::ParseError { .. })
    }

    /// Renders the notice as a single line naming the file.
    pub fn describe(&self, file_name: &str) -> String {
        match self {
            Notice::EmptyGeometry => format!("No coordinates found in: {}", file_name),
            Notice::RouteFallback => {
                format!("Did not find a gpx track, but did find a route in: {}", file_name)
            }
            Notice::SkippedActivity { activity } => {
                format!("Skipping non-run activity in {}: {}", file_name, activity)
            }
            Notice::ParseError { message } => format!("Error reading {}: {}", file_name, message),
            Notice::OutsideBoundary => {
                format!("Skipping activity outside boundary: {}", file_name)
            }
        }
    }
}

pub trait Reporter {
    fn report(&mut self, file_name: &str, notice: &Notice);
}

/// Prints one line per notice on stdout.
#[derive(Debug, Default)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&mut self, file_name: &str, notice: &Notice) {
        let line = notice.describe(file_name);
        if notice.is_error() {
            println!("✗ {}", line);
        } else {
            println!("{}", line);
        }
        log::debug!("{}: {:?}", file_name, notice);
    }
}

/// Keeps every notice, for callers that inspect them afterwards.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub notices: Vec<(String, Notice)>,
}

impl CollectingReporter {
    pub fn errors(&self) -> usize {
        self.notices.iter().filter(|(_, n)| n.is_error()).count()
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, file_name: &str, notice: &Notice) {
        self.notices.push((file_name.to_string(), notice.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_name_the_file() {
        let skipped = Notice::SkippedActivity {
            activity: ActivityType::declared("Cycling"),
        };
        assert_eq!(
            skipped.describe("ride.gpx"),
            "Skipping non-run activity in ride.gpx: cycling"
        );
        assert_eq!(
            Notice::EmptyGeometry.describe("a.fit"),
            "No coordinates found in: a.fit"
        );
    }
}
