use colored::{Color, ColoredString, Colorize};
use tracing::info;

use crate::{
    report::{FamilySummary, ProfileSummary},
    workload_family::ThroughputAxis,
};

impl ProfileSummary {
    pub fn print_summary(&self) {
        let header = format!(
            "Profile: {}/{}, {} records, {} workload families",
            self.database,
            self.host,
            self.records,
            self.families.len()
        )
        .blue();
        info!("{}", header);

        self.families
            .iter()
            .for_each(|f| info!("{}", f.formatted_string()));
    }
}

impl FamilySummary {
    pub fn formatted_string(&self) -> ColoredString {
        let color = match self.family.axis() {
            ThroughputAxis::Write => Color::Green,
            ThroughputAxis::Read => Color::Cyan,
        };

        let records = self
            .records
            .iter()
            .map(|r| {
                format!(
                    "{} threads: avg {:.2}, sd {:.2}, 90% range [{:.2}, {:.2}]",
                    r.threads, r.mean, r.std_dev, r.lower_90, r.upper_90
                )
            })
            .collect::<Vec<String>>()
            .join("; ");

        format!("{} ({}): {}", self.family, self.metric, records).color(color)
    }
}
