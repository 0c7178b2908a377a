use serde::Serialize;

use crate::model::Lesson;

/// Fixed x-axis shared by every lesson chart.
pub const CHART_LABELS: [&str; 5] = ["0", "1", "2", "3", "4"];

pub const DATASET_LABEL: &str = "Sample data";
pub const LINE_COLOR: &str = "#2b7a78";
pub const FILL_COLOR: &str = "rgba(43,122,120,0.12)";

/// A labeled numeric series ready to hand to the charting library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    #[must_use]
    pub fn for_lesson(lesson: &Lesson) -> Self {
        Self::new(lesson.chart_data().to_vec())
    }

    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            label: DATASET_LABEL.to_string(),
            labels: CHART_LABELS.iter().map(|l| (*l).to_string()).collect(),
            values,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    #[test]
    fn series_uses_fixed_axis_and_lesson_values() {
        let catalog = Catalog::builtin().unwrap();
        let lesson = catalog.get_str("cell-structure").unwrap();
        let series = ChartSeries::for_lesson(lesson);
        assert_eq!(series.labels, vec!["0", "1", "2", "3", "4"]);
        assert_eq!(series.values, vec![0.0, 1.0, 3.0, 2.0, 5.0]);
        assert_eq!(series.label, "Sample data");
    }
}
