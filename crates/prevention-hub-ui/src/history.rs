//! Assessment history: fabricated demo records, period grouping, metric
//! series and the risk trend recommendation.

use prevention_hub_core::{RiskLevel, bucket};
use time::Date;
use time::macros::date;

use crate::Tone;

/// Demo account whose fabricated history is shown on the history page.
pub const DEMO_USER: &str = "minh";

/// One past assessment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryRecord {
    /// Assessment date.
    pub date: Date,
    /// Age in years.
    pub age: f64,
    /// Number of pregnancies.
    pub pregnancies: f64,
    /// Plasma glucose (mg/dL).
    pub glucose: f64,
    /// Diastolic blood pressure (mmHg).
    pub blood_pressure: f64,
    /// Skin fold thickness (mm).
    pub skin_thickness: f64,
    /// Serum insulin (mu U/mL).
    pub insulin: f64,
    /// Body-mass index.
    pub bmi: f64,
    /// Diabetes pedigree function score.
    pub diabetes_pedigree_function: f64,
    /// Positive-class probability.
    pub risk_probability: f64,
}

impl HistoryRecord {
    /// Risk level of this record.
    pub fn level(&self) -> RiskLevel {
        bucket(Some(self.risk_probability))
    }
}

/// Returns the stored history of `user_id`, oldest first.
pub fn records_for(user_id: &str) -> Vec<HistoryRecord> {
    if user_id != DEMO_USER {
        return Vec::new();
    }

    let mut records = DEMO_HISTORY.to_vec();
    records.sort_by_key(|record| record.date);
    records
}

/// Granularity of the history chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// Calendar month, labelled `YYYY-MM`.
    Month,
    /// ISO week, labelled `<week>-<year>`.
    Week,
}

/// Axis label of `date` for the given period.
pub fn period_label(date: Date, period: Period) -> String {
    match period {
        Period::Month => format!("{:04}-{:02}", date.year(), date.month() as u8),
        Period::Week => format!("{}-{}", date.iso_week(), date.year()),
    }
}

/// Chartable history metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Positive-class probability.
    RiskProbability,
    /// Body-mass index.
    Bmi,
    /// Plasma glucose.
    Glucose,
    /// Diastolic blood pressure.
    BloodPressure,
    /// Serum insulin.
    Insulin,
}

impl Metric {
    /// Metrics in selector order.
    pub const ALL: [Metric; 5] = [
        Metric::RiskProbability,
        Metric::Bmi,
        Metric::Glucose,
        Metric::BloodPressure,
        Metric::Insulin,
    ];

    /// Chart title.
    pub fn title(self) -> &'static str {
        match self {
            Metric::RiskProbability => "Risk Probability",
            Metric::Bmi => "Bmi",
            Metric::Glucose => "Glucose",
            Metric::BloodPressure => "Blood Pressure",
            Metric::Insulin => "Insulin",
        }
    }

    /// Reads the metric from one record.
    pub fn value(self, record: &HistoryRecord) -> f64 {
        match self {
            Metric::RiskProbability => record.risk_probability,
            Metric::Bmi => record.bmi,
            Metric::Glucose => record.glucose,
            Metric::BloodPressure => record.blood_pressure,
            Metric::Insulin => record.insulin,
        }
    }
}

/// One point of a metric line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    /// Axis label for the point's period.
    pub period: String,
    /// Exact assessment date (tooltip).
    pub date: Date,
    /// Metric value.
    pub value: f64,
}

/// Builds the chronological chart series of one metric.
pub fn metric_series(records: &[HistoryRecord], period: Period, metric: Metric) -> Vec<SeriesPoint> {
    let mut sorted: Vec<&HistoryRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.date);

    sorted
        .into_iter()
        .map(|record| SeriesPoint {
            period: period_label(record.date, period),
            date: record.date,
            value: metric.value(record),
        })
        .collect()
}

/// Direction of the two most recent risk probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTrend {
    /// Latest probability is lower than the previous one.
    Improving,
    /// Latest probability is higher than the previous one.
    Worsening,
    /// Latest and previous probabilities are equal.
    Stable,
    /// Fewer than two records exist.
    InsufficientData,
}

impl RiskTrend {
    /// Display tone of the recommendation.
    pub fn tone(self) -> Tone {
        match self {
            RiskTrend::Improving => Tone::Success,
            RiskTrend::Worsening => Tone::Warning,
            RiskTrend::Stable | RiskTrend::InsufficientData => Tone::Info,
        }
    }

    /// Recommendation text shown under the chart.
    pub fn recommendation(self) -> &'static str {
        match self {
            RiskTrend::Improving => IMPROVING_ADVICE,
            RiskTrend::Worsening => WORSENING_ADVICE,
            RiskTrend::Stable => STABLE_ADVICE,
            RiskTrend::InsufficientData => {
                "Not enough assessment data to determine a risk trend. More assessments over time will provide better insights."
            }
        }
    }
}

/// Compares the two most recent records by date.
pub fn trend(records: &[HistoryRecord]) -> RiskTrend {
    let mut sorted: Vec<&HistoryRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.date);

    match sorted.as_slice() {
        [.., previous, latest] => {
            if latest.risk_probability < previous.risk_probability {
                RiskTrend::Improving
            } else if latest.risk_probability > previous.risk_probability {
                RiskTrend::Worsening
            } else {
                RiskTrend::Stable
            }
        }
        _ => RiskTrend::InsufficientData,
    }
}

const IMPROVING_ADVICE: &str = "Your risk probability has shown a positive trend, decreasing in the most recent assessment.
Continue to reinforce these healthy habits:
- **Maintain a balanced diet:** Focus on whole grains, fruits, vegetables, and lean proteins. Limit sugary drinks and processed foods.
- **Engage in regular physical activity:** Aim for at least 150 minutes of moderate-intensity or 75 minutes of vigorous-intensity exercise per week.
- **Ensure adequate sleep:** Prioritize 7-9 hours of quality sleep each night.
- **Manage stress effectively:** Practice relaxation techniques like mindfulness or yoga.
- **Stay hydrated:** Drink plenty of water throughout the day.
Continue to monitor your health and consult with your healthcare provider for ongoing guidance.";

const WORSENING_ADVICE: &str = "Your risk probability has unfortunately increased in the recent assessment.
It's important to take proactive steps:
- **Review your current diet:** Identify areas where you can reduce sugar, unhealthy fats, and processed foods. Consider consulting a nutritionist for personalized dietary advice.
- **Increase physical activity:** If you're not currently active, start gradually and aim for regular exercise. Explore activities you enjoy to make it sustainable.
- **Monitor your blood glucose levels:** If you have a home glucose meter, track your readings and discuss any patterns with your doctor.
- **Assess stress levels:** High stress can impact blood sugar. Implement stress-reducing activities.
- **Schedule a check-up:** Make an appointment with your healthcare provider to discuss these changes and explore further evaluation or management strategies.";

const STABLE_ADVICE: &str = "Your risk probability has remained relatively stable in the recent assessment.
Continue to be diligent with your healthy lifestyle:
- **Stay consistent with your current diet:** Ensure it remains balanced and supports healthy blood sugar levels.
- **Maintain your exercise routine:** Regular physical activity is key for long-term health.
- **Pay attention to any changes in your body:** Be aware of any new symptoms or concerns and discuss them with your doctor.
- **Schedule regular check-ups:** Routine visits with your healthcare provider are essential for ongoing monitoring and prevention.";

#[allow(clippy::too_many_arguments)]
const fn row(
    date: Date,
    age: f64,
    pregnancies: f64,
    glucose: f64,
    blood_pressure: f64,
    skin_thickness: f64,
    insulin: f64,
    bmi: f64,
    diabetes_pedigree_function: f64,
    risk_probability: f64,
) -> HistoryRecord {
    HistoryRecord {
        date,
        age,
        pregnancies,
        glucose,
        blood_pressure,
        skin_thickness,
        insulin,
        bmi,
        diabetes_pedigree_function,
        risk_probability,
    }
}

// Weekly samples June-December 2024, then monthly to May 2025.
static DEMO_HISTORY: [HistoryRecord; 30] = [
    row(date!(2024-06-01), 34.0, 0.0, 115.0, 82.0, 26.0, 60.0, 25.0, 0.58, 0.35),
    row(date!(2024-06-08), 34.0, 0.0, 112.0, 81.0, 25.0, 58.0, 24.9, 0.57, 0.34),
    row(date!(2024-06-15), 34.0, 0.0, 109.0, 80.0, 24.0, 56.0, 24.8, 0.56, 0.33),
    row(date!(2024-06-22), 34.0, 0.0, 106.0, 79.0, 23.0, 54.0, 24.7, 0.55, 0.32),
    row(date!(2024-07-01), 34.0, 0.0, 108.0, 80.0, 24.0, 55.0, 24.8, 0.55, 0.32),
    row(date!(2024-07-08), 34.0, 0.0, 105.0, 79.0, 23.0, 53.0, 24.7, 0.54, 0.31),
    row(date!(2024-07-15), 34.0, 0.0, 102.0, 78.0, 22.0, 51.0, 24.6, 0.53, 0.3),
    row(date!(2024-07-22), 34.0, 0.0, 99.0, 77.0, 21.0, 49.0, 24.5, 0.52, 0.29),
    row(date!(2024-08-01), 34.0, 0.0, 102.0, 78.0, 22.0, 50.0, 24.5, 0.5, 0.28),
    row(date!(2024-08-08), 34.0, 0.0, 100.0, 77.0, 21.0, 48.0, 24.4, 0.49, 0.27),
    row(date!(2024-08-15), 34.0, 0.0, 98.0, 76.0, 20.0, 46.0, 24.3, 0.48, 0.26),
    row(date!(2024-08-22), 34.0, 0.0, 96.0, 75.0, 19.0, 44.0, 24.2, 0.47, 0.25),
    row(date!(2024-09-01), 35.0, 0.0, 98.0, 76.0, 20.0, 45.0, 24.2, 0.48, 0.25),
    row(date!(2024-09-08), 35.0, 0.0, 97.0, 77.0, 21.0, 43.0, 24.3, 0.47, 0.24),
    row(date!(2024-09-15), 35.0, 0.0, 96.0, 78.0, 22.0, 41.0, 24.4, 0.46, 0.23),
    row(date!(2024-09-22), 35.0, 0.0, 95.0, 79.0, 23.0, 39.0, 24.5, 0.45, 0.15),
    row(date!(2024-10-01), 35.0, 0.0, 95.0, 80.0, 22.0, 40.0, 24.5, 0.45, 0.15),
    row(date!(2024-10-08), 35.0, 0.0, 98.0, 81.0, 23.0, 43.0, 24.6, 0.46, 0.18),
    row(date!(2024-10-15), 35.0, 0.0, 101.0, 82.0, 24.0, 46.0, 24.7, 0.47, 0.21),
    row(date!(2024-10-22), 35.0, 0.0, 104.0, 83.0, 25.0, 49.0, 24.8, 0.48, 0.24),
    row(date!(2024-11-01), 35.0, 0.0, 105.0, 83.0, 25.0, 50.0, 24.7, 0.51, 0.29),
    row(date!(2024-11-08), 35.0, 0.0, 108.0, 84.0, 26.0, 53.0, 24.8, 0.52, 0.31),
    row(date!(2024-11-15), 35.0, 0.0, 111.0, 85.0, 27.0, 56.0, 24.9, 0.53, 0.33),
    row(date!(2024-11-22), 35.0, 0.0, 114.0, 86.0, 28.0, 59.0, 25.0, 0.54, 0.35),
    row(date!(2024-12-01), 35.0, 0.0, 112.0, 86.0, 27.0, 58.0, 24.9, 0.54, 0.33),
    row(date!(2025-01-01), 35.0, 0.0, 118.0, 88.0, 29.0, 65.0, 25.1, 0.57, 0.38),
    row(date!(2025-02-01), 36.0, 0.0, 110.0, 85.0, 26.0, 60.0, 25.3, 0.59, 0.4),
    row(date!(2025-03-01), 36.0, 0.0, 105.0, 83.0, 24.0, 55.0, 25.0, 0.56, 0.37),
    row(date!(2025-04-01), 36.0, 0.0, 100.0, 81.0, 22.0, 50.0, 24.8, 0.53, 0.3),
    row(date!(2025-05-01), 36.0, 0.0, 96.0, 79.0, 20.0, 45.0, 24.6, 0.5, 0.26),
];
