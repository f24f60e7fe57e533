//! Metric cards: formatting of a frame into the three dashboard columns.

use terratrack_domain::frame::DashboardFrame;
use terratrack_domain::sensor::SensorKind;

/// One labelled value on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
    /// Small print under the value; empty when there is none.
    pub caption: &'static str,
}

impl MetricCard {
    fn new(icon: &'static str, label: &'static str, value: String) -> Self {
        Self {
            icon,
            label,
            value,
            caption: "",
        }
    }

    fn with_caption(mut self, caption: &'static str) -> Self {
        self.caption = caption;
        self
    }
}

/// Power and device status, climate, carbon.
#[must_use]
pub fn columns(frame: &DashboardFrame) -> Vec<Vec<MetricCard>> {
    let snapshot = &frame.snapshot;
    vec![
        vec![
            MetricCard::new(
                "\u{26a1}",
                "Energy Output",
                format!(
                    "{:.2} {}",
                    snapshot.energy_output(),
                    SensorKind::EnergyOutput.unit()
                ),
            ),
            MetricCard::new(
                "\u{1f50b}",
                "Battery Level",
                format!(
                    "{:.1}{}",
                    snapshot.battery_level(),
                    SensorKind::BatteryLevel.unit()
                ),
            ),
            MetricCard::new("\u{1f4a1}", "LED Status", led_label(frame.led_on).to_string()),
        ],
        vec![
            MetricCard::new(
                "\u{1f321}\u{fe0f}",
                "Temperature",
                format!(
                    "{:.1} {}",
                    snapshot.temperature(),
                    SensorKind::Temperature.unit()
                ),
            ),
            MetricCard::new(
                "\u{1f4a7}",
                "Humidity",
                format!("{:.1}{}", snapshot.humidity(), SensorKind::Humidity.unit()),
            ),
            MetricCard::new(
                "\u{1f331}",
                "Soil Moisture",
                format!("{}%", frame.derived.soil_moisture_percent),
            ),
        ],
        vec![
            MetricCard::new(
                "\u{1f30d}",
                "CO\u{2082} Absorbed Today",
                format!("{:.3} kg", snapshot.co2_absorbed()),
            ),
            MetricCard::new(
                "\u{1f333}",
                "Lifetime Offset",
                format!("{:.2} kg", frame.derived.lifetime_offset_kg),
            )
            .with_caption("Equivalent to planting ~1 tree/month"),
        ],
    ]
}

#[must_use]
pub fn led_label(led_on: bool) -> &'static str {
    if led_on { "On" } else { "Off" }
}
